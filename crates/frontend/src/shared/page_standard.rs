//! Page category constants.
//!
//! Every routed page declares:
//!   - HTML `id` in the format `{entity}--{category}` (e.g. `"a001_inquiry--list"`)
//!   - `data-page-category` with one of the constants below
//!
//! The `--` separator keeps the entity searchable: copy the id from the DOM
//! inspector and the module with the same prefix is the one rendering it.

/// Table of records with search, status filter and pagination.
pub const PAGE_CAT_LIST: &str = "list";

/// Admin overview.
pub const PAGE_CAT_DASHBOARD: &str = "dashboard";

/// Form driving a single use case (inquiry, password reset).
pub const PAGE_CAT_USECASE: &str = "usecase";

/// Login and settings pages.
pub const PAGE_CAT_SYSTEM: &str = "system";

/// Marketing page with free-form layout, exempt from the header/content rule.
pub const PAGE_CAT_PUBLIC: &str = "public";

/// Categories where `page__header` + `page__content` structure is required.
pub const STANDARD_CATEGORIES: &[&str] = &[
    PAGE_CAT_LIST,
    PAGE_CAT_DASHBOARD,
    PAGE_CAT_USECASE,
    PAGE_CAT_SYSTEM,
];

/// All known category values.
pub const ALL_CATEGORIES: &[&str] = &[
    PAGE_CAT_LIST,
    PAGE_CAT_DASHBOARD,
    PAGE_CAT_USECASE,
    PAGE_CAT_SYSTEM,
    PAGE_CAT_PUBLIC,
];

/// Validate that a page id matches the `{entity}--{category}` format.
pub fn is_valid_page_id(id: &str) -> bool {
    let parts: Vec<&str> = id.splitn(2, "--").collect();
    parts.len() == 2 && !parts[0].is_empty() && !parts[1].is_empty()
}

/// Return true if the category value is recognised.
pub fn is_known_category(cat: &str) -> bool {
    ALL_CATEGORIES.contains(&cat)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_id_format() {
        assert!(is_valid_page_id("a001_inquiry--list"));
        assert!(is_valid_page_id("home--public"));
        assert!(!is_valid_page_id("a001_inquiry"));
        assert!(!is_valid_page_id("--list"));
        assert!(!is_valid_page_id("a001_inquiry--"));
    }

    #[test]
    fn test_categories() {
        for cat in STANDARD_CATEGORIES {
            assert!(is_known_category(cat));
        }
        assert!(is_known_category(PAGE_CAT_PUBLIC));
        assert!(!STANDARD_CATEGORIES.contains(&PAGE_CAT_PUBLIC));
        assert!(!is_known_category("legacy"));
    }
}
