use std::fmt;
use std::str::FromStr;

use super::ListRecord;

/// Status selector of a list page. `All` disables the status criterion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StatusFilter<S> {
    #[default]
    All,
    Only(S),
}

impl<S: Copy + Eq> StatusFilter<S> {
    pub fn matches(&self, status: S) -> bool {
        match self {
            StatusFilter::All => true,
            StatusFilter::Only(expected) => *expected == status,
        }
    }
}

impl<S: FromStr> StatusFilter<S> {
    /// Parses a select value: `"all"` or a status string.
    ///
    /// Unknown values fall back to `All`, the select's default.
    pub fn parse(value: &str) -> Self {
        match value.trim() {
            "" | "all" => StatusFilter::All,
            other => other
                .parse::<S>()
                .map(StatusFilter::Only)
                .unwrap_or(StatusFilter::All),
        }
    }
}

impl<S: fmt::Display> fmt::Display for StatusFilter<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StatusFilter::All => f.write_str("all"),
            StatusFilter::Only(status) => write!(f, "{}", status),
        }
    }
}

/// Stable filter: keeps the records matching every non-empty criterion, in
/// their original order.
pub fn filter_records<T: ListRecord>(
    records: &[T],
    term: &str,
    status: StatusFilter<T::Status>,
) -> Vec<T> {
    records
        .iter()
        .filter(|record| status.matches(record.status()) && record.matches_search(term))
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a001_inquiry::{seed_inquiries, Inquiry, InquiryStatus};
    use crate::domain::a002_customer::{seed_customers, CustomerStatus};
    use proptest::prelude::*;

    fn names(items: &[Inquiry]) -> Vec<&str> {
        items.iter().map(|i| i.name.as_str()).collect()
    }

    #[test]
    fn test_empty_term_returns_everything_in_order() {
        let all = seed_inquiries();
        let filtered = filter_records(&all, "", StatusFilter::All);
        assert_eq!(filtered, all);

        let filtered = filter_records(&all, "   ", StatusFilter::All);
        assert_eq!(filtered.len(), all.len());
    }

    #[test]
    fn test_term_matches_any_search_field() {
        let all = seed_inquiries();

        // name
        assert_eq!(
            names(&filter_records(&all, "jOhN", StatusFilter::All)),
            vec!["John Doe", "Sarah Johnson"]
        );
        // email
        assert_eq!(
            names(&filter_records(&all, "sarah.j@", StatusFilter::All)),
            vec!["Sarah Johnson"]
        );
        // service
        assert_eq!(
            names(&filter_records(&all, "setup", StatusFilter::All)),
            vec!["Sarah Johnson", "Robert Garcia"]
        );
        // description is not searchable
        assert!(filter_records(&all, "dead zones", StatusFilter::All).is_empty());
    }

    #[test]
    fn test_customer_search_uses_username() {
        let all = seed_customers();
        let filtered = filter_records(&all, "mikew789", StatusFilter::All);
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].name, "Mike Williams");

        let inactive = filter_records(&all, "", StatusFilter::Only(CustomerStatus::Inactive));
        assert_eq!(inactive.len(), 1);
    }

    #[test]
    fn test_term_spaces_are_significant() {
        let all = seed_inquiries();
        let filtered = filter_records(&all, "john ", StatusFilter::All);
        assert_eq!(names(&filtered), vec!["John Doe"]);
        for record in &filtered {
            assert!(record.search_fields().iter().any(|f| f.to_lowercase().contains("john ")));
        }
        assert!(filter_records(&all, "doe ", StatusFilter::All).is_empty());
        assert_eq!(names(&filter_records(&all, " johnson", StatusFilter::All)), vec!["Sarah Johnson"]);
    }

    #[test]
    fn test_status_and_term_combine() {
        let all = seed_inquiries();
        let filtered = filter_records(&all, "example.com", StatusFilter::Only(InquiryStatus::New));
        assert_eq!(names(&filtered), vec!["John Doe", "David Chen", "Jennifer Taylor"]);
    }

    #[test]
    fn test_status_filter_parse() {
        assert_eq!(StatusFilter::<InquiryStatus>::parse("all"), StatusFilter::All);
        assert_eq!(
            StatusFilter::<InquiryStatus>::parse("in-progress"),
            StatusFilter::Only(InquiryStatus::InProgress)
        );
        assert_eq!(StatusFilter::<InquiryStatus>::parse("bogus"), StatusFilter::All);
        assert_eq!(StatusFilter::Only(InquiryStatus::Completed).to_string(), "completed");
    }

    fn arb_status() -> impl Strategy<Value = InquiryStatus> {
        prop_oneof![
            Just(InquiryStatus::New),
            Just(InquiryStatus::InProgress),
            Just(InquiryStatus::Accepted),
            Just(InquiryStatus::Completed),
        ]
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(200))]

        /// Every survivor contains the term in one of its search fields, and
        /// nothing that matches is dropped.
        #[test]
        fn filtered_records_contain_term(term in "[ ]{0,2}[a-zA-Z@. -]{0,5}[ ]{0,2}") {
            let all = seed_inquiries();
            let filtered = filter_records(&all, &term, StatusFilter::All);

            if term.trim().is_empty() {
                prop_assert_eq!(filtered, all);
            } else {
                let needle = term.to_lowercase();
                for record in &filtered {
                    prop_assert!(
                        record.search_fields().iter().any(|f| f.to_lowercase().contains(&needle)),
                        "{} does not contain {:?}", record.name, term
                    );
                }
                let expected = all
                    .iter()
                    .filter(|r| r.search_fields().iter().any(|f| f.to_lowercase().contains(&needle)))
                    .count();
                prop_assert_eq!(filtered.len(), expected);
            }
        }

        #[test]
        fn filtered_records_have_selected_status(status in arb_status(), term in "[a-z]{0,2}") {
            let all = seed_inquiries();
            let filtered = filter_records(&all, &term, StatusFilter::Only(status));
            prop_assert!(filtered.iter().all(|r| r.status == status));
        }
    }
}
