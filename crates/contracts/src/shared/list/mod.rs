//! Filterable, paginated lists over an in-memory record store.
//!
//! The admin inquiry and customer pages share this module: a record type only
//! has to describe its id, its status and which fields the search box looks at.

mod filter;
mod pagination;
mod state;

pub use filter::{filter_records, StatusFilter};
pub use pagination::{paginate, total_pages, Page, PAGE_SIZE};
pub use state::ListState;

/// A record that can be shown in a filterable list.
pub trait ListRecord: Clone {
    type Id: Copy + Eq + std::fmt::Debug;
    type Status: Copy + Eq + std::fmt::Debug;

    fn id(&self) -> Self::Id;

    fn status(&self) -> Self::Status;

    /// Fields the free-text search matches against.
    fn search_fields(&self) -> Vec<&str>;

    /// Case-insensitive substring match against ANY search field.
    ///
    /// A whitespace-only term matches everything; any other term is matched
    /// as typed, surrounding spaces included.
    fn matches_search(&self, term: &str) -> bool {
        if term.trim().is_empty() {
            return true;
        }
        let needle = term.to_lowercase();
        self.search_fields()
            .into_iter()
            .any(|field| field.to_lowercase().contains(&needle))
    }
}
