use std::sync::Arc;

use super::filter::{filter_records, StatusFilter};
use super::pagination::{paginate, total_pages, Page, PAGE_SIZE};
use super::ListRecord;

/// View state of one list page: store, criteria, derived rows, page, selection.
///
/// The store is shared (`Arc<[T]>`). Replacing a record builds a new store, so
/// snapshots handed out earlier keep their contents.
#[derive(Debug, Clone)]
pub struct ListState<T: ListRecord> {
    store: Arc<[T]>,
    search_term: String,
    status_filter: StatusFilter<T::Status>,
    filtered: Vec<T>,
    page: usize,
    page_size: usize,
    selected: Option<T::Id>,
}

impl<T: ListRecord> ListState<T> {
    pub fn new(records: Vec<T>) -> Self {
        Self::with_page_size(records, PAGE_SIZE)
    }

    pub fn with_page_size(records: Vec<T>, page_size: usize) -> Self {
        let store: Arc<[T]> = records.into();
        let filtered = store.to_vec();
        Self {
            store,
            search_term: String::new(),
            status_filter: StatusFilter::All,
            filtered,
            page: 1,
            page_size,
            selected: None,
        }
    }

    pub fn store(&self) -> Arc<[T]> {
        Arc::clone(&self.store)
    }

    pub fn search_term(&self) -> &str {
        &self.search_term
    }

    pub fn status_filter(&self) -> StatusFilter<T::Status> {
        self.status_filter
    }

    pub fn filtered(&self) -> &[T] {
        &self.filtered
    }

    pub fn page(&self) -> usize {
        self.page
    }

    pub fn total_pages(&self) -> usize {
        total_pages(self.filtered.len(), self.page_size)
    }

    /// Edits the term only; rows change on the next [`apply_filters`](Self::apply_filters).
    pub fn set_search_term(&mut self, term: impl Into<String>) {
        self.search_term = term.into();
    }

    pub fn set_status_filter(&mut self, filter: StatusFilter<T::Status>) {
        self.status_filter = filter;
    }

    /// Re-derives the rows from the store and goes back to page 1.
    pub fn apply_filters(&mut self) {
        self.refilter();
        self.page = 1;
    }

    /// Moves to `page` without re-filtering. Range checks are the caller's job.
    pub fn go_to_page(&mut self, page: usize) {
        self.page = page;
    }

    pub fn next_page(&mut self) {
        self.page = (self.page + 1).min(self.total_pages().max(1));
    }

    pub fn previous_page(&mut self) {
        self.page = self.page.saturating_sub(1).max(1);
    }

    pub fn current_page(&self) -> Page<T> {
        paginate(&self.filtered, self.page, self.page_size)
    }

    pub fn find(&self, id: T::Id) -> Option<&T> {
        self.store.iter().find(|record| record.id() == id)
    }

    /// Selects a record of the current store. Unknown ids leave the selection as is.
    pub fn select(&mut self, id: T::Id) -> bool {
        if self.find(id).is_none() {
            return false;
        }
        self.selected = Some(id);
        true
    }

    pub fn clear_selection(&mut self) {
        self.selected = None;
    }

    pub fn selected(&self) -> Option<&T> {
        self.selected.and_then(|id| self.find(id))
    }

    /// Builds a new store where the record `id` is replaced by `update(record)`.
    ///
    /// The rows are re-derived with the current criteria; the page index is kept
    /// but pulled back into range if the list got shorter.
    pub fn replace_record(&mut self, id: T::Id, update: impl FnOnce(&T) -> T) -> Option<&T> {
        let position = self.store.iter().position(|record| record.id() == id)?;
        let mut next = self.store.to_vec();
        next[position] = update(&self.store[position]);
        self.store = next.into();

        self.refilter();
        let last = self.total_pages().max(1);
        if self.page > last {
            self.page = last;
        }
        self.store.get(position)
    }

    fn refilter(&mut self) {
        self.filtered = filter_records(&self.store, &self.search_term, self.status_filter);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a001_inquiry::{seed_inquiries, InquiryId, InquiryStatus};

    #[test]
    fn test_initial_state_shows_everything() {
        let state = ListState::new(seed_inquiries());
        let page = state.current_page();
        assert_eq!(page.total_count, 8);
        assert_eq!(page.total_pages, 2);
        assert_eq!(page.items.len(), 5);
        assert_eq!(state.page(), 1);
    }

    #[test]
    fn test_criteria_apply_only_on_apply_filters() {
        let mut state = ListState::new(seed_inquiries());
        state.go_to_page(2);
        state.set_search_term("printer");
        assert_eq!(state.filtered().len(), 8);
        assert_eq!(state.page(), 2);

        state.apply_filters();
        assert_eq!(state.filtered().len(), 1);
        assert_eq!(state.page(), 1);
    }

    #[test]
    fn test_page_change_does_not_refilter() {
        let mut state = ListState::new(seed_inquiries());
        state.set_status_filter(StatusFilter::Only(InquiryStatus::New));
        state.go_to_page(2);
        // criteria were not applied, still the full list
        assert_eq!(state.current_page().items.len(), 3);
        assert_eq!(state.current_page().total_count, 8);
    }

    #[test]
    fn test_navigation_is_clamped() {
        let mut state = ListState::new(seed_inquiries());
        state.previous_page();
        assert_eq!(state.page(), 1);
        state.next_page();
        state.next_page();
        assert_eq!(state.page(), 2);

        state.set_search_term("nobody-matches-this");
        state.apply_filters();
        state.next_page();
        assert_eq!(state.page(), 1);
        assert!(state.current_page().is_empty());
    }

    #[test]
    fn test_selection_must_belong_to_store() {
        let mut state = ListState::new(seed_inquiries());
        assert!(!state.select(InquiryId(99)));
        assert!(state.selected().is_none());

        assert!(state.select(InquiryId(3)));
        assert_eq!(state.selected().map(|i| i.name.as_str()), Some("Mike Williams"));
        state.clear_selection();
        assert!(state.selected().is_none());
    }

    #[test]
    fn test_replace_record_keeps_old_snapshot() {
        let mut state = ListState::new(seed_inquiries());
        let before = state.store();

        let updated = state
            .replace_record(InquiryId(1), |i| i.clone().with_status(InquiryStatus::Accepted))
            .map(|i| i.status);
        assert_eq!(updated, Some(InquiryStatus::Accepted));

        assert_eq!(before[0].status, InquiryStatus::New);
        assert_eq!(state.store()[0].status, InquiryStatus::Accepted);
        assert!(!Arc::ptr_eq(&before, &state.store()));
        assert!(state.replace_record(InquiryId(42), |i| i.clone()).is_none());
    }

    #[test]
    fn test_replace_record_pulls_page_into_range() {
        let mut state = ListState::new(seed_inquiries());
        state.set_status_filter(StatusFilter::Only(InquiryStatus::New));
        state.apply_filters();
        state.go_to_page(1);
        assert_eq!(state.filtered().len(), 3);

        state.replace_record(InquiryId(5), |i| i.clone().with_status(InquiryStatus::Accepted));
        assert_eq!(state.filtered().len(), 2);
        assert_eq!(state.page(), 1);
    }
}
