use contracts::domain::a001_inquiry::{seed_inquiries, Inquiry, InquiryStatus};
use contracts::shared::list::{ListState, StatusFilter};
use leptos::prelude::*;

/// Список заявок поверх демо-данных; каждый заход на страницу начинает с них заново
pub fn create_state() -> RwSignal<ListState<Inquiry>> {
    RwSignal::new(ListState::new(seed_inquiries()))
}

/// Value of the status select for a filter.
pub fn select_value(filter: StatusFilter<InquiryStatus>) -> String {
    filter.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_select_value_round_trips_through_parse() {
        for filter in std::iter::once(StatusFilter::All)
            .chain(InquiryStatus::ALL.into_iter().map(StatusFilter::Only))
        {
            assert_eq!(StatusFilter::parse(&select_value(filter)), filter);
        }
    }
}
