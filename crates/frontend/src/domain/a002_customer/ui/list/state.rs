use contracts::domain::a002_customer::{seed_customers, Customer};
use contracts::shared::list::ListState;
use leptos::prelude::*;

pub fn create_state() -> RwSignal<ListState<Customer>> {
    RwSignal::new(ListState::new(seed_customers()))
}
