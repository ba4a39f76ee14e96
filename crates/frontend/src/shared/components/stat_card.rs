use crate::shared::icons::icon;
use leptos::prelude::*;
use leptos_router::components::A;

/// Dashboard tile: title, big number, hint, whole card links to a drill-down.
#[component]
pub fn StatCard(
    title: &'static str,
    /// Icon name from the icon() helper
    icon_name: &'static str,
    value: usize,
    description: &'static str,
    /// e.g. "/admin/inquiries?status=new"
    link: String,
) -> impl IntoView {
    view! {
        <A href=link attr:class="stat-card">
            <div class="stat-card__header">
                <span class="stat-card__title">{title}</span>
                <span class="stat-card__icon">{icon(icon_name)}</span>
            </div>
            <div class="stat-card__value">{value}</div>
            <div class="stat-card__description">{description}</div>
        </A>
    }
}
