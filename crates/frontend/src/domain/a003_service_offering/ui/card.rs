use contracts::domain::a003_service_offering::ServiceOffering;
use leptos::prelude::*;
use leptos_router::components::A;
use thaw::*;

use crate::shared::icons::icon;

/// Карточка услуги: иконка, название, краткое описание, "Learn More".
#[component]
pub fn ServiceCard(service: &'static ServiceOffering, href: String) -> impl IntoView {
    view! {
        <div class="service-card">
            <div class="service-card__icon">{icon(service.icon)}</div>
            <h3 class="service-card__title">{service.title}</h3>
            <p class="service-card__summary">{service.summary}</p>
            <A href=href>
                <Button appearance=ButtonAppearance::Secondary>"Learn More"</Button>
            </A>
        </div>
    }
}
