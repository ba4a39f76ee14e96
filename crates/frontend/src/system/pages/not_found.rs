use leptos::prelude::*;
use leptos_router::components::A;
use thaw::*;

use crate::shared::icons::icon;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_PUBLIC;

#[component]
pub fn NotFoundPage() -> impl IntoView {
    log::debug!("no route for {:?}", web_sys::window().and_then(|w| w.location().pathname().ok()));

    view! {
        <PageFrame page_id="not_found--public" category=PAGE_CAT_PUBLIC class="not-found">
            <div class="not-found__icon">{icon("frown")}</div>
            <h1 class="not-found__code">"404"</h1>
            <h2 class="not-found__title">"Page Not Found"</h2>
            <p class="not-found__text">
                "The page you are looking for doesn't exist or has been moved."
            </p>
            <A href="/">
                <Button appearance=ButtonAppearance::Primary>"Return to Home"</Button>
            </A>
        </PageFrame>
    }
}
