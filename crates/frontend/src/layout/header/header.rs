use leptos::prelude::*;
use leptos_router::components::A;
use thaw::*;

use crate::shared::icons::icon;

const LINKS: [(&str, &str); 3] = [
    ("/", "Home"),
    ("/services", "Services"),
    ("/inquiry", "Submit Inquiry"),
];

#[component]
pub fn Brand() -> impl IntoView {
    view! {
        <A href="/" attr:class="brand">
            <span class="brand__logo">{icon("cpu")}</span>
            <span class="brand__name">"Tech Handyman"</span>
        </A>
    }
}

#[component]
fn NavActions() -> impl IntoView {
    view! {
        <A href="/customer-login">
            <Button appearance=ButtonAppearance::Secondary>"Customer Login"</Button>
        </A>
        <A href="/inquiry">
            <Button appearance=ButtonAppearance::Primary>"Submit Inquiry"</Button>
        </A>
    }
}

/// Верхняя навигация публичных страниц
#[component]
pub fn Navbar() -> impl IntoView {
    let (mobile_open, set_mobile_open) = signal(false);

    let nav_links = move || {
        LINKS
            .iter()
            .map(|(href, label)| {
                view! {
                    <A href=*href attr:class="navbar__link" on:click=move |_| set_mobile_open.set(false)>
                        {*label}
                    </A>
                }
            })
            .collect_view()
    };

    view! {
        <nav class="navbar">
            <div class="container navbar__row">
                <Brand />
                <div class="navbar__links">{nav_links()}</div>
                <div class="navbar__actions">
                    <NavActions />
                </div>
                <button
                    class="navbar__toggle"
                    on:click=move |_| set_mobile_open.update(|open| *open = !*open)
                >
                    {move || if mobile_open.get() { icon("x") } else { icon("menu") }}
                </button>
            </div>
            <Show when=move || mobile_open.get()>
                <div class="container navbar__mobile">
                    {nav_links()}
                    <div class="navbar__mobile-actions">
                        <NavActions />
                    </div>
                </div>
            </Show>
        </nav>
    }
}
