use contracts::system::routes::{resolve, Navigation, SiteRoute};
use leptos::prelude::*;
use leptos_router::components::Redirect;
use leptos_router::hooks::use_location;

use super::context::use_auth;

/// Renders its children only when the current admin route may be shown;
/// otherwise redirects (to `/admin/login`, or from bare `/admin` to the dashboard).
#[component]
pub fn RequireAdmin(children: ChildrenFn) -> impl IntoView {
    let auth = use_auth();
    let location = use_location();

    let redirect = Memo::new(move |_| {
        match resolve(&location.pathname.get(), auth.is_authenticated()) {
            Navigation::Redirect(route) => Some(route),
            Navigation::Render(_) => None,
        }
    });

    view! {
        <Show
            when=move || redirect.get().is_none()
            fallback=move || {
                let target = redirect.get().unwrap_or(SiteRoute::AdminLogin);
                view! { <Redirect path=target.path() /> }
            }
        >
            {children()}
        </Show>
    }
}
