use contracts::shared::notice::Notice;
use leptos::prelude::*;
use leptos_router::components::A;
use leptos_router::hooks::use_location;
use thaw::*;

use crate::layout::notifications::use_notifications;
use crate::shared::icons::icon;
use crate::system::auth::context::use_auth;

const ADMIN_LINKS: [(&str, &str); 4] = [
    ("/admin/dashboard", "Dashboard"),
    ("/admin/inquiries", "Inquiries"),
    ("/admin/customers", "Customers"),
    ("/admin/settings", "Settings"),
];

#[component]
pub fn AdminNavbar() -> impl IntoView {
    let auth = use_auth();
    let notifications = use_notifications();
    let location = use_location();

    // The guard sends the page to /admin/login once the flag is gone.
    let logout = move |_| {
        auth.logout();
        notifications.notify(Notice::success(
            "Logged Out",
            "You have been successfully logged out of the admin dashboard.",
        ));
    };

    let links = ADMIN_LINKS
        .iter()
        .map(|(href, label)| {
            let href = *href;
            let class = move || {
                if location.pathname.get() == href {
                    "admin-navbar__link admin-navbar__link--active"
                } else {
                    "admin-navbar__link"
                }
            };
            view! { <A href=href attr:class=class>{*label}</A> }
        })
        .collect_view();

    view! {
        <nav class="admin-navbar">
            <div class="container admin-navbar__row">
                <A href="/admin/dashboard" attr:class="admin-navbar__brand">
                    "Tech Handyman " <span class="admin-navbar__accent">"Admin"</span>
                </A>
                <div class="admin-navbar__links">
                    {links}
                    <Button appearance=ButtonAppearance::Transparent on_click=logout>
                        {icon("log-out")}
                        "Logout"
                    </Button>
                </div>
            </div>
        </nav>
    }
}
