pub mod admin;
pub mod footer;
pub mod header;
pub mod notifications;

use leptos::prelude::*;
use leptos_router::components::Outlet;

use footer::Footer;
use header::Navbar;

/// Каркас публичных страниц:
/// ```text
/// +-----------------+
/// |     Navbar      |
/// +-----------------+
/// |      page       |
/// +-----------------+
/// |     Footer      |
/// +-----------------+
/// ```
#[component]
pub fn PublicLayout(children: Children) -> impl IntoView {
    view! {
        <div class="public-layout">
            <Navbar />
            <main class="public-layout__main">{children()}</main>
            <Footer />
        </div>
    }
}

/// Route view for the nested public routes.
#[component]
pub fn PublicShell() -> impl IntoView {
    view! {
        <PublicLayout>
            <Outlet />
        </PublicLayout>
    }
}
