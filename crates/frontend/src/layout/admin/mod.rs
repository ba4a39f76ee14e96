pub mod navbar;

use leptos::prelude::*;
use leptos_router::components::Outlet;

use crate::shared::date_utils::current_year;
use crate::system::auth::guard::RequireAdmin;
use navbar::AdminNavbar;

/// Каркас админки: навигация, страница из Outlet, подвал.
///
/// Nothing inside renders until the guard lets the route through.
#[component]
pub fn AdminLayout() -> impl IntoView {
    view! {
        <RequireAdmin>
            <div class="admin-layout">
                <AdminNavbar />
                <main class="container admin-layout__main">
                    <Outlet />
                </main>
                <footer class="admin-layout__footer">
                    {format!("© {} Tech Handyman Admin Portal", current_year())}
                </footer>
            </div>
        </RequireAdmin>
    }
}
