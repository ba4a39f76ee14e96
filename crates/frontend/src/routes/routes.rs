use leptos::prelude::*;
use leptos_router::components::{ParentRoute, Redirect, Route, Router, Routes};
use leptos_router::path;

use crate::dashboards::AdminDashboard;
use crate::domain::a001_inquiry::ui::InquiryList;
use crate::domain::a002_customer::ui::CustomerList;
use crate::domain::a003_service_offering::ui::ServicesPage;
use crate::layout::admin::AdminLayout;
use crate::layout::{PublicLayout, PublicShell};
use crate::system::pages::admin_login::AdminLoginPage;
use crate::system::pages::customer_login::CustomerLoginPage;
use crate::system::pages::home::HomePage;
use crate::system::pages::not_found::NotFoundPage;
use crate::system::pages::settings::SettingsPage;
use crate::usecases::u503_submit_inquiry::view::InquiryFormPage;
use crate::usecases::u504_request_password_reset::view::ForgotPasswordPage;

/// Таблица маршрутов сайта.
///
/// Public pages share the navbar/footer shell; everything under `/admin`
/// goes through the admin layout and its guard.
#[component]
pub fn AppRoutes() -> impl IntoView {
    view! {
        <Router>
            <Routes fallback=|| view! { <PublicLayout><NotFoundPage /></PublicLayout> }>
                <ParentRoute path=path!("") view=PublicShell>
                    <Route path=path!("") view=HomePage />
                    <Route path=path!("/services") view=ServicesPage />
                    <Route path=path!("/inquiry") view=InquiryFormPage />
                    <Route path=path!("/customer-login") view=CustomerLoginPage />
                    <Route path=path!("/forgot-password") view=ForgotPasswordPage />
                    <Route path=path!("/admin/login") view=AdminLoginPage />
                </ParentRoute>
                <ParentRoute path=path!("/admin") view=AdminLayout>
                    <Route path=path!("") view=|| view! { <Redirect path="/admin/dashboard" /> } />
                    <Route path=path!("/dashboard") view=AdminDashboard />
                    <Route path=path!("/inquiries") view=InquiryList />
                    <Route path=path!("/customers") view=CustomerList />
                    <Route path=path!("/settings") view=SettingsPage />
                </ParentRoute>
            </Routes>
        </Router>
    }
}
