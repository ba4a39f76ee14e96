//! Site route table and the admin-area redirect rule.

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum SiteRoute {
    Home,
    Services,
    Inquiry,
    CustomerLogin,
    ForgotPassword,
    AdminLogin,
    /// Bare `/admin`; always redirects.
    AdminRoot,
    AdminDashboard,
    AdminInquiries,
    AdminCustomers,
    AdminSettings,
    NotFound,
}

impl SiteRoute {
    pub const ALL: [SiteRoute; 12] = [
        SiteRoute::Home,
        SiteRoute::Services,
        SiteRoute::Inquiry,
        SiteRoute::CustomerLogin,
        SiteRoute::ForgotPassword,
        SiteRoute::AdminLogin,
        SiteRoute::AdminRoot,
        SiteRoute::AdminDashboard,
        SiteRoute::AdminInquiries,
        SiteRoute::AdminCustomers,
        SiteRoute::AdminSettings,
        SiteRoute::NotFound,
    ];

    /// Parses a location; query string, fragment and a trailing slash are ignored.
    pub fn parse(location: &str) -> SiteRoute {
        let path = location
            .split(['?', '#'])
            .next()
            .unwrap_or_default();
        let path = path.trim_end_matches('/');

        match path {
            "" => SiteRoute::Home,
            "/services" => SiteRoute::Services,
            "/inquiry" => SiteRoute::Inquiry,
            "/customer-login" => SiteRoute::CustomerLogin,
            "/forgot-password" => SiteRoute::ForgotPassword,
            "/admin/login" => SiteRoute::AdminLogin,
            "/admin" => SiteRoute::AdminRoot,
            "/admin/dashboard" => SiteRoute::AdminDashboard,
            "/admin/inquiries" => SiteRoute::AdminInquiries,
            "/admin/customers" => SiteRoute::AdminCustomers,
            "/admin/settings" => SiteRoute::AdminSettings,
            _ => SiteRoute::NotFound,
        }
    }

    pub fn path(&self) -> &'static str {
        match self {
            SiteRoute::Home => "/",
            SiteRoute::Services => "/services",
            SiteRoute::Inquiry => "/inquiry",
            SiteRoute::CustomerLogin => "/customer-login",
            SiteRoute::ForgotPassword => "/forgot-password",
            SiteRoute::AdminLogin => "/admin/login",
            SiteRoute::AdminRoot => "/admin",
            SiteRoute::AdminDashboard => "/admin/dashboard",
            SiteRoute::AdminInquiries => "/admin/inquiries",
            SiteRoute::AdminCustomers => "/admin/customers",
            SiteRoute::AdminSettings => "/admin/settings",
            SiteRoute::NotFound => "/404",
        }
    }

    /// Every admin route except the login page.
    pub fn requires_admin(&self) -> bool {
        matches!(
            self,
            SiteRoute::AdminRoot
                | SiteRoute::AdminDashboard
                | SiteRoute::AdminInquiries
                | SiteRoute::AdminCustomers
                | SiteRoute::AdminSettings
        )
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Navigation {
    Render(SiteRoute),
    Redirect(SiteRoute),
}

/// What the router does with `location` for the given session state.
///
/// Only the known admin pages are guarded. An unknown `/admin/...` path has
/// no page to protect and renders NotFound whether or not the admin is
/// logged in.
pub fn resolve(location: &str, authenticated: bool) -> Navigation {
    let route = SiteRoute::parse(location);
    if route.requires_admin() && !authenticated {
        return Navigation::Redirect(SiteRoute::AdminLogin);
    }
    match route {
        SiteRoute::AdminRoot => Navigation::Redirect(SiteRoute::AdminDashboard),
        other => Navigation::Render(other),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::system::auth::{AdminSession, Credentials, MemoryStorage};

    #[test]
    fn test_parse_ignores_query_fragment_and_slash() {
        assert_eq!(SiteRoute::parse("/"), SiteRoute::Home);
        assert_eq!(SiteRoute::parse(""), SiteRoute::Home);
        assert_eq!(
            SiteRoute::parse("/admin/inquiries?status=new"),
            SiteRoute::AdminInquiries
        );
        assert_eq!(SiteRoute::parse("/services#network-setup"), SiteRoute::Services);
        assert_eq!(SiteRoute::parse("/admin/dashboard/"), SiteRoute::AdminDashboard);
        assert_eq!(SiteRoute::parse("/admin/unknown"), SiteRoute::NotFound);
    }

    #[test]
    fn test_path_round_trips() {
        for route in SiteRoute::ALL {
            if route != SiteRoute::NotFound {
                assert_eq!(SiteRoute::parse(route.path()), route);
            }
        }
    }

    #[test]
    fn test_public_routes_render_without_session() {
        for path in ["/", "/services", "/inquiry", "/customer-login", "/forgot-password", "/admin/login"] {
            assert!(matches!(resolve(path, false), Navigation::Render(_)), "{path}");
        }
        assert_eq!(resolve("/nope", false), Navigation::Render(SiteRoute::NotFound));
    }

    #[test]
    fn test_unknown_admin_path_is_not_found() {
        for authenticated in [false, true] {
            assert_eq!(
                resolve("/admin/xyz", authenticated),
                Navigation::Render(SiteRoute::NotFound)
            );
        }
    }

    #[test]
    fn test_admin_root_redirects() {
        assert_eq!(
            resolve("/admin", true),
            Navigation::Redirect(SiteRoute::AdminDashboard)
        );
        assert_eq!(
            resolve("/admin", false),
            Navigation::Redirect(SiteRoute::AdminLogin)
        );
    }

    #[test]
    fn test_logout_closes_admin_area() {
        let session = AdminSession::new(MemoryStorage::new());
        session
            .login(&Credentials::new("admin", "admin").unwrap())
            .unwrap();
        assert_eq!(
            resolve("/admin/customers", session.is_authenticated()),
            Navigation::Render(SiteRoute::AdminCustomers)
        );

        session.logout();
        for route in SiteRoute::ALL.into_iter().filter(SiteRoute::requires_admin) {
            assert_eq!(
                resolve(route.path(), session.is_authenticated()),
                Navigation::Redirect(SiteRoute::AdminLogin),
                "{route:?}"
            );
        }
        assert_eq!(
            resolve("/admin/login", session.is_authenticated()),
            Navigation::Render(SiteRoute::AdminLogin)
        );
    }
}
