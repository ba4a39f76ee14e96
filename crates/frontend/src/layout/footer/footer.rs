use contracts::domain::a003_service_offering::find;
use leptos::prelude::*;
use leptos_router::components::A;

use crate::layout::header::header::Brand;
use crate::shared::icons::icon;

const QUICK_LINKS: [(&str, &str); 4] = [
    ("/", "Home"),
    ("/services", "Services"),
    ("/inquiry", "Submit Inquiry"),
    ("/customer-login", "Customer Login"),
];

const FOOTER_SERVICES: [&str; 6] = [
    "pc-troubleshooting",
    "password-recovery",
    "network-setup",
    "custom-pc",
    "software-installation",
    "data-recovery",
];

/// Подвал публичных страниц
#[component]
pub fn Footer() -> impl IntoView {
    let services = FOOTER_SERVICES
        .iter()
        .filter_map(|slug| find(slug))
        .map(|service| {
            view! {
                <li><A href=service.anchor_href()>{service.title}</A></li>
            }
        })
        .collect_view();

    view! {
        <footer class="footer">
            <div class="container footer__grid">
                <div>
                    <Brand />
                    <p class="footer__tagline">
                        "Professional IT solutions for homes and small businesses. We solve your technical problems so you don't have to."
                    </p>
                </div>
                <div>
                    <h3 class="footer__heading">"Quick Links"</h3>
                    <ul class="footer__list">
                        {QUICK_LINKS
                            .iter()
                            .map(|(href, label)| view! { <li><A href=*href>{*label}</A></li> })
                            .collect_view()}
                    </ul>
                </div>
                <div>
                    <h3 class="footer__heading">"Our Services"</h3>
                    <ul class="footer__list">{services}</ul>
                </div>
                <div>
                    <h3 class="footer__heading">"Contact Us"</h3>
                    <ul class="footer__list footer__contacts">
                        <li>{icon("map-pin")}<span>"123 Tech Avenue, Suite 101"<br />"Silicon Valley, CA 94025"</span></li>
                        <li>{icon("phone")}<span>"(555) 123-4567"</span></li>
                        <li>{icon("mail")}<span>"support@techhandyman.com"</span></li>
                    </ul>
                </div>
            </div>
            <div class="container footer__bottom">
                <p>"© 2025 Tech Handyman. All rights reserved."</p>
            </div>
        </footer>
    }
}
