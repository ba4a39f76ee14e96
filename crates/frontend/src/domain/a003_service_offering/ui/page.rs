use contracts::domain::a003_service_offering::{catalog, ServiceOffering};
use leptos::prelude::*;
use leptos_router::components::A;
use leptos_router::hooks::use_location;
use thaw::*;

use super::{ServiceCard, ServiceDetailModal};
use crate::shared::components::cta_section::CtaSection;
use crate::shared::icons::icon;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_PUBLIC;

const FAQ: [(&str, &str); 5] = [
    (
        "How quickly can you respond to my inquiry?",
        "We typically respond to all inquiries within 24 hours, and often much faster during business hours.",
    ),
    (
        "Do you offer on-site service or is everything remote?",
        "We offer both remote and on-site services depending on the nature of your technical issue. Many problems can be resolved remotely, but we're happy to come to your location when necessary.",
    ),
    (
        "What are your rates?",
        "Our rates vary depending on the service required. We provide detailed cost estimates before beginning any work, so you'll know exactly what to expect. We offer both hourly rates and flat-fee services for common issues.",
    ),
    (
        "How do I pay for services?",
        "We accept all major credit cards, PayPal, and electronic bank transfers. Payment is typically due upon completion of service, and you'll receive a detailed invoice for your records.",
    ),
    (
        "Do you offer any guarantees?",
        "Yes! We offer a 30-day service guarantee on all our work. If the same issue recurs within 30 days of our service, we'll fix it at no additional charge.",
    ),
];

/// Scrolls the `#slug` section into view; client-side navigation does not.
fn scroll_to_anchor(hash: &str) {
    let id = hash.trim_start_matches('#');
    if id.is_empty() {
        return;
    }
    if let Some(element) = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.get_element_by_id(id))
    {
        element.scroll_into_view();
    }
}

#[component]
fn ServiceDetailsSection(
    service: &'static ServiceOffering,
    selected: RwSignal<Option<&'static ServiceOffering>>,
) -> impl IntoView {
    view! {
        <div id=service.slug class="service-detail">
            <div class="service-detail__icon">{icon(service.icon)}</div>
            <div>
                <h3 class="service-detail__title">{service.title}</h3>
                <p class="service-detail__text">{service.overview}</p>
                <div class="service-detail__actions">
                    <A href="/inquiry">
                        <Button appearance=ButtonAppearance::Primary>"Request this Service"</Button>
                    </A>
                    <Button
                        appearance=ButtonAppearance::Subtle
                        on_click=move |_| selected.set(Some(service))
                    >
                        "More Details"
                    </Button>
                </div>
            </div>
        </div>
    }
}

#[component]
pub fn ServicesPage() -> impl IntoView {
    let location = use_location();
    let selected = RwSignal::new(None::<&'static ServiceOffering>);

    Effect::new(move |_| {
        let hash = location.hash.get();
        scroll_to_anchor(&hash);
    });

    view! {
        <PageFrame page_id="a003_service_offering--public" category=PAGE_CAT_PUBLIC>
            <section class="banner">
                <div class="container">
                    <h1 class="banner__title">"Our Technical Services"</h1>
                    <p class="banner__text">
                        "Comprehensive IT support and technical solutions for all your computer and network needs."
                    </p>
                </div>
            </section>

            <section class="section section--muted">
                <div class="container card-grid">
                    {catalog()
                        .iter()
                        .map(|service| view! { <ServiceCard service=service href="/inquiry".to_string() /> })
                        .collect_view()}
                </div>
            </section>

            <section class="section">
                <div class="container">
                    <div class="section__header">
                        <h2>"Service Details"</h2>
                        <p>"Learn more about each of our services and how we can help solve your technical problems."</p>
                    </div>
                    {catalog()
                        .iter()
                        .map(|service| view! { <ServiceDetailsSection service=service selected=selected /> })
                        .collect_view()}
                </div>
            </section>

            <section class="section section--muted">
                <div class="container faq">
                    <h2 class="faq__title">"Frequently Asked Questions"</h2>
                    {FAQ
                        .iter()
                        .map(|(question, answer)| view! {
                            <div class="faq__item">
                                <h3>{*question}</h3>
                                <p>{*answer}</p>
                            </div>
                        })
                        .collect_view()}
                </div>
            </section>

            <CtaSection />
            <ServiceDetailModal service=selected />
        </PageFrame>
    }
}
