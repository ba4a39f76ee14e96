use contracts::domain::a003_service_offering::featured;
use leptos::prelude::*;
use leptos_router::components::A;
use thaw::*;

use crate::domain::a003_service_offering::ui::ServiceCard;
use crate::shared::icons::icon;

// ============================================================================
// Content
// ============================================================================

const INTRO_STATS: [(&str, &str); 3] = [
    ("250+", "Happy Customers"),
    ("24h", "Average Response Time"),
    ("98%", "Customer Satisfaction"),
];

const STEPS: [(&str, &str); 4] = [
    (
        "Submit Your Inquiry",
        "Fill out our simple inquiry form with details about your technical issue.",
    ),
    (
        "Get a Quick Response",
        "Our technicians will review your inquiry and respond with questions or a solution.",
    ),
    (
        "Receive a Cost Estimate",
        "We'll provide a clear cost estimate for resolving your specific issue.",
    ),
    (
        "Problem Solved",
        "Upon approval, we'll quickly resolve your issue and follow up to ensure satisfaction.",
    ),
];

const GUARANTEES: [&str; 5] = [
    "Fast response within 24 hours",
    "Clear and transparent pricing",
    "No fix, no fee policy",
    "30-day service guarantee",
    "Certified technical professionals",
];

struct Testimonial {
    name: &'static str,
    role: &'static str,
    content: &'static str,
}

const TESTIMONIALS: [Testimonial; 3] = [
    Testimonial {
        name: "John Smith",
        role: "Small Business Owner",
        content: "Tech Handyman saved my business when our network went down. They responded within an hour and had us back up and running by the end of the day. Truly exceptional service!",
    },
    Testimonial {
        name: "Sarah Johnson",
        role: "Homeowner",
        content: "I was struggling with computer issues for months before contacting Tech Handyman. They diagnosed the problem quickly and provided a cost-effective solution. I'm now a loyal customer.",
    },
    Testimonial {
        name: "Michael Chen",
        role: "Graphic Designer",
        content: "The custom PC they built for me is incredible - fast, reliable, and perfect for my design work. They really listened to my needs and delivered exactly what I wanted within my budget.",
    },
];

/// "John Smith" -> "JS"
fn initials(name: &str) -> String {
    name.split_whitespace()
        .filter_map(|part| part.chars().next())
        .collect()
}

// ============================================================================
// Sections
// ============================================================================

#[component]
pub fn HeroSection() -> impl IntoView {
    view! {
        <section class="hero">
            <div class="container hero__inner">
                <h1 class="hero__title">"Expert Technical Solutions for All Your IT Needs"</h1>
                <p class="hero__text">
                    "Professional IT support and services for homes and small businesses. We handle everything from troubleshooting to custom builds."
                </p>
                <div class="hero__actions">
                    <A href="/inquiry">
                        <Button appearance=ButtonAppearance::Primary size=ButtonSize::Large>
                            "Submit an Inquiry"
                        </Button>
                    </A>
                    <A href="/services">
                        <Button appearance=ButtonAppearance::Secondary size=ButtonSize::Large>
                            "View Our Services"
                        </Button>
                    </A>
                </div>
            </div>
        </section>
    }
}

#[component]
pub fn IntroSection() -> impl IntoView {
    view! {
        <section class="section">
            <div class="container section__header">
                <h2>"Your Trusted Tech Handyman"</h2>
                <p>
                    "We provide professional IT support and technical solutions for homes and small businesses. From troubleshooting to setup and customization, we've got you covered."
                </p>
                <div class="intro-stats">
                    {INTRO_STATS
                        .iter()
                        .map(|(value, label)| view! {
                            <div class="intro-stats__item">
                                <div class="intro-stats__value">{*value}</div>
                                <p>{*label}</p>
                            </div>
                        })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}

#[component]
pub fn FeaturedServices() -> impl IntoView {
    view! {
        <section class="section section--muted">
            <div class="container">
                <div class="section__header">
                    <h2>"Our Technical Services"</h2>
                    <p>
                        "We provide comprehensive technical support and solutions to solve all your computer and network related problems."
                    </p>
                </div>
                <div class="card-grid">
                    {featured()
                        .into_iter()
                        .map(|service| view! { <ServiceCard service=service href=service.anchor_href() /> })
                        .collect_view()}
                </div>
                <div class="section__footer">
                    <A href="/services">
                        <Button appearance=ButtonAppearance::Primary>"View All Services"</Button>
                    </A>
                </div>
            </div>
        </section>
    }
}

#[component]
pub fn HowItWorks() -> impl IntoView {
    view! {
        <section class="section section--muted">
            <div class="container how-it-works">
                <div class="how-it-works__steps">
                    <h3>"How It Works"</h3>
                    {STEPS
                        .iter()
                        .enumerate()
                        .map(|(i, (title, text))| view! {
                            <div class="step">
                                <span class="step__number">{i + 1}</span>
                                <div>
                                    <h4 class="step__title">{*title}</h4>
                                    <p class="step__text">{*text}</p>
                                </div>
                            </div>
                        })
                        .collect_view()}
                </div>
                <div class="how-it-works__guarantees">
                    <h3>"Our Guarantees"</h3>
                    <ul class="guarantees">
                        {GUARANTEES
                            .iter()
                            .map(|g| view! {
                                <li class="guarantees__item">{icon("check")}<span>{*g}</span></li>
                            })
                            .collect_view()}
                    </ul>
                </div>
            </div>
        </section>
    }
}

#[component]
pub fn TestimonialsSection() -> impl IntoView {
    view! {
        <section class="section">
            <div class="container">
                <div class="section__header">
                    <h2>"What Our Clients Say"</h2>
                    <p>
                        "Don't just take our word for it - hear from our satisfied customers about their experiences with Tech Handyman."
                    </p>
                </div>
                <div class="card-grid card-grid--3">
                    {TESTIMONIALS
                        .iter()
                        .map(|t| view! {
                            <Card class="testimonial">
                                <p class="testimonial__content">{t.content}</p>
                                <div class="testimonial__author">
                                    <span class="testimonial__avatar">{initials(t.name)}</span>
                                    <div>
                                        <h4>{t.name}</h4>
                                        <p class="testimonial__role">{t.role}</p>
                                    </div>
                                </div>
                            </Card>
                        })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initials() {
        assert_eq!(initials("John Smith"), "JS");
        assert_eq!(initials("  Michael   Chen "), "MC");
        assert_eq!(initials(""), "");
    }

    #[test]
    fn test_featured_services_resolve() {
        assert_eq!(featured().len(), 6);
        assert!(featured().iter().all(|s| s.anchor_href().starts_with("/services#")));
    }
}
