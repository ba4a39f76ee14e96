mod sections;

use leptos::prelude::*;

use self::sections::{FeaturedServices, HeroSection, HowItWorks, IntroSection, TestimonialsSection};
use crate::shared::components::cta_section::CtaSection;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_PUBLIC;

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <PageFrame page_id="home--public" category=PAGE_CAT_PUBLIC>
            <HeroSection />
            <IntroSection />
            <FeaturedServices />
            <HowItWorks />
            <TestimonialsSection />
            <CtaSection />
        </PageFrame>
    }
}
