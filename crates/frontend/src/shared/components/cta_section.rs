use leptos::prelude::*;
use leptos_router::components::A;
use thaw::*;

/// Закрывающий призыв к действию на публичных страницах
#[component]
pub fn CtaSection() -> impl IntoView {
    view! {
        <section class="cta">
            <div class="container cta__inner">
                <h2 class="cta__title">"Ready to Solve Your Tech Problems?"</h2>
                <p class="cta__text">
                    "Submit an inquiry today and our technical experts will get back to you quickly with a solution and cost estimate."
                </p>
                <A href="/inquiry">
                    <Button appearance=ButtonAppearance::Primary size=ButtonSize::Large>
                        "Submit an Inquiry"
                    </Button>
                </A>
            </div>
        </section>
    }
}
