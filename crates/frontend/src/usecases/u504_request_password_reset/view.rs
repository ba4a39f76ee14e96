use contracts::shared::validation::ValidationErrors;
use contracts::usecases::common::UseCaseMetadata;
use contracts::usecases::u504_request_password_reset::{PasswordResetRequest, RequestPasswordReset};
use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::components::A;
use thaw::*;

use crate::layout::notifications::use_notifications;
use crate::shared::config::simulated_delay;
use crate::shared::form::{report_invalid, FormField};
use crate::shared::icons::icon;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_USECASE;

#[component]
pub fn ForgotPasswordPage() -> impl IntoView {
    let notifications = use_notifications();

    let email = RwSignal::new(String::new());
    let errors = RwSignal::new(ValidationErrors::default());
    let (is_submitting, set_is_submitting) = signal(false);
    let (is_submitted, set_is_submitted) = signal(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if is_submitting.get_untracked() {
            return;
        }
        let request = match PasswordResetRequest::new(&email.get_untracked()) {
            Ok(request) => request,
            Err(failed) => {
                report_invalid(notifications, errors, failed);
                return;
            }
        };

        errors.set(ValidationErrors::default());
        set_is_submitting.set(true);
        spawn_local(async move {
            simulated_delay().await;
            log::info!("{}: reset requested for {}", RequestPasswordReset::full_name(), request.email());
            notifications.notify(request.acknowledge());
            set_is_submitted.set(true);
            set_is_submitting.set(false);
        });
    };

    let request_form = move || {
        view! {
            <form class="form" on:submit=on_submit>
                <FormField label="Email" name="email" errors=errors>
                    <Input
                        value=email
                        placeholder="Enter your email address"
                        disabled=Signal::derive(move || is_submitting.get())
                    />
                </FormField>
                <Button
                    appearance=ButtonAppearance::Primary
                    button_type=ButtonType::Submit
                    block=true
                    disabled=Signal::derive(move || is_submitting.get())
                >
                    {move || if is_submitting.get() { "Sending..." } else { "Send Reset Instructions" }}
                </Button>
            </form>
        }
    };

    view! {
        <PageFrame page_id="u504_request_password_reset--usecase" category=PAGE_CAT_USECASE class="page--narrow">
            <div class="page__header page__header--centered">
                <span class="page__header-icon">{icon("key")}</span>
                <h1 class="page__title">"Forgot Password"</h1>
                <p class="page__subtitle">
                    "Enter your email address and we'll send you instructions to reset your password."
                </p>
            </div>
            <div class="page__content">
                <Card>
                    <Show when=move || is_submitted.get() fallback=request_form>
                        <div class="form__submitted">
                            <div class="alert alert--success">
                                <p>"Reset instructions sent! Please check your email."</p>
                            </div>
                            <p>"Don't see the email? Check your spam folder or request another reset link."</p>
                            <Button
                                appearance=ButtonAppearance::Secondary
                                block=true
                                on_click=move |_| set_is_submitted.set(false)
                            >
                                "Try Again"
                            </Button>
                        </div>
                    </Show>
                    <div class="form__footer form__footer--split">
                        <A href="/customer-login" attr:class="link">"Back to Login"</A>
                        <A href="/inquiry" attr:class="link">"Submit an Inquiry"</A>
                    </div>
                </Card>
            </div>
        </PageFrame>
    }
}
