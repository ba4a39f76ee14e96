use contracts::shared::notice::Notice;
use contracts::shared::validation::ValidationErrors;
use contracts::system::auth::{customer_login, AuthError};
use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::components::A;
use thaw::*;

use crate::layout::notifications::use_notifications;
use crate::shared::config::simulated_delay;
use crate::shared::form::{report_invalid, FormField};
use crate::shared::icons::icon;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_SYSTEM;

/// Customer portal sign-in. The portal does not exist yet: a valid form
/// always ends in the "demo" rejection after the simulated delay.
#[component]
pub fn CustomerLoginPage() -> impl IntoView {
    let notifications = use_notifications();

    let username = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let errors = RwSignal::new(ValidationErrors::default());
    let (is_loading, set_is_loading) = signal(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if is_loading.get_untracked() {
            return;
        }
        errors.set(ValidationErrors::default());

        let rejection = match customer_login(&username.get_untracked(), &password.get_untracked()) {
            Err(AuthError::Validation(failed)) => {
                report_invalid(notifications, errors, failed);
                return;
            }
            Err(e) => Some(e),
            Ok(()) => None,
        };

        log::info!("customer login attempted: {}", username.get_untracked().trim());
        set_is_loading.set(true);
        spawn_local(async move {
            simulated_delay().await;
            if let Some(e) = rejection {
                notifications.notify(Notice::error("Login Failed", e.to_string()));
            }
            set_is_loading.set(false);
        });
    };

    view! {
        <PageFrame page_id="customer_login--system" category=PAGE_CAT_SYSTEM class="page--narrow">
            <div class="page__header page__header--centered">
                <span class="page__header-icon">{icon("users")}</span>
                <h1 class="page__title">"Customer Login"</h1>
                <p class="page__subtitle">
                    "Access your account to view inquiries, estimates, and invoices."
                </p>
            </div>
            <div class="page__content">
                <Card>
                    <form class="form" on:submit=on_submit>
                        <FormField label="Username" name="username" errors=errors>
                            <Input
                                value=username
                                placeholder="Enter your username"
                                disabled=Signal::derive(move || is_loading.get())
                            />
                        </FormField>
                        <FormField label="Password" name="password" errors=errors>
                            <Input
                                value=password
                                input_type=InputType::Password
                                placeholder="Enter your password"
                                disabled=Signal::derive(move || is_loading.get())
                            />
                        </FormField>
                        <div class="form__row form__row--end">
                            <A href="/forgot-password" attr:class="link">"Forgot password?"</A>
                        </div>
                        <Button
                            appearance=ButtonAppearance::Primary
                            button_type=ButtonType::Submit
                            block=true
                            disabled=Signal::derive(move || is_loading.get())
                        >
                            {move || if is_loading.get() { "Logging in..." } else { "Log In" }}
                        </Button>
                    </form>
                    <div class="form__footer">
                        <p>"Don't have an account? Submit an inquiry and we'll create one for you."</p>
                        <A href="/inquiry">
                            <Button appearance=ButtonAppearance::Secondary>"Submit an Inquiry"</Button>
                        </A>
                    </div>
                </Card>
            </div>
        </PageFrame>
    }
}
