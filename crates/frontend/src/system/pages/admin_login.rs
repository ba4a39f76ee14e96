use contracts::shared::notice::Notice;
use contracts::shared::validation::ValidationErrors;
use contracts::system::auth::AuthError;
use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::hooks::use_navigate;
use thaw::*;

use crate::layout::notifications::use_notifications;
use crate::shared::form::{report_invalid, FormField};
use crate::shared::icons::icon;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_SYSTEM;
use crate::system::auth::context::use_auth;

#[component]
pub fn AdminLoginPage() -> impl IntoView {
    let auth = use_auth();
    let notifications = use_notifications();
    let navigate = use_navigate();

    let username = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let errors = RwSignal::new(ValidationErrors::default());
    let (is_loading, set_is_loading) = signal(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if is_loading.get_untracked() {
            return;
        }

        let navigate = navigate.clone();
        errors.set(ValidationErrors::default());
        set_is_loading.set(true);

        spawn_local(async move {
            match auth
                .login(username.get_untracked(), password.get_untracked())
                .await
            {
                Ok(()) => {
                    notifications.notify(Notice::success(
                        "Login Successful",
                        "Welcome to the admin dashboard.",
                    ));
                    navigate("/admin/dashboard", Default::default());
                }
                Err(AuthError::Validation(failed)) => report_invalid(notifications, errors, failed),
                Err(e) => notifications.notify(Notice::error("Login Failed", e.to_string())),
            }
            set_is_loading.set(false);
        });
    };

    view! {
        <PageFrame page_id="admin_login--system" category=PAGE_CAT_SYSTEM class="page--narrow">
            <div class="page__header page__header--centered">
                <span class="page__header-icon">{icon("key")}</span>
                <h1 class="page__title">"Admin Login"</h1>
                <p class="page__subtitle">
                    "Access the admin dashboard to manage inquiries and customers."
                </p>
            </div>
            <div class="page__content">
                <Card>
                    <form class="form" on:submit=on_submit>
                        <FormField label="Username" name="username" errors=errors>
                            <Input
                                value=username
                                placeholder="Enter admin username"
                                disabled=Signal::derive(move || is_loading.get())
                            />
                        </FormField>
                        <FormField label="Password" name="password" errors=errors>
                            <Input
                                value=password
                                input_type=InputType::Password
                                placeholder="Enter password"
                                disabled=Signal::derive(move || is_loading.get())
                            />
                        </FormField>
                        <Button
                            appearance=ButtonAppearance::Primary
                            button_type=ButtonType::Submit
                            block=true
                            disabled=Signal::derive(move || is_loading.get())
                        >
                            {move || if is_loading.get() { "Logging in..." } else { "Log In" }}
                        </Button>
                        <p class="form__hint">
                            "Demo credentials: username \"admin\" / password \"admin\""
                        </p>
                    </form>
                </Card>
            </div>
        </PageFrame>
    }
}
