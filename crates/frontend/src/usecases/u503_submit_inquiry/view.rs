use contracts::domain::a003_service_offering::service_titles;
use contracts::shared::validation::ValidationErrors;
use contracts::usecases::common::UseCaseMetadata;
use contracts::usecases::u503_submit_inquiry::{submitted_notice, InquiryForm, SubmitInquiry};
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

use crate::layout::notifications::use_notifications;
use crate::shared::config::simulated_delay;
use crate::shared::form::{report_invalid, FormField};
use crate::shared::icons::icon;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_USECASE;

/// Публичная форма заявки. Отправка имитируется и в админку не попадает.
#[component]
pub fn InquiryFormPage() -> impl IntoView {
    let notifications = use_notifications();

    let name = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let phone = RwSignal::new(String::new());
    let service = RwSignal::new(String::new());
    let description = RwSignal::new(String::new());
    let errors = RwSignal::new(ValidationErrors::default());
    let (is_submitting, set_is_submitting) = signal(false);

    let reset = move || {
        for field in [name, email, phone, service, description] {
            field.set(String::new());
        }
        errors.set(ValidationErrors::default());
    };

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if is_submitting.get_untracked() {
            return;
        }

        let form = InquiryForm {
            name: name.get_untracked(),
            email: email.get_untracked(),
            phone: phone.get_untracked(),
            service: service.get_untracked(),
            description: description.get_untracked(),
        };
        let submission = match form.validate() {
            Ok(submission) => submission,
            Err(failed) => {
                report_invalid(notifications, errors, failed);
                return;
            }
        };

        errors.set(ValidationErrors::default());
        set_is_submitting.set(true);
        spawn_local(async move {
            simulated_delay().await;
            log::info!(
                "{}: {} <{}> for {}",
                SubmitInquiry::full_name(),
                submission.name,
                submission.email,
                submission.service
            );
            notifications.notify(submitted_notice());
            reset();
            set_is_submitting.set(false);
        });
    };

    let disabled = Signal::derive(move || is_submitting.get());

    view! {
        <PageFrame page_id="u503_submit_inquiry--usecase" category=PAGE_CAT_USECASE class="page--narrow">
            <div class="page__header page__header--centered">
                <span class="page__header-icon">{icon("file-text")}</span>
                <h1 class="page__title">"Submit an Inquiry"</h1>
                <p class="page__subtitle">
                    "Tell us about your technical issue and we'll get back to you within 24 hours."
                </p>
            </div>
            <div class="page__content">
                <Card>
                    <form class="form" on:submit=on_submit>
                        <div class="form--grid">
                            <FormField label="Full Name" name="name" errors=errors>
                                <Input value=name placeholder="John Doe" disabled=disabled />
                            </FormField>
                            <FormField label="Email" name="email" errors=errors>
                                <Input
                                    value=email
                                    input_type=InputType::Email
                                    placeholder="you@example.com"
                                    disabled=disabled
                                />
                            </FormField>
                            <FormField label="Phone" name="phone" errors=errors>
                                <Input value=phone placeholder="555-123-4567" disabled=disabled />
                            </FormField>
                            <FormField label="Service Needed" name="service" errors=errors>
                                <Select value=service>
                                    <option value="">"Select a service"</option>
                                    {service_titles()
                                        .into_iter()
                                        .map(|title| view! { <option value=title>{title}</option> })
                                        .collect_view()}
                                </Select>
                            </FormField>
                        </div>
                        <FormField label="Describe Your Issue" name="description" errors=errors>
                            <Textarea
                                value=description
                                placeholder="Please describe the problem you're experiencing in as much detail as possible..."
                                resize=TextareaResize::Vertical
                                attr:rows=6
                                disabled=disabled
                            />
                        </FormField>
                        <Button
                            appearance=ButtonAppearance::Primary
                            button_type=ButtonType::Submit
                            block=true
                            disabled=disabled
                        >
                            {move || if is_submitting.get() { "Submitting..." } else { "Submit Inquiry" }}
                        </Button>
                    </form>
                </Card>
            </div>
        </PageFrame>
    }
}
