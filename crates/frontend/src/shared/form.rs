//! Form rows for the public and admin forms.

use contracts::shared::notice::Notice;
use contracts::shared::validation::ValidationErrors;
use leptos::prelude::*;
use thaw::*;

use crate::layout::notifications::NotificationService;

/// Label, control and the message of the field's failed check.
#[component]
pub fn FormField(
    label: &'static str,
    /// Field name as used in `ValidationError::field`
    name: &'static str,
    errors: RwSignal<ValidationErrors>,
    children: Children,
) -> impl IntoView {
    view! {
        <div class="form__group">
            <Label>{label}</Label>
            {children()}
            {move || {
                errors.with(|e| {
                    e.for_field(name)
                        .map(|message| view! { <p class="form__error">{message.to_string()}</p> })
                })
            }}
        </div>
    }
}

/// Marks the failed fields and raises a toast with the first message.
pub fn report_invalid(
    notifications: NotificationService,
    errors: RwSignal<ValidationErrors>,
    failed: ValidationErrors,
) {
    notifications.notify(Notice::error("Please check the form", failed.to_string()));
    errors.set(failed);
}
