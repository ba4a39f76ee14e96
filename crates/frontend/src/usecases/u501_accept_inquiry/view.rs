use contracts::domain::a001_inquiry::Inquiry;
use contracts::shared::list::ListState;
use contracts::shared::notice::Notice;
use contracts::usecases::common::UseCaseMetadata;
use contracts::usecases::u501_accept_inquiry::{AcceptInquiry, ConfirmationDraft};
use leptos::prelude::*;
use thaw::*;

use crate::layout::notifications::use_notifications;
use crate::shared::icons::icon;

/// Диалог подтверждения: письмо клиенту можно отредактировать перед отправкой.
///
/// Open while `workflow` holds a draft. Closing it any other way than "Send
/// Email" cancels the draft.
#[component]
pub fn AcceptInquiryDialog(
    workflow: RwSignal<AcceptInquiry>,
    list: RwSignal<ListState<Inquiry>>,
) -> impl IntoView {
    let notifications = use_notifications();
    let open = RwSignal::new(false);
    let body = RwSignal::new(String::new());

    Effect::new(move |_| {
        let pending = workflow.with(AcceptInquiry::is_pending);
        if open.get_untracked() != pending {
            open.set(pending);
        }
    });
    Effect::new(move |_| {
        if !open.get() && workflow.with_untracked(AcceptInquiry::is_pending) {
            workflow.update(AcceptInquiry::cancel);
        }
    });
    // fresh text for every new draft
    Effect::new(move |_| {
        if let Some(text) = workflow.with(|w| w.draft().map(|d| d.body.clone())) {
            body.set(text);
        }
    });

    let draft = Memo::new(move |_| workflow.with(|w| w.draft().cloned()));
    let draft_field = move |f: fn(&ConfirmationDraft) -> String| {
        move || draft.with(|d| d.as_ref().map(f).unwrap_or_default())
    };

    let send = move |_| {
        let mut current = workflow.get_untracked();
        let text = body.get_untracked();
        let outcome = list.try_update(|l| current.edit_body(text).and_then(|()| current.send(l)));
        workflow.set(current);

        match outcome {
            Some(Ok(sent)) => {
                log::info!("{}: confirmation sent for inquiry {}", AcceptInquiry::full_name(), sent.email.inquiry_id);
                notifications.notify(sent.notice());
            }
            Some(Err(e)) => {
                log::warn!("confirmation not sent: {e}");
                notifications.notify(Notice::error("Email Not Sent", e.to_string()));
            }
            None => {}
        }
    };

    view! {
        <Dialog open=open>
            <DialogSurface class="dialog--wide">
                <DialogBody>
                    <DialogTitle>"Send Confirmation Email"</DialogTitle>
                    <DialogContent>
                        <p class="dialog__description">
                            {move || format!(
                                "Review and edit the email that will be sent to {}",
                                draft_field(|d| d.customer_name.clone())(),
                            )}
                        </p>
                        <div class="email-preview">
                            <div class="email-preview__row">
                                <span class="email-preview__label">"To:"</span>
                                <span>{draft_field(|d| d.to.clone())}</span>
                            </div>
                            <div class="email-preview__row">
                                <span class="email-preview__label">"Subject:"</span>
                                <span>{draft_field(|d| d.subject.clone())}</span>
                            </div>
                            <div class="email-preview__label">"Email Content:"</div>
                            <Textarea value=body resize=TextareaResize::Vertical attr:rows=12 />
                        </div>
                    </DialogContent>
                    <DialogActions>
                        <Button appearance=ButtonAppearance::Secondary on_click=move |_| open.set(false)>
                            "Cancel"
                        </Button>
                        <Button appearance=ButtonAppearance::Primary on_click=send>
                            {icon("mail")}
                            "Send Email"
                        </Button>
                    </DialogActions>
                </DialogBody>
            </DialogSurface>
        </Dialog>
    }
}
