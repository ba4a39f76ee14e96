use contracts::domain::a001_inquiry::Inquiry;
use contracts::shared::notice::Notice;
use contracts::usecases::common::UseCaseMetadata;
use contracts::usecases::u502_create_customer_account::{
    confirmation_prompt, create_customer_account, CreateCustomerAccount,
};
use leptos::prelude::*;
use thaw::*;

use crate::layout::notifications::use_notifications;

/// "Create Customer Account" confirmation for a reviewed inquiry.
#[component]
pub fn CreateAccountConfirm(
    open: RwSignal<bool>,
    #[prop(into)] inquiry: Signal<Option<Inquiry>>,
) -> impl IntoView {
    let notifications = use_notifications();

    let create = move |_| {
        open.set(false);
        let Some(target) = inquiry.get_untracked() else {
            return;
        };
        match create_customer_account(&target) {
            Ok(created) => {
                log::info!(
                    "{}: account requested for inquiry {}",
                    CreateCustomerAccount::full_name(),
                    created.inquiry_id
                );
                notifications.notify(created.notice());
            }
            Err(e) => notifications.notify(Notice::error("Account Not Created", e.to_string())),
        }
    };

    view! {
        <Dialog open=open>
            <DialogSurface>
                <DialogBody>
                    <DialogTitle>"Create Customer Account"</DialogTitle>
                    <DialogContent>
                        {move || inquiry.with(|i| i.as_ref().map(confirmation_prompt))}
                    </DialogContent>
                    <DialogActions>
                        <Button appearance=ButtonAppearance::Secondary on_click=move |_| open.set(false)>
                            "Cancel"
                        </Button>
                        <Button appearance=ButtonAppearance::Primary on_click=create>
                            "Create Account"
                        </Button>
                    </DialogActions>
                </DialogBody>
            </DialogSurface>
        </Dialog>
    }
}
