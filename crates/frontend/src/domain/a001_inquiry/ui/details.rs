use contracts::domain::a001_inquiry::Inquiry;
use leptos::prelude::*;
use thaw::*;

use crate::shared::components::ui::badge::InquiryStatusBadge;
use crate::shared::date_utils::format_datetime;
use crate::usecases::u502_create_customer_account::view::CreateAccountConfirm;

/// Карточка заявки: контакты, услуга, описание.
///
/// New inquiries offer "Accept Inquiry"; reviewed ones offer the customer
/// account stub instead.
#[component]
pub fn InquiryDetailsDialog(
    open: RwSignal<bool>,
    #[prop(into)] inquiry: Signal<Option<Inquiry>>,
    on_accept: Callback<Inquiry>,
) -> impl IntoView {
    let confirm_open = RwSignal::new(false);

    view! {
        <Dialog open=open>
            <DialogSurface class="dialog--wide">
                <DialogBody>
                    <DialogTitle>"Inquiry Details"</DialogTitle>
                    <DialogContent>
                        {move || inquiry.get().map(|i| view! {
                            <p class="dialog__description">
                                {format!("Submitted on {}", format_datetime(&i.submitted_at))}
                            </p>
                            <div class="details-grid">
                                <div>
                                    <h3 class="details-grid__heading">"Customer Information"</h3>
                                    <p><span class="details-grid__label">"Name: "</span>{i.name.clone()}</p>
                                    <p><span class="details-grid__label">"Email: "</span>{i.email.clone()}</p>
                                    <p><span class="details-grid__label">"Phone: "</span>{i.phone.clone()}</p>
                                </div>
                                <div>
                                    <h3 class="details-grid__heading">"Service Details"</h3>
                                    <p><span class="details-grid__label">"Service: "</span>{i.service.clone()}</p>
                                    <p>
                                        <span class="details-grid__label">"Status: "</span>
                                        <InquiryStatusBadge status=i.status />
                                    </p>
                                </div>
                                <div class="details-grid__wide">
                                    <h3 class="details-grid__heading">"Description"</h3>
                                    <p class="details-grid__text">{i.description.clone()}</p>
                                </div>
                            </div>
                        })}
                    </DialogContent>
                    <DialogActions>
                        <Button appearance=ButtonAppearance::Secondary on_click=move |_| open.set(false)>
                            "Close"
                        </Button>
                        {move || inquiry.get().map(|i| {
                            if i.is_new() {
                                view! {
                                    <Button
                                        appearance=ButtonAppearance::Primary
                                        on_click=move |_| on_accept.run(i.clone())
                                    >
                                        "Accept Inquiry"
                                    </Button>
                                }
                                .into_any()
                            } else {
                                view! {
                                    <Button
                                        appearance=ButtonAppearance::Primary
                                        on_click=move |_| confirm_open.set(true)
                                    >
                                        "Create Customer Account"
                                    </Button>
                                }
                                .into_any()
                            }
                        })}
                    </DialogActions>
                </DialogBody>
            </DialogSurface>
        </Dialog>
        <CreateAccountConfirm open=confirm_open inquiry=inquiry />
    }
}
