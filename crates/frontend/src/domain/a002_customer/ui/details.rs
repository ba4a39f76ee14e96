use contracts::domain::a002_customer::Customer;
use leptos::prelude::*;
use leptos_router::components::A;
use thaw::*;

use crate::shared::components::ui::badge::CustomerStatusBadge;
use crate::shared::date_utils::format_date;
use crate::shared::icons::icon;

/// Inquiry list searched by the customer's email.
pub fn inquiries_href(customer: &Customer) -> String {
    format!("/admin/inquiries?search={}", customer.email)
}

#[component]
pub fn CustomerDetailsDialog(
    open: RwSignal<bool>,
    #[prop(into)] customer: Signal<Option<Customer>>,
) -> impl IntoView {
    view! {
        <Dialog open=open>
            <DialogSurface class="dialog--wide">
                <DialogBody>
                    <DialogTitle>"Customer Details"</DialogTitle>
                    <DialogContent>
                        {move || customer.get().map(|c| view! {
                            <p class="dialog__description">
                                {format!("Account created on {}", format_date(&c.created_at))}
                            </p>
                            <div class="details-grid">
                                <div>
                                    <h3 class="details-grid__heading">"Personal Information"</h3>
                                    <p><span class="details-grid__label">"Name: "</span>{c.name.clone()}</p>
                                    <p><span class="details-grid__label">"Email: "</span>{c.email.clone()}</p>
                                    <p><span class="details-grid__label">"Phone: "</span>{c.phone.clone()}</p>
                                    <p><span class="details-grid__label">"Address: "</span>{c.address.clone()}</p>
                                </div>
                                <div>
                                    <h3 class="details-grid__heading">"Account Information"</h3>
                                    <p><span class="details-grid__label">"Username: "</span>{c.username.clone()}</p>
                                    <p>
                                        <span class="details-grid__label">"Status: "</span>
                                        <CustomerStatusBadge status=c.status />
                                    </p>
                                    <p><span class="details-grid__label">"Total Inquiries: "</span>{c.inquiry_count}</p>
                                    <p><span class="details-grid__label">"Completed Jobs: "</span>{c.jobs_completed}</p>
                                </div>
                            </div>
                        })}
                    </DialogContent>
                    <DialogActions>
                        <Button appearance=ButtonAppearance::Secondary on_click=move |_| open.set(false)>
                            "Close"
                        </Button>
                        {move || customer.get().map(|c| view! {
                            <a href=format!("mailto:{}", c.email)>
                                <Button appearance=ButtonAppearance::Primary>
                                    {icon("mail")}
                                    "Send Message"
                                </Button>
                            </a>
                            <A href=inquiries_href(&c)>
                                <Button appearance=ButtonAppearance::Secondary>
                                    {icon("file-text")}
                                    "View Inquiries"
                                </Button>
                            </A>
                        })}
                    </DialogActions>
                </DialogBody>
            </DialogSurface>
        </Dialog>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::domain::a002_customer::seed_customers;

    #[test]
    fn test_inquiries_href_searches_by_email() {
        let customer = seed_customers().remove(1);
        assert_eq!(inquiries_href(&customer), "/admin/inquiries?search=sarah.j@example.com");
    }
}
