use contracts::domain::a001_inquiry::InquiryStatus;
use contracts::domain::a002_customer::CustomerStatus;
use leptos::prelude::*;

/// Badge component with different variants
#[component]
pub fn Badge(
    /// Badge variant: "primary", "success", "warning", "error", "neutral" (default)
    #[prop(optional, into)]
    variant: MaybeProp<String>,
    /// Badge content
    children: Children,
    /// Additional CSS classes
    #[prop(optional, into)]
    class: MaybeProp<String>,
) -> impl IntoView {
    let variant_class = move || match variant.get().as_deref().unwrap_or("neutral") {
        "primary" => "badge--primary",
        "success" => "badge--success",
        "warning" => "badge--warning",
        "error" => "badge--error",
        _ => "badge--neutral",
    };

    let additional_class = move || class.get().unwrap_or_default();

    view! {
        <span class=move || format!("badge {} {}", variant_class(), additional_class())>
            {children()}
        </span>
    }
}

pub fn inquiry_status_variant(status: InquiryStatus) -> &'static str {
    match status {
        InquiryStatus::New => "primary",
        InquiryStatus::InProgress => "warning",
        InquiryStatus::Accepted => "success",
        InquiryStatus::Completed => "neutral",
    }
}

pub fn customer_status_variant(status: CustomerStatus) -> &'static str {
    match status {
        CustomerStatus::Active => "success",
        CustomerStatus::Inactive => "neutral",
    }
}

/// Status pill of an inquiry row
#[component]
pub fn InquiryStatusBadge(status: InquiryStatus) -> impl IntoView {
    view! {
        <Badge variant=inquiry_status_variant(status).to_string()>{status.label()}</Badge>
    }
}

/// Status pill of a customer row
#[component]
pub fn CustomerStatusBadge(status: CustomerStatus) -> impl IntoView {
    view! {
        <Badge variant=customer_status_variant(status).to_string()>{status.label()}</Badge>
    }
}
