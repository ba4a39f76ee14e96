use contracts::dashboards::d400_admin_overview::{admin_overview, AdminOverview, UpcomingTask};
use contracts::domain::a001_inquiry::{seed_inquiries, Inquiry};
use contracts::domain::a002_customer::seed_customers;
use leptos::prelude::*;
use leptos_router::components::A;
use thaw::*;

use crate::shared::components::stat_card::StatCard;
use crate::shared::components::ui::badge::{Badge, InquiryStatusBadge};
use crate::shared::date_utils::format_datetime;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_DASHBOARD;

// ============================================================================
// Panels
// ============================================================================

#[component]
fn RecentInquiryRow(inquiry: Inquiry) -> impl IntoView {
    let href = format!("/admin/inquiries?search={}", inquiry.email);
    view! {
        <div class="feed__item">
            <div class="feed__row">
                <p class="feed__title">{inquiry.name.clone()}</p>
                <span class="feed__meta">{format_datetime(&inquiry.submitted_at)}</span>
            </div>
            <p class="feed__text">{inquiry.service.clone()}</p>
            <div class="feed__row">
                <InquiryStatusBadge status=inquiry.status />
                <A href=href attr:class="link">"View Details"</A>
            </div>
        </div>
    }
}

#[component]
fn UpcomingTaskRow(task: UpcomingTask) -> impl IntoView {
    let variant = if task.status_label == "Confirmed" { "success" } else { "warning" };
    view! {
        <div class="feed__item">
            <p class="feed__title">{task.title}</p>
            {task.address.map(|a| view! { <p class="feed__text">{a}</p> })}
            <Badge variant=variant.to_string()>{task.status_label}</Badge>
        </div>
    }
}

// ============================================================================
// Dashboard
// ============================================================================

/// Сводка админки по демо-данным
#[component]
pub fn AdminDashboard() -> impl IntoView {
    let AdminOverview {
        stats,
        recent_inquiries,
        upcoming_tasks,
    } = admin_overview(&seed_inquiries(), &seed_customers());
    log::debug!(
        "dashboard: {} recent inquiries, {} upcoming tasks",
        recent_inquiries.len(),
        upcoming_tasks.len()
    );

    let tasks_view = if upcoming_tasks.is_empty() {
        view! { <p class="feed__empty">"Nothing scheduled"</p> }.into_any()
    } else {
        upcoming_tasks
            .into_iter()
            .map(|task| view! { <UpcomingTaskRow task=task /> })
            .collect_view()
            .into_any()
    };

    view! {
        <PageFrame page_id="d400_admin_overview--dashboard" category=PAGE_CAT_DASHBOARD>
            <div class="page__header">
                <h1 class="page__title">"Admin Dashboard"</h1>
                <A href="/admin/inquiries">
                    <Button appearance=ButtonAppearance::Secondary>"View All Inquiries"</Button>
                </A>
            </div>

            <div class="page__content">
                <div class="stat-grid">
                    {stats
                        .into_iter()
                        .map(|s| view! {
                            <StatCard
                                title=s.title
                                icon_name=s.icon
                                value=s.value
                                description=s.description
                                link=s.link
                            />
                        })
                        .collect_view()}
                </div>

                <div class="panel-grid">
                    <Card>
                        <div class="card__header">
                            <h2 class="card__title">"Recent Inquiries"</h2>
                            <p class="card__description">"Latest customer service requests"</p>
                        </div>
                        <div class="feed">
                            {recent_inquiries
                                .into_iter()
                                .map(|inquiry| view! { <RecentInquiryRow inquiry=inquiry /> })
                                .collect_view()}
                        </div>
                        <div class="card__footer">
                            <A href="/admin/inquiries">
                                <Button appearance=ButtonAppearance::Secondary block=true>
                                    "View All Inquiries"
                                </Button>
                            </A>
                        </div>
                    </Card>

                    <Card>
                        <div class="card__header">
                            <h2 class="card__title">"Upcoming Tasks"</h2>
                            <p class="card__description">"Scheduled appointments and follow-ups"</p>
                        </div>
                        <div class="feed">{tasks_view}</div>
                    </Card>
                </div>
            </div>
        </PageFrame>
    }
}
