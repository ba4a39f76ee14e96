use serde::Serialize;

use crate::domain::a001_inquiry::Inquiry;

/// One stat card of the dashboard
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StatCard {
    pub title: &'static str,
    pub value: usize,
    pub description: &'static str,
    /// Icon name for the frontend icon set
    pub icon: &'static str,
    /// Drill-down target, e.g. "/admin/inquiries?status=new"
    pub link: String,
}

/// Scheduled work derived from accepted and in-progress inquiries
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UpcomingTask {
    pub title: String,
    /// Customer address when the inquiry email matches a customer account
    pub address: Option<String>,
    pub status_label: &'static str,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AdminOverview {
    pub stats: Vec<StatCard>,
    /// Most recently submitted first
    pub recent_inquiries: Vec<Inquiry>,
    pub upcoming_tasks: Vec<UpcomingTask>,
}
