use serde::Serialize;

/// Услуга из публичного каталога
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ServiceOffering {
    /// Anchor id on the services page, e.g. `network-setup`.
    pub slug: &'static str,
    pub title: &'static str,
    /// Card text on the home and services pages.
    pub summary: &'static str,
    /// Paragraph in the "Service Details" section.
    pub overview: &'static str,
    pub full_description: &'static str,
    pub details: &'static [&'static str],
    /// Icon name understood by the frontend icon set.
    pub icon: &'static str,
}

impl ServiceOffering {
    pub fn anchor_href(&self) -> String {
        format!("/services#{}", self.slug)
    }
}
