use contracts::system::settings::{
    settings_saved, Channel, CompanyProfile, EmailTemplates, NotificationKind,
    NotificationSettings, ACCOUNT_CREATION_PLACEHOLDERS, INQUIRY_CONFIRMATION_PLACEHOLDERS,
};
use leptos::prelude::*;
use thaw::*;

use crate::layout::notifications::use_notifications;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_SYSTEM;

// ============================================================================
// Company profile tab
// ============================================================================

#[component]
fn CompanyProfileTab(profile: RwSignal<CompanyProfile>, on_save: Callback<()>) -> impl IntoView {
    let rows = CompanyProfile::FIELDS
        .iter()
        .map(|&(name, label)| {
            let initial = profile.with_untracked(|p| p.field(name).unwrap_or_default().to_string());
            let value = RwSignal::new(initial);
            Effect::new(move |_| {
                let v = value.get();
                profile.update(|p| {
                    if let Err(e) = p.set_field(name, v) {
                        log::error!("{e}");
                    }
                });
            });
            view! {
                <div class="form__group">
                    <Label>{label}</Label>
                    <Input value=value />
                </div>
            }
        })
        .collect_view();

    view! {
        <Card>
            <div class="card__header">
                <h2 class="card__title">"Company Profile"</h2>
                <p class="card__description">"Manage your company information and contact details"</p>
            </div>
            <div class="form form--grid">{rows}</div>
            <div class="card__footer">
                <Button appearance=ButtonAppearance::Primary on_click=move |_| on_save.run(())>
                    "Save Changes"
                </Button>
            </div>
        </Card>
    }
}

// ============================================================================
// Email templates tab
// ============================================================================

#[component]
fn EmailTemplatesTab(templates: RwSignal<EmailTemplates>, on_save: Callback<()>) -> impl IntoView {
    let inquiry_confirmation =
        RwSignal::new(templates.with_untracked(|t| t.inquiry_confirmation.clone()));
    let account_creation = RwSignal::new(templates.with_untracked(|t| t.account_creation.clone()));

    Effect::new(move |_| {
        let text = inquiry_confirmation.get();
        templates.update(|t| t.inquiry_confirmation = text);
    });
    Effect::new(move |_| {
        let text = account_creation.get();
        templates.update(|t| t.account_creation = text);
    });

    view! {
        <Card>
            <div class="card__header">
                <h2 class="card__title">"Email Templates"</h2>
                <p class="card__description">"Customize email templates sent to customers"</p>
            </div>
            <div class="form">
                <div class="form__group">
                    <Label>"Inquiry Confirmation Email"</Label>
                    <Textarea value=inquiry_confirmation resize=TextareaResize::Vertical attr:rows=10 />
                    <p class="form__hint">
                        {format!("Available variables: {}", INQUIRY_CONFIRMATION_PLACEHOLDERS.join(", "))}
                    </p>
                </div>
                <div class="form__group">
                    <Label>"Account Creation Email"</Label>
                    <Textarea value=account_creation resize=TextareaResize::Vertical attr:rows=10 />
                    <p class="form__hint">
                        {format!("Available variables: {}", ACCOUNT_CREATION_PLACEHOLDERS.join(", "))}
                    </p>
                </div>
            </div>
            <div class="card__footer">
                <Button appearance=ButtonAppearance::Primary on_click=move |_| on_save.run(())>
                    "Save Templates"
                </Button>
            </div>
        </Card>
    }
}

// ============================================================================
// Notifications tab
// ============================================================================

fn notification_rows(settings: RwSignal<NotificationSettings>, channel: Channel) -> impl IntoView {
    NotificationKind::ALL
        .into_iter()
        .filter(|kind| kind.channel() == channel)
        .map(|kind| {
            let checked = RwSignal::new(settings.with_untracked(|s| s.is_enabled(kind)));
            Effect::new(move |_| {
                let enabled = checked.get();
                settings.update(|s| s.set(kind, enabled));
            });
            view! {
                <div class="settings__toggle">
                    <div>
                        <div class="settings__toggle-label">{kind.label()}</div>
                        <div class="settings__toggle-hint">{kind.hint()}</div>
                    </div>
                    <Switch checked=checked />
                </div>
            }
        })
        .collect_view()
}

#[component]
fn NotificationsTab(settings: RwSignal<NotificationSettings>, on_save: Callback<()>) -> impl IntoView {
    view! {
        <Card>
            <div class="card__header">
                <h2 class="card__title">"Notification Settings"</h2>
                <p class="card__description">"Configure when and how you receive notifications"</p>
            </div>
            <div class="settings__group">
                <h3>"Email Notifications"</h3>
                {notification_rows(settings, Channel::Email)}
            </div>
            <div class="settings__group">
                <h3>"SMS Notifications"</h3>
                {notification_rows(settings, Channel::Sms)}
            </div>
            <div class="card__footer">
                <Button appearance=ButtonAppearance::Primary on_click=move |_| on_save.run(())>
                    "Save Notification Settings"
                </Button>
            </div>
        </Card>
    }
}

// ============================================================================
// Page
// ============================================================================

/// Настройки админки; значения живут только в памяти страницы
#[component]
pub fn SettingsPage() -> impl IntoView {
    let notifications = use_notifications();
    let selected_tab = RwSignal::new("profile".to_string());

    let profile = RwSignal::new(CompanyProfile::default());
    let templates = RwSignal::new(EmailTemplates::default());
    let notification_settings = RwSignal::new(NotificationSettings::default());

    let on_save = Callback::new(move |_: ()| {
        log::info!(
            "settings saved: tab={} profile={:?} notifications={:?}",
            selected_tab.get_untracked(),
            profile.get_untracked(),
            notification_settings.get_untracked()
        );
        notifications.notify(settings_saved());
    });

    view! {
        <PageFrame page_id="settings--system" category=PAGE_CAT_SYSTEM>
            <div class="page__header">
                <h1 class="page__title">"Settings"</h1>
            </div>
            <div class="page__content">
                <TabList selected_value=selected_tab>
                    <Tab value="profile">"Company Profile"</Tab>
                    <Tab value="email">"Email Templates"</Tab>
                    <Tab value="notifications">"Notifications"</Tab>
                </TabList>
                <div class="settings__panel">
                    {move || match selected_tab.get().as_str() {
                        "email" => view! { <EmailTemplatesTab templates=templates on_save=on_save /> }.into_any(),
                        "notifications" => view! { <NotificationsTab settings=notification_settings on_save=on_save /> }.into_any(),
                        _ => view! { <CompanyProfileTab profile=profile on_save=on_save /> }.into_any(),
                    }}
                </div>
            </div>
        </PageFrame>
    }
}
