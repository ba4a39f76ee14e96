use contracts::shared::notice::Notice;
use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::shared::config::TOAST_TIMEOUT_MS;
use crate::shared::icons::icon;

#[derive(Clone, Debug, PartialEq)]
struct Toast {
    id: u64,
    notice: Notice,
}

/// Сервис всплывающих уведомлений (toasts)
///
/// Every notice closes itself after `TOAST_TIMEOUT_MS`, or earlier by click.
#[derive(Clone, Copy)]
pub struct NotificationService {
    toasts: RwSignal<Vec<Toast>>,
    next_id: StoredValue<u64>,
}

impl NotificationService {
    pub fn new() -> Self {
        Self {
            toasts: RwSignal::new(Vec::new()),
            next_id: StoredValue::new(0),
        }
    }

    /// Показать уведомление
    pub fn notify(&self, notice: Notice) {
        let id = self.next_id.get_value();
        self.next_id.set_value(id + 1);

        if notice.is_error() {
            log::warn!("{}: {}", notice.title, notice.description);
        } else {
            log::debug!("{}: {}", notice.title, notice.description);
        }
        self.toasts.update(|toasts| toasts.push(Toast { id, notice }));

        let service = *self;
        spawn_local(async move {
            TimeoutFuture::new(TOAST_TIMEOUT_MS).await;
            service.dismiss(id);
        });
    }

    /// Закрыть уведомление
    pub fn dismiss(&self, id: u64) {
        self.toasts.update(|toasts| toasts.retain(|t| t.id != id));
    }
}

impl Default for NotificationService {
    fn default() -> Self {
        Self::new()
    }
}

pub fn use_notifications() -> NotificationService {
    expect_context::<NotificationService>()
}

/// Стек уведомлений в правом нижнем углу
#[component]
pub fn Toaster() -> impl IntoView {
    let service = use_notifications();

    view! {
        <div class="toaster" role="status" aria-live="polite">
            <For
                each=move || service.toasts.get()
                key=|toast| toast.id
                children=move |toast| {
                    let id = toast.id;
                    let class = if toast.notice.is_error() { "toast toast--error" } else { "toast" };
                    view! {
                        <div class=class>
                            <div class="toast__body">
                                <div class="toast__title">{toast.notice.title}</div>
                                <div class="toast__description">{toast.notice.description}</div>
                            </div>
                            <button class="toast__close" title="Close" on:click=move |_| service.dismiss(id)>
                                {icon("x")}
                            </button>
                        </div>
                    }
                }
            />
        </div>
    }
}
