//! Transient toast notifications.
//!
//! A [`NotificationCenter`] signal is provided by [`Toaster`]; anything below it
//! calls [`notify`] with a [`Notification`]. Entries disappear on their own after
//! [`DISMISS_AFTER`] or when the user closes them.

use std::time::Duration;

use dioxus::dioxus_core::spawn_forever;
use dioxus::prelude::*;

use crate::Icon;
use crate::icons::{FaCircleCheck, FaCircleExclamation, FaXmark};

const NOTIFICATIONS_CSS: Asset = asset!("/src/notifications.css");

pub const DISMISS_AFTER: Duration = Duration::from_secs(4);

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum NotificationLevel {
    Success,
    Error,
}

/// A user-visible outcome of an operation.
#[derive(Clone, Debug, PartialEq)]
pub struct Notification {
    pub level: NotificationLevel,
    pub message: String,
}

impl Notification {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            level: NotificationLevel::Success,
            message: message.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            level: NotificationLevel::Error,
            message: message.into(),
        }
    }

    pub fn is_error(&self) -> bool {
        self.level == NotificationLevel::Error
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct ToastEntry {
    pub id: u64,
    pub notification: Notification,
}

#[derive(Clone, Debug, Default)]
pub struct NotificationCenter {
    pub entries: Vec<ToastEntry>,
    next_id: u64,
}

impl NotificationCenter {
    /// Queue a notification, returning its id.
    pub fn push(&mut self, notification: Notification) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        self.entries.push(ToastEntry { id, notification });
        id
    }

    pub fn dismiss(&mut self, id: u64) {
        self.entries.retain(|e| e.id != id);
    }
}

pub fn use_notifications() -> Signal<NotificationCenter> {
    use_context::<Signal<NotificationCenter>>()
}

/// Show `notification` and schedule its removal.
///
/// The timer runs in the root scope, so the entry still expires when the
/// component that raised it unmounts first.
pub fn notify(center: &mut Signal<NotificationCenter>, notification: Notification) {
    let id = center.write().push(notification);
    let mut center = *center;
    spawn_forever(expire_after(DISMISS_AFTER, move || {
        // the Toaster may be gone by now
        if let Ok(mut center) = center.try_write() {
            center.dismiss(id);
        }
    }));
}

async fn expire_after(delay: Duration, dismiss: impl FnOnce()) {
    sleep(delay).await;
    dismiss();
}

#[cfg(target_arch = "wasm32")]
async fn sleep(duration: Duration) {
    gloo_timers::future::sleep(duration).await;
}

#[cfg(not(target_arch = "wasm32"))]
async fn sleep(duration: Duration) {
    tokio::time::sleep(duration).await;
}

/// Provides the notification center and renders its entries on top of `children`.
#[component]
pub fn Toaster(children: Element) -> Element {
    let mut center = use_context_provider(|| Signal::new(NotificationCenter::default()));
    let entries = center().entries.clone();

    rsx! {
        document::Stylesheet { href: NOTIFICATIONS_CSS }
        {children}
        div {
            class: "toaster",
            for entry in entries {
                div {
                    key: "{entry.id}",
                    class: if entry.notification.is_error() { "toast toast-error" } else { "toast toast-success" },
                    role: "status",
                    if entry.notification.is_error() {
                        Icon { icon: FaCircleExclamation, width: 14, height: 14 }
                    } else {
                        Icon { icon: FaCircleCheck, width: 14, height: 14 }
                    }
                    span { class: "toast-message", "{entry.notification.message}" }
                    button {
                        class: "toast-close",
                        title: "Dismiss",
                        onclick: move |_| center.write().dismiss(entry.id),
                        Icon { icon: FaXmark, width: 12, height: 12 }
                    }
                }
            }
        }
    }
}
