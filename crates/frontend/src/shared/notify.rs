//! Queued, non-blocking toast notifications.
//!
//! Replaces browser `alert()` so that validation and request sequencing stay
//! decoupled from the rendering layer.

use gloo_timers::callback::Timeout;
use leptos::prelude::*;

const DISMISS_AFTER_MS: u32 = 4_000;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Success,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub id: u64,
    pub kind: NoticeKind,
    pub message: String,
}

/// Context service holding the toast queue.
#[derive(Clone, Copy)]
pub struct NotifyService {
    notices: RwSignal<Vec<Notice>>,
    next_id: StoredValue<u64>,
}

impl NotifyService {
    pub fn new() -> Self {
        Self {
            notices: RwSignal::new(Vec::new()),
            next_id: StoredValue::new(0),
        }
    }

    pub fn success(&self, message: impl Into<String>) {
        self.push(NoticeKind::Success, message.into());
    }

    pub fn error(&self, message: impl Into<String>) {
        self.push(NoticeKind::Error, message.into());
    }

    pub fn notices(&self) -> Signal<Vec<Notice>> {
        self.notices.into()
    }

    fn push(&self, kind: NoticeKind, message: String) {
        let id = self.next_id.get_value() + 1;
        self.next_id.set_value(id);
        self.notices.update(|list| {
            list.push(Notice { id, kind, message });
        });

        let notices = self.notices;
        Timeout::new(DISMISS_AFTER_MS, move || {
            notices.update(|list| list.retain(|notice| notice.id != id));
        })
        .forget();
    }
}

impl Default for NotifyService {
    fn default() -> Self {
        Self::new()
    }
}

/// Renders the queued notices. Mounted once, at the top of the app.
#[component]
pub fn Toaster() -> impl IntoView {
    let notify = use_context::<NotifyService>().expect("NotifyService not found in context");

    view! {
        <div class="toaster">
            {move || {
                notify
                    .notices()
                    .get()
                    .into_iter()
                    .map(|notice| {
                        let kind_class = match notice.kind {
                            NoticeKind::Success => "toast--success",
                            NoticeKind::Error => "toast--error",
                        };
                        view! {
                            <div class=format!("toast {}", kind_class)>{notice.message}</div>
                        }
                    })
                    .collect_view()
            }}
        </div>
    }
}
