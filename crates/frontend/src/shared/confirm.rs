//! Non-blocking confirmation prompts.
//!
//! Replaces `window.confirm()`: a requester queues a message plus an accept
//! callback, the dialog component renders it, and either choice clears the
//! pending entry. At most one confirmation is pending at a time; a new
//! request replaces an unanswered one.

use leptos::prelude::*;

#[derive(Clone)]
pub struct PendingConfirm {
    pub message: String,
    pub on_accept: Callback<()>,
}

/// Context service holding the pending confirmation, if any.
#[derive(Clone, Copy)]
pub struct ConfirmService {
    pending: RwSignal<Option<PendingConfirm>>,
}

impl ConfirmService {
    pub fn new() -> Self {
        Self {
            pending: RwSignal::new(None),
        }
    }

    /// Ask the user to confirm; `on_accept` runs only if they do.
    pub fn request(&self, message: impl Into<String>, on_accept: Callback<()>) {
        self.pending.set(Some(PendingConfirm {
            message: message.into(),
            on_accept,
        }));
    }

    pub fn accept(&self) {
        if let Some(pending) = self.pending.get_untracked() {
            self.pending.set(None);
            pending.on_accept.run(());
        }
    }

    pub fn decline(&self) {
        self.pending.set(None);
    }

    pub fn pending_message(&self) -> Option<String> {
        self.pending.with(|p| p.as_ref().map(|c| c.message.clone()))
    }
}

impl Default for ConfirmService {
    fn default() -> Self {
        Self::new()
    }
}

/// Renders the pending confirmation as a modal overlay. Mounted once.
#[component]
pub fn ConfirmDialog() -> impl IntoView {
    let confirm = use_context::<ConfirmService>().expect("ConfirmService not found in context");

    view! {
        {move || {
            confirm
                .pending_message()
                .map(|message| {
                    view! {
                        <div class="modal-overlay" on:click=move |_| confirm.decline()>
                            <div class="modal-content" on:click=|e| e.stop_propagation()>
                                <p class="modal-content__message">{message}</p>
                                <div class="modal-content__actions">
                                    <button
                                        class="button button--secondary"
                                        on:click=move |_| confirm.decline()
                                    >
                                        {"Cancel"}
                                    </button>
                                    <button
                                        class="button button--danger"
                                        on:click=move |_| confirm.accept()
                                    >
                                        {"Confirm"}
                                    </button>
                                </div>
                            </div>
                        </div>
                    }
                })
        }}
    }
}
