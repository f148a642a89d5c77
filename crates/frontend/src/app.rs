use crate::routes::AppRoutes;
use crate::shared::confirm::{ConfirmDialog, ConfirmService};
use crate::shared::notify::{NotifyService, Toaster};
use leptos::prelude::*;

#[component]
pub fn App() -> impl IntoView {
    // Provide NotifyService so any form can queue a toast.
    provide_context(NotifyService::new());

    // Provide ConfirmService for non-blocking destructive-action prompts.
    provide_context(ConfirmService::new());

    view! {
        <Toaster />
        <ConfirmDialog />
        <AppRoutes />
    }
}
