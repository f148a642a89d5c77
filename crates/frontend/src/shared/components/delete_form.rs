//! Delete form: primary key only, confirmation before the request.

use contracts::draft::delete_key;
use contracts::registry::TableConfig;
use leptos::prelude::*;

use crate::shared::api;
use crate::shared::components::ui::FieldInput;
use crate::shared::confirm::ConfirmService;
use crate::shared::notify::NotifyService;

#[component]
pub fn DeleteForm(
    /// Table being edited
    config: &'static TableConfig,
    /// Refresh hook, fired after a successful delete
    on_submitted: Callback<()>,
) -> impl IntoView {
    let notify = use_context::<NotifyService>().expect("NotifyService not found in context");
    let confirm = use_context::<ConfirmService>().expect("ConfirmService not found in context");
    let (id_input, set_id_input) = signal(String::new());
    let (pending, set_pending) = signal(false);

    let submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if pending.get_untracked() {
            return;
        }
        // Empty input is rejected before the confirmation is even shown.
        let pk_value = match delete_key(config.primary_key_label, &id_input.get_untracked()) {
            Ok(value) => value,
            Err(e) => {
                notify.error(e.to_string());
                return;
            }
        };

        let message = format!(
            "Are you sure you want to delete the record with {} \"{}\"? This cannot be undone.",
            config.primary_key_label, pk_value,
        );
        confirm.request(
            message,
            Callback::new(move |_| {
                let pk_value = pk_value.clone();
                set_pending.set(true);
                wasm_bindgen_futures::spawn_local(async move {
                    match api::remove(config.key, &pk_value).await {
                        Ok(()) => {
                            notify.success("Record deleted successfully");
                            set_id_input.set(String::new());
                            on_submitted.run(());
                        }
                        Err(detail) => notify.error(api::failure_message("Delete", &detail)),
                    }
                    set_pending.set(false);
                });
            }),
        );
    };

    view! {
        <div class="form-panel">
            <h3 class="form-panel__title">{"Delete Record"}</h3>
            <p class="form-panel__warning">{"Warning: this action cannot be undone."}</p>
            <form class="form" on:submit=submit>
                <FieldInput
                    label=config.primary_key_label
                    input_type="text"
                    value=id_input
                    on_input=Callback::new(move |value| set_id_input.set(value))
                    required=true
                />
                <button
                    class="button button--danger form__submit"
                    type="submit"
                    disabled=move || pending.get()
                >
                    {move || if pending.get() { "Deleting..." } else { "Delete" }}
                </button>
            </form>
        </div>
    }
}
