//! Update form: primary key selects the record, non-empty fields become the
//! change set. The primary key travels in the URL path, never in the body.

use contracts::draft::{build_update, empty_draft, Draft};
use contracts::registry::{FieldType, TableConfig};
use leptos::prelude::*;

use crate::shared::api;
use crate::shared::components::ui::{FieldInput, FieldSelect};
use crate::shared::notify::NotifyService;

#[component]
pub fn UpdateForm(
    /// Table being edited
    config: &'static TableConfig,
    /// Refresh hook, fired after a successful update
    on_submitted: Callback<()>,
) -> impl IntoView {
    let notify = use_context::<NotifyService>().expect("NotifyService not found in context");
    let draft: RwSignal<Draft> = RwSignal::new(empty_draft(config));
    let (pending, set_pending) = signal(false);

    let submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if pending.get_untracked() {
            return;
        }
        // Missing primary key is a local failure; no network call is made.
        let (pk_value, body) = match draft.with_untracked(|d| build_update(config, d)) {
            Ok(parts) => parts,
            Err(e) => {
                notify.error(e.to_string());
                return;
            }
        };
        set_pending.set(true);
        wasm_bindgen_futures::spawn_local(async move {
            match api::update(config.key, &pk_value, body).await {
                Ok(()) => {
                    notify.success("Record updated successfully");
                    draft.set(empty_draft(config));
                    on_submitted.run(());
                }
                Err(detail) => notify.error(api::failure_message("Update", &detail)),
            }
            set_pending.set(false);
        });
    };

    view! {
        <div class="form-panel">
            <h3 class="form-panel__title">{"Update Record"}</h3>
            <p class="form-panel__hint">
                {format!(
                    "Enter the {} and any fields you want to change.",
                    config.primary_key_label,
                )}
            </p>
            <form class="form" on:submit=submit>
                {config
                    .fields
                    .iter()
                    .map(|field| {
                        // Only the primary key is mandatory here.
                        let is_pk = field.name == config.primary_key;
                        let value = Signal::derive(move || {
                            draft.with(|d| d.get(field.name).cloned().unwrap_or_default())
                        });
                        let on_change = Callback::new(move |new_value: String| {
                            draft.update(|d| {
                                d.insert(field.name.to_string(), new_value);
                            });
                        });
                        if field.field_type == FieldType::Select {
                            view! {
                                <FieldSelect
                                    label=field.label
                                    options=field.options
                                    value=value
                                    on_change=on_change
                                    required=is_pk
                                />
                            }
                                .into_any()
                        } else {
                            view! {
                                <FieldInput
                                    label=field.label
                                    input_type=field.field_type.as_input_type()
                                    value=value
                                    on_input=on_change
                                    required=is_pk
                                />
                            }
                                .into_any()
                        }
                    })
                    .collect_view()}
                <button
                    class="button button--primary form__submit"
                    type="submit"
                    disabled=move || pending.get()
                >
                    {move || if pending.get() { "Updating..." } else { "Update" }}
                </button>
            </form>
        </div>
    }
}
