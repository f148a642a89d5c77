//! Insert form: full draft over every field of the table.

use contracts::draft::{build_insert, empty_draft, Draft};
use contracts::registry::{FieldType, TableConfig};
use leptos::prelude::*;

use crate::shared::api;
use crate::shared::components::ui::{FieldInput, FieldSelect};
use crate::shared::notify::NotifyService;

#[component]
pub fn InsertForm(
    /// Table being edited
    config: &'static TableConfig,
    /// Refresh hook, fired after a successful insert
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
        // Local validation failure blocks the request entirely.
        let body = match draft.with_untracked(|d| build_insert(config, d)) {
            Ok(body) => body,
            Err(e) => {
                notify.error(e.to_string());
                return;
            }
        };
        set_pending.set(true);
        wasm_bindgen_futures::spawn_local(async move {
            match api::insert(config.key, body).await {
                Ok(()) => {
                    notify.success("Record inserted successfully");
                    draft.set(empty_draft(config));
                    on_submitted.run(());
                }
                // Draft stays untouched so the user can correct and resubmit.
                Err(detail) => notify.error(api::failure_message("Insert", &detail)),
            }
            set_pending.set(false);
        });
    };

    view! {
        <div class="form-panel">
            <h3 class="form-panel__title">{"Insert New Record"}</h3>
            <form class="form" on:submit=submit>
                {config
                    .fields
                    .iter()
                    .map(|field| {
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
                                    required=field.required
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
                                    required=field.required
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
                    {move || if pending.get() { "Submitting..." } else { "Submit" }}
                </button>
            </form>
        </div>
    }
}
