//! Form controls shared by the mutation forms.

use contracts::registry::SelectOption;
use leptos::prelude::*;

/// Labelled input bound to one draft field.
#[component]
pub fn FieldInput(
    /// Label text
    label: &'static str,
    /// HTML input type ("text", "number", "email", "date")
    input_type: &'static str,
    /// Current value
    #[prop(into)]
    value: Signal<String>,
    /// Input event handler
    on_input: Callback<String>,
    /// Marks the label with a required indicator
    #[prop(optional)]
    required: bool,
) -> impl IntoView {
    view! {
        <div class="form__group">
            <label class="form__label">
                {label}
                {required.then(|| view! { <span class="form__required">{"*"}</span> })}
            </label>
            <input
                class="form__input"
                type=input_type
                placeholder=format!("Enter {}", label.to_lowercase())
                prop:value=move || value.get()
                on:input=move |ev| on_input.run(event_target_value(&ev))
            />
        </div>
    }
}

/// Labelled select bound to one draft field, with a leading placeholder
/// option carrying an empty value.
#[component]
pub fn FieldSelect(
    /// Label text
    label: &'static str,
    /// Fixed option list from the table registry
    options: &'static [SelectOption],
    /// Current value
    #[prop(into)]
    value: Signal<String>,
    /// Change event handler
    on_change: Callback<String>,
    /// Marks the label with a required indicator
    #[prop(optional)]
    required: bool,
) -> impl IntoView {
    view! {
        <div class="form__group">
            <label class="form__label">
                {label}
                {required.then(|| view! { <span class="form__required">{"*"}</span> })}
            </label>
            <select
                class="form__select"
                prop:value=move || value.get()
                on:change=move |ev| on_change.run(event_target_value(&ev))
            >
                <option value="">{format!("Select {}", label)}</option>
                {options
                    .iter()
                    .map(|option| {
                        let selected = move || value.get() == option.value;
                        view! {
                            <option value=option.value selected=selected>
                                {option.label}
                            </option>
                        }
                    })
                    .collect_view()}
            </select>
        </div>
    }
}
