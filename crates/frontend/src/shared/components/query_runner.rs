//! Canned query runner: stateless picker over the static query catalog.

use contracts::queries::{all_queries, find_query};
use contracts::row::Row;
use leptos::prelude::*;

use crate::shared::api;

/// Selecting an entry shows its SQL read-only; executing hands whatever the
/// backend returns to the hosting view, which replaces its current row set.
/// An empty or error response clears the displayed rows.
#[component]
pub fn QueryRunner(
    /// Receives the query result rows
    on_results: Callback<Vec<Row>>,
) -> impl IntoView {
    let (selected_id, set_selected_id) = signal(String::new());
    let (running, set_running) = signal(false);

    let selected_sql = move || {
        let id = selected_id.get();
        find_query(&id).map(|query| query.sql)
    };

    let execute = move |_| {
        let id = selected_id.get_untracked();
        if id.is_empty() || running.get_untracked() {
            return;
        }
        set_running.set(true);
        wasm_bindgen_futures::spawn_local(async move {
            let rows = api::run_query(&id).await;
            on_results.run(rows);
            set_running.set(false);
        });
    };

    view! {
        <div class="form-panel query-runner">
            <h3 class="form-panel__title">{"Execute Queries"}</h3>
            <div class="form__group">
                <label class="form__label">{"Select Query"}</label>
                <select
                    class="form__select"
                    prop:value=move || selected_id.get()
                    on:change=move |ev| set_selected_id.set(event_target_value(&ev))
                >
                    <option value="">{"Choose a query..."}</option>
                    {all_queries()
                        .iter()
                        .map(|query| {
                            view! { <option value=query.id>{query.name}</option> }
                        })
                        .collect_view()}
                </select>
            </div>
            {move || {
                selected_sql()
                    .map(|sql| view! { <pre class="query-runner__sql">{sql}</pre> })
            }}
            <button
                class="button button--primary form__submit"
                disabled=move || selected_id.get().is_empty() || running.get()
                on:click=execute
            >
                {move || if running.get() { "Executing..." } else { "Execute Query" }}
            </button>
        </div>
    }
}
