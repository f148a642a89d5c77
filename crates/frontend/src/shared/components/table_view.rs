//! List view with client-side substring search.

use contracts::filter::filter_rows;
use contracts::row::{cell_text, Row};
use leptos::prelude::*;

/// Renders `columns` as headers and the filtered rows as cells. The search
/// term filters case-insensitively across every column value, recomputed per
/// keystroke; the underlying row set is never mutated. An empty filtered
/// result renders a placeholder row instead of an empty body.
#[component]
pub fn TableView(
    /// Panel title
    #[prop(into)]
    title: Signal<String>,
    /// Column display order
    #[prop(into)]
    columns: Signal<Vec<String>>,
    /// Current row set, replaced wholesale on every fetch
    #[prop(into)]
    rows: Signal<Vec<Row>>,
) -> impl IntoView {
    let (search_term, set_search_term) = signal(String::new());

    let filtered = move || filter_rows(&rows.get(), &search_term.get());

    view! {
        <div class="table-panel">
            <div class="table-panel__header">
                <h2 class="table-panel__title">{move || title.get()}</h2>
                <input
                    class="form__input table-panel__search"
                    type="text"
                    placeholder="Search..."
                    prop:value=move || search_term.get()
                    on:input=move |ev| set_search_term.set(event_target_value(&ev))
                />
            </div>
            <div class="table">
                <table class="table__data table--striped">
                    <thead class="table__head">
                        <tr>
                            {move || {
                                columns
                                    .get()
                                    .into_iter()
                                    .map(|column| view! { <th class="table__header-cell">{column}</th> })
                                    .collect_view()
                            }}
                        </tr>
                    </thead>
                    <tbody>
                        {move || {
                            let cols = columns.get();
                            let visible = filtered();
                            if visible.is_empty() {
                                view! {
                                    <tr>
                                        <td class="table__cell table__cell--empty" colspan=cols.len().to_string()>
                                            {"No data found"}
                                        </td>
                                    </tr>
                                }
                                    .into_any()
                            } else {
                                visible
                                    .into_iter()
                                    .map(|row| {
                                        view! {
                                            <tr class="table__row">
                                                {cols
                                                    .iter()
                                                    .map(|column| {
                                                        view! {
                                                            <td class="table__cell">{cell_text(&row, column)}</td>
                                                        }
                                                    })
                                                    .collect_view()}
                                            </tr>
                                        }
                                    })
                                    .collect_view()
                                    .into_any()
                            }
                        }}
                    </tbody>
                </table>
            </div>
        </div>
    }
}
