//! Page controller for `/table/:table_name`: resolves the table config,
//! owns the tab state machine and the authoritative row set.

use contracts::registry::{self, TableConfig};
use contracts::row::{derived_columns, Row};
use leptos::prelude::*;
use leptos_router::hooks::use_params_map;

use crate::shared::api;
use crate::shared::components::delete_form::DeleteForm;
use crate::shared::components::insert_form::InsertForm;
use crate::shared::components::query_runner::QueryRunner;
use crate::shared::components::table_view::TableView;
use crate::shared::components::update_form::UpdateForm;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ActiveTab {
    View,
    Insert,
    Update,
    Delete,
}

impl ActiveTab {
    const ALL: [ActiveTab; 4] = [
        ActiveTab::View,
        ActiveTab::Insert,
        ActiveTab::Update,
        ActiveTab::Delete,
    ];

    fn label(&self) -> &'static str {
        match self {
            ActiveTab::View => "View",
            ActiveTab::Insert => "Insert",
            ActiveTab::Update => "Update",
            ActiveTab::Delete => "Delete",
        }
    }
}

#[component]
pub fn TablePage() -> impl IntoView {
    let params = use_params_map();
    let raw_key = Memo::new(move |_| {
        params
            .with(|p| p.get("table_name"))
            .unwrap_or_default()
    });
    // Unknown keys degrade to the default table; the miss is logged.
    let config: Memo<&'static TableConfig> = Memo::new(move |_| {
        let key = raw_key.get();
        match registry::lookup(&key) {
            Some(table) => table,
            None => {
                log::warn!(
                    "unknown table key {:?}, falling back to {}",
                    key,
                    registry::default_table().key
                );
                registry::default_table()
            }
        }
    });

    let (active_tab, set_active_tab) = signal(ActiveTab::View);
    let rows: RwSignal<Vec<Row>> = RwSignal::new(Vec::new());
    let query_rows: RwSignal<Option<Vec<Row>>> = RwSignal::new(None);
    let fetch_token: StoredValue<u64> = StoredValue::new(0);

    let fetch = move || {
        let table = config.get_untracked().key;
        let token = fetch_token.get_value() + 1;
        fetch_token.set_value(token);
        wasm_bindgen_futures::spawn_local(async move {
            let fetched = api::list_all(table).await;
            // Stale-response discard: only the most recently issued fetch
            // may write the row set, regardless of arrival order.
            if fetch_token.get_value() == token {
                rows.set(fetched);
                query_rows.set(None);
            }
        });
    };

    // The only automatic refresh trigger: entering the view tab, or the
    // resolved table changing while it is active.
    Effect::new(move |_| {
        let _table = config.get();
        if active_tab.get() == ActiveTab::View {
            fetch();
        }
    });

    let refresh = Callback::new(move |_: ()| fetch());
    let on_query_results = Callback::new(move |result: Vec<Row>| query_rows.set(Some(result)));

    // Query results replace the list wholesale until the next refresh;
    // their column order comes from the result itself.
    let display_title = Signal::derive(move || match query_rows.get() {
        Some(_) => "Query Results".to_string(),
        None => format!("{} Records", config.get().title),
    });
    let display_columns = Signal::derive(move || match query_rows.get() {
        Some(result) => derived_columns(&result),
        None => config
            .get()
            .columns
            .iter()
            .map(|column| column.to_string())
            .collect(),
    });
    let display_rows = Signal::derive(move || match query_rows.get() {
        Some(result) => result,
        None => rows.get(),
    });

    view! {
        <div class="table-page">
            <div class="table-page__heading">
                <h1 class="table-page__title">{move || config.get().title}</h1>
                <p class="table-page__subtitle">{"Manage records and execute operations"}</p>
            </div>

            <div class="tab-bar">
                {ActiveTab::ALL
                    .iter()
                    .map(|tab| {
                        let tab = *tab;
                        view! {
                            <button
                                class="tab-bar__tab"
                                class:tab-bar__tab--active=move || active_tab.get() == tab
                                on:click=move |_| set_active_tab.set(tab)
                            >
                                {tab.label()}
                            </button>
                        }
                    })
                    .collect_view()}
            </div>

            {move || match active_tab.get() {
                ActiveTab::View => {
                    view! {
                        <div class="table-page__view">
                            <TableView
                                title=display_title
                                columns=display_columns
                                rows=display_rows
                            />
                            <QueryRunner on_results=on_query_results />
                        </div>
                    }
                        .into_any()
                }
                ActiveTab::Insert => {
                    view! { <InsertForm config=config.get() on_submitted=refresh /> }.into_any()
                }
                ActiveTab::Update => {
                    view! { <UpdateForm config=config.get() on_submitted=refresh /> }.into_any()
                }
                ActiveTab::Delete => {
                    view! { <DeleteForm config=config.get() on_submitted=refresh /> }.into_any()
                }
            }}
        </div>
    }
}
