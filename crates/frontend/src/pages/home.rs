//! Landing dashboard: one card per registered table plus a live preview of
//! the default table.

use contracts::registry;
use contracts::row::Row;
use leptos::prelude::*;
use leptos_router::components::A;

use crate::shared::api;
use crate::shared::components::table_view::TableView;

#[component]
pub fn HomePage() -> impl IntoView {
    let preview = registry::default_table();
    let preview_rows: RwSignal<Vec<Row>> = RwSignal::new(Vec::new());

    wasm_bindgen_futures::spawn_local(async move {
        preview_rows.set(api::list_all(preview.key).await);
    });

    let preview_title = Signal::derive(move || preview.title.to_string());
    let preview_columns = Signal::derive(move || {
        preview
            .columns
            .iter()
            .map(|column| column.to_string())
            .collect::<Vec<String>>()
    });

    view! {
        <div class="home">
            <div class="home__heading">
                <h1 class="home__title">{"Database Management System"}</h1>
                <p class="home__subtitle">{"Manage and view all database records"}</p>
            </div>

            <div class="home__cards">
                {registry::all_tables()
                    .iter()
                    .map(|table| {
                        view! {
                            <A href=format!("/table/{}", table.key) attr:class="home__card">
                                <h3 class="home__card-title">{table.title}</h3>
                                <p class="home__card-hint">{"View & manage"}</p>
                            </A>
                        }
                    })
                    .collect_view()}
            </div>

            <TableView
                title=preview_title
                columns=preview_columns
                rows=preview_rows
            />
        </div>
    }
}
