use crate::layout::Navbar;
use crate::pages::home::HomePage;
use crate::pages::not_found::NotFoundPage;
use crate::pages::table_page::TablePage;
use leptos::prelude::*;
use leptos_router::components::{Route, Router, Routes};
use leptos_router::path;

#[component]
pub fn AppRoutes() -> impl IntoView {
    view! {
        <Router>
            <Navbar />
            <main class="page">
                <Routes fallback=|| view! { <NotFoundPage /> }>
                    <Route path=path!("/") view=HomePage />
                    <Route path=path!("/table/:table_name") view=TablePage />
                </Routes>
            </main>
        </Router>
    }
}
