use leptos::prelude::*;
use leptos_router::components::A;

/// Top navigation bar, persists across routes.
#[component]
pub fn Navbar() -> impl IntoView {
    view! {
        <nav class="navbar">
            <A href="/" attr:class="navbar__brand">
                {"Records Admin"}
            </A>
            <div class="navbar__links">
                <A href="/" attr:class="navbar__link">
                    {"Home"}
                </A>
            </div>
        </nav>
    }
}
