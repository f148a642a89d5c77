use leptos::prelude::*;
use leptos_router::components::A;

#[component]
pub fn NotFoundPage() -> impl IntoView {
    view! {
        <div class="not-found">
            <h1 class="not-found__title">{"404"}</h1>
            <p class="not-found__text">{"This page does not exist."}</p>
            <A href="/" attr:class="button button--primary">
                {"Back to Home"}
            </A>
        </div>
    }
}
