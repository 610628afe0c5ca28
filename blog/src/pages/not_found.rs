// Fallback for paths the router does not recognize
use leptos::prelude::*;
use leptos_router::components::A;

#[component]
pub fn NotFoundPage() -> impl IntoView {
    view! {
        <section class="page-header">
            <div class="container">
                <h1 class="page-title">"Nothing here"</h1>
                <p class="page-description">
                    "That address doesn't match any page in this app."
                </p>
                <A href="/">"Back to the listing"</A>
            </div>
        </section>
    }
}
