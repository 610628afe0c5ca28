use leptos::prelude::*;

#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer class="footer">
            <div class="container">
                <p class="footer-note">
                    "Two apps composed by navigation - nothing shared at runtime."
                </p>
            </div>
        </footer>
    }
}
