use leptos::prelude::*;

use crate::config;

#[component]
pub fn Architecture() -> impl IntoView {
    let resolved = config::blog_url();
    view! {
        <section class="architecture">
            <div class="container">
                <div class="arch-card">
                    <h2 class="arch-title">"Architecture"</h2>
                    <ul class="arch-list">
                        <li>
                            <strong>"Landing page: "</strong>
                            "this app, served on its own port (8080 in dev)"
                        </li>
                        <li>
                            <strong>"Blog listing: "</strong>
                            "independent app at "
                            <code>{resolved}</code>
                        </li>
                        <li>
                            <strong>"Pattern: "</strong>
                            "independent deployments"
                        </li>
                        <li>
                            <strong>"Communication: "</strong>
                            "URL navigation only"
                        </li>
                    </ul>
                </div>
            </div>
        </section>
    }
}
