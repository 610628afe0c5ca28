use leptos::prelude::*;

use crate::config;

#[component]
pub fn Hero() -> impl IntoView {
    // Resolved fresh on every render of the shell.
    let blog_url = config::blog_url();
    view! {
        <section class="hero">
            <div class="container">
                <div class="hero-badge">
                    <span class="hero-badge-dot"></span>
                    "Micro frontend demo"
                </div>
                <h1 class="hero-title">
                    "One page. "
                    <span class="hero-title-accent">"Two deployments."</span>
                </h1>
                <p class="hero-description">
                    "This landing page and the blog it links to are separate applications "
                    "with separate builds and release schedules. "
                    "The only thing they agree on is an address."
                </p>
                <div class="hero-actions">
                    <a
                        href=blog_url
                        target="_blank"
                        rel="noopener noreferrer"
                        class="btn btn-primary"
                    >
                        "View Blogs →"
                    </a>
                </div>
                <p class="hero-caption">"Opens the blog micro frontend in a new tab"</p>
            </div>
        </section>
    }
}
