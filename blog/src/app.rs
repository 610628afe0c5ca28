//! Root view: layout chrome around the routed pages.

use leptos::prelude::*;
use leptos_router::components::{A, Route, Router, Routes};
use leptos_router::path;

use crate::pages::{ListingPage, NotFoundPage, PostPage};
use crate::ui;

#[component]
pub fn App() -> impl IntoView {
    view! {
        <Router>
            <SiteHeader />
            <main>
                <Routes fallback=|| view! { <NotFoundPage /> }>
                    <Route path=path!("/") view=ListingPage />
                    <Route path=path!("/posts/:slug") view=PostPage />
                </Routes>
            </main>
            <SiteFooter />
        </Router>
    }
}

/// View constructor handed to [`crate::bootstrap::AppInstance`] as the
/// router attachment.
pub fn router_view() -> AnyView {
    view! { <App /> }.into_any()
}

#[component]
fn SiteHeader() -> impl IntoView {
    let tokens = ui::registry();
    view! {
        <header class="site-header">
            <div class="container">
                <span class="site-brand">
                    <A href="/">{tokens.brand}</A>
                </span>
                <span class="site-tagline">{tokens.tagline}</span>
            </div>
        </header>
    }
}

#[component]
fn SiteFooter() -> impl IntoView {
    view! {
        <footer class="footer">
            <div class="container">
                <p class="footer-note">
                    "Deployed separately from the landing page that links here."
                </p>
            </div>
        </footer>
    }
}
