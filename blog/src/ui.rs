//! Shared presentational primitives and the design tokens they draw from.
//!
//! The registry is attached to the application instance at bootstrap and
//! read back out of context here, so the whole look swaps out at the
//! composition root instead of leaking through imports.

use leptos::prelude::*;

use crate::posts::Post;

/// Design tokens registered with the application instance at bootstrap.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UiRegistry {
    pub brand: &'static str,
    pub accent: &'static str,
    pub tagline: &'static str,
}

impl Default for UiRegistry {
    fn default() -> Self {
        Self {
            brand: "demo blog",
            accent: "#4f81e1",
            tagline: "notes on running front ends separately",
        }
    }
}

/// Registry as seen from a component. Falls back to the default tokens when
/// rendered outside a bootstrapped instance.
pub fn registry() -> UiRegistry {
    use_context::<UiRegistry>().unwrap_or_default()
}

#[component]
pub fn PageHeader(title: &'static str, description: &'static str) -> impl IntoView {
    let tokens = registry();
    view! {
        <section class="page-header" style=format!("--accent: {}", tokens.accent)>
            <div class="container">
                <h1 class="page-title">{title}</h1>
                <p class="page-description">{description}</p>
            </div>
        </section>
    }
}

#[component]
pub fn TagBadge(label: &'static str, tone: &'static str) -> impl IntoView {
    view! { <span class=format!("blog-tag {tone}")>{label}</span> }
}

#[component]
pub fn PostCard(post: &'static Post) -> impl IntoView {
    use leptos_router::components::A;

    let href = format!("/posts/{}", post.slug);
    view! {
        <article class="blog-card">
            <div class="blog-card-header">
                <TagBadge label=post.tag tone=post.tag_class />
                <span class="blog-meta">{post.date}" · "{post.read_time}</span>
            </div>
            <h3 class="blog-title">{post.title}</h3>
            <p class="blog-subtitle">{post.summary}</p>
            <div class="blog-cta">
                <A href=href>"Read post"</A>
                <span class="arrow">"→"</span>
            </div>
        </article>
    }
}
