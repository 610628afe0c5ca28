// Listing page - every post as a card
use leptos::prelude::*;

use crate::posts::POSTS;
use crate::ui::{PageHeader, PostCard};

#[component]
pub fn ListingPage() -> impl IntoView {
    view! {
        <PageHeader
            title="Blog"
            description="Notes from running two front ends as separate deployments"
        />
        <section class="blog">
            <div class="container">
                <div class="blog-grid">
                    {POSTS
                        .iter()
                        .map(|post| view! { <PostCard post=post /> })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}
