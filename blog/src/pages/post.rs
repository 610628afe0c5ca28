// Post detail page - slug comes from the route
use leptos::prelude::*;
use leptos_router::components::A;
use leptos_router::hooks::use_params_map;

use crate::pages::NotFoundPage;
use crate::posts::{self, Post};
use crate::ui::{PageHeader, TagBadge};

#[component]
pub fn PostPage() -> impl IntoView {
    let params = use_params_map();
    let post = move || {
        params
            .read()
            .get("slug")
            .and_then(|slug| posts::find_post(&slug))
    };

    view! {
        {move || match post() {
            Some(post) => view! { <Article post=post /> }.into_any(),
            None => view! { <NotFoundPage /> }.into_any(),
        }}
    }
}

#[component]
fn Article(post: &'static Post) -> impl IntoView {
    view! {
        <article class="post">
            <PageHeader title=post.title description=post.summary />
            <div class="container post-body">
                <p class="blog-meta">
                    <TagBadge label=post.tag tone=post.tag_class />
                    " "
                    {post.date}
                    " · "
                    {post.read_time}
                </p>
                {post
                    .body
                    .iter()
                    .map(|paragraph| view! { <p>{*paragraph}</p> })
                    .collect_view()}
                <p class="post-backlink">
                    <A href="/">"← All posts"</A>
                </p>
            </div>
        </article>
    }
}
