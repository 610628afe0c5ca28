//! Static post catalog rendered by the listing and detail routes.

/// Blog post metadata plus body paragraphs for the detail view.
pub struct Post {
    pub slug: &'static str,
    pub title: &'static str,
    pub summary: &'static str,
    pub tag: &'static str,
    pub tag_class: &'static str,
    pub date: &'static str,
    pub read_time: &'static str,
    pub body: &'static [&'static str],
}

pub const POSTS: &[Post] = &[
    Post {
        slug: "two-apps-one-link",
        title: "Two Apps, One Link",
        summary: "Why the landing page reaches this blog through a plain URL instead of a shared router or a federation runtime",
        tag: "PATTERN",
        tag_class: "tag-pattern",
        date: "2026-07-21",
        read_time: "4 min",
        body: &[
            "Every integration mechanism between two front ends is a coupling \
             decision. Shared routers couple release schedules. Module \
             federation couples build tooling. A URL couples nothing: the \
             landing page resolves one string and the browser does the rest.",
            "The cost is a full page load at the boundary. For a landing page \
             handing off to a blog, that is the right trade - the two apps \
             have different owners, different deploy cadences, and no state \
             worth carrying across.",
        ],
    },
    Post {
        slug: "own-router-own-rules",
        title: "Own Router, Own Rules",
        summary: "The blog ships its own client-side router, so deep links and redesigns never ask the landing page for permission",
        tag: "ROUTER",
        tag_class: "tag-router",
        date: "2026-07-08",
        read_time: "5 min",
        body: &[
            "Once navigation lands here, everything below the origin is this \
             app's business. The router is attached during bootstrap, before \
             mount, and the landing page has no idea it exists.",
            "That means /posts/whatever can be renamed, split, or redirected \
             without coordinating a release with anyone. The only stable \
             surface is the origin itself.",
        ],
    },
    Post {
        slug: "configure-the-boundary",
        title: "Configure the Boundary, Don't Hardcode It",
        summary: "One build-time variable decides where readers get sent. Local dev falls back to a fixed port and just works",
        tag: "CONFIG",
        tag_class: "tag-config",
        date: "2026-06-30",
        read_time: "3 min",
        body: &[
            "The landing page bakes the blog's address in at build time from \
             a single environment variable. Unset means localhost on a known \
             port; set means used verbatim, no normalization, no surprises.",
            "Keeping resolution a pure function makes the fallback rule \
             testable without a browser in the loop.",
        ],
    },
    Post {
        slug: "deploying-the-halves",
        title: "Deploying the Halves Independently",
        summary: "Two static bundles, two hosts, zero shared pipeline - what the demo setup looks like in practice",
        tag: "DEPLOY",
        tag_class: "tag-deploy",
        date: "2026-06-17",
        read_time: "6 min",
        body: &[
            "Each half builds to a pile of static assets and can be served \
             from anywhere that serves files. In dev that is two local \
             servers on different ports; in production it is two hosts and \
             one environment variable pointing the landing at the right one.",
            "Nothing in either pipeline knows the other exists. Breaking the \
             blog's build never blocks a landing page release, and vice \
             versa.",
        ],
    },
];

/// Look up a post by the slug carried in the detail route.
pub fn find_post(slug: &str) -> Option<&'static Post> {
    POSTS.iter().find(|post| post.slug == slug)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_listed_slug_resolves() {
        for post in POSTS {
            let found = find_post(post.slug).expect("listed slug resolves");
            assert_eq!(found.title, post.title);
        }
    }

    #[test]
    fn unknown_slug_is_none() {
        assert!(find_post("not-a-post").is_none());
    }

    #[test]
    fn slugs_are_unique() {
        for (i, a) in POSTS.iter().enumerate() {
            for b in &POSTS[i + 1..] {
                assert_ne!(a.slug, b.slug);
            }
        }
    }
}
