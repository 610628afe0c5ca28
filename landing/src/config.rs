//! Blog address resolution.
//!
//! The shell never hardcodes where the blog is deployed: the address comes
//! from the `BLOG_URL` build environment variable, with a fixed local-dev
//! fallback. Resolution is pure string selection - no parsing, no network.

/// Address used when no `BLOG_URL` override is supplied at build time.
///
/// The blog's dev server binds this port (see `blog/Trunk.toml`); the
/// landing itself serves on 8080, so the two apps never collide locally.
pub const DEFAULT_BLOG_URL: &str = "http://localhost:5173";

/// `BLOG_URL` as baked in at compile time, if the variable was set.
const CONFIGURED_BLOG_URL: Option<&str> = option_env!("BLOG_URL");

/// The address the entry surface navigates to.
pub fn blog_url() -> String {
    resolve_blog_url(CONFIGURED_BLOG_URL)
}

/// Pick the navigation target: a non-empty configured value wins verbatim,
/// anything else falls back to [`DEFAULT_BLOG_URL`].
pub fn resolve_blog_url(configured: Option<&str>) -> String {
    match configured {
        Some(url) if !url.is_empty() => url.to_owned(),
        _ => DEFAULT_BLOG_URL.to_owned(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn configured_address_wins_verbatim() {
        assert_eq!(
            resolve_blog_url(Some("https://blog.example.com")),
            "https://blog.example.com"
        );
    }

    #[test]
    fn missing_configuration_falls_back() {
        assert_eq!(resolve_blog_url(None), DEFAULT_BLOG_URL);
    }

    #[test]
    fn empty_configuration_falls_back() {
        assert_eq!(resolve_blog_url(Some("")), DEFAULT_BLOG_URL);
    }

    #[test]
    fn configured_address_is_not_normalized() {
        // Trailing slashes, paths, ports all pass through untouched.
        assert_eq!(
            resolve_blog_url(Some("http://10.0.0.7:5173/posts/")),
            "http://10.0.0.7:5173/posts/"
        );
    }
}
