//! Landing page shell for the micro frontend demo.
//!
//! The shell renders the entry surface and resolves, at render time, where
//! the blog application lives. It never imports blog code: the composition
//! boundary between the two apps is a URL, nothing more.

pub mod config;
mod sections;

use leptos::prelude::*;
use sections::{Architecture, Footer, Hero};
use wasm_bindgen::JsValue;

#[component]
pub fn App() -> impl IntoView {
    view! {
        <main>
            <Hero />
            <Architecture />
        </main>
        <Footer />
    }
}

/// Mount the shell to the document body. Runs once per page load.
pub fn mount() {
    console_error_panic_hook::set_once();
    web_sys::console::log_1(&JsValue::from_str(&format!(
        "[landing] blog target: {}",
        config::blog_url()
    )));
    leptos::mount::mount_to_body(App);
}
