//! Browser-side checks for the entry surface. Run with `wasm-pack test` or
//! `cargo test --target wasm32-unknown-unknown` under a wasm test runner.
#![cfg(target_arch = "wasm32")]

use mf_landing::{App, config};
use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

#[wasm_bindgen_test]
fn entry_surface_targets_resolved_address() {
    leptos::mount::mount_to_body(App);

    let document = web_sys::window().unwrap().document().unwrap();
    let link = document
        .query_selector("a.btn-primary")
        .unwrap()
        .expect("entry surface link rendered");

    assert_eq!(
        link.get_attribute("href").as_deref(),
        Some(config::blog_url().as_str())
    );
    assert_eq!(link.get_attribute("target").as_deref(), Some("_blank"));

    // New browsing context must not be able to reach back to the opener.
    let rel = link.get_attribute("rel").unwrap_or_default();
    assert!(rel.contains("noopener"));
    assert!(rel.contains("noreferrer"));
}
