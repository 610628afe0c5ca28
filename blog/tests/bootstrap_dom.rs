//! Browser-side checks for the mount contract. Run with `wasm-pack test` or
//! `cargo test --target wasm32-unknown-unknown` under a wasm test runner.
#![cfg(target_arch = "wasm32")]

use mf_blog::bootstrap::{AppInstance, BootstrapError, MOUNT_TARGET_ID};
use mf_blog::router_view;
use mf_blog::ui::UiRegistry;
use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

#[wasm_bindgen_test]
fn missing_mount_target_is_fatal() {
    let err = AppInstance::new()
        .attach_router(router_view)
        .attach_ui(UiRegistry::default())
        .mount("definitely-not-here")
        .unwrap_err();

    assert_eq!(
        err,
        BootstrapError::MountTargetMissing("definitely-not-here".into())
    );
}

#[wasm_bindgen_test]
fn configured_instance_mounts() {
    let document = web_sys::window().unwrap().document().unwrap();
    let root = document.create_element("div").unwrap();
    root.set_id(MOUNT_TARGET_ID);
    document.body().unwrap().append_child(&root).unwrap();

    AppInstance::new()
        .attach_router(router_view)
        .attach_ui(UiRegistry::default())
        .mount(MOUNT_TARGET_ID)
        .unwrap();

    assert!(!root.inner_html().is_empty(), "mounted output attached");
}
