use wasm_bindgen::JsValue;

fn main() {
    console_error_panic_hook::set_once();

    // Startup preconditions are fatal: without a configured, mounted
    // instance there is no page to fall back to.
    if let Err(err) = mf_blog::bootstrap::start() {
        panic!("blog failed to start: {err}");
    }

    web_sys::console::log_1(&JsValue::from_str("[blog] mounted"));
}
