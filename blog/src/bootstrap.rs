//! One-shot startup sequence for the blog application.
//!
//! The instance moves through three phases: constructed, configured (router
//! and UI registry attached), mounted. Mounting consumes the instance, so
//! the sequence cannot run backwards or repeat.

use leptos::prelude::*;
use thiserror::Error;
use wasm_bindgen::JsCast;

use crate::app;
use crate::ui::UiRegistry;

/// Id of the single element in `index.html` the application mounts to.
pub const MOUNT_TARGET_ID: &str = "app";

/// Startup failures. All of these are fatal: the page is unusable without a
/// fully configured, mounted instance, and there is no recovery path.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum BootstrapError {
    #[error("router must be attached before mount")]
    RouterMissing,
    #[error("UI registry must be attached before mount")]
    UiRegistryMissing,
    #[error("mount target `#{0}` not found in document")]
    MountTargetMissing(String),
}

/// Root of the blog application.
///
/// Owns the router and UI registry once they are attached;
/// [`AppInstance::mount`] consumes the instance, leaving `mounted` as the
/// terminal state.
#[derive(Default)]
pub struct AppInstance {
    router: Option<fn() -> AnyView>,
    registry: Option<UiRegistry>,
}

impl AppInstance {
    pub fn new() -> Self {
        Self::default()
    }

    /// Attach the client-side router: a constructor for the routed view
    /// tree that will own all in-app navigation.
    pub fn attach_router(mut self, router: fn() -> AnyView) -> Self {
        self.router = Some(router);
        self
    }

    /// Attach the UI registry providing the shared presentational
    /// primitives and their design tokens.
    pub fn attach_ui(mut self, registry: UiRegistry) -> Self {
        self.registry = Some(registry);
        self
    }

    /// Mount the configured instance onto the element with `target_id`.
    ///
    /// Attachment ordering is verified before the document is consulted:
    /// mounting without a router or without a registry is rejected outright,
    /// so a failed mount never leaves a half-attached instance behind.
    pub fn mount(self, target_id: &str) -> Result<(), BootstrapError> {
        let router = self.router.ok_or(BootstrapError::RouterMissing)?;
        let registry = self.registry.ok_or(BootstrapError::UiRegistryMissing)?;
        let target = mount_target(target_id)?;

        leptos::mount::mount_to(target, move || {
            provide_context(registry);
            router()
        })
        .forget();

        Ok(())
    }
}

/// Run the full bootstrap sequence: construct, attach router, attach UI
/// registry, mount. Called exactly once, from `main`.
pub fn start() -> Result<(), BootstrapError> {
    AppInstance::new()
        .attach_router(app::router_view)
        .attach_ui(UiRegistry::default())
        .mount(MOUNT_TARGET_ID)
}

fn mount_target(id: &str) -> Result<web_sys::HtmlElement, BootstrapError> {
    web_sys::window()
        .and_then(|window| window.document())
        .and_then(|document| document.get_element_by_id(id))
        .and_then(|element| element.dyn_into::<web_sys::HtmlElement>().ok())
        .ok_or_else(|| BootstrapError::MountTargetMissing(id.to_owned()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app;
    use pretty_assertions::assert_eq;

    // Ordering violations are detected before any document access, so these
    // run natively. Mounting against a real document is covered by the
    // browser tests in `tests/bootstrap_dom.rs`.

    #[test]
    fn mount_without_router_is_rejected() {
        let err = AppInstance::new().mount(MOUNT_TARGET_ID).unwrap_err();
        assert_eq!(err, BootstrapError::RouterMissing);
    }

    #[test]
    fn mount_without_registry_is_rejected() {
        let err = AppInstance::new()
            .attach_router(app::router_view)
            .mount(MOUNT_TARGET_ID)
            .unwrap_err();
        assert_eq!(err, BootstrapError::UiRegistryMissing);
    }

    #[test]
    fn registry_alone_still_lacks_router() {
        let err = AppInstance::new()
            .attach_ui(UiRegistry::default())
            .mount(MOUNT_TARGET_ID)
            .unwrap_err();
        assert_eq!(err, BootstrapError::RouterMissing);
    }
}
