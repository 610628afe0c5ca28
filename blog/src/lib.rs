//! Standalone blog application for the micro frontend demo.
//!
//! This crate knows nothing about the landing shell that links here. It
//! constructs its own application instance, attaches a client-side router
//! and a UI registry to it, and mounts into its own document. The whole
//! contract with the outside world is the URL it is served from.

pub mod bootstrap;
pub mod pages;
pub mod posts;
pub mod ui;

mod app;

pub use app::{App, router_view};
