#![forbid(unsafe_code)]
#![deny(
    warnings,
    dead_code,
    unused,
    unused_imports,
    unused_must_use,
    unreachable_pub,
    clippy::all,
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    rustdoc::broken_intra_doc_links,
    rustdoc::bare_urls,
    missing_docs
)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::multiple_crate_versions)]
//! Reelbox web UI: the profile page and its remote operations.
//!
//! The DOM-free layers (`core`, `features::profile::{actions, logic, state, controller}`,
//! `i18n`, `telemetry`) build and test natively. The app shell, components, HTTP services
//! and the Yew view are compiled for wasm32 only.

pub mod core;
pub mod features;
pub mod i18n;
pub mod telemetry;

#[cfg(target_arch = "wasm32")]
pub mod app;
#[cfg(target_arch = "wasm32")]
pub(crate) mod components;
#[cfg(target_arch = "wasm32")]
pub(crate) mod services;

#[cfg(target_arch = "wasm32")]
pub use app::run_app;
