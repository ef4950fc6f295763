//! Core, DOM-free primitives and helpers for the Web UI.
pub mod config;
pub mod error;
pub mod logic;
pub mod messages;
pub mod operation;
pub mod session;
pub mod store;
