//! Feature slices.

pub mod profile;
