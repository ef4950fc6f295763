//! Browser-only service clients.

pub(crate) mod api;
