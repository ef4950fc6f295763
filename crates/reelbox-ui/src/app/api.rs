//! Remote services shared through context.
//!
//! # Design
//! - One HTTP client and one set of profile operations per API origin.
//! - Pages borrow the operations from context; they never build their own.

use crate::core::config::UiConfig;
use crate::core::store::app_dispatch;
use crate::features::profile::api::HttpProfileOperations;
use crate::services::api::ApiClient;
use std::rc::Rc;

/// Services context provided by the app shell.
#[derive(Clone)]
pub(crate) struct ServicesCtx {
    /// Client used by the session bootstrap.
    pub client: Rc<ApiClient>,
    /// Operations backing the profile page.
    pub profile: Rc<HttpProfileOperations>,
}

impl ServicesCtx {
    /// Build the client and the operations bound to it for the configured origin.
    pub(crate) fn new(config: &UiConfig) -> Self {
        let client = Rc::new(ApiClient::new(config.api_base_url.clone()));
        let profile = Rc::new(HttpProfileOperations::new(
            Rc::clone(&client),
            app_dispatch(),
        ));
        Self { client, profile }
    }
}

impl PartialEq for ServicesCtx {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.client, &other.client) && Rc::ptr_eq(&self.profile, &other.profile)
    }
}
