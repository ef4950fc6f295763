//! Persistence and environment helpers for the app shell.

use crate::core::config::{DEFAULT_API_BASE_URL, UiConfig};
use crate::core::session::AccessToken;
use crate::i18n::{DEFAULT_LOCALE, LocaleCode};
use anyhow::{Context, Result, anyhow};
use gloo::console;
use gloo::storage::{LocalStorage, Storage};
use gloo::utils::{document, window};
use web_sys::Url;

pub(crate) const ACCESS_TOKEN_KEY: &str = "reelbox.access_token";
pub(crate) const LOCALE_KEY: &str = "reelbox.locale";
/// Element holding an optional JSON [`UiConfig`] document.
pub(crate) const CONFIG_ELEMENT_ID: &str = "reelbox-config";

pub(crate) fn load_access_token() -> Option<AccessToken> {
    let value = LocalStorage::get::<String>(ACCESS_TOKEN_KEY).ok()?;
    let token = AccessToken::new(value);
    (!token.is_blank()).then_some(token)
}

pub(crate) fn load_locale() -> LocaleCode {
    if let Ok(value) = LocalStorage::get::<String>(LOCALE_KEY)
        && let Some(locale) = LocaleCode::from_lang_tag(&value)
    {
        return locale;
    }
    if let Some(nav) = window().navigator().language()
        && let Some(locale) = LocaleCode::from_lang_tag(&nav)
    {
        return locale;
    }
    DEFAULT_LOCALE
}

pub(crate) fn api_base_url() -> String {
    let href = window()
        .location()
        .href()
        .unwrap_or_else(|_| "http://localhost:8080".to_string());

    if let Ok(url) = Url::new(&href) {
        let protocol = url.protocol();
        let host = url.hostname();
        let port = url.port();
        let mapped_port = match port.as_str() {
            "" => None,
            "8080" => Some("7070"),
            other => Some(other),
        };

        let mut base = format!("{protocol}//{host}");
        if let Some(port) = mapped_port {
            base.push(':');
            base.push_str(port);
        }
        return base;
    }

    DEFAULT_API_BASE_URL.to_string()
}

fn embedded_config() -> Result<Option<UiConfig>> {
    let Some(element) = document().get_element_by_id(CONFIG_ELEMENT_ID) else {
        return Ok(None);
    };
    let raw = element
        .text_content()
        .ok_or_else(|| anyhow!("#{CONFIG_ELEMENT_ID} has no content"))?;
    let config = UiConfig::from_json_with_origin(&raw, &api_base_url())
        .with_context(|| format!("parsing #{CONFIG_ELEMENT_ID}"))?;
    Ok(Some(config))
}

/// Runtime configuration: the embedded document when present, else defaults.
/// The API origin is derived from the page unless the document sets one.
pub(crate) fn load_config() -> UiConfig {
    match embedded_config() {
        Ok(Some(config)) => config,
        Ok(None) => UiConfig::default().with_api_base_url(api_base_url()),
        Err(err) => {
            console::error!(format!("{err:#}"));
            UiConfig::default().with_api_base_url(api_base_url())
        }
    }
}
