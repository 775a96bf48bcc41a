//! `[app]` section configuration.
//!
//! Application-level values: display name, public root URL, locale and the
//! asset version used for cache busting.
//!
//! # Example
//!
//! ```toml
//! [app]
//! name = "Acme"
//! url = "https://acme.test"
//! locale = "en_US"
//! asset_version = "20260211_1"
//! ```

use macros::Config;
use serde::{Deserialize, Serialize};

use crate::config::{ConfigDiagnostics, util::validate_http_url};

/// Characters that would break out of the `v=` query value.
const FORBIDDEN_VERSION_CHARS: [char; 3] = ['&', '#', '?'];

/// Application settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Config)]
#[serde(default)]
#[config(section = "app")]
pub struct AppSectionConfig {
    /// Application name, used as the default page title.
    #[config(default = "vasset", inline_doc)]
    pub name: String,

    /// Public root URL that asset paths are joined onto.
    #[config(inline_doc)]
    pub url: Option<String>,

    /// Locale (e.g., "en", "pt_BR"); rendered as the `lang` attribute.
    #[config(default = "en", inline_doc)]
    pub locale: String,

    /// Cache-busting version appended as `?v=`. Unset: ASSET_VERSION or today's date.
    #[config(inline_doc)]
    pub asset_version: Option<String>,
}

impl Default for AppSectionConfig {
    fn default() -> Self {
        Self {
            name: "vasset".into(),
            url: None,
            locale: "en".into(),
            asset_version: None,
        }
    }
}

impl AppSectionConfig {
    /// Locale in BCP 47 form for the `lang` attribute (`en_US` → `en-US`).
    pub fn html_lang(&self) -> String {
        self.locale.replace('_', "-")
    }

    /// Validate app configuration.
    ///
    /// # Checks
    /// - `url` must be an http(s) URL with a host
    /// - `asset_version` must be non-empty and safe to emit raw in a query value
    pub fn validate(&self, diag: &mut ConfigDiagnostics) {
        if let Some(url) = &self.url {
            validate_http_url(Self::FIELDS.url, url, diag);
        }

        if let Some(version) = &self.asset_version {
            if version.is_empty() {
                diag.error_with_hint(
                    Self::FIELDS.asset_version,
                    "must not be empty",
                    "remove the field to fall back to ASSET_VERSION or today's date",
                );
            } else if version.contains(FORBIDDEN_VERSION_CHARS)
                || version.chars().any(char::is_whitespace)
            {
                diag.error_with_hint(
                    Self::FIELDS.asset_version,
                    format!("'{version}' contains characters not allowed in a query value"),
                    "use letters, digits, '.', '-' or '_', e.g. \"20260211_1\"",
                );
            }
        }
    }
}
