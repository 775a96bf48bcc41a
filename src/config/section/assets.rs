//! `[assets]` section configuration.
//!
//! Controls where the cache-busting version comes from and which root URL
//! asset paths are joined onto.
//!
//! # Example
//!
//! ```toml
//! [assets]
//! version_source = "config"     # "config": app.asset_version first, "env": skip it
//! env_var = "ASSET_VERSION"     # environment variable read as fallback
//! url = "https://cdn.acme.test" # overrides app.url for assets only
//! ```

use std::fmt;

use macros::Config;
use serde::{Deserialize, Serialize};

use crate::config::{ConfigDiagnostics, util::validate_http_url};

/// Default environment variable holding the asset version.
pub const DEFAULT_ENV_VAR: &str = "ASSET_VERSION";

/// Where the version token is looked up first.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VersionSource {
    /// `app.asset_version`, then the environment variable, then today's date.
    #[default]
    Config,
    /// The environment variable, then today's date.
    Env,
}

impl fmt::Display for VersionSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Config => "config",
            Self::Env => "env",
        })
    }
}

/// Asset URL settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Config)]
#[serde(default)]
#[config(section = "assets")]
pub struct AssetsSectionConfig {
    /// Version lookup order: "config" or "env".
    #[config(default = "config", inline_doc)]
    pub version_source: VersionSource,

    /// Environment variable read when no configured version applies.
    #[config(default = "ASSET_VERSION", inline_doc)]
    pub env_var: String,

    /// Root URL for assets only (e.g., a CDN); falls back to app.url.
    #[config(inline_doc)]
    pub url: Option<String>,
}

impl Default for AssetsSectionConfig {
    fn default() -> Self {
        Self {
            version_source: VersionSource::Config,
            env_var: DEFAULT_ENV_VAR.into(),
            url: None,
        }
    }
}

impl AssetsSectionConfig {
    /// Validate assets configuration.
    pub fn validate(&self, diag: &mut ConfigDiagnostics) {
        if self.env_var.trim().is_empty() {
            diag.error_with_hint(
                Self::FIELDS.env_var,
                "must not be empty",
                format!("set {} = \"{DEFAULT_ENV_VAR}\"", Self::FIELDS.env_var),
            );
        } else if self.env_var.contains(['=', '\0']) {
            diag.error(
                Self::FIELDS.env_var,
                format!("'{}' is not a valid environment variable name", self.env_var),
            );
        }

        if let Some(url) = &self.url {
            validate_http_url(Self::FIELDS.url, url, diag);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version_source_parse() {
        #[derive(Deserialize)]
        struct Wrapper {
            source: VersionSource,
        }

        let w: Wrapper = toml::from_str(r#"source = "env""#).unwrap();
        assert_eq!(w.source, VersionSource::Env);
        let w: Wrapper = toml::from_str(r#"source = "config""#).unwrap();
        assert_eq!(w.source, VersionSource::Config);
        assert!(toml::from_str::<Wrapper>(r#"source = "git""#).is_err());
    }

    #[test]
    fn test_validate_env_var() {
        let mut config = AssetsSectionConfig::default();
        let mut diag = ConfigDiagnostics::new();
        config.validate(&mut diag);
        assert!(!diag.has_errors());

        config.env_var = "  ".into();
        let mut diag = ConfigDiagnostics::new();
        config.validate(&mut diag);
        assert_eq!(diag.errors().len(), 1);

        config.env_var = "A=B".into();
        let mut diag = ConfigDiagnostics::new();
        config.validate(&mut diag);
        assert_eq!(diag.errors().len(), 1);
    }

    #[test]
    fn test_validate_cdn_url() {
        let config = AssetsSectionConfig {
            url: Some("//cdn.acme.test".into()),
            ..Default::default()
        };
        let mut diag = ConfigDiagnostics::new();
        config.validate(&mut diag);
        assert!(diag.has_errors());
    }
}
