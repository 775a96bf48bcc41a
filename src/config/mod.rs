//! Application configuration loaded from `vasset.toml`.
//!
//! # Module Structure
//!
//! ```text
//! config/
//! ├── section/       # [app] and [assets]
//! ├── types/         # ConfigError, ConfigDiagnostics, FieldPath
//! ├── util.rs        # URL validation, config file lookup
//! └── mod.rs         # AppConfig (this file)
//! ```
//!
//! # Sections
//!
//! | Section    | Purpose                                            |
//! |------------|----------------------------------------------------|
//! | `[app]`    | Name, root URL, locale, `asset_version`            |
//! | `[assets]` | Version lookup order, env var name, asset root URL |
//!
//! There is no global handle: `AppConfig` is passed to the asset helper as
//! its [`ConfigStore`].

pub mod section;
pub mod types;
mod util;

pub use section::{AppSectionConfig, AssetsSectionConfig, DEFAULT_ENV_VAR, VersionSource};
pub use types::{ConfigDiagnostic, ConfigDiagnostics, ConfigError, FieldPath};

use util::find_config_file;

use crate::{
    asset::{AssetUrlResolver, ConfigStore, VersionPolicy},
    cli::Cli,
    debug, log,
};
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::{
    fs,
    path::{Path, PathBuf},
};

// ============================================================================
// root configuration
// ============================================================================

/// Root configuration structure representing vasset.toml
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppConfig {
    /// Absolute path of the loaded config file; empty when running on defaults
    #[serde(skip)]
    pub config_path: PathBuf,

    #[serde(default)]
    pub app: AppSectionConfig,

    #[serde(default)]
    pub assets: AssetsSectionConfig,
}

impl AppConfig {
    /// Load configuration for a CLI invocation.
    ///
    /// Searches upward from cwd for the config file. Without one, every
    /// value falls back to its default.
    pub fn load(cli: &Cli) -> Result<Self> {
        let mut config = match find_config_file(&cli.config) {
            Some(path) => {
                let mut config = Self::from_path(&path)?;
                config.config_path = path;
                config
            }
            None => {
                debug!("config"; "'{}' not found, using defaults", cli.config.display());
                Self::default()
            }
        };

        config.apply_cli_options(cli);
        config.validate()?;
        Ok(config)
    }

    /// Parse configuration from TOML string
    pub fn from_str(content: &str) -> Result<Self> {
        let config: Self = toml::from_str(content).map_err(ConfigError::from)?;
        Ok(config)
    }

    /// Load configuration from file path, warning about unknown fields.
    fn from_path(path: &Path) -> Result<Self> {
        let content =
            fs::read_to_string(path).map_err(|err| ConfigError::Io(path.to_path_buf(), err))?;

        let (config, ignored) = Self::parse_with_ignored(&content)
            .with_context(|| format!("failed to parse '{}'", path.display()))?;

        if !ignored.is_empty() {
            let mut diag = ConfigDiagnostics::new();
            for field in ignored {
                diag.warn(field, "unknown field, ignored");
            }
            diag.print_warnings();
        }

        Ok(config)
    }

    /// Parse TOML content, collecting any unknown fields.
    fn parse_with_ignored(content: &str) -> Result<(Self, Vec<String>), ConfigError> {
        let mut ignored = Vec::new();
        let deserializer = toml::Deserializer::new(content);
        let config = serde_ignored::deserialize(deserializer, |path: serde_ignored::Path| {
            ignored.push(path.to_string());
        })?;
        Ok((config, ignored))
    }

    /// Apply global CLI overrides.
    fn apply_cli_options(&mut self, cli: &Cli) {
        if let Some(version) = &cli.asset_version {
            self.app.asset_version = Some(version.clone());
        }
    }

    /// Validate every section, reporting all problems at once.
    pub fn validate(&self) -> Result<()> {
        let mut diag = ConfigDiagnostics::new();

        self.app.validate_field_status(&mut diag);
        self.assets.validate_field_status(&mut diag);

        self.app.validate(&mut diag);
        self.assets.validate(&mut diag);

        diag.into_result()
            .map_err(|e| ConfigError::Diagnostics(e).into())
    }

    /// Version lookup policy from `[assets]`.
    pub fn version_policy(&self) -> VersionPolicy {
        VersionPolicy::from_config(&self.assets)
    }

    /// URL resolver rooted at `assets.url` or `app.url`.
    pub fn url_resolver(&self) -> Result<AssetUrlResolver> {
        AssetUrlResolver::from_config(self).context("invalid root URL")
    }

    /// Config file location for display, or a note that defaults are in use.
    pub fn source_display(&self) -> String {
        if self.config_path.as_os_str().is_empty() {
            "defaults (no config file)".to_owned()
        } else {
            self.config_path.display().to_string()
        }
    }

    /// Write a commented default config to `path`, refusing to overwrite.
    pub fn write_template(path: &Path) -> Result<()> {
        if path.exists() {
            anyhow::bail!(ConfigError::Validation(format!(
                "'{}' already exists",
                path.display()
            )));
        }
        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create '{}'", parent.display()))?;
        }
        fs::write(path, Self::template())
            .with_context(|| format!("Failed to write config file '{}'", path.display()))?;
        log!("init"; "wrote {}", path.display());
        Ok(())
    }

    /// Commented TOML with every section at its default.
    pub fn template() -> String {
        let mut out = format!(
            "# vasset configuration file (v{})\n\n",
            env!("CARGO_PKG_VERSION")
        );
        out.push_str(&AppSectionConfig::template_with_header());
        out.push_str("\n\n");
        out.push_str(&AssetsSectionConfig::template_with_header());
        out.push('\n');
        out
    }
}

impl ConfigStore for AppConfig {
    fn get(&self, key: &str) -> Option<String> {
        match key {
            "app.name" => Some(self.app.name.clone()),
            "app.url" => self.app.url.clone(),
            "app.locale" => Some(self.app.locale.clone()),
            "app.asset_version" => self.app.asset_version.clone(),
            "assets.version_source" => Some(self.assets.version_source.to_string()),
            "assets.env_var" => Some(self.assets.env_var.clone()),
            "assets.url" => self.assets.url.clone(),
            _ => None,
        }
    }
}

// ============================================================================
// tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::asset::version::ASSET_VERSION_KEY;
    use crate::cli::Commands;
    use clap::Parser;
    use tempfile::TempDir;

    #[test]
    fn test_from_str_full() {
        let config = AppConfig::from_str(
            r#"
            [app]
            name = "Acme"
            url = "https://acme.test"
            locale = "en_US"
            asset_version = "20260211_1"

            [assets]
            version_source = "env"
            env_var = "RELEASE"
            url = "https://cdn.acme.test"
            "#,
        )
        .unwrap();

        assert_eq!(config.app.name, "Acme");
        assert_eq!(config.app.asset_version.as_deref(), Some("20260211_1"));
        assert_eq!(config.assets.version_source, VersionSource::Env);
        assert_eq!(config.assets.env_var, "RELEASE");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_from_str_empty_uses_defaults() {
        let config = AppConfig::from_str("").unwrap();
        assert_eq!(config, AppConfig::default());
        assert_eq!(config.assets.env_var, DEFAULT_ENV_VAR);
    }

    #[test]
    fn test_config_store_lookup() {
        let config = AppConfig::from_str("[app]\nasset_version = \"20260211_1\"").unwrap();
        assert_eq!(config.get(ASSET_VERSION_KEY).as_deref(), Some("20260211_1"));
        assert_eq!(config.get("app.name").as_deref(), Some("vasset"));
        assert_eq!(config.get("app.url"), None);
        assert_eq!(config.get("assets.version_source").as_deref(), Some("config"));
        assert_eq!(config.get("nope"), None);
    }

    #[test]
    fn test_unknown_fields_collected() {
        let (config, mut ignored) =
            AppConfig::parse_with_ignored("[app]\nname = \"x\"\ncolor = \"red\"\n[extra]\na = 1")
                .unwrap();
        assert_eq!(config.app.name, "x");
        ignored.sort();
        assert_eq!(ignored, vec!["app.color".to_string(), "extra".to_string()]);
    }

    #[test]
    fn test_validate_reports_all_errors() {
        let config = AppConfig::from_str(
            r#"
            [app]
            url = "acme.test"
            asset_version = "a b"
            [assets]
            env_var = ""
            "#,
        )
        .unwrap();

        let err = config.validate().unwrap_err();
        match err.downcast_ref::<ConfigError>() {
            Some(ConfigError::Diagnostics(diag)) => assert_eq!(diag.errors().len(), 3),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_invalid_toml() {
        assert!(AppConfig::from_str("[app\nname = ").is_err());
        assert!(AppConfig::from_str("[assets]\nversion_source = \"git\"").is_err());
    }

    #[test]
    fn test_template_round_trips() {
        let template = AppConfig::template();
        assert!(template.contains("[app]"));
        assert!(template.contains("[assets]"));
        assert!(template.contains("asset_version"));

        let config = AppConfig::from_str(&template).unwrap();
        assert_eq!(config, AppConfig::default());
    }

    #[test]
    fn test_write_template_refuses_overwrite() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("site/vasset.toml");

        AppConfig::write_template(&path).unwrap();
        assert!(path.exists());
        assert!(AppConfig::write_template(&path).is_err());
    }

    #[test]
    fn test_from_path_reads_file() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("vasset.toml");
        fs::write(&path, "[app]\nasset_version = \"abc\"\nbogus = 1\n").unwrap();

        let config = AppConfig::from_path(&path).unwrap();
        assert_eq!(config.app.asset_version.as_deref(), Some("abc"));

        let missing = AppConfig::from_path(&temp.path().join("missing.toml")).unwrap_err();
        assert!(matches!(
            missing.downcast_ref::<ConfigError>(),
            Some(ConfigError::Io(..))
        ));
    }

    #[test]
    fn test_cli_asset_version_override() {
        let cli = Cli::parse_from(["vasset", "--asset-version", "cli_2", "version"]);
        assert!(matches!(cli.command, Commands::Version));

        let mut config = AppConfig::from_str("[app]\nasset_version = \"file_1\"").unwrap();
        config.apply_cli_options(&cli);
        assert_eq!(config.app.asset_version.as_deref(), Some("cli_2"));
    }

    #[test]
    fn test_url_resolver_prefers_assets_url() {
        let config = AppConfig::from_str(
            "[app]\nurl = \"https://acme.test\"\n[assets]\nurl = \"https://cdn.acme.test\"",
        )
        .unwrap();
        let resolver = config.url_resolver().unwrap();
        assert_eq!(
            crate::asset::UrlResolver::resolve(&resolver, "a.css", None),
            "https://cdn.acme.test/a.css"
        );
    }
}
