//! Asset version lookup for cache busting.
//!
//! The token is resolved fresh on every call, in this order:
//!
//! 1. `app.asset_version` from the config store (skipped for `VersionSource::Env`)
//! 2. the environment variable (`ASSET_VERSION` unless configured otherwise)
//! 3. today's UTC date as `YYYYMMDD_1`

use std::fmt;

use rustc_hash::FxHashMap;

use crate::config::{AssetsSectionConfig, DEFAULT_ENV_VAR, VersionSource};
use crate::utils::date::DateTimeUtc;

/// Config key holding the configured asset version.
pub const ASSET_VERSION_KEY: &str = "app.asset_version";

/// Read access to configuration values by dotted key.
pub trait ConfigStore: Send + Sync {
    fn get(&self, key: &str) -> Option<String>;
}

/// Read access to environment variables.
pub trait EnvSource: Send + Sync {
    /// Raw lookup; `None` when the variable is unset.
    fn var(&self, name: &str) -> Option<String>;

    /// Lookup with a fallback value.
    fn get_env(&self, name: &str, default: &str) -> String {
        self.var(name).unwrap_or_else(|| default.to_owned())
    }
}

/// The real process environment.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessEnv;

impl EnvSource for ProcessEnv {
    fn var(&self, name: &str) -> Option<String> {
        // Non-unicode values count as unset
        std::env::var(name).ok()
    }
}

impl ConfigStore for FxHashMap<String, String> {
    fn get(&self, key: &str) -> Option<String> {
        FxHashMap::get(self, key).cloned()
    }
}

impl EnvSource for FxHashMap<String, String> {
    fn var(&self, name: &str) -> Option<String> {
        FxHashMap::get(self, name).cloned()
    }
}

/// Version used when neither config nor environment provide one.
pub fn default_version(today: DateTimeUtc) -> String {
    format!("{}_1", today.to_compact_date())
}

/// Where a resolved token came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VersionOrigin {
    Config,
    Env,
    DateDefault,
}

impl fmt::Display for VersionOrigin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Config => "config",
            Self::Env => "env",
            Self::DateDefault => "date default",
        })
    }
}

/// A version token together with its origin.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedVersion {
    pub token: String,
    pub origin: VersionOrigin,
}

/// Lookup order and environment variable name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VersionPolicy {
    pub source: VersionSource,
    pub env_var: String,
}

impl Default for VersionPolicy {
    fn default() -> Self {
        Self {
            source: VersionSource::Config,
            env_var: DEFAULT_ENV_VAR.to_owned(),
        }
    }
}

impl VersionPolicy {
    pub fn from_config(assets: &AssetsSectionConfig) -> Self {
        Self {
            source: assets.version_source,
            env_var: assets.env_var.clone(),
        }
    }

    /// Resolve the token against the current date.
    pub fn resolve(&self, config: &dyn ConfigStore, env: &dyn EnvSource) -> ResolvedVersion {
        self.resolve_on(config, env, DateTimeUtc::now())
    }

    /// Resolve the token, using `today` for the date fallback.
    pub fn resolve_on(
        &self,
        config: &dyn ConfigStore,
        env: &dyn EnvSource,
        today: DateTimeUtc,
    ) -> ResolvedVersion {
        if self.source == VersionSource::Config
            && let Some(token) = config.get(ASSET_VERSION_KEY)
        {
            return ResolvedVersion {
                token,
                origin: VersionOrigin::Config,
            };
        }

        match env.var(&self.env_var) {
            Some(token) => ResolvedVersion {
                token,
                origin: VersionOrigin::Env,
            },
            None => {
                let token = default_version(today);
                crate::debug!("version"; "{} unset, using {}", self.env_var, token);
                ResolvedVersion {
                    token,
                    origin: VersionOrigin::DateDefault,
                }
            }
        }
    }
}
