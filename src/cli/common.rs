//! Shared plumbing for subcommands.

use anyhow::Result;

use crate::asset::{AssetVersioner, ProcessEnv};
use crate::config::AppConfig;

/// Build the versioner for `config` against the process environment and run `f`.
pub fn with_versioner<T>(
    config: &AppConfig,
    f: impl FnOnce(&AssetVersioner<'_>) -> Result<T>,
) -> Result<T> {
    let resolver = config.url_resolver()?;
    let versioner =
        AssetVersioner::new(&resolver, config, &ProcessEnv).with_policy(config.version_policy());
    f(&versioner)
}
