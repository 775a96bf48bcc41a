//! `vasset url` and `vasset version`.

use anyhow::Result;
use std::io::Write;

use super::common::with_versioner;
use crate::{config::AppConfig, debug, log, logger::is_verbose};

/// Print the versioned URL for `path`.
pub fn print_url(config: &AppConfig, path: &str, secure: Option<bool>) -> Result<()> {
    let url = with_versioner(config, |versioner| {
        if is_verbose() {
            let version = versioner.version();
            debug!("url"; "version {} from {}", version.token, version.origin);
        }
        Ok(versioner.versioned_asset_url(path, secure))
    })?;
    writeln!(std::io::stdout().lock(), "{url}")?;
    Ok(())
}

/// Print the version token; its origin goes to stderr.
pub fn print_version(config: &AppConfig) -> Result<()> {
    let resolved = with_versioner(config, |versioner| Ok(versioner.version()))?;
    log!("version"; "from {} ({})", resolved.origin, config.source_display());
    writeln!(std::io::stdout().lock(), "{}", resolved.token)?;
    Ok(())
}
