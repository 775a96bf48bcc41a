//! Configuration utility functions.

use std::path::{Path, PathBuf};

use super::{ConfigDiagnostics, FieldPath};

/// Check that `value` is an absolute `http`/`https` URL with a host and no
/// query string or fragment.
///
/// Used for every root-URL field (`app.url`, `assets.url`).
pub fn validate_http_url(field: FieldPath, value: &str, diag: &mut ConfigDiagnostics) {
    const HINT: &str = "use format like https://example.com";

    match url::Url::parse(value) {
        Ok(parsed) => {
            if !matches!(parsed.scheme(), "http" | "https") {
                diag.error_with_hint(
                    field,
                    format!(
                        "scheme '{}' not supported, must be http or https",
                        parsed.scheme()
                    ),
                    HINT,
                );
            }
            if parsed.host_str().is_none() {
                diag.error_with_hint(field, "URL must have a valid host", HINT);
            }
            // Asset paths are appended to the root as-is
            if parsed.query().is_some() || parsed.fragment().is_some() {
                diag.error_with_hint(
                    field,
                    "root URL must not have a query string or fragment",
                    "remove everything from '?' or '#' onwards",
                );
            }
        }
        Err(e) => {
            diag.error_with_hint(field, format!("invalid URL: {}", e), HINT);
        }
    }
}

/// Find config file by searching upward from current directory
///
/// Starts from cwd and walks up parent directories until finding `config_name`.
///
/// ```text
/// /home/user/app/resources/views/  ← cwd
/// /home/user/app/vasset.toml       ← found!
/// ```
pub fn find_config_file(config_name: &Path) -> Option<PathBuf> {
    let cwd = std::env::current_dir().ok()?;
    find_config_file_from(&cwd, config_name)
}

/// Same as [`find_config_file`], starting at `start` instead of cwd.
pub fn find_config_file_from(start: &Path, config_name: &Path) -> Option<PathBuf> {
    if config_name.is_absolute() {
        return config_name.exists().then(|| config_name.to_path_buf());
    }

    let mut current = start;
    loop {
        let candidate = current.join(config_name);
        if candidate.exists() {
            return Some(candidate);
        }

        match current.parent() {
            Some(parent) => current = parent,
            None => return None,
        }
    }
}

// ============================================================================
// tests
// ============================================================================
