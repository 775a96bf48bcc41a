//! `vasset init`: write a commented configuration file.

use anyhow::{Context, Result};
use std::path::{Path, PathBuf};

use crate::config::AppConfig;

/// Create the config file (or print it with `dry`).
///
/// `name` is a directory relative to cwd; the file name comes from `--config`.
pub fn new_config(config_name: &Path, name: Option<&Path>, dry: bool) -> Result<()> {
    if dry {
        print!("{}", AppConfig::template());
        return Ok(());
    }

    let cwd = std::env::current_dir().context("Failed to get current working directory")?;
    AppConfig::write_template(&target_path(&cwd, config_name, name))
}

/// Where the config file goes for `vasset init [name]`.
fn target_path(cwd: &Path, config_name: &Path, name: Option<&Path>) -> PathBuf {
    if config_name.is_absolute() {
        return config_name.to_path_buf();
    }
    match name {
        Some(dir) => cwd.join(dir).join(config_name),
        None => cwd.join(config_name),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_target_path() {
        let cwd = Path::new("/work");
        let name = Path::new("vasset.toml");
        assert_eq!(target_path(cwd, name, None), PathBuf::from("/work/vasset.toml"));
        assert_eq!(
            target_path(cwd, name, Some(Path::new("site"))),
            PathBuf::from("/work/site/vasset.toml")
        );
        assert_eq!(
            target_path(cwd, Path::new("/etc/vasset.toml"), Some(Path::new("site"))),
            PathBuf::from("/etc/vasset.toml")
        );
    }

    #[test]
    fn test_dry_run_writes_nothing() {
        assert!(new_config(Path::new("/definitely/missing/vasset.toml"), None, true).is_ok());
        assert!(!Path::new("/definitely/missing/vasset.toml").exists());
    }
}
