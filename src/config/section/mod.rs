//! Configuration section definitions.
//!
//! Each module corresponds to a section in `vasset.toml`:
//!
//! | Module   | TOML Section | Purpose                                  |
//! |----------|--------------|------------------------------------------|
//! | `app`    | `[app]`      | Name, root URL, locale, asset version    |
//! | `assets` | `[assets]`   | Version lookup order, env var, asset URL |

pub mod app;
pub mod assets;

pub use app::AppSectionConfig;
pub use assets::{AssetsSectionConfig, DEFAULT_ENV_VAR, VersionSource};
