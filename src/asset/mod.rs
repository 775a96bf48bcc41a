//! Versioned asset URLs for cache busting.
//!
//! | Module      | Purpose                                          |
//! |-------------|--------------------------------------------------|
//! | `version`   | Version token lookup (config → env → date)       |
//! | `resolver`  | Base URL for an asset path                       |
//! | `versioner` | `v_asset`: base URL + `?v=<token>`               |
//! | `helper`    | `{{ v_asset(...) }}` expansion in templates      |
//! | `error`     | Helper misuse errors                             |

mod error;
mod helper;
mod resolver;
pub mod version;
mod versioner;

pub use error::{HelperCallError, HelperError};
pub use helper::expand_helpers;
pub use resolver::{AssetUrlResolver, UrlResolver};
pub use version::{
    ConfigStore, EnvSource, ProcessEnv, ResolvedVersion, VersionOrigin, VersionPolicy,
};
pub use versioner::{AssetVersioner, HELPER_NAME};
