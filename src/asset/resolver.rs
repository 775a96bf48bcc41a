//! Base URL resolution for asset paths.
//!
//! Mirrors a web framework's `asset()` helper: the path is joined onto the
//! public root URL, the scheme can be forced, and paths that are already
//! URLs pass through untouched.

use url::Url;

use crate::config::AppConfig;

/// Turns an asset path into its base URL (no version attached).
pub trait UrlResolver: Send + Sync {
    /// `secure`: `Some(true)` forces https, `Some(false)` forces http,
    /// `None` keeps the resolver's default scheme.
    fn resolve(&self, path: &str, secure: Option<bool>) -> String;
}

impl<F> UrlResolver for F
where
    F: Fn(&str, Option<bool>) -> String + Send + Sync,
{
    fn resolve(&self, path: &str, secure: Option<bool>) -> String {
        self(path, secure)
    }
}

/// Default resolver joining paths onto a configured root URL.
#[derive(Debug, Clone, Default)]
pub struct AssetUrlResolver {
    root: Option<Url>,
}

impl AssetUrlResolver {
    /// Create a resolver for `root`. `None` produces root-relative URLs.
    pub fn new(root: Option<&str>) -> Result<Self, url::ParseError> {
        let root = root.map(Url::parse).transpose()?;
        Ok(Self { root })
    }

    /// Use `assets.url`, falling back to `app.url`.
    pub fn from_config(config: &AppConfig) -> Result<Self, url::ParseError> {
        Self::new(config.assets.url.as_deref().or(config.app.url.as_deref()))
    }

    /// Root URL with the scheme adjusted for `secure`, without trailing slash.
    fn root_for(&self, secure: Option<bool>) -> Option<String> {
        let root = self.root.as_ref()?;

        let scheme = match secure {
            Some(true) => "https",
            Some(false) => "http",
            None => return Some(root.as_str().trim_end_matches('/').to_owned()),
        };

        let mut root = root.clone();
        if root.set_scheme(scheme).is_err() {
            crate::debug!("url"; "cannot switch {} to {}", root, scheme);
        }
        Some(root.as_str().trim_end_matches('/').to_owned())
    }
}

impl UrlResolver for AssetUrlResolver {
    fn resolve(&self, path: &str, secure: Option<bool>) -> String {
        if is_valid_url(path) {
            return path.to_owned();
        }

        let path = path.trim_matches('/');
        match self.root_for(secure) {
            Some(root) => format!("{root}/{path}"),
            None => {
                if let Some(secure) = secure {
                    crate::debug!("url"; "no root URL configured, ignoring secure={}", secure);
                }
                format!("/{path}")
            }
        }
    }
}

/// Whether `path` is already a full or protocol-relative URL.
///
/// A bare `name:` prefix is not enough: `logo:v2.png` is still a path.
fn is_valid_url(path: &str) -> bool {
    path.starts_with("//")
        || path.starts_with('#')
        || Url::parse(path)
            .is_ok_and(|url| url.has_host() || matches!(url.scheme(), "mailto" | "tel" | "sms"))
}
