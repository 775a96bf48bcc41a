//! The `v_asset` helper: base URL plus `?v=<version>`.

use serde_json::Value;

use super::error::{HelperError, value_kind};
use super::resolver::UrlResolver;
use super::version::{ConfigStore, EnvSource, ResolvedVersion, VersionPolicy};

/// Name the helper is exposed under in templates.
pub const HELPER_NAME: &str = "v_asset";

/// Appends a cache-busting version to asset URLs.
///
/// Holds no state of its own; every collaborator is borrowed, and the
/// version is looked up again on each call.
///
/// ```ignore
/// let versioner = AssetVersioner::new(&resolver, &config, &ProcessEnv);
/// versioner.versioned_asset_url("assets/css/app.css", None);
/// // => "https://acme.test/assets/css/app.css?v=20260211_1"
/// ```
pub struct AssetVersioner<'a> {
    resolver: &'a dyn UrlResolver,
    config: &'a dyn ConfigStore,
    env: &'a dyn EnvSource,
    policy: VersionPolicy,
}

impl<'a> AssetVersioner<'a> {
    pub fn new(
        resolver: &'a dyn UrlResolver,
        config: &'a dyn ConfigStore,
        env: &'a dyn EnvSource,
    ) -> Self {
        Self {
            resolver,
            config,
            env,
            policy: VersionPolicy::default(),
        }
    }

    pub fn with_policy(mut self, policy: VersionPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Current version token and where it came from.
    pub fn version(&self) -> ResolvedVersion {
        self.policy.resolve(self.config, self.env)
    }

    /// Resolve `path` and append `?v=<version>`.
    ///
    /// The suffix is appended verbatim even when the base URL already has a
    /// query string.
    pub fn versioned_asset_url(&self, path: &str, secure: Option<bool>) -> String {
        let version = self.version();
        let base = self.resolver.resolve(path, secure);
        format!("{base}?v={}", version.token)
    }

    /// Dynamically typed entry point used by templates: `v_asset(path, secure?)`.
    pub fn call(&self, args: &[Value]) -> Result<String, HelperError> {
        if args.len() > 2 {
            return Err(HelperError::InvalidCall {
                helper: HELPER_NAME,
                reason: format!("expected at most 2 arguments, got {}", args.len()),
            });
        }

        let path = match args.first() {
            Some(Value::String(path)) => path,
            other => {
                return Err(HelperError::TypeMismatch {
                    helper: HELPER_NAME,
                    argument: "path",
                    expected: "a string",
                    found: other.map_or("nothing", value_kind),
                });
            }
        };

        let secure = match args.get(1) {
            None | Some(Value::Null) => None,
            Some(Value::Bool(secure)) => Some(*secure),
            Some(other) => {
                return Err(HelperError::TypeMismatch {
                    helper: HELPER_NAME,
                    argument: "secure",
                    expected: "a bool or null",
                    found: value_kind(other),
                });
            }
        };

        Ok(self.versioned_asset_url(path, secure))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::asset::version::ASSET_VERSION_KEY;
    use crate::asset::AssetUrlResolver;
    use crate::config::VersionSource;
    use rustc_hash::FxHashMap;
    use serde_json::json;

    fn config(version: Option<&str>) -> FxHashMap<String, String> {
        version
            .map(|v| (ASSET_VERSION_KEY.to_owned(), v.to_owned()))
            .into_iter()
            .collect()
    }

    fn resolver() -> AssetUrlResolver {
        AssetUrlResolver::new(Some("https://acme.test")).unwrap()
    }

    #[test]
    fn test_appends_configured_version() {
        let resolver = resolver();
        let config = config(Some("20260211_1"));
        let env: FxHashMap<String, String> = FxHashMap::default();
        let versioner = AssetVersioner::new(&resolver, &config, &env);

        assert_eq!(
            versioner.versioned_asset_url("assets/css/app.css", None),
            format!("{}?v=20260211_1", resolver.resolve("assets/css/app.css", None))
        );
    }

    #[test]
    fn test_secure_is_forwarded() {
        let seen = |path: &str, secure: Option<bool>| format!("{path}[{secure:?}]");
        let config = config(Some("7"));
        let env: FxHashMap<String, String> = FxHashMap::default();
        let versioner = AssetVersioner::new(&seen, &config, &env);

        assert_eq!(versioner.versioned_asset_url("a.js", Some(false)), "a.js[Some(false)]?v=7");
        assert_eq!(versioner.versioned_asset_url("a.js", None), "a.js[None]?v=7");
    }

    #[test]
    fn test_existing_query_is_not_merged() {
        let resolver = resolver();
        let config = config(Some("3"));
        let env: FxHashMap<String, String> = FxHashMap::default();
        let versioner = AssetVersioner::new(&resolver, &config, &env);

        assert_eq!(
            versioner.versioned_asset_url("app.css?theme=dark", None),
            "https://acme.test/app.css?theme=dark?v=3"
        );
    }

    #[test]
    fn test_env_policy() {
        let resolver = resolver();
        let config = config(Some("from-config"));
        let env: FxHashMap<String, String> =
            [("RELEASE".to_owned(), "r5".to_owned())].into_iter().collect();
        let versioner =
            AssetVersioner::new(&resolver, &config, &env).with_policy(VersionPolicy {
                source: VersionSource::Env,
                env_var: "RELEASE".into(),
            });

        assert_eq!(
            versioner.versioned_asset_url("app.js", None),
            "https://acme.test/app.js?v=r5"
        );
    }

    #[test]
    fn test_idempotent() {
        let resolver = resolver();
        let config = config(None);
        let env: FxHashMap<String, String> = FxHashMap::default();
        let versioner = AssetVersioner::new(&resolver, &config, &env);

        let first = versioner.versioned_asset_url("app.js", Some(true));
        let second = versioner.versioned_asset_url("app.js", Some(true));
        // Only a UTC midnight between the two calls could differ
        assert_eq!(first.split("?v=").next(), second.split("?v=").next());
        assert!(first.starts_with("https://acme.test/app.js?v="));
        assert!(first.ends_with("_1"));
    }

    #[test]
    fn test_call_with_string_path() {
        let resolver = resolver();
        let config = config(Some("9"));
        let env: FxHashMap<String, String> = FxHashMap::default();
        let versioner = AssetVersioner::new(&resolver, &config, &env);

        assert_eq!(
            versioner.call(&[json!("assets/js/app.js")]).unwrap(),
            "https://acme.test/assets/js/app.js?v=9"
        );
        assert_eq!(
            versioner.call(&[json!("a.css"), json!(false)]).unwrap(),
            "http://acme.test/a.css?v=9"
        );
        assert_eq!(
            versioner.call(&[json!("a.css"), json!(null)]).unwrap(),
            "https://acme.test/a.css?v=9"
        );
    }

    #[test]
    fn test_call_rejects_null_path() {
        let resolver = resolver();
        let config = config(Some("9"));
        let env: FxHashMap<String, String> = FxHashMap::default();
        let versioner = AssetVersioner::new(&resolver, &config, &env);

        for args in [vec![json!(null)], vec![], vec![json!(12)], vec![json!(["a"])]] {
            let err = versioner.call(&args).unwrap_err();
            assert!(
                matches!(err, HelperError::TypeMismatch { argument: "path", .. }),
                "{err}"
            );
        }
    }

    #[test]
    fn test_call_rejects_bad_secure() {
        let resolver = resolver();
        let config = config(Some("9"));
        let env: FxHashMap<String, String> = FxHashMap::default();
        let versioner = AssetVersioner::new(&resolver, &config, &env);

        let err = versioner.call(&[json!("a.css"), json!("yes")]).unwrap_err();
        assert_eq!(
            err,
            HelperError::TypeMismatch {
                helper: HELPER_NAME,
                argument: "secure",
                expected: "a bool or null",
                found: "string",
            }
        );

        let err = versioner
            .call(&[json!("a.css"), json!(true), json!(1)])
            .unwrap_err();
        assert!(matches!(err, HelperError::InvalidCall { .. }));
    }
}
