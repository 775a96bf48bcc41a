//! Embedded templates.
//!
//! - `template` - `__NAME__` placeholder templates
//! - `layout` - The application page layout (`layout/app.html`)
//!
//! # Usage
//!
//! ```ignore
//! use embed::layout::{LayoutVars, render_layout};
//!
//! let vars = LayoutVars::from_config(&config).with_content("<main>hi</main>");
//! let html = render_layout(&vars, &versioner)?;
//! ```

mod template;

pub use template::{Template, TemplateVars};

pub mod layout {
    use std::borrow::Cow;

    use super::{Template, TemplateVars};
    use crate::asset::{AssetVersioner, HelperCallError, expand_helpers};
    use crate::config::AppConfig;
    use crate::utils::html::{escape, escape_attr};

    /// Variables for app.html.
    ///
    /// `title`, `lang` and `csrf_token` are escaped; `styles`, `content` and
    /// `scripts` are inserted as raw HTML.
    #[derive(Debug, Clone, Default, PartialEq, Eq)]
    pub struct LayoutVars {
        pub lang: String,
        pub csrf_token: String,
        pub title: String,
        pub styles: String,
        pub content: String,
        pub scripts: String,
    }

    impl LayoutVars {
        /// Page defaults from `[app]`: `lang` from the locale, title from the name.
        pub fn from_config(config: &AppConfig) -> Self {
            Self {
                lang: config.app.html_lang(),
                title: config.app.name.clone(),
                ..Self::default()
            }
        }

        pub fn with_title(mut self, title: impl Into<String>) -> Self {
            self.title = title.into();
            self
        }

        pub fn with_csrf_token(mut self, token: impl Into<String>) -> Self {
            self.csrf_token = token.into();
            self
        }

        pub fn with_styles(mut self, styles: impl Into<String>) -> Self {
            self.styles = styles.into();
            self
        }

        pub fn with_content(mut self, content: impl Into<String>) -> Self {
            self.content = content.into();
            self
        }

        pub fn with_scripts(mut self, scripts: impl Into<String>) -> Self {
            self.scripts = scripts.into();
            self
        }
    }

    impl TemplateVars for LayoutVars {
        fn value(&self, name: &str) -> Option<Cow<'_, str>> {
            Some(match name {
                "LANG" => escape_attr(&self.lang),
                "CSRF_TOKEN" => escape_attr(&self.csrf_token),
                "TITLE" => escape(&self.title),
                "STYLES" => Cow::Borrowed(self.styles.as_str()),
                "CONTENT" => Cow::Borrowed(self.content.as_str()),
                "SCRIPTS" => Cow::Borrowed(self.scripts.as_str()),
                _ => return None,
            })
        }
    }

    /// Application page layout.
    pub const APP_LAYOUT: Template<LayoutVars> = Template::new(include_str!("layout/app.html"));

    /// Asset paths the layout references, in document order.
    pub const LAYOUT_ASSETS: [&str; 5] = [
        "assets/vendor/bootstrap/bootstrap.min.css",
        "assets/css/app.css",
        "assets/vendor/alpine/alpine.min.js",
        "assets/vendor/bootstrap/bootstrap.bundle.min.js",
        "assets/js/app.js",
    ];

    /// Render the layout with every `v_asset` call expanded.
    ///
    /// Calls are expanded in the layout itself and in `styles`, `content` and
    /// `scripts`. Escaped fields (`title`, `lang`, `csrf_token`) are inserted
    /// afterwards and never evaluated. Line numbers in errors are relative to
    /// the layout or to the fragment that holds the call.
    pub fn render_layout(
        vars: &LayoutVars,
        versioner: &AssetVersioner<'_>,
    ) -> Result<String, HelperCallError> {
        let vars = LayoutVars {
            styles: expand_helpers(&vars.styles, versioner)?,
            content: expand_helpers(&vars.content, versioner)?,
            scripts: expand_helpers(&vars.scripts, versioner)?,
            ..vars.clone()
        };

        let layout = APP_LAYOUT.content();
        APP_LAYOUT.render_with(&vars, |offset, text| {
            expand_helpers(text, versioner).map_err(|mut err| {
                err.line += layout[..offset].matches('\n').count();
                err
            })
        })
    }

}
