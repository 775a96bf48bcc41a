//! Embedded templates with `__NAME__` placeholders.

use regex::Regex;
use std::{borrow::Cow, convert::Infallible, marker::PhantomData, sync::LazyLock};

/// `__NAME__` with an upper-case name; underscores allowed inside.
static PLACEHOLDER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"__([A-Z](?:[A-Z_]*[A-Z])?)__").expect("placeholder regex is valid")
});

/// Values for a template's placeholders.
pub trait TemplateVars {
    /// Replacement for placeholder `name`, already escaped for its context.
    /// `None` leaves the placeholder in place.
    fn value(&self, name: &str) -> Option<Cow<'_, str>>;
}

/// Embedded template tied to the variable set that fills it.
#[derive(Debug, Clone, Copy)]
pub struct Template<V> {
    content: &'static str,
    _marker: PhantomData<V>,
}

impl<V> Template<V> {
    pub const fn new(content: &'static str) -> Self {
        Self {
            content,
            _marker: PhantomData,
        }
    }

    pub const fn content(&self) -> &'static str {
        self.content
    }
}

impl<V: TemplateVars> Template<V> {
    /// Substitute all placeholders in one pass; inserted values are never rescanned.
    pub fn render(&self, vars: &V) -> String {
        let Ok(out) = self.render_with(vars, |_, text| Ok::<_, Infallible>(text.to_owned()));
        out
    }

    /// Like [`render`](Self::render), but the template's own text between
    /// placeholders goes through `literal` first.
    ///
    /// `literal` receives the byte offset of each segment in [`content`](Self::content).
    /// Placeholder values are never passed to it; unknown placeholders stay
    /// part of the surrounding text.
    pub fn render_with<E>(
        &self,
        vars: &V,
        mut literal: impl FnMut(usize, &str) -> Result<String, E>,
    ) -> Result<String, E> {
        let mut out = String::with_capacity(self.content.len());
        let mut last = 0;

        for caps in PLACEHOLDER.captures_iter(self.content) {
            let Some(whole) = caps.get(0) else {
                continue;
            };
            let Some(value) = vars.value(&caps[1]) else {
                continue;
            };
            out.push_str(&literal(last, &self.content[last..whole.start()])?);
            out.push_str(&value);
            last = whole.end();
        }

        out.push_str(&literal(last, &self.content[last..])?);
        Ok(out)
    }
}
