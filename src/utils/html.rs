//! HTML escaping for values echoed into the layout.
//!
//! `escape()` is used for text nodes (page title), `escape_attr()` for
//! attribute values (asset URLs, CSRF token, `lang`).

use std::borrow::Cow;

/// Characters that are special in text content.
const TEXT_CHARS: [char; 3] = ['<', '>', '&'];

/// Characters that are special in quoted attribute values.
const ATTR_CHARS: [char; 5] = ['<', '>', '&', '"', '\''];

#[inline]
fn entity(c: char) -> Option<&'static str> {
    match c {
        '<' => Some("&lt;"),
        '>' => Some("&gt;"),
        '&' => Some("&amp;"),
        '"' => Some("&quot;"),
        '\'' => Some("&#39;"),
        _ => None,
    }
}

/// Escape HTML special characters in text content.
///
/// Borrows the input when nothing needs escaping.
#[inline]
pub fn escape(s: &str) -> Cow<'_, str> {
    escape_with(s, &TEXT_CHARS)
}

/// Escape an attribute value (quotes included).
#[inline]
pub fn escape_attr(s: &str) -> Cow<'_, str> {
    escape_with(s, &ATTR_CHARS)
}

fn escape_with<'a>(s: &'a str, chars: &[char]) -> Cow<'a, str> {
    if !s.contains(chars) {
        return Cow::Borrowed(s);
    }

    let mut out = String::with_capacity(s.len() + 8);
    for c in s.chars() {
        match entity(c).filter(|_| chars.contains(&c)) {
            Some(e) => out.push_str(e),
            None => out.push(c),
        }
    }
    Cow::Owned(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_borrows_plain_text() {
        assert!(matches!(escape("hello world"), Cow::Borrowed(_)));
        assert!(matches!(escape_attr("/assets/app.css?v=1"), Cow::Borrowed(_)));
    }

    #[test]
    fn test_escape_text_keeps_quotes() {
        assert_eq!(escape("<b>Tom & \"Jerry\"</b>"), "&lt;b&gt;Tom &amp; \"Jerry\"&lt;/b&gt;");
    }

    #[test]
    fn test_escape_attr_query_string() {
        assert_eq!(
            escape_attr("/app.css?a=1&v=x\"y'"),
            "/app.css?a=1&amp;v=x&quot;y&#39;"
        );
    }
}
