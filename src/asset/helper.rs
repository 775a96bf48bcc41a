//! Expansion of `{{ v_asset(...) }}` calls in HTML templates.
//!
//! Arguments are template literals: `'single'` or `"double"` quoted strings,
//! `null`, `true`, `false` and numbers. The produced URL is escaped for an
//! attribute context, the same way an escaped `{{ }}` echo would be.

use std::sync::LazyLock;

use regex::{Captures, Regex};
use serde_json::Value;

use super::error::{HelperCallError, HelperError};
use super::versioner::{AssetVersioner, HELPER_NAME};
use crate::utils::html::escape_attr;

/// Matches `{{ v_asset( ... ) }}`; group 1 is the raw argument list.
static HELPER_CALL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?s)\{\{[ \t]*v_asset[ \t]*\((.*?)\)[ \t]*\}\}").expect("helper regex is valid")
});

/// Expand every helper call in `template`.
///
/// Fails on the first malformed call; nothing is partially rendered.
pub fn expand_helpers(
    template: &str,
    versioner: &AssetVersioner<'_>,
) -> Result<String, HelperCallError> {
    let mut out = String::with_capacity(template.len());
    let mut last = 0;

    for caps in HELPER_CALL.captures_iter(template) {
        let Some(whole) = caps.get(0) else {
            continue;
        };
        out.push_str(&template[last..whole.start()]);

        let url = expand_call(&caps, versioner).map_err(|source| HelperCallError {
            line: template[..whole.start()].matches('\n').count() + 1,
            call: whole.as_str().to_owned(),
            source,
        })?;
        out.push_str(&escape_attr(&url));
        last = whole.end();
    }

    out.push_str(&template[last..]);
    Ok(out)
}

fn expand_call(caps: &Captures<'_>, versioner: &AssetVersioner<'_>) -> Result<String, HelperError> {
    let raw = caps.get(1).map_or("", |m| m.as_str());
    let args = parse_args(raw).map_err(|reason| HelperError::InvalidCall {
        helper: HELPER_NAME,
        reason,
    })?;
    versioner.call(&args)
}

/// Split a raw argument list into literal values.
fn parse_args(raw: &str) -> Result<Vec<Value>, String> {
    let mut args = Vec::new();
    let mut chars = raw.char_indices().peekable();

    loop {
        while chars.next_if(|(_, c)| c.is_ascii_whitespace()).is_some() {}
        let Some(&(start, first)) = chars.peek() else {
            break;
        };

        let value = if first == '\'' || first == '"' {
            chars.next();
            Value::String(parse_quoted(&mut chars, first)?)
        } else {
            let mut end = raw.len();
            while let Some(&(i, c)) = chars.peek() {
                if c == ',' || c.is_ascii_whitespace() {
                    end = i;
                    break;
                }
                chars.next();
            }
            parse_bare(&raw[start..end])?
        };
        args.push(value);

        while chars.next_if(|(_, c)| c.is_ascii_whitespace()).is_some() {}
        match chars.next() {
            None => break,
            Some((_, ',')) => {
                while chars.next_if(|(_, c)| c.is_ascii_whitespace()).is_some() {}
                if chars.peek().is_none() {
                    return Err("trailing comma in argument list".into());
                }
            }
            Some((_, c)) => return Err(format!("unexpected `{c}` after argument")),
        }
    }

    Ok(args)
}

fn parse_quoted(
    chars: &mut std::iter::Peekable<std::str::CharIndices<'_>>,
    quote: char,
) -> Result<String, String> {
    let mut s = String::new();
    while let Some((_, c)) = chars.next() {
        match c {
            '\\' => match chars.next() {
                Some((_, escaped)) => s.push(escaped),
                None => break,
            },
            c if c == quote => return Ok(s),
            c => s.push(c),
        }
    }
    Err("unterminated string literal".into())
}

fn parse_bare(token: &str) -> Result<Value, String> {
    match token {
        "null" => Ok(Value::Null),
        "true" => Ok(Value::Bool(true)),
        "false" => Ok(Value::Bool(false)),
        _ => match serde_json::from_str::<Value>(token) {
            Ok(number @ Value::Number(_)) => Ok(number),
            _ => Err(format!("unsupported argument `{token}`")),
        },
    }
}
