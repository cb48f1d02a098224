mod classify;
pub mod error;
mod lexer;
pub mod stream;
mod unescape;

pub use error::{ChompError, ChompErrorKind};
pub use stream::{parse_js_objects, parse_js_objects_iter, parse_js_objects_with, JsLiterals};
pub use unescape::decode_unicode_escape;

use lexer::Lexer;
use std::fmt;

/// Normalize the first top-level JavaScript object or array literal in
/// `input` into strict JSON text. Leading noise (`var x = `, call prefixes,
/// unrelated text) is skipped; bytes after the completed literal are ignored.
pub fn normalize_to_string(input: &str) -> Result<String, ChompError> {
    Lexer::new(input).run_single()
}

/// Normalize a single literal and decode it with a caller-supplied decoder.
pub fn parse_js_object_with<T, E, F>(
    input: &str,
    unicode_escape: bool,
    loader: F,
) -> Result<T, ChompError>
where
    F: FnOnce(&str) -> Result<T, E>,
    E: fmt::Display,
{
    let unescaped;
    let source = if unicode_escape {
        unescaped = decode_unicode_escape(input)?;
        &unescaped
    } else {
        input
    };
    let normalized = normalize_to_string(source)?;
    loader(&normalized).map_err(|e| ChompError::new(ChompErrorKind::Decode(e.to_string()), 0))
}

/// Normalize a single literal and decode it into a `serde_json::Value`.
pub fn parse_js_object(input: &str, unicode_escape: bool) -> Result<serde_json::Value, ChompError> {
    let unescaped;
    let source = if unicode_escape {
        unescaped = decode_unicode_escape(input)?;
        &unescaped
    } else {
        input
    };
    let normalized = normalize_to_string(source)?;
    serde_json::from_str(&normalized).map_err(ChompError::from_decode)
}

/// Streaming equivalent of [`normalize_to_string`]: lazily yields one strict
/// JSON text per top-level literal, silently skipping malformed ones.
pub fn js_literals(input: &str) -> JsLiterals<'_> {
    JsLiterals::new(input)
}

#[cfg(test)]
mod tests;
