//! Best-effort recovery of a JSON document from free-form model output.
//!
//! The model is asked for a JSON object but its reply format is not
//! guaranteed: it may wrap the object in a fenced code block, or surround it
//! with prose. This is a text scan, not a parser; nested fences or stray
//! braces in the prose can produce a span that later fails to parse.

use crate::{Error, Result};
use regex::Regex;
use std::sync::LazyLock;

static FENCED_BLOCK: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"```(?:json)?\s*((?s:.+?))\s*```").expect("fenced block pattern is valid")
});

static BRACED_SPAN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)\{.*\}").expect("braced span pattern is valid"));

/// Returns the candidate JSON text inside `text`.
///
/// The first fenced block wins; otherwise the span from the first `{` to the
/// last `}` is taken.
pub fn extract_json(text: &str) -> Result<&str> {
    if let Some(inner) = FENCED_BLOCK.captures(text).and_then(|caps| caps.get(1)) {
        return Ok(inner.as_str().trim());
    }

    BRACED_SPAN
        .find(text)
        .map(|span| span.as_str())
        .ok_or(Error::NoJsonFound)
}
