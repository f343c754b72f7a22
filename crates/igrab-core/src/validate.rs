//! Post-URL validation.
//!
//! Accepts a candidate string iff it uses an http(s) scheme and contains one
//! of the recognized single-post path markers. Matching is deliberately
//! substring-based (a marker appearing in a query string also passes); that
//! mirrors the upstream site checks this tool was built against and keeps
//! the predicate trivial to reason about.

use crate::error::InputError;

/// Path markers identifying a single-post or single-video page.
/// Adding support for a new post shape is a one-line addition here.
const POST_MARKERS: &[&str] = &["instagram.com/p/", "instagram.com/tv/"];

/// A candidate URL that passed validation. Immutable; not persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PostUrl(String);

impl PostUrl {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for PostUrl {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Returns true iff `input` looks like a downloadable post URL.
/// Pure and synchronous; no I/O.
pub fn validate(input: &str) -> bool {
    (input.starts_with("https://") || input.starts_with("http://"))
        && POST_MARKERS.iter().any(|m| input.contains(m))
}

/// Like [`validate`] but yields a typed rejection, distinguishing empty
/// input from a malformed URL so the caller can show field-level messages.
pub fn check(input: &str) -> Result<PostUrl, InputError> {
    if input.is_empty() {
        return Err(InputError::Empty);
    }
    if !validate(input) {
        return Err(InputError::InvalidFormat);
    }
    Ok(PostUrl(input.to_string()))
}
