//! Error taxonomy for validation and resolution.
//!
//! Resolution failures are kept as distinct variants for logging and tests,
//! but every one of them collapses into the same user-facing message via
//! [`ResolveError::user_message`]; the surrounding application never shows
//! the caller more detail than "the media file couldn't be loaded".

use thiserror::Error;

/// Single user-facing message for any failed resolution, whatever the cause.
pub const MEDIA_FAILURE_MESSAGE: &str = "Couldn't load the media file properly";

/// Rejection of the raw input string, detected synchronously before any I/O.
/// The display strings are the field-level messages shown to the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum InputError {
    #[error("URL cannot be empty")]
    Empty,
    #[error("Invalid URL entered")]
    InvalidFormat,
}

/// Failure while turning a post URL into a direct media URL.
#[derive(Debug, Error)]
pub enum ResolveError {
    /// Transport failure (DNS, connection, timeout) reported by curl.
    #[error("fetch failed: {0}")]
    Network(#[from] curl::Error),
    /// Response had a non-2xx status.
    #[error("GET returned HTTP {0}")]
    Http(u32),
    /// The page has no `meta[name=medium]` tag at all.
    #[error("page has no medium meta tag")]
    MissingMediumTag,
    /// The medium was recognized but the matching og: tag is absent.
    #[error("page has no {property} meta tag")]
    MissingMediaUrl { property: &'static str },
    /// The in-flight fetch was cancelled via its abort token.
    #[error("resolution aborted")]
    Aborted,
}

impl ResolveError {
    /// Collapses the taxonomy into the single message shown to the user.
    pub fn user_message(&self) -> &'static str {
        MEDIA_FAILURE_MESSAGE
    }
}
