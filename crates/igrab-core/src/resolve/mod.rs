//! Media resolution: fetch a post page, extract the direct media URL.
//!
//! One resolution = one HTTP round trip. No retries, no caching. The fetch
//! half uses curl with a browser User-Agent (the server varies its markup by
//! client identification); the parse half reads the `medium` meta tag and
//! dispatches to the matching og: tag.

mod fetch;
mod page;

use std::time::Duration;

use crate::control::AbortToken;
use crate::error::ResolveError;
use crate::media::MediaDescriptor;
use crate::validate::PostUrl;

/// Resolves a validated post URL to a media descriptor.
///
/// Blocks on network I/O; call from `spawn_blocking` if used from async
/// code. Stateless: repeated calls against the same document yield the same
/// descriptor. An abort via `token` surfaces as [`ResolveError::Aborted`].
pub fn resolve(
    url: &PostUrl,
    user_agent: &str,
    connect_timeout: Duration,
    token: &AbortToken,
) -> Result<MediaDescriptor, ResolveError> {
    let html = fetch::fetch_page(url.as_str(), user_agent, connect_timeout, token)?;
    let descriptor = page::extract_media(&html)?;
    tracing::debug!("resolved {} -> {:?}", url, descriptor);
    Ok(descriptor)
}
