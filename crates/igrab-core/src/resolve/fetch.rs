//! Page fetch via curl: single GET, body collected in memory.

use std::str;
use std::time::Duration;

use crate::control::AbortToken;
use crate::error::ResolveError;

/// Performs a single GET and returns the response body as text.
///
/// Follows redirects. The abort token is checked per received chunk; an
/// aborted transfer returns [`ResolveError::Aborted`]. The curl handle (and
/// with it the connection) is dropped on every exit path.
pub(super) fn fetch_page(
    url: &str,
    user_agent: &str,
    connect_timeout: Duration,
    token: &AbortToken,
) -> Result<String, ResolveError> {
    let mut body: Vec<u8> = Vec::new();

    let mut easy = curl::easy::Easy::new();
    easy.url(url)?;
    easy.useragent(user_agent)?;
    easy.follow_location(true)?;
    easy.max_redirections(10)?;
    easy.connect_timeout(connect_timeout)?;

    {
        let abort = token.clone();
        let mut transfer = easy.transfer();
        transfer.write_function(|data| {
            if abort.is_aborted() {
                return Ok(0); // abort transfer
            }
            body.extend_from_slice(data);
            Ok(data.len())
        })?;
        if let Err(e) = transfer.perform() {
            if token.is_aborted() {
                return Err(ResolveError::Aborted);
            }
            return Err(ResolveError::Network(e));
        }
    }

    let code = easy.response_code()?;
    if !(200..300).contains(&code) {
        return Err(ResolveError::Http(code));
    }

    Ok(String::from_utf8_lossy(&body).into_owned())
}
