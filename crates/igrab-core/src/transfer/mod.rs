//! Transfer initiation: the seam between resolution and the byte transfer.
//!
//! The grab pipeline only depends on the [`TransferInitiator`] trait; the
//! production implementation streams over HTTP, tests can substitute a
//! recording stub.

mod http;

pub use http::{HttpTransfer, TransferNotice};

use uuid::Uuid;

/// Everything the transfer subsystem needs for one download.
/// Handed off once; the resolution side does not track it further.
#[derive(Debug, Clone)]
pub struct TransferRequest {
    /// Direct media URL to fetch.
    pub source_url: String,
    /// Fresh unique local filename (no collisions across requests).
    pub destination_name: String,
    /// Whether the host should surface a visible completion notification.
    pub notify_on_completion: bool,
}

impl TransferRequest {
    pub fn new(source_url: String, notify_on_completion: bool) -> Self {
        Self {
            source_url,
            destination_name: fresh_destination_name(),
            notify_on_completion,
        }
    }
}

/// Generates a destination filename unique across requests (UUID v4).
pub fn fresh_destination_name() -> String {
    Uuid::new_v4().to_string()
}

/// Performs the byte transfer for a request, independently of the resolution
/// call. `initiate` returns once the transfer is underway; completion is
/// reported asynchronously by the implementation (the caller fires and
/// forgets).
pub trait TransferInitiator: Send + Sync {
    fn initiate(&self, request: TransferRequest) -> anyhow::Result<()>;
}
