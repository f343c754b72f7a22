//! Cooperative cancellation for in-flight requests.
//!
//! Each grab request owns one token; clones share the flag. The fetch write
//! callback checks the token per chunk, so an abort tears down the transfer
//! at the next chunk boundary and the connection is released with the curl
//! handle on every exit path.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// Shared abort flag for one request. Cheap to clone.
#[derive(Debug, Clone, Default)]
pub struct AbortToken(Arc<AtomicBool>);

impl AbortToken {
    pub fn new() -> Self {
        Self::default()
    }

    /// Request cancellation. Idempotent.
    pub fn abort(&self) {
        self.0.store(true, Ordering::Relaxed);
    }

    pub fn is_aborted(&self) -> bool {
        self.0.load(Ordering::Relaxed)
    }
}
