//! Grab pipeline: validate, resolve off the caller's thread, hand off the
//! transfer.
//!
//! One tokio task per submitted request; requests share no mutable state and
//! run fully in parallel. Within a request, resolution strictly precedes
//! transfer initiation, and a cancelled resolution never initiates one.

use std::sync::Arc;
use std::time::Duration;

use crate::config::IgrabConfig;
use crate::control::AbortToken;
use crate::error::InputError;
use crate::resolve;
use crate::transfer::{TransferInitiator, TransferRequest};
use crate::validate;

/// Caller-visible result of one grab request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// Validation passed and resolution started (non-terminal).
    Accepted,
    RejectedEmpty,
    RejectedInvalidFormat,
    /// Network or parse failure during resolution.
    ResolutionFailed,
    /// The page declared a medium this tool does not handle.
    NotFound,
    /// The request was cancelled while resolution was in flight.
    Aborted,
    /// Terminal success: the transfer subsystem took over.
    TransferStarted { destination_name: String },
}

impl Outcome {
    pub fn rejected(err: InputError) -> Self {
        match err {
            InputError::Empty => Outcome::RejectedEmpty,
            InputError::InvalidFormat => Outcome::RejectedInvalidFormat,
        }
    }
}

/// Ownership of one in-flight request. Dropping the handle does not cancel
/// the request; call [`GrabHandle::abort`] for that.
#[derive(Debug)]
pub struct GrabHandle {
    token: AbortToken,
    task: tokio::task::JoinHandle<Outcome>,
}

impl GrabHandle {
    /// Requests cooperative cancellation of the in-flight fetch.
    pub fn abort(&self) {
        self.token.abort();
    }

    pub fn abort_token(&self) -> AbortToken {
        self.token.clone()
    }

    /// Awaits the terminal outcome of the request.
    pub async fn wait(self) -> Outcome {
        match self.task.await {
            Ok(outcome) => outcome,
            Err(e) => {
                tracing::warn!("grab task failed: {}", e);
                Outcome::ResolutionFailed
            }
        }
    }
}

/// Validates `input` and, if accepted, spawns the resolution task.
///
/// Rejections are synchronous and typed; an `Ok` means the request is
/// underway (`Outcome::Accepted` in caller terms) and the returned handle
/// owns it. Must be called within a tokio runtime.
pub fn submit(
    input: &str,
    config: &IgrabConfig,
    initiator: Arc<dyn TransferInitiator>,
    notify_on_completion: bool,
) -> Result<GrabHandle, InputError> {
    let url = validate::check(input)?;
    let token = AbortToken::new();

    let user_agent = config.user_agent.clone();
    let connect_timeout = Duration::from_secs(config.connect_timeout_secs);
    let fetch_token = token.clone();
    let task_token = token.clone();

    let task = tokio::spawn(async move {
        let resolved = tokio::task::spawn_blocking(move || {
            resolve::resolve(&url, &user_agent, connect_timeout, &fetch_token)
        })
        .await;

        let descriptor = match resolved {
            Ok(Ok(descriptor)) => descriptor,
            Ok(Err(crate::error::ResolveError::Aborted)) => return Outcome::Aborted,
            Ok(Err(e)) => {
                tracing::warn!("resolution failed: {}", e);
                return Outcome::ResolutionFailed;
            }
            Err(e) => {
                tracing::warn!("resolution task failed: {}", e);
                return Outcome::ResolutionFailed;
            }
        };

        let Some(media_url) = descriptor.url() else {
            return Outcome::NotFound;
        };

        // Abort may land between fetch completion and hand-off; a cancelled
        // resolution must not initiate a transfer.
        if task_token.is_aborted() {
            return Outcome::Aborted;
        }

        let request = TransferRequest::new(media_url.to_string(), notify_on_completion);
        let destination_name = request.destination_name.clone();
        match initiator.initiate(request) {
            Ok(()) => Outcome::TransferStarted { destination_name },
            Err(e) => {
                tracing::warn!("transfer initiation failed: {:#}", e);
                Outcome::ResolutionFailed
            }
        }
    });

    Ok(GrabHandle { token, task })
}
