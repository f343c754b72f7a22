//! `igrab grab <url>` – resolve a post and download its media file.

use std::sync::Arc;

use anyhow::Result;
use igrab_core::config::IgrabConfig;
use igrab_core::error::MEDIA_FAILURE_MESSAGE;
use igrab_core::grab::{self, Outcome};
use igrab_core::transfer::{HttpTransfer, TransferInitiator};
use std::path::PathBuf;

pub async fn run_grab(
    cfg: &IgrabConfig,
    url: &str,
    download_dir: Option<PathBuf>,
    notify: bool,
) -> Result<()> {
    let dir = match download_dir.or_else(|| cfg.download_dir.clone()) {
        Some(dir) => dir,
        None => std::env::current_dir()?,
    };

    let (transfer, notices) = HttpTransfer::new(dir.clone());
    let transfer = Arc::new(transfer);
    let initiator: Arc<dyn TransferInitiator> = transfer.clone();

    let handle = match grab::submit(url, cfg, initiator, notify) {
        Ok(handle) => handle,
        Err(input_err) => anyhow::bail!("{input_err}"),
    };

    match handle.wait().await {
        Outcome::TransferStarted { destination_name } => {
            println!("Downloading to {}", dir.join(&destination_name).display());
        }
        other => {
            tracing::warn!("grab ended without a transfer: {:?}", other);
            anyhow::bail!("{MEDIA_FAILURE_MESSAGE}");
        }
    }

    // The transfer runs on its own thread; keep the process alive until it
    // finishes, then surface the completion notice.
    transfer.wait_idle();
    while let Ok(notice) = notices.try_recv() {
        match notice.outcome {
            Ok(bytes) => println!("Saved {} ({} bytes)", notice.destination_name, bytes),
            Err(e) => anyhow::bail!("download of {} failed: {}", notice.destination_name, e),
        }
    }

    Ok(())
}
