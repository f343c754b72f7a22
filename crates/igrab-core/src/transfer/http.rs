//! HTTP transfer backend: single-stream curl GET written straight to disk.

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::mpsc::{self, Receiver, Sender};
use std::sync::Mutex;
use std::thread;
use std::time::Duration;

use anyhow::{Context, Result};

use super::{TransferInitiator, TransferRequest};

/// Completion report for one transfer. Sent only for requests that asked
/// for a visible notification.
#[derive(Debug)]
pub struct TransferNotice {
    pub destination_name: String,
    pub outcome: Result<u64, String>,
}

/// Transfer initiator that downloads each request on a background thread.
///
/// Fire-and-forget for the caller; a short-lived host can call
/// [`HttpTransfer::wait_idle`] to drain in-flight transfers before exit.
pub struct HttpTransfer {
    download_dir: PathBuf,
    notice_tx: Sender<TransferNotice>,
    workers: Mutex<Vec<thread::JoinHandle<()>>>,
}

impl HttpTransfer {
    /// Creates a transfer backend writing into `download_dir`, plus the
    /// receiving end for completion notices.
    pub fn new(download_dir: PathBuf) -> (Self, Receiver<TransferNotice>) {
        let (notice_tx, notice_rx) = mpsc::channel();
        (
            Self {
                download_dir,
                notice_tx,
                workers: Mutex::new(Vec::new()),
            },
            notice_rx,
        )
    }

    /// Blocks until every transfer started so far has finished.
    pub fn wait_idle(&self) {
        let workers = std::mem::take(&mut *self.workers.lock().unwrap());
        for handle in workers {
            let _ = handle.join();
        }
    }
}

impl TransferInitiator for HttpTransfer {
    fn initiate(&self, request: TransferRequest) -> Result<()> {
        let path = self.download_dir.join(&request.destination_name);
        let notice_tx = self.notice_tx.clone();

        let handle = thread::spawn(move || {
            let outcome = match download_to_file(&request.source_url, &path) {
                Ok(bytes) => {
                    tracing::info!(
                        "transfer complete: {} -> {} ({} bytes)",
                        request.source_url,
                        path.display(),
                        bytes
                    );
                    Ok(bytes)
                }
                Err(e) => {
                    tracing::warn!("transfer of {} failed: {:#}", request.source_url, e);
                    let _ = fs::remove_file(&path);
                    Err(format!("{e:#}"))
                }
            };
            if request.notify_on_completion {
                let _ = notice_tx.send(TransferNotice {
                    destination_name: request.destination_name,
                    outcome,
                });
            }
        });

        self.workers.lock().unwrap().push(handle);
        Ok(())
    }
}

/// Downloads `url` into `dest` with a single GET. Returns bytes written.
fn download_to_file(url: &str, dest: &Path) -> Result<u64> {
    let mut file = fs::File::create(dest)
        .with_context(|| format!("create {}", dest.display()))?;
    let mut written: u64 = 0;

    let mut easy = curl::easy::Easy::new();
    easy.url(url).context("invalid URL")?;
    easy.follow_location(true)?;
    easy.max_redirections(10)?;
    easy.connect_timeout(Duration::from_secs(30))?;
    easy.low_speed_limit(1024)?;
    easy.low_speed_time(Duration::from_secs(60))?;

    {
        let mut transfer = easy.transfer();
        transfer.write_function(|data| {
            match file.write_all(data) {
                Ok(()) => {
                    written += data.len() as u64;
                    Ok(data.len())
                }
                Err(e) => {
                    tracing::warn!("write to {} failed: {}", dest.display(), e);
                    Ok(0) // abort transfer
                }
            }
        })?;
        transfer.perform().context("GET request failed")?;
    }

    let code = easy.response_code().context("no response code")?;
    if !(200..300).contains(&code) {
        anyhow::bail!("GET {} returned HTTP {}", url, code);
    }

    file.flush()?;
    Ok(written)
}
