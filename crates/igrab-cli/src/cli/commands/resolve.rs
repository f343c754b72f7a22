//! `igrab resolve <url>` – print the direct media URL without downloading.

use std::time::Duration;

use anyhow::Result;
use igrab_core::config::IgrabConfig;
use igrab_core::control::AbortToken;
use igrab_core::error::MEDIA_FAILURE_MESSAGE;
use igrab_core::resolve;
use igrab_core::validate;

pub async fn run_resolve(cfg: &IgrabConfig, url: &str) -> Result<()> {
    let post_url = match validate::check(url) {
        Ok(post_url) => post_url,
        Err(input_err) => anyhow::bail!("{input_err}"),
    };

    let user_agent = cfg.user_agent.clone();
    let connect_timeout = Duration::from_secs(cfg.connect_timeout_secs);
    let descriptor = tokio::task::spawn_blocking(move || {
        resolve::resolve(&post_url, &user_agent, connect_timeout, &AbortToken::new())
    })
    .await?;

    let descriptor = match descriptor {
        Ok(descriptor) => descriptor,
        Err(e) => {
            tracing::warn!("resolution failed: {}", e);
            anyhow::bail!("{}", e.user_message());
        }
    };

    match descriptor.url() {
        Some(media_url) => {
            println!("{media_url}");
            Ok(())
        }
        None => anyhow::bail!("{MEDIA_FAILURE_MESSAGE}"),
    }
}
