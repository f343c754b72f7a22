//! `igrab check <url>` – validate a candidate post URL.

use anyhow::Result;
use igrab_core::validate;

pub fn run_check(url: &str) -> Result<()> {
    match validate::check(url) {
        Ok(post_url) => {
            println!("OK: {post_url}");
            Ok(())
        }
        Err(input_err) => anyhow::bail!("{input_err}"),
    }
}
