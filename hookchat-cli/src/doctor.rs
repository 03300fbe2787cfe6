//! Connection diagnostics for webhook endpoints.

use anyhow::Result;
use hookchat_common::{test_connection, Config};

/// Probe the given URL (or the configured webhook) and print the verdict.
///
/// A URL passed here is deliberately not fed back into the chat surface's
/// startup gate; it only affects this probe.
pub async fn run(config: &Config, url: Option<String>) -> Result<()> {
    let target = url.unwrap_or_else(|| config.webhook_url.clone());
    let verdict = test_connection(&target).await;
    println!("{verdict}");
    Ok(())
}
