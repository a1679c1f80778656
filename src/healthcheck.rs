use anyhow::{Context, Result, ensure};
use std::time::Duration;

/// Default management HTTP port probed by the healthcheck subcommand.
const DEFAULT_HTTP_PORT: u16 = 9610;

/// Perform a health check against the configured port (`HTTP_PORT`, falling
/// back to the default).
pub async fn healthcheck() -> Result<()> {
    let port = std::env::var("HTTP_PORT")
        .ok()
        .and_then(|p| p.parse().ok())
        .unwrap_or(DEFAULT_HTTP_PORT);
    healthcheck_with_port(port).await
}

/// Perform a health check against a specific port.
pub async fn healthcheck_with_port(port: u16) -> Result<()> {
    let client = reqwest::Client::builder()
        .timeout(Duration::from_secs(2))
        .build()
        .context("Failed to create HTTP client")?;

    let url = format!("http://127.0.0.1:{port}/v1/health");

    let resp = client
        .get(&url)
        .send()
        .await
        .with_context(|| format!("Request to {url} failed"))?;

    ensure!(
        resp.status().is_success(),
        "Health endpoint returned status: {}",
        resp.status()
    );
    Ok(())
}
