use crate::app_config::AppConfig;
use reqwest::Client;
use std::error::Error;
use tokio_retry::Retry;
use tokio_retry::strategy::{ExponentialBackoff, jitter};
use tracing::{info, instrument, warn};

/// Waits until the location bridge answers its health endpoint. The daemon
/// usually races the adb port forward at boot, so keep knocking.
#[instrument(skip_all, fields(url = config.bridge().url()))]
pub async fn await_bridge(client: &Client, config: &AppConfig) -> Result<(), Box<dyn Error>> {
    let strategy = ExponentialBackoff::from_millis(config.bridge().retry_ms())
        .factor(2)
        .max_delay(config.bridge().retry_max_delay_ms())
        .map(jitter);

    let url = format!("{}/health", config.bridge().url());
    info!("Connecting to the location bridge...");
    Retry::spawn(strategy, || async {
        match client.get(&url).send().await.and_then(|response| response.error_for_status()) {
            Ok(_) => Ok(()),
            Err(e) => {
                warn!("⚠️ Location bridge not reachable yet: {}. Retrying...", e);
                Err(e)
            }
        }
    })
    .await?;
    info!("Connecting to the location bridge... OK");

    Ok(())
}
