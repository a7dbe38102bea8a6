use crate::domain::events::StatusEvent;
use tokio::sync::mpsc::Receiver;
use tracing::{info, instrument, warn};

/// Renders one line per controller state transition, the daemon's stand-in
/// for a notification area.
#[instrument(skip_all)]
pub async fn status_listener(mut rx: Receiver<StatusEvent>) {
    while let Some(event) = rx.recv().await {
        match event {
            StatusEvent::MockActive(waypoint) => {
                info!("🛰️ Mocking location at '{}' ({}, {})", waypoint.name(), waypoint.latitude(), waypoint.longitude());
            }
            StatusEvent::MockStopped => info!("🛑 Mock location stopped"),
            StatusEvent::Unauthorized => {
                warn!("⚠️ This app is not selected as the device's mock location source, select it in the developer settings and retry");
            }
            StatusEvent::MockFailed(reason) => warn!("⚠️ Mocking the location failed: {}", reason),
        }
    }
}
