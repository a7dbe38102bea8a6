use crate::domain::events::StatusEvent;
use crate::domain::gateway::{GatewayError, ProviderGateway};
use crate::domain::{Fix, Provider, Waypoint};
use crate::service::ServiceCommand;
use std::sync::Arc;
use std::time::Duration;
use thiserror::Error;
use tokio::sync::mpsc::Sender;
use tokio::task::JoinHandle;
use tokio::time::sleep;
use tracing::{debug, info, instrument, warn};

/// Keeps the device reporting a fixed coordinate by re-registering it with
/// the bridge once per tick, and tears the registration down on stop.
///
/// At most one session runs at a time; starting while active replaces the
/// running session instead of stacking a second one.
#[derive(Debug)]
pub struct MockLocationController {
    gateway: Arc<dyn ProviderGateway>,
    status_tx: Sender<StatusEvent>,
    tick_interval: Duration,
    session: Option<Session>,
}

// Bundles the waypoint with its task so one cannot outlive the other.
#[derive(Debug)]
struct Session {
    waypoint: Waypoint,
    task: JoinHandle<()>,
}

impl MockLocationController {
    pub fn new(gateway: Arc<dyn ProviderGateway>, status_tx: Sender<StatusEvent>, tick_interval: Duration) -> Self {
        MockLocationController {
            gateway,
            status_tx,
            tick_interval,
            session: None,
        }
    }

    #[instrument(skip_all, fields(waypoint = waypoint.name()))]
    pub async fn start(&mut self, waypoint: Waypoint, service_tx: Sender<ServiceCommand>) -> Result<(), StartError> {
        debug!("🛰️ Mocking location at '{}'...", waypoint.name());

        if !self.gateway.is_authorized().await {
            warn!("🛰️ Mocking location at '{}'... failed, not the designated mock location source", waypoint.name());
            self.emit(StatusEvent::Unauthorized);
            return Err(StartError::Unauthorized);
        }

        self.cancel_session();
        unregister_all(&self.gateway).await;

        if let Err(e) = register_all(&self.gateway, &waypoint).await {
            warn!("🛰️ Mocking location at '{}'... failed, {}", waypoint.name(), e);
            self.emit(StatusEvent::MockFailed(e.to_string()));
            return Err(StartError::Registration(e));
        }

        self.emit(StatusEvent::MockActive(waypoint.clone()));

        let task = tokio::spawn(reassert_loop(self.gateway.clone(), waypoint.clone(), self.tick_interval, service_tx));
        info!("🛰️ Mocking location at '{}'... OK", waypoint.name());
        self.session = Some(Session { waypoint, task });

        Ok(())
    }

    /// Safe to call when nothing is running.
    #[instrument(skip_all)]
    pub async fn stop(&mut self) {
        self.cancel_session();
        unregister_all(&self.gateway).await;
        self.emit(StatusEvent::MockStopped);
        info!("🛑 Mock location stopped");
    }

    pub fn active_waypoint(&self) -> Option<&Waypoint> {
        self.session.as_ref().map(|session| &session.waypoint)
    }

    pub fn is_active(&self) -> bool {
        self.session.is_some()
    }

    fn cancel_session(&mut self) {
        if let Some(session) = self.session.take() {
            session.task.abort();
        }
    }

    // The status surface must never hold up the controller.
    fn emit(&self, event: StatusEvent) {
        self.status_tx.try_send(event).unwrap_or_default();
    }
}

#[derive(Error, Debug)]
pub enum StartError {
    #[error("not the designated mock location source")]
    Unauthorized,
    #[error("installing the mock location failed: {0}")]
    Registration(#[from] GatewayError),
}

/// Re-registers the unchanged waypoint every tick. A single failed tick
/// ends the session: in practice it means the bridge revoked the mock
/// authorization, so retrying would spin without recovering.
async fn reassert_loop(gateway: Arc<dyn ProviderGateway>, waypoint: Waypoint, tick_interval: Duration, service_tx: Sender<ServiceCommand>) {
    loop {
        sleep(tick_interval).await;

        if let Err(e) = register_all(&gateway, &waypoint).await {
            warn!("⚠️ Re-asserting '{}' failed, stopping: {}", waypoint.name(), e);
            service_tx.send(ServiceCommand::Stop).await.unwrap_or_default();
            break;
        }
    }
}

async fn register_all(gateway: &Arc<dyn ProviderGateway>, waypoint: &Waypoint) -> Result<(), GatewayError> {
    for provider in Provider::all() {
        gateway.register(provider, &Fix::now(waypoint)).await?;
    }

    Ok(())
}

async fn unregister_all(gateway: &Arc<dyn ProviderGateway>) {
    for provider in Provider::all() {
        gateway.unregister(provider).await;
    }
}
