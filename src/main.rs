use crate::app_config::AppConfig;
use crate::bridge::gateway::BridgeGateway;
use crate::controller::MockLocationController;
use crate::domain::events::StatusEvent;
use crate::service::{ServiceCommand, service};
use crate::status_listener::status_listener;
use crate::waypoint_loader::load_waypoints_from;
use std::sync::Arc;
use tokio::sync::mpsc;
use tokio::task;
use tracing::info;

mod app_config;
mod bridge;
mod controller;
mod domain;
mod service;
mod status_listener;
mod waypoint_loader;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt().with_max_level(tracing::Level::INFO).init();

    info!("🪵 Starting {} v{}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"));

    let config = Arc::new(AppConfig::load());
    info!("✅  Loaded configuration");

    let client = bridge::client::new_client(&config)?;
    bridge::probe::await_bridge(&client, &config).await?;

    let waypoints = load_waypoints_from(config.waypoints().directory(), "json").await?;
    let waypoint = waypoints
        .iter()
        .find(|waypoint| waypoint.name() == config.core().waypoint())
        .cloned()
        .ok_or_else(|| format!("waypoint '{}' is not in the catalogue", config.core().waypoint()))?;
    info!("✅  Selected waypoint '{}'", waypoint.name());

    let (status_tx, status_rx) = mpsc::channel::<StatusEvent>(config.core().status_buffer_size());
    task::spawn(async move {
        status_listener(status_rx).await;
    });
    info!("✅  Initialized status listener");

    let gateway = Arc::new(BridgeGateway::new(client, config.clone()));
    let controller = MockLocationController::new(gateway, status_tx, config.core().tick_interval());

    let (tx, rx) = mpsc::channel::<ServiceCommand>(8);
    let mut service_task = task::spawn(service(tx.clone(), rx, controller));
    tx.send(ServiceCommand::Start(waypoint)).await?;
    info!("🔥 {} is up and running", env!("CARGO_PKG_NAME"));

    tokio::select! {
        _ = tokio::signal::ctrl_c() => {
            info!("Received shutdown signal");
            tx.send(ServiceCommand::Stop).await.unwrap_or_default();
            service_task.await?;
        }
        result = &mut service_task => {
            result?;
        }
    }

    Ok(())
}
