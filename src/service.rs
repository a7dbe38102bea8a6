use crate::controller::MockLocationController;
use crate::domain::Waypoint;
use tokio::sync::mpsc::{Receiver, Sender};
use tracing::{info, instrument, warn};

#[derive(Debug)]
pub enum ServiceCommand {
    Start(Waypoint),
    Stop,
}

/// Funnels all start/stop requests through the single controller instance.
/// The loop keeps a clone of its own sender so the running session can
/// request its own teardown when a tick fails. Processing `Stop` ends the
/// loop, which tells the host it may terminate.
#[instrument(skip_all)]
pub async fn service(tx: Sender<ServiceCommand>, mut rx: Receiver<ServiceCommand>, mut controller: MockLocationController) {
    while let Some(command) = rx.recv().await {
        match command {
            ServiceCommand::Start(waypoint) => {
                if let Err(e) = controller.start(waypoint, tx.clone()).await {
                    warn!("⚠️ Unable to start mocking the location: {}", e);
                }
            }
            ServiceCommand::Stop => {
                controller.stop().await;
                break;
            }
        }
    }

    info!("Mock location service ended");
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Provider::{Gps, Network};
    use crate::domain::events::StatusEvent;
    use crate::domain::gateway::{FakeGateway, GatewayCall};
    use pretty_assertions::assert_eq;
    use std::sync::Arc;
    use std::time::Duration;
    use test_log::test;
    use tokio::sync::mpsc;
    use tokio::sync::mpsc::Receiver;
    use tokio::time::sleep;

    fn waypoint(name: &str) -> Waypoint {
        Waypoint::new(name, 34.6717868, 135.4989041).unwrap()
    }

    fn spawn_service(gateway: &Arc<FakeGateway>) -> (Sender<ServiceCommand>, Receiver<StatusEvent>, tokio::task::JoinHandle<()>) {
        let (status_tx, status_rx) = mpsc::channel(8);
        let controller = MockLocationController::new(gateway.clone(), status_tx, Duration::from_millis(1000));
        let (tx, rx) = mpsc::channel(8);
        let task = tokio::spawn(service(tx.clone(), rx, controller));

        (tx, status_rx, task)
    }

    #[test(tokio::test(start_paused = true))]
    async fn a_stop_command_tears_down_and_ends_the_service() {
        let gateway = Arc::new(FakeGateway::new());
        let (tx, mut status_rx, task) = spawn_service(&gateway);

        tx.send(ServiceCommand::Start(waypoint("Apple Shinsaibashi"))).await.unwrap();
        sleep(Duration::from_millis(10)).await;
        tx.send(ServiceCommand::Stop).await.unwrap();

        task.await.unwrap();
        assert_eq!(status_rx.recv().await, Some(StatusEvent::MockActive(waypoint("Apple Shinsaibashi"))));
        assert_eq!(status_rx.recv().await, Some(StatusEvent::MockStopped));
        let calls = gateway.calls();
        assert_eq!(&calls[calls.len() - 2..], &[GatewayCall::Unregister(Gps), GatewayCall::Unregister(Network)]);
    }

    #[test(tokio::test(start_paused = true))]
    async fn a_failed_tick_stops_the_service_on_its_own() {
        let gateway = Arc::new(FakeGateway::new());
        let (tx, mut status_rx, task) = spawn_service(&gateway);

        tx.send(ServiceCommand::Start(waypoint("Namba Shrine"))).await.unwrap();
        sleep(Duration::from_millis(10)).await;
        gateway.reject_registrations();

        // The next tick fails, the session requests a stop, the service ends
        task.await.unwrap();

        assert_eq!(status_rx.recv().await, Some(StatusEvent::MockActive(waypoint("Namba Shrine"))));
        assert_eq!(status_rx.recv().await, Some(StatusEvent::MockStopped));
        let calls = gateway.calls();
        assert_eq!(&calls[calls.len() - 2..], &[GatewayCall::Unregister(Gps), GatewayCall::Unregister(Network)]);
    }

    #[test(tokio::test)]
    async fn an_unauthorized_start_leaves_the_service_running() {
        let gateway = Arc::new(FakeGateway::new());
        gateway.deny_authorization();
        let (tx, mut status_rx, task) = spawn_service(&gateway);

        tx.send(ServiceCommand::Start(waypoint("Amerikamura"))).await.unwrap();

        assert_eq!(status_rx.recv().await, Some(StatusEvent::Unauthorized));
        assert!(!task.is_finished(), "expected the service to keep accepting commands");

        tx.send(ServiceCommand::Stop).await.unwrap();
        task.await.unwrap();
    }
}
