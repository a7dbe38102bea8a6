use crate::domain::Waypoint;

/// Transition messages for the status surface, one per state change.
#[derive(Clone, Debug, PartialEq)]
pub enum StatusEvent {
    MockActive(Waypoint),
    MockStopped,
    Unauthorized,
    MockFailed(String),
}
