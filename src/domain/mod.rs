pub mod events;
mod fix;
pub mod gateway;
mod provider;
mod waypoint;

pub use fix::Fix;
pub use provider::Provider;
pub use waypoint::{Waypoint, WaypointError};
