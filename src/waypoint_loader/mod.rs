mod loader;
mod waypoint_deserializer;

pub use loader::load_waypoints_from;
