use crate::domain::Waypoint;
use chrono::Utc;
use serde::Serialize;

/// One synthetic location reading as the bridge expects it. The bridge
/// stamps the monotonic timestamp itself, so only wall-clock time travels.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Fix {
    pub latitude: f64,
    pub longitude: f64,
    pub altitude: f64,
    pub accuracy: f32, // In meters
    pub speed: f32,
    pub time: i64, // Epoch milliseconds
}

const ACCURACY_METERS: f32 = 500.0;

impl Fix {
    /// Builds a fix for the waypoint, stamped with the current wall-clock time.
    pub fn now(waypoint: &Waypoint) -> Fix {
        Fix {
            latitude: waypoint.latitude(),
            longitude: waypoint.longitude(),
            altitude: 0.0,
            accuracy: ACCURACY_METERS,
            speed: 0.0,
            time: Utc::now().timestamp_millis(),
        }
    }
}
