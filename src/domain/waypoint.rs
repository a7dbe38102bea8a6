use thiserror::Error;

/// A named coordinate the daemon can impersonate.
#[derive(Clone, Debug, PartialEq)]
pub struct Waypoint {
    name: String,
    latitude: f64,
    longitude: f64,
}

impl Waypoint {
    pub fn new(name: impl Into<String>, latitude: f64, longitude: f64) -> Result<Waypoint, WaypointError> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(WaypointError::EmptyName);
        }
        if !(-90.0..=90.0).contains(&latitude) {
            return Err(WaypointError::LatitudeOutOfRange(latitude));
        }
        if !(-180.0..=180.0).contains(&longitude) {
            return Err(WaypointError::LongitudeOutOfRange(longitude));
        }

        Ok(Waypoint { name, latitude, longitude })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn latitude(&self) -> f64 {
        self.latitude
    }

    pub fn longitude(&self) -> f64 {
        self.longitude
    }
}

#[derive(Error, Debug, PartialEq)]
pub enum WaypointError {
    #[error("a waypoint requires a non-empty name")]
    EmptyName,
    #[error("latitude {0} is outside -90..=90 degrees")]
    LatitudeOutOfRange(f64),
    #[error("longitude {0} is outside -180..=180 degrees")]
    LongitudeOutOfRange(f64),
}
