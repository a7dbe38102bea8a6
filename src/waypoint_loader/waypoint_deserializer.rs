use crate::domain::Waypoint;
use serde::de::Error;
use serde::{Deserialize, Deserializer};

#[derive(Deserialize)]
struct SerializedWaypoint {
    name: String,
    latitude: f64,
    longitude: f64,
}

impl<'de> Deserialize<'de> for Waypoint {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = SerializedWaypoint::deserialize(deserializer)?;

        Waypoint::new(raw.name, raw.latitude, raw.longitude).map_err(Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use serde_json::json;

    #[test]
    fn deserializes_a_valid_waypoint() {
        let value = json!({ "name": "Apple Shinsaibashi", "latitude": 34.6717868, "longitude": 135.4989041 });

        let waypoint = serde_json::from_value::<Waypoint>(value).unwrap();

        assert_eq!(waypoint, Waypoint::new("Apple Shinsaibashi", 34.6717868, 135.4989041).unwrap());
    }

    #[rstest]
    #[case::empty_name(json!({ "name": "", "latitude": 0.0, "longitude": 0.0 }))]
    #[case::missing_name(json!({ "latitude": 0.0, "longitude": 0.0 }))]
    #[case::missing_latitude(json!({ "name": "P", "longitude": 0.0 }))]
    #[case::latitude_out_of_range(json!({ "name": "P", "latitude": 91.0, "longitude": 0.0 }))]
    #[case::longitude_out_of_range(json!({ "name": "P", "latitude": 0.0, "longitude": -181.0 }))]
    #[case::latitude_not_a_number(json!({ "name": "P", "latitude": "34", "longitude": 0.0 }))]
    fn fails_for_an_invalid_waypoint(#[case] value: serde_json::Value) {
        let result = serde_json::from_value::<Waypoint>(value);

        assert!(result.is_err());
    }
}
