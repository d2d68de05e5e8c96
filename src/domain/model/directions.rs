use serde::{Deserialize, Serialize};

use super::categories::TransportType;
use super::location::Location;
use super::places::Place;
use super::serde_helpers::{lenient, non_null_nested_vec, non_null_vec};

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DirectionsRoute {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub distance_meters: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration_seconds: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub has_tolls: Option<bool>,
    #[serde(default, deserialize_with = "non_null_vec")]
    pub step_indexes: Vec<usize>,
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub transport_type: Option<TransportType>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DirectionsStep {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub step_path_index: Option<usize>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub distance_meters: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration_seconds: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub instructions: Option<String>,
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub transport_type: Option<TransportType>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DirectionsResponse {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub origin: Option<Place>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub destination: Option<Place>,
    #[serde(default, deserialize_with = "non_null_vec")]
    pub routes: Vec<DirectionsRoute>,
    #[serde(default, deserialize_with = "non_null_vec")]
    pub steps: Vec<DirectionsStep>,
    #[serde(default, deserialize_with = "non_null_nested_vec")]
    pub step_paths: Vec<Vec<Location>>,
}

impl DirectionsResponse {
    /// Steps of `route` in travel order. Indexes pointing outside `steps` are skipped.
    pub fn route_steps<'a>(&'a self, route: &'a DirectionsRoute) -> impl Iterator<Item = &'a DirectionsStep> + 'a {
        route.step_indexes.iter().filter_map(|index| self.steps.get(*index))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn decodes_routes_steps_and_paths() {
        let response: DirectionsResponse = serde_json::from_value(json!({
            "routes": [{
                "name": "I-280 S",
                "distanceMeters": 70000,
                "durationSeconds": 3600,
                "hasTolls": false,
                "stepIndexes": [0, null, 1, 7],
                "transportType": "Automobile"
            }],
            "steps": [
                {"stepPathIndex": 0, "instructions": "Head south", "transportType": "Hoverboard"},
                {"stepPathIndex": 1, "distanceMeters": 12}
            ],
            "stepPaths": [[{"latitude": 37.0, "longitude": -122.0}, null], null, [{"lat": 37.1, "lng": -122.1}]]
        }))
        .unwrap();

        let route = &response.routes[0];
        assert_eq!(route.step_indexes, vec![0, 1, 7]);
        assert_eq!(route.transport_type, Some(TransportType::Automobile));
        assert!(response.steps[0].transport_type.is_none());
        assert_eq!(response.step_paths.len(), 2);
        assert_eq!(response.step_paths[0].len(), 1);
        assert_eq!(response.step_paths[1][0].latitude(), 37.1);

        let path_indexes: Vec<_> = response.route_steps(route).map(|step| step.step_path_index).collect();
        assert_eq!(path_indexes, vec![Some(0), Some(1)]);
    }

    #[test]
    fn empty_body_defaults() {
        let response: DirectionsResponse = serde_json::from_value(json!({})).unwrap();
        assert!(response.origin.is_none());
        assert!(response.routes.is_empty());
        assert!(response.step_paths.is_empty());
    }
}
