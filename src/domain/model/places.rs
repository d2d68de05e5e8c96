use serde::{Deserialize, Serialize};

use super::categories::PlaceLookupErrorCode;
use super::location::{Location, MapRegion};
use super::serde_helpers::non_null_vec;

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StructuredAddress {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub administrative_area: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub administrative_area_code: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sub_administrative_area: Option<String>,
    #[serde(default, deserialize_with = "non_null_vec")]
    pub areas_of_interest: Vec<String>,
    #[serde(default, deserialize_with = "non_null_vec")]
    pub dependent_localities: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub full_thoroughfare: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub locality: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub post_code: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sub_locality: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sub_thoroughfare: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub thoroughfare: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Place {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default, deserialize_with = "non_null_vec")]
    pub alternate_ids: Vec<String>,
    pub name: String,
    pub coordinate: Location,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display_map_region: Option<MapRegion>,
    #[serde(default, deserialize_with = "non_null_vec")]
    pub formatted_address_lines: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub structured_address: Option<StructuredAddress>,
    pub country: String,
    pub country_code: String,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct PlaceResults {
    #[serde(default, deserialize_with = "non_null_vec")]
    pub results: Vec<Place>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlaceLookupError {
    pub error_code: PlaceLookupErrorCode,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct PlacesResponse {
    #[serde(default, deserialize_with = "non_null_vec")]
    pub results: Vec<Place>,
    #[serde(default, deserialize_with = "non_null_vec")]
    pub errors: Vec<PlaceLookupError>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AlternateIdsEntry {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default, deserialize_with = "non_null_vec")]
    pub alternate_ids: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct AlternateIdsResponse {
    #[serde(default, deserialize_with = "non_null_vec")]
    pub results: Vec<AlternateIdsEntry>,
    #[serde(default, deserialize_with = "non_null_vec")]
    pub errors: Vec<PlaceLookupError>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn lookup_error_with_and_without_id() {
        let error: PlaceLookupError =
            serde_json::from_value(json!({"errorCode": "FAILED_INVALID_ID", "id": "invalid-place-id"})).unwrap();
        assert_eq!(error.error_code, PlaceLookupErrorCode::FailedInvalidId);
        assert_eq!(error.id.as_deref(), Some("invalid-place-id"));

        let error: PlaceLookupError = serde_json::from_value(json!({"errorCode": "FAILED_INTERNAL_ERROR"})).unwrap();
        assert!(error.id.is_none());

        let error: PlaceLookupError =
            serde_json::from_value(json!({"errorCode": "FAILED_INTERNAL_ERROR", "id": null})).unwrap();
        assert!(error.id.is_none());
    }

    #[test]
    fn null_elements_are_dropped() {
        let response: AlternateIdsResponse = serde_json::from_value(json!({
            "results": [{"id": "primary-id", "alternateIds": ["alternate-id", null]}, null],
            "errors": [null, {"errorCode": "FAILED_NOT_FOUND", "id": "x"}]
        }))
        .unwrap();
        assert_eq!(response.results.len(), 1);
        assert_eq!(response.results[0].alternate_ids, vec!["alternate-id"]);
        assert_eq!(response.errors.len(), 1);
    }

    #[test]
    fn place_decodes_and_ignores_unknown_fields() {
        let place: Place = serde_json::from_value(json!({
            "name": "Apple Park",
            "coordinate": {"latitude": 37.3349, "longitude": -122.009},
            "formattedAddressLines": ["One Apple Park Way", null, "Cupertino, CA 95014"],
            "structuredAddress": {"locality": "Cupertino", "areasOfInterest": null},
            "country": "United States",
            "countryCode": "US",
            "somethingNew": true
        }))
        .unwrap();
        assert_eq!(place.formatted_address_lines.len(), 2);
        assert!(place.id.is_none());
        assert!(place.alternate_ids.is_empty());
        assert_eq!(place.structured_address.unwrap().locality.as_deref(), Some("Cupertino"));
    }
}
