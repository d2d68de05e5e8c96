use serde::{Deserialize, Serialize};

use super::categories::PoiCategory;
use super::location::{Location, MapRegion};
use super::places::StructuredAddress;
use super::serde_helpers::{lenient, non_null_vec};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchResponsePlace {
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
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub poi_category: Option<PoiCategory>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaginationInfo {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub next_page_token: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub prev_page_token: Option<String>,
    #[serde(default)]
    pub total_page_count: u64,
    #[serde(default)]
    pub total_results: u64,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchResponse {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display_map_region: Option<MapRegion>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pagination_info: Option<PaginationInfo>,
    #[serde(default, deserialize_with = "non_null_vec")]
    pub results: Vec<SearchResponsePlace>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AutocompleteResult {
    pub completion_url: String,
    #[serde(default, deserialize_with = "non_null_vec")]
    pub display_lines: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<Location>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub structured_address: Option<StructuredAddress>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct SearchAutocompleteResponse {
    #[serde(default, deserialize_with = "non_null_vec")]
    pub results: Vec<AutocompleteResult>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn display_map_region_absent_or_null() {
        let response: SearchResponse = serde_json::from_value(json!({"results": []})).unwrap();
        assert!(response.display_map_region.is_none());

        let response: SearchResponse =
            serde_json::from_value(json!({"displayMapRegion": null, "results": []})).unwrap();
        assert!(response.display_map_region.is_none());
    }

    #[test]
    fn unknown_poi_category_is_dropped() {
        let response: SearchResponse = serde_json::from_value(json!({
            "results": [{
                "name": "Blue Bottle",
                "coordinate": {"latitude": 37.78, "longitude": -122.40},
                "country": "United States",
                "countryCode": "US",
                "poiCategory": "CoffeeRoastery"
            }, {
                "name": "SFO",
                "coordinate": {"latitude": 37.62, "longitude": -122.38},
                "country": "United States",
                "countryCode": "US",
                "poiCategory": "Airport"
            }]
        }))
        .unwrap();
        assert!(response.results[0].poi_category.is_none());
        assert_eq!(response.results[1].poi_category, Some(PoiCategory::Airport));
    }

    #[test]
    fn autocomplete_drops_null_results() {
        let response: SearchAutocompleteResponse = serde_json::from_value(json!({
            "results": [{"completionUrl": "/v1/search?q=test", "displayLines": ["Line 1", null]}, null]
        }))
        .unwrap();
        assert_eq!(response.results.len(), 1);
        assert_eq!(response.results[0].display_lines, vec!["Line 1"]);
    }
}
