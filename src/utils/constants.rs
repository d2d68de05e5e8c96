//! Shared constants and invariants

use std::time::Duration;

pub const API_SERVER: &str = "https://maps-api.apple.com";
pub const APPLE_MAPS_WEB_SERVER: &str = "https://maps.apple.com";

pub const DEFAULT_TIMEOUT_MS: u64 = 10_000;
pub const DEFAULT_LANGUAGE: &str = "en-US";

/// Tokens are treated as expiring this long before their `exp` claim.
pub const ACCESS_TOKEN_GRACE_PERIOD: Duration = Duration::from_secs(30);

// Endpoint paths
pub const TOKEN_PATH: &str = "/v1/token";
pub const GEOCODE_PATH: &str = "/v1/geocode";
pub const SEARCH_PATH: &str = "/v1/search";
pub const AUTOCOMPLETE_PATH: &str = "/v1/searchAutocomplete";
pub const REVERSE_GEOCODE_PATH: &str = "/v1/reverseGeocode";
pub const DIRECTIONS_PATH: &str = "/v1/directions";
pub const ETAS_PATH: &str = "/v1/etas";
pub const PLACE_PATH: &str = "/v1/place";
pub const PLACE_ALTERNATE_IDS_PATH: &str = "/v1/place/alternateIds";

// Operation names reported in errors and metrics
pub const TOKEN_OPERATION: &str = "token";
pub const GEOCODE_OPERATION: &str = "geocode";
pub const SEARCH_OPERATION: &str = "search";
pub const AUTOCOMPLETE_OPERATION: &str = "searchAutocomplete";
pub const REVERSE_GEOCODE_OPERATION: &str = "reverseGeocode";
pub const DIRECTIONS_OPERATION: &str = "directions";
pub const ETAS_OPERATION: &str = "etas";
pub const PLACE_OPERATION: &str = "place";
pub const PLACE_ALTERNATE_IDS_OPERATION: &str = "placeAlternateIds";

// Environment
pub const ENV_TOKEN: &str = "APPLE_MAPS_TOKEN";
pub const ENV_USER_LOCATION: &str = "APPLE_MAPS_USER_LOCATION";
pub const ENV_USER_LOCATION_QUERY: &str = "APPLE_MAPS_USER_LOCATION_QUERY";
