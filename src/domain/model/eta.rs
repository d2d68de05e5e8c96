use serde::{Deserialize, Serialize};

use super::categories::TransportType;
use super::location::Location;
use super::serde_helpers::{lenient, non_null_vec};

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EtaEstimate {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub destination: Option<Location>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub distance_meters: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expected_travel_time_seconds: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub static_travel_time_seconds: Option<i64>,
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub transport_type: Option<TransportType>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct EtaResponse {
    #[serde(default, deserialize_with = "non_null_vec")]
    pub etas: Vec<EtaEstimate>,
}
