//! Helpers behind the `maps-cli` binary: completion URL rewriting, location
//! hint parsing and plain-text output.

pub mod format;

use thiserror::Error;

use crate::client::MapsClient;
use crate::domain::model::UserLocation;
use crate::domain::request::GeocodeInput;
use crate::gateway::MapsGateway;
use crate::utils::constants::{API_SERVER, APPLE_MAPS_WEB_SERVER, ENV_USER_LOCATION, ENV_USER_LOCATION_QUERY};

const WEB_QUERY_PARAMETER: &str = "q";

/// Bad invocation. The binary exits with status 2 on these.
#[derive(Debug, Error)]
#[error("{0}")]
pub struct UsageError(pub String);

impl UsageError {
    pub fn new(message: impl Into<String>) -> Self {
        Self(message.into())
    }
}

/// Strips the API server prefix so absolute and relative completion URLs
/// resolve the same way.
pub fn normalize_completion_url(completion_url: &str) -> String {
    let trimmed = completion_url.trim();
    trimmed.strip_prefix(API_SERVER).unwrap_or(trimmed).to_owned()
}

pub fn to_api_url(completion_url: &str) -> String {
    format!("{}{}", API_SERVER, normalize_completion_url(completion_url))
}

/// Apple Maps web link for the completion's `q` parameter, if it has one.
pub fn to_web_url(completion_url: &str) -> Option<String> {
    let normalized = normalize_completion_url(completion_url);
    extract_query_parameter(&normalized, WEB_QUERY_PARAMETER)
        .map(|query| format!("{}/?{}={}", APPLE_MAPS_WEB_SERVER, WEB_QUERY_PARAMETER, query))
}

/// Value of `name` in the query of `url`, left encoded. Blank values count as absent.
fn extract_query_parameter<'a>(url: &'a str, name: &str) -> Option<&'a str> {
    let (_, query) = url.split_once('?')?;
    query
        .split('&')
        .filter_map(|parameter| parameter.split_once('='))
        .find(|(key, _)| !key.is_empty() && *key == name)
        .map(|(_, value)| value)
        .filter(|value| !value.trim().is_empty())
}

/// Parses `"<latitude>,<longitude>"`. Blank input means no location.
pub fn parse_user_location(text: Option<&str>) -> Result<Option<UserLocation>, UsageError> {
    let text = match text.map(str::trim) {
        Some(text) if !text.is_empty() => text,
        _ => return Ok(None),
    };

    let parts: Vec<&str> = text.split(',').collect();
    if parts.len() != 2 {
        return Err(UsageError::new(format!(
            "Invalid {}. Expected \"<latitude>,<longitude>\".",
            ENV_USER_LOCATION
        )));
    }
    let latitude = parse_coordinate(parts[0], "latitude")?;
    let longitude = parse_coordinate(parts[1], "longitude")?;
    user_location(latitude, longitude).map(Some)
}

pub fn user_location(latitude: f64, longitude: f64) -> Result<UserLocation, UsageError> {
    UserLocation::from_latitude_longitude(latitude, longitude).map_err(|err| UsageError::new(err.to_string()))
}

pub fn parse_coordinate(raw: &str, label: &str) -> Result<f64, UsageError> {
    raw.trim()
        .parse::<f64>()
        .map_err(|_| UsageError::new(format!("Invalid {}: {}", label, raw.trim())))
}

/// Splits `us, ca` into `["US", "CA"]`.
pub fn parse_countries(raw: &[String]) -> Vec<String> {
    raw.iter()
        .flat_map(|value| value.split(','))
        .map(str::trim)
        .filter(|country| !country.is_empty())
        .map(str::to_uppercase)
        .collect()
}

/// Trimmed, non-blank value of an environment variable.
pub fn read_setting(name: &str) -> Option<String> {
    std::env::var(name)
        .ok()
        .map(|value| value.trim().to_owned())
        .filter(|value| !value.is_empty())
}

/// Location hint for search-like commands: the explicit flag, then
/// `APPLE_MAPS_USER_LOCATION`, then the first geocode result for
/// `APPLE_MAPS_USER_LOCATION_QUERY`.
pub async fn resolve_user_location<G: MapsGateway>(
    client: &MapsClient<G>,
    explicit: Option<UserLocation>,
    language: Option<&str>,
    limit_to_countries: &[String],
) -> anyhow::Result<Option<UserLocation>> {
    if explicit.is_some() {
        return Ok(explicit);
    }
    if let Some(location) = parse_user_location(read_setting(ENV_USER_LOCATION).as_deref())? {
        return Ok(Some(location));
    }
    let Some(query) = read_setting(ENV_USER_LOCATION_QUERY) else {
        return Ok(None);
    };

    let mut builder = GeocodeInput::builder(query);
    if let Some(language) = language {
        builder = builder.language(language);
    }
    if !limit_to_countries.is_empty() {
        builder = builder.limit_to_countries(limit_to_countries.to_vec());
    }
    let results = client.geocode(&builder.build()).await?;
    let first = results.results.first().ok_or_else(|| {
        UsageError::new(format!(
            "Unable to resolve {} to coordinates (no geocode results).",
            ENV_USER_LOCATION_QUERY
        ))
    })?;
    Ok(Some(user_location(first.coordinate.latitude(), first.coordinate.longitude())?))
}
