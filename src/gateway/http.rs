use std::sync::Arc;
use std::time::Duration;

use http::header::AUTHORIZATION;
use http::StatusCode;
use reqwest::Client;
use serde::de::DeserializeOwned;
use tracing::{debug, warn};

use crate::cache::token_cache::TokenCache;
use crate::domain::model::location::validate_latitude_longitude;
use crate::domain::model::{
    AlternateIdsResponse, DirectionsResponse, ErrorResponse, EtaResponse, Place, PlaceResults, PlacesResponse, SearchAutocompleteResponse,
    SearchResponse,
};
use crate::domain::request::{
    encode, AlternateIdsInput, DirectionsInput, EtaInput, GeocodeInput, PlaceLookupInput, SearchAutocompleteInput,
    SearchInput,
};
use crate::error::{MapsError, Result};
use crate::gateway::MapsGateway;
use crate::helpers::time::get_instant;
use crate::observability::metrics::get_metrics;
use crate::utils::constants::*;

/// Maps Server gateway over reqwest. Each call authorizes with an access
/// token taken from the shared [`TokenCache`].
#[derive(Clone)]
pub struct HttpMapsGateway {
    tokens: Arc<TokenCache>,
    client: Client,
    api_url: String,
    timeout: Duration,
}

impl HttpMapsGateway {
    pub fn new(tokens: Arc<TokenCache>, client: Client, api_url: &str, timeout: Duration) -> Self {
        Self {
            tokens,
            client,
            api_url: api_url.trim_end_matches('/').to_owned(),
            timeout,
        }
    }

    pub fn token_cache(&self) -> &Arc<TokenCache> {
        &self.tokens
    }

    fn endpoint(&self, path: &str, query: &str) -> String {
        format!("{}{}{}", self.api_url, path, query)
    }

    async fn invoke_api<T: DeserializeOwned>(&self, operation: &'static str, url: String) -> Result<T> {
        // token failures surface as-is, under the token operation
        let access_token = self.tokens.get_access_token().await?;

        let metrics = get_metrics();
        let start = get_instant();
        metrics.api_requests.with_label_values(&[operation]).inc();

        let result = self.send::<T>(operation, &url, &access_token).await;
        metrics
            .api_duration
            .with_label_values(&[operation])
            .observe(start.elapsed().as_secs_f64());

        if let Err(err) = &result {
            let reason = match err {
                MapsError::Api { .. } => "status",
                _ => "client",
            };
            metrics.api_failures.with_label_values(&[operation, reason]).inc();
            let message = err
                .response_body()
                .and_then(ErrorResponse::from_body)
                .map(|response| response.message);
            warn!(operation, error = %err, status = ?err.status(), message = ?message, "Maps API call failed");
        }
        result
    }

    async fn send<T: DeserializeOwned>(&self, operation: &'static str, url: &str, access_token: &str) -> Result<T> {
        debug!(operation, url, "calling Maps API");
        let response = self
            .client
            .get(url)
            .timeout(self.timeout)
            .header(AUTHORIZATION, format!("Bearer {}", access_token))
            .send()
            .await
            .map_err(|err| MapsError::client(operation, err))?;

        let status = response.status();
        let body = response
            .bytes()
            .await
            .map_err(|err| MapsError::client(operation, err))?;

        if status != StatusCode::OK {
            return Err(MapsError::api(operation, status.as_u16(), String::from_utf8_lossy(&body)));
        }

        serde_json::from_slice(&body).map_err(|err| MapsError::client(operation, err))
    }
}

fn language_suffix(separator: char, language: &str) -> String {
    let language = language.trim();
    if language.is_empty() {
        String::new()
    } else {
        format!("{}lang={}", separator, encode(language))
    }
}

impl MapsGateway for HttpMapsGateway {
    async fn geocode(&self, input: &GeocodeInput) -> Result<PlaceResults> {
        self.invoke_api(GEOCODE_OPERATION, self.endpoint(GEOCODE_PATH, &input.to_query_string()))
            .await
    }

    async fn search(&self, input: &SearchInput) -> Result<SearchResponse> {
        self.invoke_api(SEARCH_OPERATION, self.endpoint(SEARCH_PATH, &input.to_query_string()))
            .await
    }

    async fn autocomplete(&self, input: &SearchAutocompleteInput) -> Result<SearchAutocompleteResponse> {
        self.invoke_api(AUTOCOMPLETE_OPERATION, self.endpoint(AUTOCOMPLETE_PATH, &input.to_query_string()))
            .await
    }

    async fn resolve_completion_url(&self, completion_url: &str) -> Result<SearchResponse> {
        if !completion_url.starts_with('/') {
            return Err(MapsError::invalid(format!(
                "completion URL must be a path relative to the API server: {}",
                completion_url
            )));
        }
        self.invoke_api(SEARCH_OPERATION, format!("{}{}", self.api_url, completion_url))
            .await
    }

    async fn reverse_geocode(&self, latitude: f64, longitude: f64, language: &str) -> Result<PlaceResults> {
        validate_latitude_longitude(latitude, longitude)?;
        let query = format!("?loc={:?},{:?}{}", latitude, longitude, language_suffix('&', language));
        self.invoke_api(REVERSE_GEOCODE_OPERATION, self.endpoint(REVERSE_GEOCODE_PATH, &query))
            .await
    }

    async fn directions(&self, input: &DirectionsInput) -> Result<DirectionsResponse> {
        self.invoke_api(DIRECTIONS_OPERATION, self.endpoint(DIRECTIONS_PATH, &input.to_query_string()))
            .await
    }

    async fn etas(&self, input: &EtaInput) -> Result<EtaResponse> {
        self.invoke_api(ETAS_OPERATION, self.endpoint(ETAS_PATH, &input.to_query_string()))
            .await
    }

    async fn lookup_place(&self, place_id: &str, language: &str) -> Result<Place> {
        let place_id = place_id.trim();
        if place_id.is_empty() {
            return Err(MapsError::invalid("place id cannot be blank."));
        }
        let path = format!("{}/{}", PLACE_PATH, encode(place_id));
        self.invoke_api(PLACE_OPERATION, self.endpoint(&path, &language_suffix('?', language)))
            .await
    }

    async fn lookup_places(&self, input: &PlaceLookupInput) -> Result<PlacesResponse> {
        self.invoke_api(PLACE_OPERATION, self.endpoint(PLACE_PATH, &input.to_query_string()))
            .await
    }

    async fn lookup_alternate_ids(&self, input: &AlternateIdsInput) -> Result<AlternateIdsResponse> {
        self.invoke_api(
            PLACE_ALTERNATE_IDS_OPERATION,
            self.endpoint(PLACE_ALTERNATE_IDS_PATH, &input.to_query_string()),
        )
        .await
    }
}
