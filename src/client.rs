//! High-level entry point. Wires configuration, the token cache and the
//! HTTP gateway together and applies the configured default language.

use std::sync::Arc;

use futures::future::try_join_all;
use reqwest::Client;

use crate::cache::token_cache::TokenCache;
use crate::config::settings::ClientConfig;
use crate::domain::model::{
    AlternateIdsResponse, AutocompleteResult, DirectionsResponse, EtaResponse, Place, PlaceResults, PlacesResponse,
    SearchAutocompleteResponse, SearchResponse,
};
use crate::domain::request::{
    AlternateIdsInput, DirectionsInput, EtaInput, GeocodeInput, PlaceLookupInput, SearchAutocompleteInput, SearchInput,
};
use crate::error::{MapsError, Result};
use crate::gateway::{HttpMapsGateway, MapsGateway};

const HTTP_CLIENT_OPERATION: &str = "httpClient";

pub struct MapsClient<G = HttpMapsGateway> {
    gateway: G,
    default_language: String,
}

impl MapsClient {
    /// Client authorized by `credential`, the long-lived Maps token.
    pub fn new(credential: impl Into<String>, config: &ClientConfig) -> Result<Self> {
        let credential = credential.into().trim().to_owned();
        if credential.is_empty() {
            return Err(MapsError::invalid("authorization token cannot be blank."));
        }

        let http = Client::builder()
            .build()
            .map_err(|err| MapsError::client(HTTP_CLIENT_OPERATION, err))?;
        let tokens = Arc::new(TokenCache::from_credential(
            http.clone(),
            &config.api_url,
            credential,
            config.origin.clone(),
            config.timeout(),
        ));
        let gateway = HttpMapsGateway::new(tokens, http, &config.api_url, config.timeout());

        Ok(Self::from_gateway(gateway, &config.default_language))
    }
}

impl<G: MapsGateway> MapsClient<G> {
    pub fn from_gateway(gateway: G, default_language: &str) -> Self {
        Self {
            gateway,
            default_language: default_language.to_owned(),
        }
    }

    pub fn gateway(&self) -> &G {
        &self.gateway
    }

    pub async fn geocode(&self, input: &GeocodeInput) -> Result<PlaceResults> {
        self.gateway.geocode(input).await
    }

    pub async fn search(&self, input: &SearchInput) -> Result<SearchResponse> {
        self.gateway.search(input).await
    }

    pub async fn autocomplete(&self, input: &SearchAutocompleteInput) -> Result<SearchAutocompleteResponse> {
        self.gateway.autocomplete(input).await
    }

    pub async fn resolve_completion_url(&self, completion_url: &str) -> Result<SearchResponse> {
        self.gateway.resolve_completion_url(completion_url).await
    }

    /// Resolves every completion URL concurrently. Responses keep the order
    /// of `results`; the first failure wins.
    pub async fn resolve_completion_urls(&self, results: &[AutocompleteResult]) -> Result<Vec<SearchResponse>> {
        try_join_all(
            results
                .iter()
                .map(|result| self.gateway.resolve_completion_url(&result.completion_url)),
        )
        .await
    }

    pub async fn reverse_geocode(&self, latitude: f64, longitude: f64, language: Option<&str>) -> Result<PlaceResults> {
        let language = self.resolve_language(language);
        self.gateway.reverse_geocode(latitude, longitude, language).await
    }

    pub async fn directions(&self, input: &DirectionsInput) -> Result<DirectionsResponse> {
        self.gateway.directions(input).await
    }

    pub async fn etas(&self, input: &EtaInput) -> Result<EtaResponse> {
        self.gateway.etas(input).await
    }

    pub async fn lookup_place(&self, place_id: &str, language: Option<&str>) -> Result<Place> {
        let language = self.resolve_language(language);
        self.gateway.lookup_place(place_id, language).await
    }

    pub async fn lookup_places(&self, input: &PlaceLookupInput) -> Result<PlacesResponse> {
        self.gateway.lookup_places(input).await
    }

    pub async fn lookup_alternate_ids(&self, input: &AlternateIdsInput) -> Result<AlternateIdsResponse> {
        self.gateway.lookup_alternate_ids(input).await
    }

    fn resolve_language<'a>(&'a self, language: Option<&'a str>) -> &'a str {
        match language.map(str::trim) {
            Some(language) if !language.is_empty() => language,
            _ => &self.default_language,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_credential_is_rejected() {
        let err = MapsClient::new("   ", &ClientConfig::default()).err().unwrap();
        assert!(matches!(err, MapsError::InvalidInput(_)));
    }
}
