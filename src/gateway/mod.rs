//! Port between the client facade and the Maps Server API.

pub mod http;

use std::future::Future;

use crate::domain::model::{
    AlternateIdsResponse, DirectionsResponse, EtaResponse, Place, PlaceResults, PlacesResponse, SearchAutocompleteResponse,
    SearchResponse,
};
use crate::domain::request::{
    AlternateIdsInput, DirectionsInput, EtaInput, GeocodeInput, PlaceLookupInput, SearchAutocompleteInput, SearchInput,
};
use crate::error::Result;

pub use self::http::HttpMapsGateway;

/// One method per Maps Server endpoint.
pub trait MapsGateway: Send + Sync {
    fn geocode(&self, input: &GeocodeInput) -> impl Future<Output = Result<PlaceResults>> + Send;

    fn search(&self, input: &SearchInput) -> impl Future<Output = Result<SearchResponse>> + Send;

    fn autocomplete(&self, input: &SearchAutocompleteInput)
        -> impl Future<Output = Result<SearchAutocompleteResponse>> + Send;

    /// Follows a `completionUrl` from an autocomplete result.
    fn resolve_completion_url(&self, completion_url: &str) -> impl Future<Output = Result<SearchResponse>> + Send;

    /// An empty `language` omits the `lang` parameter.
    fn reverse_geocode(
        &self,
        latitude: f64,
        longitude: f64,
        language: &str,
    ) -> impl Future<Output = Result<PlaceResults>> + Send;

    fn directions(&self, input: &DirectionsInput) -> impl Future<Output = Result<DirectionsResponse>> + Send;

    fn etas(&self, input: &EtaInput) -> impl Future<Output = Result<EtaResponse>> + Send;

    /// An empty `language` omits the `lang` parameter.
    fn lookup_place(&self, place_id: &str, language: &str) -> impl Future<Output = Result<Place>> + Send;

    fn lookup_places(&self, input: &PlaceLookupInput) -> impl Future<Output = Result<PlacesResponse>> + Send;

    fn lookup_alternate_ids(&self, input: &AlternateIdsInput)
        -> impl Future<Output = Result<AlternateIdsResponse>> + Send;
}
