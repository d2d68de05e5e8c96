use crate::domain::model::{DirectionsAvoid, DirectionsEndpoint, RouteLocation, SearchRegion, TransportType};
use crate::error::{MapsError, Result};

use super::query::QueryBuilder;

#[derive(Debug, Clone, PartialEq)]
pub struct DirectionsInput {
    origin: DirectionsEndpoint,
    destination: DirectionsEndpoint,
    arrival_date: Option<String>,
    avoid: Vec<DirectionsAvoid>,
    departure_date: Option<String>,
    language: Option<String>,
    requests_alternate_routes: Option<bool>,
    search_location: Option<RouteLocation>,
    search_region: Option<SearchRegion>,
    transport_type: Option<TransportType>,
    user_location: Option<RouteLocation>,
}

impl DirectionsInput {
    pub fn builder(origin: DirectionsEndpoint, destination: DirectionsEndpoint) -> DirectionsInputBuilder {
        DirectionsInputBuilder {
            input: DirectionsInput {
                origin,
                destination,
                arrival_date: None,
                avoid: Vec::new(),
                departure_date: None,
                language: None,
                requests_alternate_routes: None,
                search_location: None,
                search_region: None,
                transport_type: None,
                user_location: None,
            },
        }
    }

    pub fn to_query_string(&self) -> String {
        QueryBuilder::new()
            .encoded("origin", self.origin.to_query_string())
            .encoded("destination", self.destination.to_query_string())
            .encoded_opt("arrivalDate", self.arrival_date.as_deref())
            .api_list("avoid", &self.avoid)
            .encoded_opt("departureDate", self.departure_date.as_deref())
            .encoded_opt("lang", self.language.as_deref())
            .raw_opt(
                "requestsAlternateRoutes",
                self.requests_alternate_routes.map(|flag| if flag { "true" } else { "false" }),
            )
            .raw_opt("searchLocation", self.search_location.as_ref().map(RouteLocation::to_query_string))
            .raw_opt("searchRegion", self.search_region.as_ref().map(SearchRegion::to_query_string))
            .raw_opt("transportType", self.transport_type.map(|mode| mode.api_value()))
            .raw_opt("userLocation", self.user_location.as_ref().map(RouteLocation::to_query_string))
            .finish()
    }
}

#[derive(Debug, Clone)]
pub struct DirectionsInputBuilder {
    input: DirectionsInput,
}

impl DirectionsInputBuilder {
    pub fn arrival_date(mut self, date: impl Into<String>) -> Self {
        self.input.arrival_date = Some(date.into());
        self
    }

    pub fn avoid(mut self, avoid: Vec<DirectionsAvoid>) -> Self {
        self.input.avoid = avoid;
        self
    }

    pub fn departure_date(mut self, date: impl Into<String>) -> Self {
        self.input.departure_date = Some(date.into());
        self
    }

    pub fn language(mut self, language: impl Into<String>) -> Self {
        self.input.language = Some(language.into());
        self
    }

    pub fn requests_alternate_routes(mut self, requested: bool) -> Self {
        self.input.requests_alternate_routes = Some(requested);
        self
    }

    pub fn search_location(mut self, location: RouteLocation) -> Self {
        self.input.search_location = Some(location);
        self
    }

    pub fn search_region(mut self, region: SearchRegion) -> Self {
        self.input.search_region = Some(region);
        self
    }

    pub fn transport_type(mut self, transport_type: TransportType) -> Self {
        self.input.transport_type = Some(transport_type);
        self
    }

    pub fn user_location(mut self, location: RouteLocation) -> Self {
        self.input.user_location = Some(location);
        self
    }

    pub fn build(self) -> Result<DirectionsInput> {
        if self.input.arrival_date.is_some() && self.input.departure_date.is_some() {
            return Err(MapsError::invalid("Specify arrivalDate or departureDate, not both."));
        }
        Ok(self.input)
    }
}
