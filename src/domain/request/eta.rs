use crate::domain::model::{RouteLocation, TransportType};
use crate::error::{MapsError, Result};

use super::query::QueryBuilder;

pub const MAX_ETA_DESTINATIONS: usize = 10;
const DESTINATION_SEPARATOR: &str = "|";

#[derive(Debug, Clone, PartialEq)]
pub struct EtaInput {
    origin: RouteLocation,
    destinations: Vec<RouteLocation>,
    transport_type: Option<TransportType>,
    departure_date: Option<String>,
    arrival_date: Option<String>,
}

impl EtaInput {
    pub fn builder(origin: RouteLocation, destinations: Vec<RouteLocation>) -> EtaInputBuilder {
        EtaInputBuilder {
            input: EtaInput {
                origin,
                destinations,
                transport_type: None,
                departure_date: None,
                arrival_date: None,
            },
        }
    }

    pub fn destinations(&self) -> &[RouteLocation] {
        &self.destinations
    }

    pub fn to_query_string(&self) -> String {
        let destinations = self
            .destinations
            .iter()
            .map(RouteLocation::to_query_string)
            .collect::<Vec<_>>()
            .join(DESTINATION_SEPARATOR);

        QueryBuilder::new()
            .encoded("origin", self.origin.to_query_string())
            .encoded("destinations", &destinations)
            .raw_opt("transportType", self.transport_type.map(|mode| mode.api_value()))
            .encoded_opt("departureDate", self.departure_date.as_deref())
            .encoded_opt("arrivalDate", self.arrival_date.as_deref())
            .finish()
    }
}

#[derive(Debug, Clone)]
pub struct EtaInputBuilder {
    input: EtaInput,
}

impl EtaInputBuilder {
    pub fn transport_type(mut self, transport_type: TransportType) -> Self {
        self.input.transport_type = Some(transport_type);
        self
    }

    pub fn departure_date(mut self, date: impl Into<String>) -> Self {
        self.input.departure_date = Some(date.into());
        self
    }

    pub fn arrival_date(mut self, date: impl Into<String>) -> Self {
        self.input.arrival_date = Some(date.into());
        self
    }

    pub fn build(self) -> Result<EtaInput> {
        let count = self.input.destinations.len();
        if count == 0 {
            return Err(MapsError::invalid("EtaInput destinations cannot be empty."));
        }
        if count > MAX_ETA_DESTINATIONS {
            return Err(MapsError::invalid(format!(
                "EtaInput destinations cannot exceed {}.",
                MAX_ETA_DESTINATIONS
            )));
        }
        Ok(self.input)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at(latitude: f64, longitude: f64) -> RouteLocation {
        RouteLocation::from_latitude_longitude(latitude, longitude).unwrap()
    }

    #[test]
    fn destinations_are_pipe_joined_and_encoded() {
        let input = EtaInput::builder(at(37.331423, -122.030503), vec![at(37.325565, -121.946352), at(37.441765, -122.172593)])
            .transport_type(TransportType::Cycling)
            .departure_date("2026-01-01T10:15:30Z")
            .build()
            .unwrap();

        let query = input.to_query_string();
        assert_eq!(
            query,
            "?origin=37.331423%2C-122.030503&destinations=37.325565%2C-121.946352%7C37.441765%2C-122.172593\
             &transportType=Cycling&departureDate=2026-01-01T10%3A15%3A30Z"
        );
        assert!(url::Url::parse(&format!("https://maps-api.apple.com/v1/etas{}", query)).is_ok());
    }

    #[test]
    fn destination_count_is_bounded() {
        let err = EtaInput::builder(at(1.0, 1.0), Vec::new()).build().unwrap_err();
        assert_eq!(err.to_string(), "invalid input: EtaInput destinations cannot be empty.");

        let too_many = (0..=MAX_ETA_DESTINATIONS).map(|i| at(i as f64, 0.0)).collect();
        assert!(EtaInput::builder(at(1.0, 1.0), too_many).build().is_err());

        let exactly_max = (0..MAX_ETA_DESTINATIONS).map(|i| at(i as f64, 0.0)).collect();
        assert!(EtaInput::builder(at(1.0, 1.0), exactly_max).build().is_ok());
    }
}
