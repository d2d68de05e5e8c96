use crate::domain::model::{SearchLocation, SearchRegion, UserLocation};

use super::query::QueryBuilder;

#[derive(Debug, Clone, PartialEq)]
pub struct GeocodeInput {
    address: String,
    limit_to_countries: Vec<String>,
    language: Option<String>,
    search_location: Option<SearchLocation>,
    search_region: Option<SearchRegion>,
    user_location: Option<UserLocation>,
}

impl GeocodeInput {
    pub fn builder(address: impl Into<String>) -> GeocodeInputBuilder {
        GeocodeInputBuilder {
            input: GeocodeInput {
                address: address.into(),
                limit_to_countries: Vec::new(),
                language: None,
                search_location: None,
                search_region: None,
                user_location: None,
            },
        }
    }

    pub fn address(&self) -> &str {
        &self.address
    }

    pub fn language(&self) -> Option<&str> {
        self.language.as_deref()
    }

    pub fn to_query_string(&self) -> String {
        QueryBuilder::new()
            .encoded("q", &self.address)
            .encoded_list("limitToCountries", &self.limit_to_countries)
            .encoded_opt("lang", self.language.as_deref())
            .raw_opt("searchLocation", self.search_location.as_ref().map(SearchLocation::to_query_string))
            .raw_opt("searchRegion", self.search_region.as_ref().map(SearchRegion::to_query_string))
            .raw_opt("userLocation", self.user_location.as_ref().map(UserLocation::to_query_string))
            .finish()
    }
}

#[derive(Debug, Clone)]
pub struct GeocodeInputBuilder {
    input: GeocodeInput,
}

impl GeocodeInputBuilder {
    pub fn limit_to_countries(mut self, countries: Vec<String>) -> Self {
        self.input.limit_to_countries = countries;
        self
    }

    pub fn language(mut self, language: impl Into<String>) -> Self {
        self.input.language = Some(language.into());
        self
    }

    pub fn search_location(mut self, location: SearchLocation) -> Self {
        self.input.search_location = Some(location);
        self
    }

    pub fn search_region(mut self, region: SearchRegion) -> Self {
        self.input.search_region = Some(region);
        self
    }

    pub fn user_location(mut self, location: UserLocation) -> Self {
        self.input.user_location = Some(location);
        self
    }

    pub fn build(self) -> GeocodeInput {
        self.input
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_all_parameters_in_order() {
        let input = GeocodeInput::builder("Jungfernstieg 1")
            .limit_to_countries(vec!["DE".into(), "US".into()])
            .language("en-US")
            .search_location(SearchLocation::from_latitude_longitude(53.57, 10.0).unwrap())
            .search_region(SearchRegion::from_bounds(54.0, 10.5, 53.0, 9.5))
            .user_location(UserLocation::from_latitude_longitude(53.6, 10.2).unwrap())
            .build();

        assert_eq!(
            input.to_query_string(),
            "?q=Jungfernstieg+1&limitToCountries=DE,US&lang=en-US&searchLocation=53.57,10.0\
             &searchRegion=54.0,10.5,53.0,9.5&userLocation=53.6,10.2"
        );
    }

    #[test]
    fn address_only() {
        let input = GeocodeInput::builder("Apple Park").build();
        assert_eq!(input.to_query_string(), "?q=Apple+Park");
        assert!(input.language().is_none());
    }
}
