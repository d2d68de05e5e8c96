use std::fmt::Display;

use crate::domain::model::{AddressCategory, PoiCategory, SearchLocation, SearchRegion, SearchRegionPriority, UserLocation};

use super::query::QueryBuilder;

/// Filters and location hints shared by search and autocomplete.
#[derive(Debug, Clone, Default, PartialEq)]
pub(crate) struct SearchHints {
    pub exclude_poi_categories: Vec<PoiCategory>,
    pub include_poi_categories: Vec<PoiCategory>,
    pub limit_to_countries: Vec<String>,
    pub include_address_categories: Vec<AddressCategory>,
    pub exclude_address_categories: Vec<AddressCategory>,
    pub language: Option<String>,
    pub search_location: Option<SearchLocation>,
    pub search_region: Option<SearchRegion>,
    pub user_location: Option<UserLocation>,
    pub search_region_priority: Option<SearchRegionPriority>,
}

impl SearchHints {
    pub fn render<T: Display>(&self, query: &mut QueryBuilder, q: &str, result_type_filter: &[T]) {
        query
            .encoded("q", q)
            .api_list("excludePoiCategories", &self.exclude_poi_categories)
            .api_list("includePoiCategories", &self.include_poi_categories)
            .encoded_list("limitToCountries", &self.limit_to_countries)
            .api_list("resultTypeFilter", result_type_filter)
            .api_list("includeAddressCategories", &self.include_address_categories)
            .api_list("excludeAddressCategories", &self.exclude_address_categories)
            .encoded_opt("lang", self.language.as_deref())
            .raw_opt("searchLocation", self.search_location.as_ref().map(SearchLocation::to_query_string))
            .raw_opt("searchRegion", self.search_region.as_ref().map(SearchRegion::to_query_string))
            .raw_opt("userLocation", self.user_location.as_ref().map(UserLocation::to_query_string))
            .raw_opt("searchRegionPriority", self.search_region_priority.map(|priority| priority.api_value()));
    }
}

/// Builder setters for the [`SearchHints`] stored at `self.input.hints`.
macro_rules! search_hint_setters {
    () => {
        pub fn exclude_poi_categories(mut self, categories: Vec<PoiCategory>) -> Self {
            self.input.hints.exclude_poi_categories = categories;
            self
        }

        pub fn include_poi_categories(mut self, categories: Vec<PoiCategory>) -> Self {
            self.input.hints.include_poi_categories = categories;
            self
        }

        pub fn limit_to_countries(mut self, countries: Vec<String>) -> Self {
            self.input.hints.limit_to_countries = countries;
            self
        }

        pub fn include_address_categories(mut self, categories: Vec<AddressCategory>) -> Self {
            self.input.hints.include_address_categories = categories;
            self
        }

        pub fn exclude_address_categories(mut self, categories: Vec<AddressCategory>) -> Self {
            self.input.hints.exclude_address_categories = categories;
            self
        }

        pub fn language(mut self, language: impl Into<String>) -> Self {
            self.input.hints.language = Some(language.into());
            self
        }

        pub fn search_location(mut self, location: SearchLocation) -> Self {
            self.input.hints.search_location = Some(location);
            self
        }

        pub fn search_region(mut self, region: SearchRegion) -> Self {
            self.input.hints.search_region = Some(region);
            self
        }

        pub fn user_location(mut self, location: UserLocation) -> Self {
            self.input.hints.user_location = Some(location);
            self
        }

        pub fn search_region_priority(mut self, priority: SearchRegionPriority) -> Self {
            self.input.hints.search_region_priority = Some(priority);
            self
        }
    };
}

pub(crate) use search_hint_setters;
