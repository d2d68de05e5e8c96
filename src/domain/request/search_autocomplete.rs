use crate::domain::model::{
    AddressCategory, PoiCategory, SearchAcResultType, SearchLocation, SearchRegion, SearchRegionPriority, UserLocation,
};

use super::hints::{search_hint_setters, SearchHints};
use super::query::QueryBuilder;

#[derive(Debug, Clone, PartialEq)]
pub struct SearchAutocompleteInput {
    q: String,
    result_type_filter: Vec<SearchAcResultType>,
    hints: SearchHints,
}

impl SearchAutocompleteInput {
    pub fn builder(q: impl Into<String>) -> SearchAutocompleteInputBuilder {
        SearchAutocompleteInputBuilder {
            input: SearchAutocompleteInput {
                q: q.into(),
                result_type_filter: Vec::new(),
                hints: SearchHints::default(),
            },
        }
    }

    pub fn q(&self) -> &str {
        &self.q
    }

    pub fn to_query_string(&self) -> String {
        let mut query = QueryBuilder::new();
        self.hints.render(&mut query, &self.q, &self.result_type_filter);
        query.finish()
    }
}

#[derive(Debug, Clone)]
pub struct SearchAutocompleteInputBuilder {
    input: SearchAutocompleteInput,
}

impl SearchAutocompleteInputBuilder {
    search_hint_setters!();

    pub fn result_type_filter(mut self, result_types: Vec<SearchAcResultType>) -> Self {
        self.input.result_type_filter = result_types;
        self
    }

    pub fn build(self) -> SearchAutocompleteInput {
        self.input
    }
}
