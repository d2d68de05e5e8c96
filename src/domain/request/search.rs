use crate::domain::model::{
    AddressCategory, PoiCategory, SearchLocation, SearchRegion, SearchRegionPriority, SearchResultType, UserLocation,
};

use super::hints::{search_hint_setters, SearchHints};
use super::query::QueryBuilder;

#[derive(Debug, Clone, PartialEq)]
pub struct SearchInput {
    q: String,
    result_type_filter: Vec<SearchResultType>,
    hints: SearchHints,
    enable_pagination: Option<bool>,
    page_token: Option<String>,
}

impl SearchInput {
    pub fn builder(q: impl Into<String>) -> SearchInputBuilder {
        SearchInputBuilder {
            input: SearchInput {
                q: q.into(),
                result_type_filter: Vec::new(),
                hints: SearchHints::default(),
                enable_pagination: None,
                page_token: None,
            },
        }
    }

    pub fn q(&self) -> &str {
        &self.q
    }

    pub fn to_query_string(&self) -> String {
        let mut query = QueryBuilder::new();
        self.hints.render(&mut query, &self.q, &self.result_type_filter);
        query
            .raw_opt("enablePagination", self.enable_pagination.map(|flag| if flag { "true" } else { "false" }))
            .encoded_opt("pageToken", self.page_token.as_deref());
        query.finish()
    }
}

#[derive(Debug, Clone)]
pub struct SearchInputBuilder {
    input: SearchInput,
}

impl SearchInputBuilder {
    search_hint_setters!();

    pub fn result_type_filter(mut self, result_types: Vec<SearchResultType>) -> Self {
        self.input.result_type_filter = result_types;
        self
    }

    pub fn enable_pagination(mut self, enabled: bool) -> Self {
        self.input.enable_pagination = Some(enabled);
        self
    }

    pub fn page_token(mut self, token: impl Into<String>) -> Self {
        self.input.page_token = Some(token.into());
        self
    }

    pub fn build(self) -> SearchInput {
        self.input
    }
}
