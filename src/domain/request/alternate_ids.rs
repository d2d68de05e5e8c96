use crate::error::{MapsError, Result};

use super::query::QueryBuilder;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AlternateIdsInput {
    ids: Vec<String>,
}

impl AlternateIdsInput {
    pub fn new(ids: Vec<String>) -> Result<Self> {
        if ids.is_empty() {
            return Err(MapsError::invalid("AlternateIdsInput ids cannot be empty."));
        }
        Ok(Self { ids })
    }

    pub fn ids(&self) -> &[String] {
        &self.ids
    }

    pub fn to_query_string(&self) -> String {
        QueryBuilder::new().encoded_list("ids", &self.ids).finish()
    }
}
