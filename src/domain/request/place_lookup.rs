use crate::error::{MapsError, Result};

use super::query::QueryBuilder;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlaceLookupInput {
    ids: Vec<String>,
    language: Option<String>,
}

impl PlaceLookupInput {
    pub fn builder(ids: Vec<String>) -> PlaceLookupInputBuilder {
        PlaceLookupInputBuilder {
            input: PlaceLookupInput { ids, language: None },
        }
    }

    pub fn ids(&self) -> &[String] {
        &self.ids
    }

    pub fn to_query_string(&self) -> String {
        QueryBuilder::new()
            .encoded_list("ids", &self.ids)
            .encoded_opt("lang", self.language.as_deref())
            .finish()
    }
}

#[derive(Debug, Clone)]
pub struct PlaceLookupInputBuilder {
    input: PlaceLookupInput,
}

impl PlaceLookupInputBuilder {
    pub fn language(mut self, language: impl Into<String>) -> Self {
        self.input.language = Some(language.into());
        self
    }

    pub fn build(self) -> Result<PlaceLookupInput> {
        if self.input.ids.is_empty() {
            return Err(MapsError::invalid("PlaceLookupInput ids cannot be empty."));
        }
        Ok(self.input)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_ids_and_language() {
        let input = PlaceLookupInput::builder(vec!["place-1".into(), "place-2".into()])
            .language("en-US")
            .build()
            .unwrap();
        assert_eq!(input.to_query_string(), "?ids=place-1,place-2&lang=en-US");
    }

    #[test]
    fn rejects_empty_ids() {
        let err = PlaceLookupInput::builder(Vec::new()).build().unwrap_err();
        assert_eq!(err.to_string(), "invalid input: PlaceLookupInput ids cannot be empty.");
    }
}
