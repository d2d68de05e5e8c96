use url::form_urlencoded::byte_serialize;

const LIST_SEPARATOR: &str = ",";

/// Form-encodes `raw` the way the gateway expects: spaces become `+`, and
/// only alphanumerics and `*-._` pass through untouched.
pub fn encode(raw: &str) -> String {
    byte_serialize(raw.as_bytes()).collect()
}

/// Accumulates `name=value` pairs and renders them as `?a=1&b=2`.
#[derive(Debug, Default)]
pub struct QueryBuilder {
    parameters: Vec<String>,
}

impl QueryBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a value that is already safe to place in a query.
    pub fn raw(&mut self, name: &str, value: &str) -> &mut Self {
        self.parameters.push(format!("{}={}", name, value));
        self
    }

    pub fn encoded(&mut self, name: &str, value: &str) -> &mut Self {
        self.raw(name, &encode(value))
    }

    pub fn encoded_opt(&mut self, name: &str, value: Option<&str>) -> &mut Self {
        if let Some(value) = value {
            self.encoded(name, value);
        }
        self
    }

    pub fn raw_opt(&mut self, name: &str, value: Option<&str>) -> &mut Self {
        if let Some(value) = value {
            self.raw(name, value);
        }
        self
    }

    /// Each element is encoded, then joined with `,`. Empty lists are skipped.
    pub fn encoded_list(&mut self, name: &str, values: &[String]) -> &mut Self {
        if !values.is_empty() {
            let joined = values.iter().map(|value| encode(value)).collect::<Vec<_>>().join(LIST_SEPARATOR);
            self.raw(name, &joined);
        }
        self
    }

    /// Joins the wire values of `values` with `,`. Empty lists are skipped.
    pub fn api_list<T: std::fmt::Display>(&mut self, name: &str, values: &[T]) -> &mut Self {
        if !values.is_empty() {
            let joined = values.iter().map(ToString::to_string).collect::<Vec<_>>().join(LIST_SEPARATOR);
            self.raw(name, &joined);
        }
        self
    }

    pub fn finish(&self) -> String {
        format!("?{}", self.parameters.join("&"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn encode_matches_form_encoding() {
        assert_eq!(encode("1 Infinite Loop, Cupertino"), "1+Infinite+Loop%2C+Cupertino");
        assert_eq!(encode("2026-01-01T12:00:00Z"), "2026-01-01T12%3A00%3A00Z");
        assert_eq!(encode("a|b"), "a%7Cb");
        assert_eq!(encode("*-._"), "*-._");
    }

    #[test]
    fn skips_empty_and_absent_parameters() {
        let mut query = QueryBuilder::new();
        query
            .encoded("q", "coffee shop")
            .encoded_list("limitToCountries", &[])
            .encoded_opt("lang", None)
            .raw_opt("userLocation", Some("1.0,2.0"));
        assert_eq!(query.finish(), "?q=coffee+shop&userLocation=1.0,2.0");
    }
}
