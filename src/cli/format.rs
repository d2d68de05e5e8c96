use serde::Serialize;

use crate::domain::model::AutocompleteResult;

use super::{to_api_url, to_web_url};

const ADDRESS_JOINER: &str = ", ";
const OUTPUT_SEPARATOR: &str = " — ";

/// `name — line 1, line 2`
pub fn place_line(name: &str, address_lines: &[String]) -> String {
    format!("{}{}{}", name, OUTPUT_SEPARATOR, address_lines.join(ADDRESS_JOINER))
}

/// `display lines — url`. Prefers the Apple Maps web link unless `api_url` is set.
pub fn autocomplete_line(result: &AutocompleteResult, api_url: bool) -> String {
    let url = if api_url {
        to_api_url(&result.completion_url)
    } else {
        to_web_url(&result.completion_url).unwrap_or_else(|| to_api_url(&result.completion_url))
    };
    format!("{}{}{}", result.display_lines.join(ADDRESS_JOINER), OUTPUT_SEPARATOR, url)
}

pub fn to_pretty_json<T: Serialize>(payload: &T) -> anyhow::Result<String> {
    serde_json::to_string_pretty(payload).map_err(|err| anyhow::anyhow!("Failed to serialize response as JSON: {}", err))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn completion(url: &str) -> AutocompleteResult {
        AutocompleteResult {
            completion_url: url.to_owned(),
            display_lines: vec!["Apple Park".to_owned(), "Cupertino, CA".to_owned()],
            location: None,
            structured_address: None,
        }
    }

    #[test]
    fn place_line_joins_address() {
        let lines = vec!["1 Apple Park Way".to_owned(), "Cupertino, CA 95014".to_owned()];
        assert_eq!(
            place_line("Apple Park", &lines),
            "Apple Park — 1 Apple Park Way, Cupertino, CA 95014"
        );
        assert_eq!(place_line("Nowhere", &[]), "Nowhere — ");
    }

    #[test]
    fn autocomplete_line_prefers_web_url() {
        let result = completion("/v1/search?q=Apple%20Park&metadata=x");
        assert_eq!(
            autocomplete_line(&result, false),
            "Apple Park, Cupertino, CA — https://maps.apple.com/?q=Apple%20Park"
        );
        assert_eq!(
            autocomplete_line(&result, true),
            "Apple Park, Cupertino, CA — https://maps-api.apple.com/v1/search?q=Apple%20Park&metadata=x"
        );

        let without_query = completion("/v1/search?metadata=x");
        assert!(autocomplete_line(&without_query, false).ends_with("https://maps-api.apple.com/v1/search?metadata=x"));
    }
}
