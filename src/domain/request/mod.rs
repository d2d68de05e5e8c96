//! Validated inputs for each Maps Server endpoint. Every input renders itself
//! as the query string appended to its endpoint path.

mod hints;
mod query;

pub mod alternate_ids;
pub mod directions;
pub mod eta;
pub mod geocode;
pub mod place_lookup;
pub mod search;
pub mod search_autocomplete;

pub use alternate_ids::AlternateIdsInput;
pub use directions::{DirectionsInput, DirectionsInputBuilder};
pub use eta::{EtaInput, EtaInputBuilder, MAX_ETA_DESTINATIONS};
pub use geocode::{GeocodeInput, GeocodeInputBuilder};
pub use place_lookup::{PlaceLookupInput, PlaceLookupInputBuilder};
pub use query::encode;
pub use search::{SearchInput, SearchInputBuilder};
pub use search_autocomplete::{SearchAutocompleteInput, SearchAutocompleteInputBuilder};
