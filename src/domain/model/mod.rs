pub mod categories;
pub mod directions;
pub mod eta;
pub mod location;
pub mod places;
pub mod search;
pub mod serde_helpers;
pub mod token;

pub use categories::*;
pub use directions::*;
pub use eta::*;
pub use location::*;
pub use places::*;
pub use search::*;
pub use token::*;
