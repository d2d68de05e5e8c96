//! Request inputs and response models of the Maps Server API.

pub mod model;
pub mod request;
