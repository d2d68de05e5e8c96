//! # Maps Client Library
//!
//! Typed client for the Apple Maps Server API. A long-lived authorization
//! token is exchanged for short-lived access tokens, which are cached and
//! refreshed on demand by a single caller at a time.
//!
//! Modules:
//! - `cache`: access token value and the single-flight token cache
//! - `sources`: token exchange against `/v1/token`
//! - `parser`: JWT claim decoding
//! - `gateway`: HTTP calls to the Maps Server endpoints
//! - `client`: facade combining configuration, cache and gateway
//! - `domain`: request inputs and response models
//! - `config`: YAML client configuration
//! - `cli`: helpers for the `maps-cli` binary

pub mod cache;
pub mod cli;
pub mod client;
pub mod config;
pub mod domain;
pub mod error;
pub mod gateway;
pub mod helpers;
pub mod observability;
pub mod parser;
pub mod sources;
pub mod utils;

#[cfg(test)]
mod tests;

pub use crate::client::MapsClient;
pub use crate::error::{MapsError, Result};
