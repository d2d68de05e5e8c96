pub mod access_token;
pub mod token_cache;
