// Library root: re-exports all modules so integration tests and external
// consumers can access the crate's public API.

pub mod config;
pub mod export;
pub mod parser;
pub mod pipeline;
pub mod player;
pub mod score;
pub mod store;
pub mod summary;
