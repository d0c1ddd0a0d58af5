pub mod config;
pub mod constants;
pub mod error;
pub mod fetch;
pub mod query;
pub mod types;
