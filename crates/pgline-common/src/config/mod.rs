//! Configuration loading

mod database;

pub use database::{ConfigError, DatabaseConfig};
