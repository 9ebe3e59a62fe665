//! # pgline-common
//!
//! Shared utilities including configuration, error handling, and telemetry.

pub mod config;
pub mod error;
pub mod telemetry;

// Re-export commonly used types at crate root
pub use config::{ConfigError, DatabaseConfig};
pub use error::{DbError, DbResult};
pub use telemetry::{
    init_tracing, init_tracing_with_config, try_init_tracing, TracingConfig, TracingError,
};
