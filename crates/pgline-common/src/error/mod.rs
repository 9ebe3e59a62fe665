//! Error types shared across the workspace

mod db_error;

pub use db_error::{DbError, DbResult};
