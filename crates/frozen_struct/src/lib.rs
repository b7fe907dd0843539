//! Immutable, schema-validated records.
//! A type declares its field names once; every instance must carry exactly
//! those fields and can never be changed afterwards.

pub mod error;
pub mod logging;
pub mod model;
pub mod schema;

pub use error::{Mutation, StructError, StructErrorKind, StructResult};
pub use logging::{default_log_level, init_logging, logging_status};
pub use model::record::Record;
pub use model::value::Value;
pub use schema::resolver::{is_cached, resolve, FieldSet};
pub use schema::{Schema, StructType};

/// Minimal health-check API for early integration.
pub fn ping() -> &'static str {
    "pong"
}

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::{core_version, ping};

    #[test]
    fn ping_returns_pong() {
        assert_eq!(ping(), "pong");
    }

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }
}
