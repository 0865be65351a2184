//! Configuration errors
//!
//! Raised for unresolvable lookups in closed catalogs (sort keys, routes).
//! These are programmer or wiring errors, never shown in the error banner.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("unknown sort key: {0}")]
    UnknownSortKey(String),

    #[error("unknown route: {0}")]
    UnknownRoute(String),
}
