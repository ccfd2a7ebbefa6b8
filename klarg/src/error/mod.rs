//! Error types produced by flag lookups.

mod exit;
mod types;

pub use exit::{EXIT_USAGE_ERROR, EXIT_USER_ERROR, OrExit};
pub use types::{ConfigError, ErrorKind, KlargError, LookupError, ScopeError, UsageError};
