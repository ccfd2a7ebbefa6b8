//! Error types for the reply demo.
//!
//! Lookup and usage errors are kept intact so `main` can hand them to the
//! library's default reporting. Everything else is rendered by `color-eyre`.

use klarg::{LookupError, Number, ScopeError, UsageError};
use thiserror::Error;

/// Errors raised while building a reply plan.
#[derive(Debug, Error)]
pub enum DemoError {
    /// A flag value could not be extracted.
    #[error(transparent)]
    Lookup(#[from] LookupError),
    /// A flag was queried incorrectly.
    #[error(transparent)]
    Usage(#[from] UsageError),
    /// The `reply` subcommand was not given.
    #[error("expected the reply subcommand: {0}")]
    MissingSubcommand(#[from] ScopeError),
    /// No file followed the reply options.
    #[error("reply needs a file to answer")]
    MissingFile,
    /// The reply count was not a positive integer.
    #[error("reply count must be a positive integer, got {0}")]
    InvalidCount(Number),
    /// Writing output failed.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Result alias for the demo.
pub type Result<T> = std::result::Result<T, DemoError>;
