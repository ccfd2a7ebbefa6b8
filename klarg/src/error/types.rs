//! Error enums for lookups, scoping and configuration loading.

use figment::Error as FigmentError;
use thiserror::Error;

/// Programming mistakes in how a flag was queried.
///
/// These never depend on what the user typed, so they are reported
/// separately from [`LookupError`]'s user-input variants and are never
/// routed through [`crate::Handlers`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum UsageError {
    /// A long-only query was issued while the configuration requires every
    /// flag to carry a short form.
    #[error("flag '{flag}' must be queried with a short form")]
    ShortFlagRequired {
        /// Long form of the offending flag.
        flag: String,
    },
}

/// Failures raised while extracting a value that follows a flag.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum LookupError {
    /// The flag is present but no value token follows it.
    #[error("no value provided for {flag}")]
    NoneProvided {
        /// Long form of the flag.
        flag: String,
    },

    /// The flag occurs more than once, or both its long and short forms
    /// are present.
    #[error("{flag} was provided more than once")]
    MultipleProvided {
        /// Long form of the flag.
        flag: String,
    },

    /// The value following the flag is not an integer or a float.
    #[error("{flag} expects a number, got '{raw}'")]
    NotANumber {
        /// Long form of the flag.
        flag: String,
        /// The token that failed to parse.
        raw: String,
    },

    /// The query itself was malformed.
    #[error(transparent)]
    Usage(#[from] UsageError),
}

/// Classification tag for a [`LookupError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// No value follows the flag.
    NoneProvided,
    /// The flag is repeated or given in both forms.
    MultipleProvided,
    /// The value is not numeric.
    NotANumber,
    /// Configuration-class query mistake.
    Usage,
}

impl ErrorKind {
    /// Returns `true` for errors caused by the invocation rather than by
    /// the calling program.
    #[must_use]
    pub const fn is_user_input(self) -> bool {
        !matches!(self, Self::Usage)
    }
}

impl LookupError {
    /// Returns the classification tag for this error.
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::NoneProvided { .. } => ErrorKind::NoneProvided,
            Self::MultipleProvided { .. } => ErrorKind::MultipleProvided,
            Self::NotANumber { .. } => ErrorKind::NotANumber,
            Self::Usage(_) => ErrorKind::Usage,
        }
    }

    /// Long form of the flag the error refers to.
    #[must_use]
    pub fn flag(&self) -> &str {
        match self {
            Self::NoneProvided { flag }
            | Self::MultipleProvided { flag }
            | Self::NotANumber { flag, .. }
            | Self::Usage(UsageError::ShortFlagRequired { flag }) => flag,
        }
    }
}

/// Failures raised when narrowing the tokens to a subcommand.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum ScopeError {
    /// The anchor token does not occur in the sequence.
    #[error("anchor '{anchor}' not found in arguments")]
    AnchorNotFound {
        /// The anchor that was searched for.
        anchor: String,
    },
}

/// Failures raised while loading a [`crate::Config`].
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ConfigError {
    /// The configuration file could not be read.
    #[error("Configuration file error in '{path}': {source}")]
    File {
        /// Path that triggered the failure.
        path: std::path::PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// Error while gathering configuration from providers.
    #[error("Failed to gather configuration: {0}")]
    Gathering(#[from] Box<FigmentError>),

    /// The loaded configuration is unusable.
    #[error("Validation failed for '{key}': {message}")]
    Validation {
        /// Configuration key that failed validation.
        key: String,
        /// Human-readable explanation of the validation failure.
        message: String,
    },
}

impl From<FigmentError> for ConfigError {
    fn from(source: FigmentError) -> Self {
        Self::Gathering(Box::new(source))
    }
}

/// Umbrella error for applications that mix lookups, scopes and
/// configuration loading in one fallible path.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum KlargError {
    /// A value lookup failed.
    #[error(transparent)]
    Lookup(#[from] LookupError),

    /// A presence query was malformed.
    #[error(transparent)]
    Usage(#[from] UsageError),

    /// A subcommand anchor was missing.
    #[error(transparent)]
    Scope(#[from] ScopeError),

    /// Configuration could not be loaded.
    #[error(transparent)]
    Config(#[from] ConfigError),
}
