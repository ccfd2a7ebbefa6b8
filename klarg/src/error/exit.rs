//! Default terminating behaviour for lookup failures.
//!
//! User-input errors print a single diagnostic line to standard output and
//! exit with [`EXIT_USER_ERROR`]. Usage errors are bugs in the calling
//! program, so they go to standard error and exit with [`EXIT_USAGE_ERROR`].

use std::io::{self, Write};
use std::process;

use super::{LookupError, UsageError};

/// Exit status used when the invocation itself is at fault.
pub const EXIT_USER_ERROR: i32 = 1;

/// Exit status used when a flag was queried incorrectly.
pub const EXIT_USAGE_ERROR: i32 = 2;

fn report(mut sink: impl Write, message: &dyn std::fmt::Display) {
    if let Err(err) = writeln!(sink, "{message}").and_then(|()| sink.flush()) {
        tracing::warn!(error = %err, "failed to write diagnostic");
    }
}

impl UsageError {
    /// Reports the error on standard error and terminates the process.
    pub fn exit(&self) -> ! {
        tracing::debug!(error = %self, "terminating on usage error");
        report(io::stderr().lock(), self);
        process::exit(EXIT_USAGE_ERROR)
    }
}

impl LookupError {
    /// Exit status [`LookupError::exit`] terminates with.
    #[must_use]
    pub const fn exit_code(&self) -> i32 {
        match self {
            Self::Usage(_) => EXIT_USAGE_ERROR,
            _ => EXIT_USER_ERROR,
        }
    }

    /// Reports the error and terminates the process.
    ///
    /// This is the built-in handler for every error kind.
    pub fn exit(&self) -> ! {
        if let Self::Usage(usage) = self {
            usage.exit();
        }
        tracing::debug!(error = %self, "terminating on lookup error");
        report(io::stdout().lock(), self);
        process::exit(EXIT_USER_ERROR)
    }
}

/// Applies the default terminating behaviour to a lookup result.
///
/// # Examples
///
/// ```rust
/// use klarg::{Args, Lookup, OrExit};
///
/// let args = Args::new(["--name", "klarg"]);
/// let name = args.get_str("name").or_exit();
/// assert_eq!(name, Some("klarg"));
/// ```
pub trait OrExit<T> {
    /// Returns the success value or reports the error and exits.
    fn or_exit(self) -> T;
}

impl<T> OrExit<T> for Result<T, LookupError> {
    fn or_exit(self) -> T {
        self.unwrap_or_else(|err| err.exit())
    }
}

impl<T> OrExit<T> for Result<T, UsageError> {
    fn or_exit(self) -> T {
        self.unwrap_or_else(|err| err.exit())
    }
}
