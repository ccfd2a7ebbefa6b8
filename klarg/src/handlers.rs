//! Callback-based handling of lookup errors.
//!
//! Callers that prefer callbacks to matching on [`LookupError`] can register
//! handlers for the user-input error kinds. Kinds without a handler fall back
//! to [`LookupError::exit`]. Usage errors always take the default path.

use crate::error::LookupError;

type Callback<'h> = Box<dyn FnMut() + 'h>;
type RawCallback<'h> = Box<dyn FnMut(&str) + 'h>;

/// Overrides for the default error behaviour.
///
/// # Examples
///
/// ```rust
/// use klarg::{Args, Handlers, Lookup};
///
/// let args = Args::new(["--name"]);
/// let mut missing = false;
/// let name = Handlers::new()
///     .on_none(|| missing = true)
///     .resolve(args.get_str("name"));
/// assert_eq!(name, None);
/// assert!(missing);
/// ```
#[derive(Default)]
pub struct Handlers<'h> {
    none: Option<Callback<'h>>,
    multiple: Option<Callback<'h>>,
    not_a_number: Option<RawCallback<'h>>,
}

impl<'h> Handlers<'h> {
    /// A table with no overrides.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Runs `handler` when a flag has no value.
    #[must_use]
    pub fn on_none(mut self, handler: impl FnMut() + 'h) -> Self {
        self.none = Some(Box::new(handler));
        self
    }

    /// Runs `handler` when a flag is given more than once.
    #[must_use]
    pub fn on_multiple(mut self, handler: impl FnMut() + 'h) -> Self {
        self.multiple = Some(Box::new(handler));
        self
    }

    /// Runs `handler` with the raw token when a value is not numeric.
    #[must_use]
    pub fn on_not_a_number(mut self, handler: impl FnMut(&str) + 'h) -> Self {
        self.not_a_number = Some(Box::new(handler));
        self
    }

    /// Unwraps a lookup result, dispatching any error.
    ///
    /// Returns the value on success. When an error's handler returns
    /// normally the lookup yields `None`.
    pub fn resolve<T>(&mut self, outcome: Result<Option<T>, LookupError>) -> Option<T> {
        match outcome {
            Ok(value) => value,
            Err(err) => {
                self.dispatch(&err);
                None
            }
        }
    }

    /// Invokes the handler registered for `err`, or the default.
    pub fn dispatch(&mut self, err: &LookupError) {
        tracing::debug!(kind = ?err.kind(), flag = err.flag(), "dispatching lookup error");
        match err {
            LookupError::NoneProvided { .. } => match self.none.as_mut() {
                Some(handler) => handler(),
                None => err.exit(),
            },
            LookupError::MultipleProvided { .. } => match self.multiple.as_mut() {
                Some(handler) => handler(),
                None => err.exit(),
            },
            LookupError::NotANumber { raw, .. } => match self.not_a_number.as_mut() {
                Some(handler) => handler(raw.as_str()),
                None => err.exit(),
            },
            LookupError::Usage(usage) => usage.exit(),
        }
    }
}

impl std::fmt::Debug for Handlers<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Handlers")
            .field("none", &self.none.is_some())
            .field("multiple", &self.multiple.is_some())
            .field("not_a_number", &self.not_a_number.is_some())
            .finish()
    }
}
