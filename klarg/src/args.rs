//! The invocation's token sequence.

use crate::config::Config;
use crate::lookup::Lookup;

/// Every argument passed to the program, minus the executable path, along
/// with the [`Config`] used to interpret them.
///
/// The sequence is fixed once built; queries only ever read it.
///
/// # Examples
///
/// ```rust
/// use klarg::{Args, Lookup, Number};
///
/// let args = Args::new(["--count", "3", "-q"]);
/// assert_eq!(args.get_num("count"), Ok(Some(Number::Int(3))));
/// assert_eq!(args.get_bool(("quiet", "q")), Ok(true));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Args {
    tokens: Vec<String>,
    config: Config,
}

impl Args {
    /// Builds a sequence from explicit tokens using the default
    /// configuration.
    #[must_use]
    pub fn new<I, S>(tokens: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            tokens: tokens.into_iter().map(Into::into).collect(),
            config: Config::default(),
        }
    }

    /// Reads the current process arguments, skipping the executable path.
    ///
    /// Tokens that are not valid UTF-8 are converted lossily.
    #[must_use]
    pub fn from_env() -> Self {
        Self::new(
            std::env::args_os()
                .skip(1)
                .map(|arg| arg.to_string_lossy().into_owned()),
        )
    }

    /// Binds `config` to this sequence, replacing the default.
    #[must_use]
    pub fn with_config(mut self, config: Config) -> Self {
        self.config = config;
        self
    }

    /// Number of tokens.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.tokens.len()
    }

    /// Returns `true` when no arguments were passed.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }
}

impl Lookup for Args {
    fn tokens(&self) -> &[String] {
        &self.tokens
    }

    fn config(&self) -> &Config {
        &self.config
    }
}

impl<S: Into<String>> FromIterator<S> for Args {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self::new(iter)
    }
}
