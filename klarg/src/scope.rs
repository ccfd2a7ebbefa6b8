//! Subcommand views over the token sequence.

use crate::config::Config;
use crate::lookup::Lookup;

/// The tokens following a subcommand anchor.
///
/// Created by [`Lookup::scope`]. A scope answers every [`Lookup`] query
/// against its own tokens only, and can be narrowed again for nested
/// subcommands.
///
/// # Examples
///
/// ```rust
/// use klarg::{Args, Lookup, Number};
///
/// let args = Args::new(["-f", "reply", "-n", "12", "example.txt"]);
/// let reply = args.scope("reply")?;
/// assert_eq!(reply.all(), ["-n", "12", "example.txt"]);
/// assert_eq!(reply.get_num(("number", "n")), Ok(Some(Number::Int(12))));
/// # Ok::<(), klarg::ScopeError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Scope<'a> {
    anchor: String,
    tokens: &'a [String],
    config: &'a Config,
}

impl<'a> Scope<'a> {
    pub(crate) fn new(anchor: &str, tokens: &'a [String], config: &'a Config) -> Self {
        Self {
            anchor: anchor.to_owned(),
            tokens,
            config,
        }
    }

    /// The anchor token this scope follows.
    #[must_use]
    pub fn anchor(&self) -> &str {
        &self.anchor
    }
}

impl Lookup for Scope<'_> {
    fn tokens(&self) -> &[String] {
        self.tokens
    }

    fn config(&self) -> &Config {
        self.config
    }
}
