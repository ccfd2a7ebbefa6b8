//! Point queries over a token sequence.
//!
//! [`Lookup`] is implemented by both [`crate::Args`] and [`crate::Scope`],
//! so a query written against the whole invocation works unchanged against
//! a subcommand's tokens.

use std::io::{self, Write};

use crate::config::{Config, FlagPair};
use crate::error::{LookupError, ScopeError, UsageError};
use crate::flag::{Flag, ResolvedFlag};
use crate::number::Number;
use crate::scope::Scope;

/// Finds the single value token following `flag`.
///
/// Returns `Ok(None)` when neither form occurs. A second occurrence of
/// either form is a [`LookupError::MultipleProvided`]; a missing or
/// flag-like neighbour is a [`LookupError::NoneProvided`].
fn value_after<'t>(
    tokens: &'t [String],
    config: &Config,
    flag: &ResolvedFlag,
) -> Result<Option<&'t str>, LookupError> {
    let mut hits = tokens
        .iter()
        .enumerate()
        .filter(|(_, token)| flag.matches(token))
        .map(|(index, _)| index);
    let Some(index) = hits.next() else {
        return Ok(None);
    };
    if hits.next().is_some() {
        tracing::debug!(flag = flag.long(), "flag provided more than once");
        return Err(LookupError::MultipleProvided {
            flag: flag.long().to_owned(),
        });
    }
    match tokens.get(index + 1) {
        Some(next) if config.is_value(next) => Ok(Some(next.as_str())),
        next => {
            tracing::debug!(flag = flag.long(), next = ?next, "no value follows flag");
            Err(LookupError::NoneProvided {
                flag: flag.long().to_owned(),
            })
        }
    }
}

/// Query surface shared by the full token sequence and its scopes.
///
/// Implementors only supply the tokens and the configuration; every query
/// is provided on top of them.
pub trait Lookup {
    /// The tokens this view covers.
    fn tokens(&self) -> &[String];

    /// The configuration used to interpret the tokens.
    fn config(&self) -> &Config;

    /// Every token in this view, in invocation order.
    fn all(&self) -> &[String] {
        self.tokens()
    }

    /// Returns `true` if `token` occurs anywhere in this view.
    fn exists(&self, token: &str) -> bool {
        self.tokens().iter().any(|candidate| candidate == token)
    }

    /// Returns `true` if the long or short form of `flag` is present.
    ///
    /// Repeats and simultaneous long/short forms are not errors here.
    ///
    /// # Errors
    ///
    /// Returns [`UsageError::ShortFlagRequired`] for a long-only flag when
    /// the configuration requires short forms.
    fn get_bool<'f>(&self, flag: impl Into<Flag<'f>>) -> Result<bool, UsageError>
    where
        Self: Sized,
    {
        let resolved = flag.into().resolve(self.config())?;
        Ok(self.tokens().iter().any(|token| resolved.matches(token)))
    }

    /// Returns the value token that follows `flag`.
    ///
    /// `Ok(None)` means the flag was not given at all.
    ///
    /// # Errors
    ///
    /// Returns [`LookupError::MultipleProvided`] if the flag occurs more
    /// than once in any combination of forms,
    /// [`LookupError::NoneProvided`] if the flag is last or followed by a
    /// flag, help or version token, and [`LookupError::Usage`] for a
    /// malformed query.
    fn get_str<'f>(&self, flag: impl Into<Flag<'f>>) -> Result<Option<&str>, LookupError>
    where
        Self: Sized,
    {
        let resolved = flag.into().resolve(self.config())?;
        value_after(self.tokens(), self.config(), &resolved)
    }

    /// Returns the number that follows `flag`.
    ///
    /// # Errors
    ///
    /// Fails as [`Lookup::get_str`] does, plus
    /// [`LookupError::NotANumber`] carrying the raw token when it is not
    /// an integer or float.
    fn get_num<'f>(&self, flag: impl Into<Flag<'f>>) -> Result<Option<Number>, LookupError>
    where
        Self: Sized,
    {
        let resolved = flag.into().resolve(self.config())?;
        value_after(self.tokens(), self.config(), &resolved)?
            .map(|raw| {
                Number::parse(raw).ok_or_else(|| {
                    tracing::debug!(flag = resolved.long(), raw, "value is not a number");
                    LookupError::NotANumber {
                        flag: resolved.long().to_owned(),
                        raw: raw.to_owned(),
                    }
                })
            })
            .transpose()
    }

    /// Returns `true` if either help token is present.
    fn wants_help(&self) -> bool {
        contains_any(self, self.config().help_flag())
    }

    /// Returns `true` if either version token is present.
    fn wants_version(&self) -> bool {
        contains_any(self, self.config().version_flag())
    }

    /// Runs `action` if help was requested.
    fn on_help<F: FnOnce()>(&self, action: F)
    where
        Self: Sized,
    {
        if self.wants_help() {
            action();
        }
    }

    /// Prints `message` to standard output if the version was requested.
    ///
    /// # Errors
    ///
    /// Returns any error raised while writing to standard output.
    fn on_version(&self, message: &str) -> io::Result<()> {
        if !self.wants_version() {
            return Ok(());
        }
        let mut stdout = io::stdout().lock();
        writeln!(stdout, "{message}")
    }

    /// Narrows the view to the tokens strictly after the first occurrence
    /// of `anchor`.
    ///
    /// # Errors
    ///
    /// Returns [`ScopeError::AnchorNotFound`] when `anchor` is absent.
    fn scope(&self, anchor: &str) -> Result<Scope<'_>, ScopeError> {
        let tokens = self.tokens();
        let index = tokens
            .iter()
            .position(|token| token == anchor)
            .ok_or_else(|| ScopeError::AnchorNotFound {
                anchor: anchor.to_owned(),
            })?;
        let rest = tokens.get(index + 1..).unwrap_or_default();
        tracing::debug!(anchor, tokens = rest.len(), "scoped to subcommand");
        Ok(Scope::new(anchor, rest, self.config()))
    }
}

fn contains_any<L: Lookup + ?Sized>(view: &L, pair: &FlagPair) -> bool {
    pair.forms().into_iter().any(|form| view.exists(form))
}
