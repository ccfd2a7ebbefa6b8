//! Library side of the `reply-demo` binary.
//!
//! Reads a global `--force` switch, then narrows to the `reply` subcommand
//! and pulls its options out of the scoped tokens.

pub mod error;

use std::fmt;

use klarg::{Lookup, LookupError, Number, Scope};

use error::{DemoError, Result};

/// Usage text printed for `--help`.
pub const USAGE: &str = "usage: reply-demo [-f|--force] reply [-n|--number N] [-s|--subject TEXT] FILE";

/// Line printed for `--version`.
pub const VERSION: &str = concat!("reply-demo ", env!("CARGO_PKG_VERSION"));

const NUMBER: (&str, &str) = ("number", "n");
const SUBJECT: (&str, &str) = ("subject", "s");

/// What the demo will do.
#[derive(Debug, Clone, PartialEq)]
pub struct ReplyPlan {
    /// File being answered.
    pub file: String,
    /// How many replies to send.
    pub count: i64,
    /// Optional subject line.
    pub subject: Option<String>,
    /// Whether `--force` was given before the subcommand.
    pub force: bool,
}

impl fmt::Display for ReplyPlan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "replying {}x to {}", self.count, self.file)?;
        if let Some(subject) = &self.subject {
            write!(f, " subject=\"{subject}\"")?;
        }
        if self.force {
            f.write_str(" (forced)")?;
        }
        Ok(())
    }
}

/// Builds a plan from the full invocation.
///
/// # Errors
///
/// Returns [`DemoError::Lookup`] for malformed flags,
/// [`DemoError::MissingSubcommand`] without `reply`,
/// [`DemoError::MissingFile`] when no file is named and
/// [`DemoError::InvalidCount`] for a non-positive or fractional count.
pub fn build_plan(args: &impl Lookup) -> Result<ReplyPlan> {
    let force = args.get_bool(("force", "f"))?;
    let reply = args.scope("reply")?;
    let count = match reply.get_num(NUMBER)? {
        None => 1,
        Some(Number::Int(count)) if count > 0 => count,
        Some(other) => return Err(DemoError::InvalidCount(other)),
    };
    let subject = match reply.get_str(SUBJECT) {
        Ok(subject) => subject.map(str::to_owned),
        Err(LookupError::NoneProvided { flag }) => {
            tracing::warn!(%flag, "ignoring subject without text");
            None
        }
        Err(err) => return Err(err.into()),
    };
    let file = trailing_file(&reply).ok_or(DemoError::MissingFile)?;
    Ok(ReplyPlan {
        file: file.to_owned(),
        count,
        subject,
        force,
    })
}

/// The last scoped token, unless it is a flag or the value of one.
fn trailing_file<'s>(reply: &'s Scope<'_>) -> Option<&'s str> {
    let config = reply.config();
    let (last, rest) = reply.all().split_last()?;
    if !config.is_value(last) {
        return None;
    }
    let consumed = rest.last().is_some_and(|previous| {
        [NUMBER, SUBJECT].into_iter().any(|(long, short)| {
            *previous == format!("{}{long}", config.long_prefix())
                || *previous == format!("{}{short}", config.short_prefix())
        })
    });
    (!consumed).then_some(last.as_str())
}
