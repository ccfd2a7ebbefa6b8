//! Point queries over command-line arguments.
//!
//! `klarg` does not build a parse tree. It keeps the raw tokens and answers
//! questions about them on demand: is a flag present, which string or number
//! follows it, and what follows it once the tokens are narrowed to a
//! subcommand.
//!
//! ```rust,no_run
//! use klarg::{Args, Lookup, OrExit};
//!
//! let args = Args::from_env();
//! args.on_help(|| println!("usage: tool [--name NAME] [reply -n N FILE]"));
//! let name = args.get_str(("name", "N")).or_exit().unwrap_or("world");
//! if let Ok(reply) = args.scope("reply") {
//!     let count = reply.get_num(("number", "n")).or_exit();
//!     println!("{name}: {count:?}");
//! }
//! ```
//!
//! Lookup failures are returned as [`LookupError`] values. Callers can match
//! on them, terminate with the default diagnostic through [`OrExit`], or
//! register callbacks with [`Handlers`].

mod args;
mod config;
mod error;
mod flag;
mod handlers;
mod lookup;
mod number;
mod scope;

pub use args::Args;
pub use config::{Config, ENV_PREFIX, FlagPair};
pub use error::{
    ConfigError, EXIT_USAGE_ERROR, EXIT_USER_ERROR, ErrorKind, KlargError, LookupError, OrExit,
    ScopeError, UsageError,
};
pub use flag::{Flag, ResolvedFlag};
pub use handlers::Handlers;
pub use lookup::Lookup;
pub use number::Number;
pub use scope::Scope;

/// Result alias using the crate's umbrella error.
pub type KlargResult<T> = Result<T, KlargError>;
