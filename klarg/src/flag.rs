//! Flag descriptors and their resolution against a [`Config`].

use crate::config::Config;
use crate::error::UsageError;

/// A flag to look up: a mandatory long name and an optional short name.
///
/// Names are given without prefixes. A plain `&str` converts into a
/// long-only flag and a `(&str, &str)` tuple into a long + short pair.
///
/// # Examples
///
/// ```rust
/// use klarg::Flag;
///
/// assert_eq!(Flag::from("number"), Flag::long("number"));
/// assert_eq!(Flag::from(("number", "n")), Flag::new("number", "n"));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Flag<'a> {
    name: &'a str,
    short: Option<&'a str>,
}

impl<'a> Flag<'a> {
    /// A flag with only a long form.
    #[must_use]
    pub const fn long(name: &'a str) -> Self {
        Self { name, short: None }
    }

    /// A flag with both a long and a short form.
    #[must_use]
    pub const fn new(name: &'a str, short: &'a str) -> Self {
        Self {
            name,
            short: Some(short),
        }
    }

    /// The unprefixed long name.
    #[must_use]
    pub const fn name(&self) -> &'a str {
        self.name
    }

    /// The unprefixed short name, if any.
    #[must_use]
    pub const fn short(&self) -> Option<&'a str> {
        self.short
    }

    /// Prefixes both names using `config`.
    ///
    /// # Errors
    ///
    /// Returns [`UsageError::ShortFlagRequired`] for a long-only flag when
    /// the configuration requires short forms.
    pub fn resolve(self, config: &Config) -> Result<ResolvedFlag, UsageError> {
        let long = format!("{}{}", config.long_prefix(), self.name);
        match self.short {
            Some(short) => Ok(ResolvedFlag {
                long,
                short: Some(format!("{}{short}", config.short_prefix())),
            }),
            None if config.needs_short_flags() => Err(UsageError::ShortFlagRequired { flag: long }),
            None => Ok(ResolvedFlag { long, short: None }),
        }
    }
}

impl<'a> From<&'a str> for Flag<'a> {
    fn from(name: &'a str) -> Self {
        Self::long(name)
    }
}

impl<'a> From<(&'a str, &'a str)> for Flag<'a> {
    fn from((name, short): (&'a str, &'a str)) -> Self {
        Self::new(name, short)
    }
}

/// A flag with its prefixes applied, ready to match tokens.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedFlag {
    long: String,
    short: Option<String>,
}

impl ResolvedFlag {
    /// The prefixed long form, used to identify the flag in diagnostics.
    #[must_use]
    pub fn long(&self) -> &str {
        &self.long
    }

    /// The prefixed short form, if any.
    #[must_use]
    pub fn short(&self) -> Option<&str> {
        self.short.as_deref()
    }

    /// Returns `true` if `token` is either form of the flag.
    #[must_use]
    pub fn matches(&self, token: &str) -> bool {
        self.long == token || self.short.as_deref() == Some(token)
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case(Flag::long("number"), "--number", None)]
    #[case(Flag::new("number", "n"), "--number", Some("-n"))]
    fn applies_default_prefixes(
        #[case] flag: Flag<'_>,
        #[case] long: &str,
        #[case] short: Option<&str>,
    ) {
        let resolved = flag
            .resolve(&Config::default())
            .unwrap_or_else(|err| panic!("unexpected usage error: {err}"));
        assert_eq!(resolved.long(), long);
        assert_eq!(resolved.short(), short);
    }

    #[test]
    fn applies_custom_prefixes() {
        let config = Config::default()
            .with_long_prefix("/")
            .with_short_prefix("+");
        let resolved = Flag::new("out", "o")
            .resolve(&config)
            .unwrap_or_else(|err| panic!("unexpected usage error: {err}"));
        assert!(resolved.matches("/out"));
        assert!(resolved.matches("+o"));
        assert!(!resolved.matches("--out"));
    }

    #[test]
    fn long_only_rejected_when_short_flags_required() {
        let config = Config::default().with_short_flags_required(true);
        assert_eq!(
            Flag::long("number").resolve(&config),
            Err(UsageError::ShortFlagRequired {
                flag: "--number".to_owned(),
            })
        );
        assert!(Flag::new("number", "n").resolve(&config).is_ok());
    }
}
