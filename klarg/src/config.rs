//! Prefix and special-flag configuration.
//!
//! A [`Config`] is bound to an [`crate::Args`] when it is constructed and
//! never changes afterwards. Programs can build one in code or load it
//! through `figment` from `KLARG_*` environment variables or a TOML file.

use std::fs;
use std::path::Path;

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Environment prefix used by [`Config::load_from_env`].
pub const ENV_PREFIX: &str = "KLARG_";

/// The long and short literal tokens of a special flag such as `--help`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct FlagPair {
    /// Long token, including its prefix.
    pub long: String,
    /// Short token, including its prefix.
    pub short: String,
}

impl FlagPair {
    /// Creates a pair from two literal tokens.
    #[must_use]
    pub fn new(long: &str, short: &str) -> Self {
        Self {
            long: long.to_owned(),
            short: short.to_owned(),
        }
    }

    /// Returns `true` if `token` is either form of the pair.
    #[must_use]
    pub fn contains(&self, token: &str) -> bool {
        self.long == token || self.short == token
    }

    pub(crate) const fn forms(&self) -> [&str; 2] {
        [self.long.as_str(), self.short.as_str()]
    }
}

/// Lookup configuration.
///
/// # Examples
///
/// ```rust
/// use klarg::{Config, FlagPair};
///
/// let config = Config::default()
///     .with_long_prefix("++")
///     .with_help_flag(FlagPair::new("++help", "+h"));
/// assert_eq!(config.long_prefix(), "++");
/// assert_eq!(config.short_prefix(), "-");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct Config {
    long_prefix: String,
    short_prefix: String,
    needs_short_flags: bool,
    help_flag: FlagPair,
    version_flag: FlagPair,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            long_prefix: "--".to_owned(),
            short_prefix: "-".to_owned(),
            needs_short_flags: false,
            help_flag: FlagPair::new("--help", "-h"),
            version_flag: FlagPair::new("--version", "-v"),
        }
    }
}

impl Config {
    /// Prefix prepended to long flag names.
    #[must_use]
    pub fn long_prefix(&self) -> &str {
        &self.long_prefix
    }

    /// Prefix prepended to short flag names.
    #[must_use]
    pub fn short_prefix(&self) -> &str {
        &self.short_prefix
    }

    /// Whether every flag query must supply a short form.
    #[must_use]
    pub const fn needs_short_flags(&self) -> bool {
        self.needs_short_flags
    }

    /// Tokens that request help output.
    #[must_use]
    pub const fn help_flag(&self) -> &FlagPair {
        &self.help_flag
    }

    /// Tokens that request version output.
    #[must_use]
    pub const fn version_flag(&self) -> &FlagPair {
        &self.version_flag
    }

    /// Replaces the long prefix.
    #[must_use]
    pub fn with_long_prefix(mut self, prefix: &str) -> Self {
        prefix.clone_into(&mut self.long_prefix);
        self
    }

    /// Replaces the short prefix.
    #[must_use]
    pub fn with_short_prefix(mut self, prefix: &str) -> Self {
        prefix.clone_into(&mut self.short_prefix);
        self
    }

    /// Requires (or stops requiring) a short form on every flag query.
    #[must_use]
    pub const fn with_short_flags_required(mut self, required: bool) -> Self {
        self.needs_short_flags = required;
        self
    }

    /// Replaces the help tokens.
    #[must_use]
    pub fn with_help_flag(mut self, pair: FlagPair) -> Self {
        self.help_flag = pair;
        self
    }

    /// Replaces the version tokens.
    #[must_use]
    pub fn with_version_flag(mut self, pair: FlagPair) -> Self {
        self.version_flag = pair;
        self
    }

    /// Returns `true` when `token` may be consumed as the value of a flag.
    ///
    /// A value starts with neither prefix and is not one of the help or
    /// version tokens. Empty prefixes never match.
    #[must_use]
    pub fn is_value(&self, token: &str) -> bool {
        let prefixed = [self.long_prefix.as_str(), self.short_prefix.as_str()]
            .into_iter()
            .any(|prefix| !prefix.is_empty() && token.starts_with(prefix));
        !prefixed && !self.help_flag.contains(token) && !self.version_flag.contains(token)
    }

    /// Extracts a configuration from `figment`, filling unset keys with the
    /// defaults.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Gathering`] if extraction fails and
    /// [`ConfigError::Validation`] if a prefix or special token is empty.
    pub fn from_figment(figment: &Figment) -> Result<Self, ConfigError> {
        let config: Self = figment.extract()?;
        config.validate()?;
        Ok(config)
    }

    /// Loads configuration from `KLARG_*` environment variables.
    ///
    /// Nested keys use a double underscore, for example
    /// `KLARG_HELP_FLAG__SHORT=-?`.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] if any variable cannot be parsed or the
    /// result fails validation.
    pub fn load_from_env() -> Result<Self, ConfigError> {
        Self::from_figment(&Self::defaults().merge(Env::prefixed(ENV_PREFIX).split("__")))
    }

    /// Loads configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] if the file cannot be read or parsed, or the
    /// result fails validation.
    pub fn load_from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let file = path.as_ref();
        let contents = fs::read_to_string(file).map_err(|source| ConfigError::File {
            path: file.to_path_buf(),
            source,
        })?;
        Self::from_figment(&Self::defaults().merge(Toml::string(&contents)))
    }

    /// Defaults layer underneath every loaded source.
    fn defaults() -> Figment {
        Figment::from(Serialized::defaults(Self::default()))
    }

    fn validate(&self) -> Result<(), ConfigError> {
        let required = [
            ("long_prefix", self.long_prefix.as_str()),
            ("short_prefix", self.short_prefix.as_str()),
            ("help_flag.long", self.help_flag.long.as_str()),
            ("help_flag.short", self.help_flag.short.as_str()),
            ("version_flag.long", self.version_flag.long.as_str()),
            ("version_flag.short", self.version_flag.short.as_str()),
        ];
        match required.into_iter().find(|(_, value)| value.is_empty()) {
            Some((key, _)) => Err(ConfigError::Validation {
                key: key.to_owned(),
                message: "must not be empty".to_owned(),
            }),
            None => Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case("value", true)]
    #[case("12", true)]
    #[case("--other", false)]
    #[case("-o", false)]
    #[case("-5", false)]
    #[case("--help", false)]
    #[case("-v", false)]
    fn classifies_value_tokens(#[case] token: &str, #[case] expected: bool) {
        assert_eq!(Config::default().is_value(token), expected);
    }

    #[test]
    fn custom_prefixes_change_value_rule() {
        let config = Config::default()
            .with_long_prefix("//")
            .with_short_prefix("/");
        assert!(config.is_value("-x"));
        assert!(!config.is_value("/x"));
        assert!(!config.is_value("//long"));
        // Default help/version literals are still rejected.
        assert!(!config.is_value("--help"));
    }

    #[test]
    fn empty_prefix_never_marks_a_flag() {
        let config = Config::default().with_short_prefix("");
        assert!(config.is_value("plain"));
        assert!(!config.is_value("--long"));
    }

    #[test]
    fn partial_nested_table_keeps_default_form() -> Result<(), ConfigError> {
        let figment = Config::defaults().merge(Toml::string("[help_flag]\nshort = \"-?\"\n"));
        let config = Config::from_figment(&figment)?;
        assert_eq!(config.help_flag(), &FlagPair::new("--help", "-?"));
        assert_eq!(config.version_flag(), &FlagPair::new("--version", "-v"));
        Ok(())
    }

    #[test]
    fn rejects_empty_prefix() {
        let config = Config::default().with_long_prefix("");
        let err = config.validate().err();
        assert!(matches!(
            err,
            Some(ConfigError::Validation { ref key, .. }) if key == "long_prefix"
        ));
    }
}
