//! Option registration and uniqueness checks.
//!
//! [`OptionRegistry`] is a consuming builder: every `add_*` call validates
//! the new option against those already registered and either returns the
//! extended registry or a [`DefinitionError`]. Once handed to a parser the
//! registry is only read.
//!
//! # Examples
//!
//! ```
//! use cmdopts_core::*;
//!
//! let registry = OptionRegistry::new()
//!     .add_flag("help", Some('h'), ["Show this help"])?
//!     .add_parameter("open", Some('o'), ValueRequirement::Required, None, ["File to open"])?;
//! assert_eq!(registry.len(), 2);
//!
//! // Second registration of a long name fails
//! let err = registry.add_flag("help", None, ["Again"]).unwrap_err();
//! assert!(matches!(err, DefinitionError::DuplicateLongName(_)));
//! # Ok::<(), DefinitionError>(())
//! ```

use std::collections::HashMap;

use thiserror::Error;
use tracing::debug;

use crate::{OptionKind, OptionSpec, OptionSummary, ValuePattern, ValueRequirement};

/// Errors raised while registering options.
#[derive(Debug, Clone, Error)]
pub enum DefinitionError {
    /// Long name is empty.
    #[error("option long name cannot be empty")]
    EmptyLongName,
    /// Long name starts with `-` or contains `=` or whitespace.
    #[error("invalid option long name: {0:?}")]
    InvalidLongName(String),
    /// Short form is `-`, `=` or whitespace.
    #[error("invalid short option character: {0:?}")]
    InvalidShortChar(char),
    /// Another option already uses this long name.
    #[error("option already defined: --{0}")]
    DuplicateLongName(String),
    /// Another option already uses this short character.
    #[error("short option already defined: -{0}")]
    DuplicateShortChar(char),
    /// The value pattern does not compile.
    #[error("invalid value pattern for --{name}: {source}")]
    InvalidPattern {
        name: String,
        #[source]
        source: regex::Error,
    },
}

/// The set of declared options.
///
/// Iteration follows registration order.
#[derive(Debug, Clone, Default)]
pub struct OptionRegistry {
    options: Vec<OptionSpec>,
    by_long: HashMap<String, usize>,
    by_short: HashMap<char, usize>,
}

impl OptionRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a boolean option.
    ///
    /// # Errors
    ///
    /// Fails when the long name is empty or malformed, or when the long name
    /// or short character is already registered.
    pub fn add_flag<I, S>(
        self,
        long_name: &str,
        short_char: Option<char>,
        description: I,
    ) -> Result<Self, DefinitionError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.insert(long_name, short_char, OptionKind::Flag, description)
    }

    /// Registers a value-taking option.
    ///
    /// When `pattern` is given, every value supplied for the option must match
    /// it in full.
    ///
    /// # Errors
    ///
    /// Same as [`add_flag`](Self::add_flag), plus
    /// [`DefinitionError::InvalidPattern`] when `pattern` does not compile.
    ///
    /// # Examples
    ///
    /// ```
    /// use cmdopts_core::{DefinitionError, OptionRegistry, ValueRequirement};
    ///
    /// let err = OptionRegistry::new()
    ///     .add_parameter("size", Some('s'), ValueRequirement::Required, Some("[0-9"), ["Size"])
    ///     .unwrap_err();
    /// assert!(matches!(err, DefinitionError::InvalidPattern { .. }));
    /// ```
    pub fn add_parameter<I, S>(
        self,
        long_name: &str,
        short_char: Option<char>,
        requirement: ValueRequirement,
        pattern: Option<&str>,
        description: I,
    ) -> Result<Self, DefinitionError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let pattern = pattern
            .map(|source| {
                ValuePattern::new(source).map_err(|source| DefinitionError::InvalidPattern {
                    name: long_name.to_string(),
                    source,
                })
            })
            .transpose()
            .inspect_err(|err| debug!(option = long_name, error = %err, "Rejected option"))?;

        self.insert(
            long_name,
            short_char,
            OptionKind::Parameter {
                requirement,
                pattern,
            },
            description,
        )
    }

    fn insert<I, S>(
        mut self,
        long_name: &str,
        short_char: Option<char>,
        kind: OptionKind,
        description: I,
    ) -> Result<Self, DefinitionError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.check_names(long_name, short_char)
            .inspect_err(|err| debug!(option = long_name, error = %err, "Rejected option"))?;

        let index = self.options.len();
        self.by_long.insert(long_name.to_string(), index);
        if let Some(short) = short_char {
            self.by_short.insert(short, index);
        }
        self.options.push(OptionSpec {
            long_name: long_name.to_string(),
            short_char,
            kind,
            description: description.into_iter().map(Into::into).collect(),
        });
        Ok(self)
    }

    fn check_names(&self, long_name: &str, short_char: Option<char>) -> Result<(), DefinitionError> {
        if long_name.is_empty() {
            return Err(DefinitionError::EmptyLongName);
        }
        if long_name.starts_with('-')
            || long_name.contains('=')
            || long_name.chars().any(char::is_whitespace)
        {
            return Err(DefinitionError::InvalidLongName(long_name.to_string()));
        }
        if self.by_long.contains_key(long_name) {
            return Err(DefinitionError::DuplicateLongName(long_name.to_string()));
        }

        if let Some(short) = short_char {
            if short == '-' || short == '=' || short.is_whitespace() {
                return Err(DefinitionError::InvalidShortChar(short));
            }
            if self.by_short.contains_key(&short) {
                return Err(DefinitionError::DuplicateShortChar(short));
            }
        }

        Ok(())
    }

    /// Looks up an option by long name.
    pub fn get(&self, long_name: &str) -> Option<&OptionSpec> {
        self.by_long.get(long_name).map(|&i| &self.options[i])
    }

    /// Looks up an option by short character.
    pub fn get_short(&self, short_char: char) -> Option<&OptionSpec> {
        self.by_short.get(&short_char).map(|&i| &self.options[i])
    }

    /// Iterates options in registration order.
    pub fn iter(&self) -> std::slice::Iter<'_, OptionSpec> {
        self.options.iter()
    }

    pub fn len(&self) -> usize {
        self.options.len()
    }

    pub fn is_empty(&self) -> bool {
        self.options.is_empty()
    }

    /// Snapshots of every option, in registration order.
    pub fn summaries(&self) -> Vec<OptionSummary> {
        self.options.iter().map(OptionSpec::summary).collect()
    }
}

impl<'a> IntoIterator for &'a OptionRegistry {
    type Item = &'a OptionSpec;
    type IntoIter = std::slice::Iter<'a, OptionSpec>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> OptionRegistry {
        OptionRegistry::new()
            .add_flag("help", Some('h'), ["Show this help"])
            .unwrap()
            .add_parameter(
                "geometry",
                Some('g'),
                ValueRequirement::Required,
                Some(r"(\d+)x(\d+)"),
                ["Window size"],
            )
            .unwrap()
            .add_flag("development", None, ["Development mode"])
            .unwrap()
    }

    #[test]
    fn test_registration_order_is_preserved() {
        let registry = sample();
        let names: Vec<&str> = registry.iter().map(OptionSpec::long_name).collect();

        assert_eq!(names, vec!["help", "geometry", "development"]);
    }

    #[test]
    fn test_lookup_by_long_and_short() {
        let registry = sample();

        assert_eq!(registry.get_short('g').unwrap().long_name(), "geometry");
        assert!(registry.get("development").unwrap().short_char().is_none());
        assert!(registry.get("missing").is_none());
        assert!(registry.get_short('x').is_none());
    }

    #[test]
    fn test_rejects_duplicate_long_name() {
        let err = sample()
            .add_parameter("help", None, ValueRequirement::Optional, None, ["Other"])
            .unwrap_err();

        assert!(matches!(err, DefinitionError::DuplicateLongName(ref name) if name == "help"));
    }

    #[test]
    fn test_rejects_duplicate_short_char() {
        let err = sample().add_flag("hidden", Some('h'), ["Other"]).unwrap_err();

        assert!(matches!(err, DefinitionError::DuplicateShortChar('h')));
    }

    #[test]
    fn test_rejects_empty_long_name() {
        let err = OptionRegistry::new()
            .add_flag("", Some('x'), ["Nothing"])
            .unwrap_err();

        assert!(matches!(err, DefinitionError::EmptyLongName));
    }

    #[test]
    fn test_rejects_unmatchable_names() {
        for name in ["-help", "a=b", "two words"] {
            let err = OptionRegistry::new()
                .add_flag(name, None, ["Bad"])
                .unwrap_err();
            assert!(matches!(err, DefinitionError::InvalidLongName(_)), "{name}");
        }

        for short in ['-', '=', ' '] {
            let err = OptionRegistry::new()
                .add_flag("fine", Some(short), ["Bad"])
                .unwrap_err();
            assert!(matches!(err, DefinitionError::InvalidShortChar(c) if c == short));
        }
    }

    #[test]
    fn test_rejects_invalid_pattern() {
        let err = OptionRegistry::new()
            .add_parameter("size", None, ValueRequirement::Required, Some("(a"), ["Size"])
            .unwrap_err();

        match err {
            DefinitionError::InvalidPattern { name, .. } => assert_eq!(name, "size"),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_summaries_follow_registration_order() {
        let summaries = sample().summaries();

        assert_eq!(summaries.len(), 3);
        assert_eq!(summaries[1].long_name, "geometry");
        assert_eq!(summaries[1].pattern.as_deref(), Some(r"(\d+)x(\d+)"));
    }

    #[test]
    fn test_error_messages() {
        assert_eq!(
            DefinitionError::DuplicateLongName("help".into()).to_string(),
            "option already defined: --help"
        );
        assert_eq!(
            DefinitionError::DuplicateShortChar('h').to_string(),
            "short option already defined: -h"
        );
    }
}
