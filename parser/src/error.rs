//! Error types for command-line parsing.
//!
//! Every grammar violation aborts the current parse with a [`ParseError`].
//! Callers usually print the message together with the formatted option
//! description and exit with a non-zero status.

use thiserror::Error;

/// Errors raised while parsing an argument vector.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// `--name` where `name` is not registered.
    #[error("unknown option: --{0}")]
    UnknownLongOption(String),

    /// A cluster character that is not a registered short option.
    #[error("unknown option: -{0}")]
    UnknownShortOption(char),

    /// Short option written as `-x=value`.
    #[error("short options do not take '=' values: {0}")]
    ShortOptionAssignment(String),

    /// A required value is missing at the end of the arguments.
    #[error("missing value for option --{0}")]
    MissingValue(String),

    /// A flag written as `--flag=value`.
    #[error("option --{0} does not take a value")]
    UnexpectedValue(String),

    /// A value that does not match the option's pattern.
    #[error("invalid value {value:?} for option --{name}: expected a match for {pattern}")]
    RejectedValue {
        name: String,
        value: String,
        pattern: String,
    },
}

/// Convenience alias for results with [`ParseError`].
pub type Result<T> = std::result::Result<T, ParseError>;
