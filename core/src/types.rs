//! Option type definitions.
//!
//! An [`OptionSpec`] describes one option the command line may carry: its
//! long name, an optional single-character short form, whether it takes a
//! value, and the description lines shown in help output. Specs are created
//! through [`OptionRegistry`](crate::OptionRegistry) and are immutable once
//! registered.

use std::fmt;

use regex::Regex;
use serde::{Deserialize, Serialize};

/// Whether a parameter option must be given a value.
///
/// # Examples
///
/// ```
/// use cmdopts_core::ValueRequirement;
///
/// assert!(ValueRequirement::Required.is_required());
/// assert!(!ValueRequirement::Optional.is_required());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ValueRequirement {
    /// A value must follow the option, inline or as the next token.
    Required,
    /// The option may appear without a value.
    Optional,
}

impl ValueRequirement {
    /// Returns `true` for [`ValueRequirement::Required`].
    pub fn is_required(self) -> bool {
        matches!(self, Self::Required)
    }
}

/// A compiled regular expression a parameter value must match in full.
///
/// The source text is kept for diagnostics and help listings; matching uses
/// a copy anchored as `^(?:source)$`, so capture group numbering is the same
/// as in the source pattern.
///
/// # Examples
///
/// ```
/// use cmdopts_core::ValuePattern;
///
/// let pattern = ValuePattern::new("(one)|(two)").unwrap();
/// assert!(pattern.is_full_match("two"));
/// assert!(!pattern.is_full_match("twofold"));
/// assert_eq!(pattern.as_str(), "(one)|(two)");
/// ```
#[derive(Clone)]
pub struct ValuePattern {
    source: String,
    regex: Regex,
}

impl ValuePattern {
    /// Compiles `source` into an anchored pattern.
    ///
    /// # Errors
    ///
    /// Returns the [`regex::Error`] when `source` is not a valid expression.
    pub fn new(source: &str) -> Result<Self, regex::Error> {
        let regex = Regex::new(&format!("^(?:{source})$"))?;
        Ok(Self {
            source: source.to_string(),
            regex,
        })
    }

    /// The pattern as it was registered.
    pub fn as_str(&self) -> &str {
        &self.source
    }

    /// The anchored, compiled expression.
    pub fn regex(&self) -> &Regex {
        &self.regex
    }

    /// Returns `true` when the whole of `value` matches.
    pub fn is_full_match(&self, value: &str) -> bool {
        self.regex.is_match(value)
    }
}

impl fmt::Debug for ValuePattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("ValuePattern").field(&self.source).finish()
    }
}

impl PartialEq for ValuePattern {
    fn eq(&self, other: &Self) -> bool {
        self.source == other.source
    }
}

impl Eq for ValuePattern {}

/// What an option carries on the command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OptionKind {
    /// Boolean option; never carries a value.
    Flag,
    /// Value-taking option, optionally constrained by a pattern.
    Parameter {
        requirement: ValueRequirement,
        pattern: Option<ValuePattern>,
    },
}

/// One registered option.
///
/// # Examples
///
/// ```
/// use cmdopts_core::{OptionRegistry, ValueRequirement};
///
/// let registry = OptionRegistry::new()
///     .add_parameter("open", Some('o'), ValueRequirement::Required, None, ["File to open"])
///     .unwrap();
///
/// let spec = registry.get("open").unwrap();
/// assert_eq!(spec.short_char(), Some('o'));
/// assert!(spec.takes_value());
/// assert!(spec.requires_value());
/// assert_eq!(spec.description(), ["File to open"]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OptionSpec {
    pub(crate) long_name: String,
    pub(crate) short_char: Option<char>,
    pub(crate) kind: OptionKind,
    pub(crate) description: Vec<String>,
}

impl OptionSpec {
    /// The canonical name, reported to parse callbacks.
    pub fn long_name(&self) -> &str {
        &self.long_name
    }

    pub fn short_char(&self) -> Option<char> {
        self.short_char
    }

    pub fn kind(&self) -> &OptionKind {
        &self.kind
    }

    /// Description lines; the first is shown beside the option.
    pub fn description(&self) -> &[String] {
        &self.description
    }

    pub fn is_flag(&self) -> bool {
        matches!(self.kind, OptionKind::Flag)
    }

    pub fn takes_value(&self) -> bool {
        !self.is_flag()
    }

    /// Returns `true` for parameters declared with [`ValueRequirement::Required`].
    pub fn requires_value(&self) -> bool {
        matches!(
            self.kind,
            OptionKind::Parameter {
                requirement: ValueRequirement::Required,
                ..
            }
        )
    }

    /// The value pattern, if this is a constrained parameter.
    pub fn pattern(&self) -> Option<&ValuePattern> {
        match &self.kind {
            OptionKind::Parameter { pattern, .. } => pattern.as_ref(),
            OptionKind::Flag => None,
        }
    }

    /// Serializable snapshot of this spec.
    pub fn summary(&self) -> OptionSummary {
        let kind = match &self.kind {
            OptionKind::Flag => SummaryKind::Flag,
            OptionKind::Parameter {
                requirement: ValueRequirement::Required,
                ..
            } => SummaryKind::Required,
            OptionKind::Parameter {
                requirement: ValueRequirement::Optional,
                ..
            } => SummaryKind::Optional,
        };
        OptionSummary {
            long_name: self.long_name.clone(),
            short_char: self.short_char,
            kind,
            pattern: self.pattern().map(|p| p.as_str().to_string()),
            description: self.description.clone(),
        }
    }
}

/// Kind label used in [`OptionSummary`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SummaryKind {
    Flag,
    Required,
    Optional,
}

impl fmt::Display for SummaryKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Flag => "flag",
            Self::Required => "required",
            Self::Optional => "optional",
        };
        f.write_str(label)
    }
}

/// Plain-data view of an [`OptionSpec`] for machine-readable listings.
///
/// # Examples
///
/// ```
/// use cmdopts_core::{OptionRegistry, SummaryKind};
///
/// let registry = OptionRegistry::new()
///     .add_flag("help", Some('h'), ["Show this help"])
///     .unwrap();
/// let summary = registry.get("help").unwrap().summary();
/// assert_eq!(summary.kind, SummaryKind::Flag);
/// assert_eq!(summary.pattern, None);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OptionSummary {
    pub long_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub short_char: Option<char>,
    pub kind: SummaryKind,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pattern: Option<String>,
    #[serde(default)]
    pub description: Vec<String>,
}
