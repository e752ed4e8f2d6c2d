//! Results of a parse call.

use std::collections::{BTreeMap, HashMap};

use regex::{Captures, Regex};

/// A successful pattern match for one option value.
///
/// Group `0` is the whole value; numbered and named groups follow the
/// option's registered pattern.
///
/// # Examples
///
/// ```
/// use cmdopts::{CommandLineParser, OptionRegistry, ValueRequirement};
///
/// let registry = OptionRegistry::new()
///     .add_parameter(
///         "size",
///         Some('s'),
///         ValueRequirement::Required,
///         Some(r"(?P<width>\d+)x(?P<height>\d+)"),
///         ["Size, WxH"],
///     )
///     .unwrap();
/// let parser = CommandLineParser::new(registry);
///
/// let outcome = parser.parse(["-s", "800x600"], |_, _| {}).unwrap();
/// let size = outcome.matcher("size").unwrap();
/// assert_eq!(size.as_str(), "800x600");
/// assert_eq!(size.group(1), Some("800"));
/// assert_eq!(size.name("height"), Some("600"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OptionMatch {
    groups: Vec<Option<String>>,
    named: BTreeMap<String, String>,
}

impl OptionMatch {
    pub(crate) fn from_captures(regex: &Regex, captures: &Captures<'_>) -> Self {
        let groups = captures
            .iter()
            .map(|group| group.map(|m| m.as_str().to_string()))
            .collect();
        let named = regex
            .capture_names()
            .flatten()
            .filter_map(|name| {
                captures
                    .name(name)
                    .map(|m| (name.to_string(), m.as_str().to_string()))
            })
            .collect();
        Self { groups, named }
    }

    /// The whole matched value.
    pub fn as_str(&self) -> &str {
        self.group(0).unwrap_or_default()
    }

    /// Numbered capture group, `None` if it did not participate.
    pub fn group(&self, index: usize) -> Option<&str> {
        self.groups.get(index).and_then(|g| g.as_deref())
    }

    /// Named capture group, `None` if absent or it did not participate.
    pub fn name(&self, name: &str) -> Option<&str> {
        self.named.get(name).map(String::as_str)
    }

    /// Number of groups, including group `0`.
    pub fn len(&self) -> usize {
        self.groups.len()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }
}

/// Positional arguments and match state produced by one parse call.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParseOutcome {
    pub(crate) positional: Vec<String>,
    pub(crate) matches: HashMap<String, OptionMatch>,
}

impl ParseOutcome {
    /// Positional arguments in encounter order.
    pub fn positional(&self) -> &[String] {
        &self.positional
    }

    pub fn into_positional(self) -> Vec<String> {
        self.positional
    }

    /// Last successful pattern match for the option named `long_name`.
    ///
    /// Only parameters registered with a pattern ever have a match.
    pub fn matcher(&self, long_name: &str) -> Option<&OptionMatch> {
        self.matches.get(long_name)
    }
}

/// One callback invocation, as recorded by
/// [`CommandLineParser::parse_collect`](crate::CommandLineParser::parse_collect).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedOption {
    pub name: String,
    pub value: Option<String>,
}

impl ParsedOption {
    pub fn new(name: &str, value: Option<&str>) -> Self {
        Self {
            name: name.to_string(),
            value: value.map(String::from),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_option_match_skips_unset_groups() {
        let regex = Regex::new(r"^(?:(\d+)(?:\+(?P<offset>\d+))?)$").unwrap();
        let captures = regex.captures("42").unwrap();
        let matched = OptionMatch::from_captures(&regex, &captures);

        assert_eq!(matched.as_str(), "42");
        assert_eq!(matched.group(1), Some("42"));
        assert_eq!(matched.group(2), None);
        assert_eq!(matched.name("offset"), None);
        assert_eq!(matched.len(), 3);
    }

    #[test]
    fn test_option_match_named_groups() {
        let regex = Regex::new(r"^(?:(?P<key>\w+):(?P<val>\w+))$").unwrap();
        let captures = regex.captures("mode:fast").unwrap();
        let matched = OptionMatch::from_captures(&regex, &captures);

        assert_eq!(matched.name("key"), Some("mode"));
        assert_eq!(matched.name("val"), Some("fast"));
        assert_eq!(matched.group(9), None);
    }
}
