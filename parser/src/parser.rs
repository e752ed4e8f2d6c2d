//! Token classification and option dispatch.
//!
//! Tokens are read left to right. Long options (`--name`, `--name=value`),
//! short clusters (`-abc`) and positional arguments are recognized; `--` and
//! a lone `-` end option parsing. A value is taken from the following token
//! only when an option asks for one, so at most one token of lookahead is
//! consumed per option.

use std::collections::HashMap;
use std::iter::Peekable;

use cmdopts_core::{OptionKind, OptionRegistry, OptionSpec, ValueRequirement};
use tracing::{debug, trace};

use crate::error::{ParseError, Result};
use crate::help::{HelpLayout, format_description};
use crate::outcome::{OptionMatch, ParseOutcome, ParsedOption};

/// Parses argument vectors against a frozen [`OptionRegistry`].
///
/// The parser holds no per-call state, so one instance can serve any number
/// of [`parse`](Self::parse) calls.
///
/// # Examples
///
/// ```
/// use cmdopts::{CommandLineParser, OptionRegistry, ValueRequirement};
///
/// let registry = OptionRegistry::new()
///     .add_flag("development", Some('d'), ["Enable development mode"])?
///     .add_parameter("open", Some('o'), ValueRequirement::Required, None, ["File to open"])?;
/// let parser = CommandLineParser::new(registry);
///
/// let mut seen = Vec::new();
/// let outcome = parser
///     .parse(["-d", "--open", "notes.txt", "extra"], |name, value| {
///         seen.push((name.to_string(), value.map(String::from)));
///     })
///     .unwrap();
///
/// assert_eq!(outcome.positional(), ["extra"]);
/// assert_eq!(seen[0], ("development".to_string(), None));
/// assert_eq!(seen[1], ("open".to_string(), Some("notes.txt".to_string())));
/// # Ok::<(), cmdopts::DefinitionError>(())
/// ```
#[derive(Debug, Clone)]
pub struct CommandLineParser {
    registry: OptionRegistry,
}

impl CommandLineParser {
    pub fn new(registry: OptionRegistry) -> Self {
        Self { registry }
    }

    pub fn registry(&self) -> &OptionRegistry {
        &self.registry
    }

    /// Parses `args`, calling `on_option` with the long name and value of
    /// every recognized option occurrence, in token order.
    ///
    /// # Errors
    ///
    /// Returns a [`ParseError`] on the first unknown option, malformed short
    /// option, missing required value or value rejected by its pattern.
    /// Callbacks fired before the error are not undone.
    pub fn parse<I, S, F>(&self, args: I, on_option: F) -> Result<ParseOutcome>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
        F: FnMut(&str, Option<&str>),
    {
        let mut dispatch = Dispatch {
            registry: &self.registry,
            on_option,
            matches: HashMap::new(),
        };
        let mut positional = Vec::new();
        let mut tokens = args.into_iter().peekable();

        while let Some(token) = tokens.next() {
            let token = token.as_ref();
            match classify(token) {
                Token::Empty => {}
                Token::EndOfOptions => {
                    trace!(token, "End of options");
                    positional.extend(tokens.by_ref().map(|t| t.as_ref().to_string()));
                }
                Token::Long { name, value } => dispatch.long_option(name, value, &mut tokens)?,
                Token::Short(cluster) => dispatch.short_cluster(cluster, &mut tokens)?,
                Token::Positional => {
                    trace!(token, "Positional argument");
                    positional.push(token.to_string());
                }
            }
        }

        Ok(ParseOutcome {
            positional,
            matches: dispatch.matches,
        })
    }

    /// Like [`parse`](Self::parse), for an argument vector that may be
    /// absent. `None` yields an empty outcome without any callback.
    ///
    /// ```
    /// use cmdopts::{CommandLineParser, OptionRegistry};
    ///
    /// let registry = OptionRegistry::new().add_flag("help", Some('h'), ["Show help"])?;
    /// let parser = CommandLineParser::new(registry);
    ///
    /// let outcome = parser.parse_opt(None::<Vec<String>>, |_, _| unreachable!())?;
    /// assert!(outcome.positional().is_empty());
    /// # Ok::<(), Box<dyn std::error::Error>>(())
    /// ```
    pub fn parse_opt<I, S, F>(&self, args: Option<I>, on_option: F) -> Result<ParseOutcome>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
        F: FnMut(&str, Option<&str>),
    {
        self.parse(args.into_iter().flatten(), on_option)
    }

    /// Like [`parse`](Self::parse), but records the callback invocations
    /// instead of taking a callback.
    pub fn parse_collect<I, S>(&self, args: I) -> Result<(Vec<ParsedOption>, ParseOutcome)>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut options = Vec::new();
        let outcome = self.parse(args, |name, value| {
            options.push(ParsedOption::new(name, value));
        })?;
        Ok((options, outcome))
    }

    /// Help lines for every registered option, using [`HelpLayout::default`].
    pub fn formatted_description(&self, colorize: bool) -> Vec<String> {
        format_description(&self.registry, &HelpLayout::default(), colorize)
    }

    /// Help lines for every registered option, using `layout`.
    pub fn formatted_description_with(&self, layout: &HelpLayout, colorize: bool) -> Vec<String> {
        format_description(&self.registry, layout, colorize)
    }
}

#[derive(Debug, PartialEq, Eq)]
enum Token<'a> {
    Empty,
    EndOfOptions,
    Long { name: &'a str, value: Option<&'a str> },
    /// Cluster characters, without the leading `-`.
    Short(&'a str),
    Positional,
}

fn classify(token: &str) -> Token<'_> {
    match token {
        "" => Token::Empty,
        "--" | "-" => Token::EndOfOptions,
        _ => {
            if let Some(long) = token.strip_prefix("--") {
                match long.split_once('=') {
                    Some((name, value)) => Token::Long {
                        name,
                        value: Some(value),
                    },
                    None => Token::Long {
                        name: long,
                        value: None,
                    },
                }
            } else if let Some(cluster) = token.strip_prefix('-') {
                Token::Short(cluster)
            } else {
                Token::Positional
            }
        }
    }
}

/// Whether an optional short parameter may take `token` as its value.
fn looks_like_value(token: &str) -> bool {
    !token.is_empty() && !token.starts_with('-')
}

struct Dispatch<'p, F> {
    registry: &'p OptionRegistry,
    on_option: F,
    matches: HashMap<String, OptionMatch>,
}

impl<'p, F> Dispatch<'p, F>
where
    F: FnMut(&str, Option<&str>),
{
    fn long_option<I, S>(
        &mut self,
        name: &str,
        inline: Option<&str>,
        rest: &mut Peekable<I>,
    ) -> Result<()>
    where
        I: Iterator<Item = S>,
        S: AsRef<str>,
    {
        trace!(name, inline = ?inline, "Long option");
        let registry = self.registry;
        let spec = registry
            .get(name)
            .ok_or_else(|| ParseError::UnknownLongOption(name.to_string()))?;

        match (spec.kind(), inline) {
            (OptionKind::Flag, Some(_)) => Err(ParseError::UnexpectedValue(name.to_string())),
            (OptionKind::Flag, None) => self.emit(spec, None),
            (OptionKind::Parameter { .. }, Some(value)) => self.emit(spec, Some(value)),
            (
                OptionKind::Parameter {
                    requirement: ValueRequirement::Required,
                    ..
                },
                None,
            ) => self.next_value(spec, rest),
            (
                OptionKind::Parameter {
                    requirement: ValueRequirement::Optional,
                    ..
                },
                None,
            ) => self.emit(spec, None),
        }
    }

    fn short_cluster<I, S>(&mut self, cluster: &str, rest: &mut Peekable<I>) -> Result<()>
    where
        I: Iterator<Item = S>,
        S: AsRef<str>,
    {
        trace!(cluster, "Short option cluster");
        if cluster.chars().nth(1) == Some('=') {
            return Err(ParseError::ShortOptionAssignment(format!("-{cluster}")));
        }

        let registry = self.registry;
        for (index, c) in cluster.char_indices() {
            let spec = registry
                .get_short(c)
                .ok_or(ParseError::UnknownShortOption(c))?;
            let OptionKind::Parameter { requirement, .. } = spec.kind() else {
                self.emit(spec, None)?;
                continue;
            };

            let tail = &cluster[index + c.len_utf8()..];
            if tail.is_empty() {
                return self.trailing_parameter(spec, *requirement, rest);
            }
            if tail.starts_with('=') {
                return Err(ParseError::ShortOptionAssignment(format!("-{cluster}")));
            }

            // A tail made only of registered letters is read as more options.
            if tail.chars().all(|t| registry.get_short(t).is_some()) {
                match requirement {
                    ValueRequirement::Required => self.next_value(spec, rest)?,
                    ValueRequirement::Optional => self.emit(spec, None)?,
                }
                continue;
            }

            return self.emit(spec, Some(tail));
        }

        Ok(())
    }

    /// A parameter that ends its cluster takes its value from the next token.
    fn trailing_parameter<I, S>(
        &mut self,
        spec: &OptionSpec,
        requirement: ValueRequirement,
        rest: &mut Peekable<I>,
    ) -> Result<()>
    where
        I: Iterator<Item = S>,
        S: AsRef<str>,
    {
        match requirement {
            ValueRequirement::Required => self.next_value(spec, rest),
            ValueRequirement::Optional => match rest.next_if(|next| looks_like_value(next.as_ref())) {
                Some(value) => self.emit(spec, Some(value.as_ref())),
                None => self.emit(spec, None),
            },
        }
    }

    fn next_value<I, S>(&mut self, spec: &OptionSpec, rest: &mut Peekable<I>) -> Result<()>
    where
        I: Iterator<Item = S>,
        S: AsRef<str>,
    {
        let value = rest
            .next()
            .ok_or_else(|| ParseError::MissingValue(spec.long_name().to_string()))?;
        self.emit(spec, Some(value.as_ref()))
    }

    fn emit(&mut self, spec: &OptionSpec, value: Option<&str>) -> Result<()> {
        if let (Some(value), Some(pattern)) = (value, spec.pattern()) {
            let captures =
                pattern
                    .regex()
                    .captures(value)
                    .ok_or_else(|| ParseError::RejectedValue {
                        name: spec.long_name().to_string(),
                        value: value.to_string(),
                        pattern: pattern.as_str().to_string(),
                    })?;
            self.matches.insert(
                spec.long_name().to_string(),
                OptionMatch::from_captures(pattern.regex(), &captures),
            );
        }

        debug!(option = spec.long_name(), value = ?value, "Dispatching option");
        (self.on_option)(spec.long_name(), value);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_tokens() {
        assert_eq!(classify(""), Token::Empty);
        assert_eq!(classify("--"), Token::EndOfOptions);
        assert_eq!(classify("-"), Token::EndOfOptions);
        assert_eq!(classify("file.txt"), Token::Positional);
        assert_eq!(classify("-abc"), Token::Short("abc"));
        assert_eq!(
            classify("--open"),
            Token::Long {
                name: "open",
                value: None
            }
        );
        assert_eq!(
            classify("--open=a=b"),
            Token::Long {
                name: "open",
                value: Some("a=b")
            }
        );
        assert_eq!(
            classify("--name="),
            Token::Long {
                name: "name",
                value: Some("")
            }
        );
    }

    #[test]
    fn test_looks_like_value() {
        assert!(looks_like_value("one"));
        assert!(!looks_like_value("-"));
        assert!(!looks_like_value("-x"));
        assert!(!looks_like_value(""));
    }

    #[test]
    fn test_optional_short_parameter_mid_cluster_takes_no_token() {
        let registry = OptionRegistry::new()
            .add_parameter("level", Some('l'), ValueRequirement::Optional, None, ["Level"])
            .unwrap()
            .add_flag("quiet", Some('q'), ["Quiet"])
            .unwrap();
        let parser = CommandLineParser::new(registry);

        let (options, outcome) = parser.parse_collect(["-lq", "next"]).unwrap();
        assert_eq!(
            options,
            vec![ParsedOption::new("level", None), ParsedOption::new("quiet", None)]
        );
        assert_eq!(outcome.positional(), ["next"]);
    }

    #[test]
    fn test_parser_is_shareable() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<CommandLineParser>();
    }
}
