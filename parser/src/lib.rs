//! GNU getopt-style command-line parsing.
//!
//! Options are declared up front in an [`OptionRegistry`], then a
//! [`CommandLineParser`] walks an argument vector, calls back once per
//! recognized option occurrence with its long name and value, and returns the
//! remaining positional arguments.
//!
//! # Main entry points
//!
//! - [`CommandLineParser::parse`]: dispatch options to a callback and collect
//!   positional arguments.
//! - [`CommandLineParser::parse_opt`]: the same for an argument vector that
//!   may be absent.
//! - [`CommandLineParser::parse_collect`]: same, recording the dispatched
//!   options in a `Vec`.
//! - [`CommandLineParser::formatted_description`]: aligned help lines for
//!   every option.
//!
//! # Grammar
//!
//! - `--name` and `--name=value` are long options; the value after `=` may be
//!   empty or start with `-`.
//! - `-abc` is a cluster of short options. A value-taking option inside a
//!   cluster takes the rest of the cluster as its value, unless the rest is
//!   made only of registered short options, in which case those are parsed as
//!   options and the value comes from the next argument.
//! - `--` and a lone `-` end option parsing; everything after them is
//!   positional.
//! - `-x=value` is always an error.
//!
//! # Example
//!
//! ```
//! use cmdopts::{CommandLineParser, OptionRegistry, ParseError, ValueRequirement};
//!
//! let registry = OptionRegistry::new()
//!     .add_flag("help", Some('h'), ["Show this help"])?
//!     .add_parameter(
//!         "geometry",
//!         Some('g'),
//!         ValueRequirement::Required,
//!         Some(r"(\d{3,4})[xX](\d{3,4})"),
//!         ["Initial window size, WxH"],
//!     )?;
//! let parser = CommandLineParser::new(registry);
//!
//! let (options, outcome) = parser.parse_collect(["-g", "1024x768", "file.txt"]).unwrap();
//! assert_eq!(options[0].name, "geometry");
//! assert_eq!(outcome.positional(), ["file.txt"]);
//! assert_eq!(outcome.matcher("geometry").unwrap().group(2), Some("768"));
//!
//! let err = parser.parse_collect(["--geometry=big"]).unwrap_err();
//! assert!(matches!(err, ParseError::RejectedValue { .. }));
//!
//! for line in parser.formatted_description(false) {
//!     println!("{line}");
//! }
//! # Ok::<(), cmdopts::DefinitionError>(())
//! ```
//!
//! # Concurrency
//!
//! Parsing is synchronous and keeps no state in the parser; pattern matches
//! are returned in the [`ParseOutcome`] of each call.

mod error;
mod help;
mod outcome;
mod parser;

pub use cmdopts_core::{
    DefinitionError, OptionKind, OptionRegistry, OptionSpec, OptionSummary, SummaryKind,
    ValuePattern, ValueRequirement,
};
pub use error::{ParseError, Result};
pub use help::{HelpLayout, format_description};
pub use outcome::{OptionMatch, ParseOutcome, ParsedOption};
pub use parser::CommandLineParser;
