//! Option definitions for GNU-style command-line parsing.
//!
//! This crate holds the declarative half of `cmdopts`:
//!
//! - [`OptionSpec`]: one option with a long name, an optional short
//!   character, a [`OptionKind`] and description lines.
//! - [`OptionRegistry`]: a fallible builder that enforces unique long names
//!   and short characters and compiles value patterns at registration time.
//! - [`OptionSummary`]: a serializable snapshot of a spec for listings.
//!
//! Parsing and help rendering live in the `cmdopts` crate.
//!
//! # Example
//!
//! ```
//! use cmdopts_core::*;
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
//!
//! assert_eq!(registry.get_short('g').unwrap().long_name(), "geometry");
//! assert!(registry.get("help").unwrap().is_flag());
//! # Ok::<(), DefinitionError>(())
//! ```

mod registry;
mod types;

pub use registry::{DefinitionError, OptionRegistry};
pub use types::*;
