//! Typed launch configuration assembled from parsed options.

use std::fmt;
use std::path::PathBuf;

use cmdopts::{OptionMatch, ParseOutcome};

use crate::options;

/// Window size and optional position from `--geometry`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Geometry {
    pub width: u32,
    pub height: u32,
    pub position: Option<(i32, i32)>,
}

impl Geometry {
    /// Builds a geometry from a match of [`options::GEOMETRY_PATTERN`].
    pub fn from_match(matched: &OptionMatch) -> Result<Self, String> {
        let width = number(matched, 1)?;
        let height = number(matched, 2)?;
        let position = match (matched.group(4), matched.group(6)) {
            (Some(x_sign), Some(y_sign)) => Some((
                signed(x_sign, number(matched, 5)?),
                signed(y_sign, number(matched, 7)?),
            )),
            _ => None,
        };

        Ok(Self {
            width,
            height,
            position,
        })
    }
}

fn number(matched: &OptionMatch, group: usize) -> Result<u32, String> {
    let raw = matched
        .group(group)
        .ok_or_else(|| format!("geometry group {group} is missing"))?;
    raw.parse()
        .map_err(|err| format!("invalid geometry number '{raw}': {err}"))
}

fn signed(sign: &str, value: u32) -> i32 {
    // at most four digits, always fits
    let value = value as i32;
    if sign == "-" { -value } else { value }
}

impl fmt::Display for Geometry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.width, self.height)?;
        if let Some((x, y)) = self.position {
            write!(f, "{x:+}{y:+}")?;
        }
        Ok(())
    }
}

/// Output format for `--list-options`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListFormat {
    Text,
    Json,
}

/// Everything the launcher needs to start.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LaunchConfig {
    pub help: bool,
    pub development: bool,
    pub verbose: bool,
    pub no_color: bool,
    pub open: Option<PathBuf>,
    pub geometry: Option<Geometry>,
    pub list_options: Option<ListFormat>,
    pub arguments: Vec<String>,
}

impl LaunchConfig {
    /// Records one dispatched option.
    pub fn apply(&mut self, name: &str, value: Option<&str>) {
        match name {
            options::HELP => self.help = true,
            options::DEVELOPMENT => self.development = true,
            options::VERBOSE => self.verbose = true,
            options::NO_COLOR => self.no_color = true,
            options::OPEN => self.open = value.map(PathBuf::from),
            options::LIST_OPTIONS => {
                self.list_options = Some(match value {
                    Some("json") => ListFormat::Json,
                    _ => ListFormat::Text,
                });
            }
            // geometry is read from the match state in `finish`
            _ => {}
        }
    }

    /// Takes positional arguments and pattern matches from a finished parse.
    pub fn finish(&mut self, outcome: ParseOutcome) -> Result<(), String> {
        if let Some(matched) = outcome.matcher(options::GEOMETRY) {
            self.geometry = Some(Geometry::from_match(matched)?);
        }
        self.arguments = outcome.into_positional();
        Ok(())
    }

    /// Human-readable summary, one `key: value` per line.
    pub fn describe(&self) -> Vec<String> {
        let open = self
            .open
            .as_ref()
            .map_or_else(|| "-".to_string(), |p| p.display().to_string());
        let geometry = self
            .geometry
            .map_or_else(|| "-".to_string(), |g| g.to_string());

        vec![
            format!("development: {}", self.development),
            format!("open: {open}"),
            format!("geometry: {geometry}"),
            format!("arguments: {}", self.arguments.join(" ")),
        ]
    }
}
