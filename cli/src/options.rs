//! Options understood by the demo launcher.

use cmdopts::{CommandLineParser, DefinitionError, OptionRegistry, ValueRequirement};

pub const HELP: &str = "help";
pub const DEVELOPMENT: &str = "development";
pub const OPEN: &str = "open";
pub const GEOMETRY: &str = "geometry";
pub const VERBOSE: &str = "verbose";
pub const NO_COLOR: &str = "no-color";
pub const LIST_OPTIONS: &str = "list-options";

/// `WxH` with an optional `+X+Y` position; each offset may be negative.
pub const GEOMETRY_PATTERN: &str = r"(\d{3,4})[xX](\d{3,4})(([+-])(\d{1,4})([+-])(\d{1,4}))?";

pub fn build_parser() -> Result<CommandLineParser, DefinitionError> {
    let registry = OptionRegistry::new()
        .add_flag(HELP, Some('h'), ["Show this help and exit"])?
        .add_flag(DEVELOPMENT, Some('d'), ["Enable development mode"])?
        .add_parameter(
            OPEN,
            Some('o'),
            ValueRequirement::Required,
            None,
            ["Open PATH on startup"],
        )?
        .add_parameter(
            GEOMETRY,
            Some('g'),
            ValueRequirement::Required,
            Some(GEOMETRY_PATTERN),
            [
                "Initial window geometry, WxH[+X+Y]",
                "width and height take 3-4 digits, e.g. 1280x800+0+0",
            ],
        )?
        .add_flag(VERBOSE, Some('v'), ["Log every received option"])?
        .add_flag(NO_COLOR, None, ["Never colorize help output"])?
        .add_parameter(
            LIST_OPTIONS,
            None,
            ValueRequirement::Optional,
            Some("text|json"),
            ["List declared options and exit", "FORMAT is text (default) or json"],
        )?;

    Ok(CommandLineParser::new(registry))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_parser_registers_everything() {
        let parser = build_parser().unwrap();
        let registry = parser.registry();

        assert_eq!(registry.len(), 7);
        assert_eq!(registry.get_short('g').unwrap().long_name(), GEOMETRY);
        assert!(registry.get(LIST_OPTIONS).unwrap().short_char().is_none());
    }

    #[test]
    fn test_geometry_pattern() {
        let parser = build_parser().unwrap();

        for value in ["800x600", "1920X1080", "1280x800+0+0", "640x480-10+25"] {
            assert!(parser.parse_collect(["-g", value]).is_ok(), "{value}");
        }
        for value in ["80x60", "800x600+1", "big", "800x600+0+0+0"] {
            assert!(parser.parse_collect(["-g", value]).is_err(), "{value}");
        }
    }
}
