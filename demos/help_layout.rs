//! Rendering option descriptions.
//!
//! Prints the same registry with the default layout, with a custom header and
//! word wrapping, and colorized.
//!
//! # Usage
//!
//! ```bash
//! cargo run -p cmdopts-demos --example help_layout
//! ```

use cmdopts::{CommandLineParser, DefinitionError, HelpLayout, OptionRegistry, ValueRequirement};

fn build() -> Result<CommandLineParser, DefinitionError> {
    let registry = OptionRegistry::new()
        .add_flag("help", Some('h'), ["Show this help and exit"])?
        .add_flag("development", Some('d'), ["Enable development mode"])?
        .add_parameter(
            "geometry",
            Some('g'),
            ValueRequirement::Required,
            Some(r"(\d{3,4})[xX](\d{3,4})(([+-])(\d{1,4})([+-])(\d{1,4}))?"),
            [
                "Initial window geometry, WxH[+X+Y]",
                "The position is measured from the top left corner of the primary screen and may be negative",
            ],
        )?
        .add_flag("reset-preferences", None, ["Forget all stored preferences"])?
        .add_flag("safe-mode", None, ["Start without plugins"])?;
    Ok(CommandLineParser::new(registry))
}

fn main() {
    let parser = match build() {
        Ok(parser) => parser,
        Err(err) => {
            eprintln!("Failed to declare options: {err}");
            std::process::exit(1);
        }
    };

    println!("=== Default layout ===\n");
    for line in parser.formatted_description(false) {
        println!("{line}");
    }

    let layout = HelpLayout::default()
        .with_header("Usage: viewer [OPTIONS] [FILE]...")
        .with_wrap_width(72);
    println!("\n=== Wrapped at 72 columns ===\n");
    for line in parser.formatted_description_with(&layout, false) {
        println!("{line}");
    }

    println!("\n=== Colorized ===\n");
    for line in parser.formatted_description_with(&layout, true) {
        println!("{line}");
    }
}
