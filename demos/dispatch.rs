//! Dispatching options to a callback.
//!
//! Declares a handful of options, parses a fixed argument vector and prints
//! each callback invocation, the positional arguments and the captured
//! groups of a pattern-constrained parameter. Run with `RUST_LOG=cmdopts=trace`
//! to see how each token is classified.
//!
//! # Usage
//!
//! ```bash
//! cargo run -p cmdopts-demos --example dispatch
//! cargo run -p cmdopts-demos --example dispatch -- -vo out.txt --level=3 input
//! ```

use cmdopts::{CommandLineParser, OptionRegistry, ValueRequirement};

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let registry = OptionRegistry::new()
        .add_flag("verbose", Some('v'), ["Verbose output"])
        .and_then(|r| {
            r.add_parameter(
                "output",
                Some('o'),
                ValueRequirement::Required,
                None,
                ["Write results to FILE"],
            )
        })
        .and_then(|r| {
            r.add_parameter(
                "level",
                Some('l'),
                ValueRequirement::Optional,
                Some(r"(?P<level>[0-9])"),
                ["Compression level, 0-9"],
            )
        });
    let registry = match registry {
        Ok(registry) => registry,
        Err(err) => {
            eprintln!("Failed to declare options: {err}");
            std::process::exit(1);
        }
    };
    let parser = CommandLineParser::new(registry);

    let mut args: Vec<String> = std::env::args().skip(1).collect();
    if args.is_empty() {
        args = ["-v", "--output", "report.txt", "-l7", "data.csv", "--", "-literal"]
            .into_iter()
            .map(String::from)
            .collect();
    }
    println!("Arguments: {args:?}\n");

    let outcome = parser.parse(&args, |name, value| match value {
        Some(value) => println!("  option --{name} = {value:?}"),
        None => println!("  option --{name}"),
    });

    match outcome {
        Ok(outcome) => {
            println!("\nPositional: {:?}", outcome.positional());
            if let Some(level) = outcome.matcher("level") {
                println!("Level group: {:?}", level.name("level"));
            }
        }
        Err(err) => {
            eprintln!("\nerror: {err}\n");
            for line in parser.formatted_description(false) {
                eprintln!("{line}");
            }
            std::process::exit(2);
        }
    }
}
