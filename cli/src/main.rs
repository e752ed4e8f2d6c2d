use std::io::IsTerminal;

use cmdopts::{CommandLineParser, HelpLayout, ParseError};
use tracing::{debug, info};

mod launch;
mod options;

use launch::{LaunchConfig, ListFormat};

/// Exit status for invalid command lines.
const USAGE_EXIT_CODE: i32 = 2;

fn main() {
    let args: Vec<String> = std::env::args().skip(1).collect();

    match run(&args) {
        Ok(()) => {}
        Err(Failure::Usage(code)) => std::process::exit(code),
        Err(Failure::Internal(err)) => {
            eprintln!("error: {err}");
            std::process::exit(1);
        }
    }
}

enum Failure {
    /// Already reported to the user; exit with this status.
    Usage(i32),
    Internal(String),
}

impl From<String> for Failure {
    fn from(err: String) -> Self {
        Self::Internal(err)
    }
}

fn run(args: &[String]) -> Result<(), Failure> {
    let parser = options::build_parser()
        .map_err(|err| format!("failed to declare options: {err}"))?;

    init_tracing(verbose_requested(&parser, args));

    let mut config = LaunchConfig::default();
    let parsed = parser.parse(args, |name, value| config.apply(name, value));
    let outcome = match parsed {
        Ok(outcome) => outcome,
        Err(err) => {
            report_usage_error(&parser, &err, config.no_color);
            return Err(Failure::Usage(USAGE_EXIT_CODE));
        }
    };
    config.finish(outcome)?;
    debug!(?config, "Parsed command line");

    if config.help {
        let colorize = use_color(config.no_color, std::io::stdout().is_terminal());
        print_lines(&parser.formatted_description_with(&layout(), colorize));
        return Ok(());
    }

    if let Some(format) = config.list_options {
        return run_list_options(&parser, format);
    }

    info!(
        development = config.development,
        arguments = config.arguments.len(),
        "Launching"
    );
    print_lines(&config.describe());
    Ok(())
}

fn run_list_options(parser: &CommandLineParser, format: ListFormat) -> Result<(), Failure> {
    let summaries = parser.registry().summaries();
    match format {
        ListFormat::Json => {
            let raw = serde_json::to_string_pretty(&summaries)
                .map_err(|e| format!("JSON serialization failed: {e}"))?;
            println!("{raw}");
        }
        ListFormat::Text => {
            for summary in &summaries {
                let short = summary
                    .short_char
                    .map_or_else(String::new, |c| format!(" -{c}"));
                let pattern = summary
                    .pattern
                    .as_deref()
                    .map_or_else(String::new, |p| format!(" /{p}/"));
                println!("--{}{short} {}{pattern}", summary.long_name, summary.kind);
            }
        }
    }
    Ok(())
}

fn report_usage_error(parser: &CommandLineParser, err: &ParseError, no_color: bool) {
    eprintln!("error: {err}");
    let colorize = use_color(no_color, std::io::stderr().is_terminal());
    for line in parser.formatted_description_with(&layout(), colorize) {
        eprintln!("{line}");
    }
}

fn layout() -> HelpLayout {
    HelpLayout::default()
        .with_header("Usage: cmdopts-demo [OPTIONS] [ARGS]...")
        .with_wrap_width(80)
}

fn use_color(no_color: bool, is_terminal: bool) -> bool {
    !no_color && is_terminal && std::env::var_os("NO_COLOR").is_none()
}

fn print_lines(lines: &[String]) {
    for line in lines {
        println!("{line}");
    }
}

/// Silent first pass so the subscriber is installed before options are
/// dispatched. Errors are reported by the real pass.
fn verbose_requested(parser: &CommandLineParser, args: &[String]) -> bool {
    let mut verbose = false;
    let _ = parser.parse(args, |name, _| verbose |= name == options::VERBOSE);
    verbose
}

fn init_tracing(verbose: bool) {
    let default = if verbose {
        "cmdopts=debug,cmdopts_demo=debug"
    } else {
        "warn"
    };
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
