//! Command-line interface for kexpr
//! This binary renders kexpr files as tokens, trees or canonical notation.
//!
//! Usage:
//!   kexpr `<path>` `[format]`            - Process a file (format defaults to `cli.default_format`)
//!   kexpr process `<path>` `<format>`    - Same, with an explicit format
//!   kexpr formats                     - List all available formats
//!
//! `--config <file>` layers a TOML file over the built-in defaults and `--indent <string>`
//! overrides the indentation of `ast-kexpr` output. Set `RUST_LOG` (e.g.
//! `RUST_LOG=kexpr=trace`) to see lexer recovery and parser diagnostics on stderr.

use clap::{Arg, ArgMatches, Command};
use kexpr::kexpr::config::{load_for_cli, CliOverrides, KexprConfig};
use std::path::Path;
use kexpr::kexpr::processor::{available_formats, process_file_with, ProcessingError, ProcessingSpec};
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::from_default_env().add_directive(tracing::Level::WARN.into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let matches = Command::new("kexpr")
        .version(env!("CARGO_PKG_VERSION"))
        .about("A tool for inspecting and processing kexpr files")
        .subcommand_required(false)
        .arg_required_else_help(true)
        .arg(
            Arg::new("config")
                .long("config")
                .value_name("FILE")
                .help("TOML file layered over the built-in defaults")
                .global(true),
        )
        .arg(
            Arg::new("indent")
                .long("indent")
                .value_name("STRING")
                .help("Indentation per nesting level for ast-kexpr output")
                .global(true),
        )
        .arg(
            Arg::new("path")
                .help("Path to the kexpr file to process")
                .index(1),
        )
        .arg(
            Arg::new("format")
                .help("Output format (e.g., ast-kexpr, token-simple)")
                .index(2),
        )
        .subcommand(
            Command::new("process")
                .about("Process a file and output to stdout")
                .arg(
                    Arg::new("path")
                        .help("Path to the kexpr file to process")
                        .required(true)
                        .index(1),
                )
                .arg(
                    Arg::new("format")
                        .help("Output format (e.g., ast-kexpr, token-simple)")
                        .required(true)
                        .index(2),
                ),
        )
        .subcommand(Command::new("formats").about("List all available output formats"))
        .try_get_matches()
        .unwrap_or_else(|e| e.exit());

    match matches.subcommand() {
        Some(("formats", _)) => handle_formats_command(),
        Some(("process", process_matches)) => {
            let config = load_config(process_matches);
            handle_process_command(process_matches, &config);
        }
        _ => {
            let config = load_config(&matches);
            handle_process_command(&matches, &config);
        }
    }
}

fn load_config(matches: &ArgMatches) -> KexprConfig {
    let overrides = CliOverrides {
        config_file: matches.get_one::<String>("config").map(Path::new),
        indent: matches.get_one::<String>("indent").map(String::as_str),
    };
    load_for_cli(&overrides).unwrap_or_else(|e| {
        eprintln!("Error: failed to load configuration: {}", e);
        std::process::exit(1);
    })
}

fn handle_process_command(matches: &ArgMatches, config: &KexprConfig) {
    let Some(path) = matches.get_one::<String>("path") else {
        eprintln!("Error: missing path to a kexpr file");
        std::process::exit(1);
    };
    let format_str = matches
        .get_one::<String>("format")
        .cloned()
        .unwrap_or_else(|| config.cli.default_format.clone());

    match process_file_with_format(path, &format_str, config) {
        Ok(output) => print!("{}", output),
        Err(e) => {
            eprintln!("Error: {}", e);
            if matches!(
                e,
                ProcessingError::InvalidFormat(_)
                    | ProcessingError::InvalidStage(_)
                    | ProcessingError::InvalidFormatType(_)
            ) {
                eprintln!("\nAvailable formats:");
                for format in available_formats() {
                    eprintln!("  {}", format);
                }
            }
            std::process::exit(1);
        }
    }
}

fn handle_formats_command() {
    println!("Available formats:");
    for format in available_formats() {
        println!("  {}", format);
    }
}

fn process_file_with_format(
    path: &str,
    format_str: &str,
    config: &KexprConfig,
) -> Result<String, ProcessingError> {
    let spec = ProcessingSpec::from_string(format_str)?;
    process_file_with(path, &spec, &config.notation_options())
}
