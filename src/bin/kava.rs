//! Command-line interface for kava
//! This binary translates kava source files into brace-delimited JavaScript.
//!
//! Usage:
//!   kava translate `<path>` [--format `<format>`] [--plain] [--policy `<policy>`]
//!   kava list-formats

use clap::{Arg, ArgAction, Command};

use kava::kava::pipeline::Options;
use kava::kava::processor::{self, OutputFormat};
use kava::kava::resolving::IndentPolicy;

fn main() {
    let matches = Command::new("kava")
        .version(env!("CARGO_PKG_VERSION"))
        .about("A translator from the kava indentation dialect to JavaScript")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .subcommand(
            Command::new("translate")
                .about("Translate a kava file")
                .arg(
                    Arg::new("path")
                        .help("Path to the kava file")
                        .required(true)
                        .index(1),
                )
                .arg(
                    Arg::new("format")
                        .long("format")
                        .short('f')
                        .help("Output format (e.g., 'js', 'annotated', 'json')")
                        .default_value("js"),
                )
                .arg(
                    Arg::new("plain")
                        .long("plain")
                        .action(ArgAction::SetTrue)
                        .help("Emit closures as plain function expressions instead of immediately-invoked ones"),
                )
                .arg(
                    Arg::new("policy")
                        .long("policy")
                        .help("Indentation policy ('lenient' or 'strict')")
                        .default_value("lenient"),
                ),
        )
        .subcommand(Command::new("list-formats").about("List available output formats"))
        .get_matches();

    // Handle subcommands
    match matches.subcommand() {
        Some(("translate", translate_matches)) => {
            let path = translate_matches.get_one::<String>("path").unwrap();
            let format = translate_matches.get_one::<String>("format").unwrap();
            let policy = translate_matches.get_one::<String>("policy").unwrap();
            let plain = translate_matches.get_flag("plain");
            handle_translate_command(path, format, policy, plain);
        }
        Some(("list-formats", _)) => {
            handle_list_formats_command();
        }
        _ => unreachable!(),
    }
}

/// Handle the translate command
fn handle_translate_command(path: &str, format: &str, policy: &str, plain: bool) {
    let format = OutputFormat::from_string(format).unwrap_or_else(|err| {
        eprintln!("Error: {}", err);
        std::process::exit(1);
    });
    let policy = match policy {
        "lenient" => IndentPolicy::Lenient,
        "strict" => IndentPolicy::Strict,
        other => {
            eprintln!("Error: unknown policy '{}'", other);
            std::process::exit(1);
        }
    };
    let options = Options {
        invocation_tail: !plain,
        policy,
    };

    let processed = processor::process_file(path, format, &options).unwrap_or_else(|err| {
        eprintln!("Error: {}", err);
        std::process::exit(1);
    });

    for warning in &processed.warnings {
        eprintln!("warning: {}", warning);
    }
    print!("{}", processed.output);
    if !processed.output.ends_with('\n') {
        println!();
    }
}

/// Handle the list-formats command
fn handle_list_formats_command() {
    println!("Available output formats:\n");
    for name in processor::available_formats() {
        println!("  {}", name);
    }
}
