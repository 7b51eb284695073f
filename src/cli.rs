// src/cli.rs
use anyhow::Result;
use clap::parser::ValueSource;
use clap::{Arg, ArgAction, ArgMatches, Command};
use std::{env, path::PathBuf};

use crate::infra::t;

pub mod commands;

/// Default value of `--test_name`.
pub const DEFAULT_TEST_NAME: &str = "tflite_utils_test";
/// Default value of `--output`.
pub const DEFAULT_OUTPUT: &str = "cts.txt";

/// Arguments of a single harness invocation after parsing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunArgs {
    /// Test selector, matched exactly against the dispatch table.
    pub test_name: String,
    /// The `--output` value, only when it was given on the command line.
    pub output: Option<String>,
    /// Optional harness configuration file.
    pub config: Option<PathBuf>,
    /// Language for console status messages.
    pub lang: Option<String>,
}

/// Pre-parses the command line arguments to find the language setting.
/// This allows i18n to be initialized before the full CLI is built.
/// It looks for a `--lang <VALUE>` argument.
fn pre_parse_language() -> Option<String> {
    let args: Vec<String> = env::args().collect();
    let pos = args.iter().position(|arg| arg == "--lang")?;
    args.get(pos + 1).cloned()
}

pub fn build_cli() -> Command {
    Command::new("coral-cts")
        .version(env!("CARGO_PKG_VERSION"))
        .about(t!("cli_about").to_string())
        .arg(
            Arg::new("test_name")
                .long("test_name")
                .help(t!("arg_test_name").to_string())
                .value_name("TEST_NAME")
                .default_value(DEFAULT_TEST_NAME)
                .action(ArgAction::Set),
        )
        .arg(
            Arg::new("output")
                .long("output")
                .help(t!("arg_output").to_string())
                .value_name("OUTPUT")
                .default_value(DEFAULT_OUTPUT)
                .action(ArgAction::Set),
        )
        .arg(
            Arg::new("config")
                .short('c')
                .long("config")
                .help(t!("arg_config").to_string())
                .value_name("CONFIG")
                .value_parser(clap::value_parser!(PathBuf))
                .action(ArgAction::Set),
        )
        .arg(
            Arg::new("lang")
                .long("lang")
                .help(t!("cli_lang").to_string())
                .value_name("LANGUAGE")
                .action(ArgAction::Set),
        )
}

/// Extracts [`RunArgs`] from parsed matches.
///
/// `--output` has a default for help output, but it only takes effect when
/// the user typed it; otherwise the output file is named after the test.
pub fn run_args_from(matches: &ArgMatches) -> RunArgs {
    let test_name = matches
        .get_one::<String>("test_name")
        .cloned()
        .unwrap_or_else(|| DEFAULT_TEST_NAME.to_string());
    let output = match matches.value_source("output") {
        Some(ValueSource::CommandLine) => matches.get_one::<String>("output").cloned(),
        _ => None,
    };

    RunArgs {
        test_name,
        output,
        config: matches.get_one::<PathBuf>("config").cloned(),
        lang: matches.get_one::<String>("lang").cloned(),
    }
}

pub async fn run() -> Result<()> {
    // Pre-parse language and initialize i18n first.
    let language = pre_parse_language();
    crate::init(language.as_deref());

    let matches = build_cli().get_matches();
    commands::run::execute(run_args_from(&matches)).await
}
