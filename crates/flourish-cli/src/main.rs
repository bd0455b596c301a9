//! Flourish form validator CLI.

use std::io::{self, IsTerminal};

use clap::{ColorChoice, Parser};
use flourish_cli::commands::{check_files, load_settings};
use flourish_cli::logging::{LogConfig, LogFormat, init_logging};
use flourish_cli::summary::{forms_table, print_summary};
use flourish_validate::all_forms;
use tracing::level_filters::LevelFilter;

mod cli;

use crate::cli::{CheckArgs, Cli, Command, LogFormatArg, LogLevelArg, ReportFormatArg};

fn main() {
    let cli = Cli::parse();
    cli.color.write_global();
    let log_config = log_config_from_cli(&cli);
    if let Err(error) = init_logging(&log_config) {
        eprintln!("error: failed to initialize logging: {error}");
        std::process::exit(1);
    }
    let exit_code = match cli.command {
        Command::Check(args) => match run_check(&args) {
            Ok(has_failures) => i32::from(has_failures),
            Err(error) => {
                eprintln!("error: {error:#}");
                1
            }
        },
        Command::Forms => {
            println!("{}", forms_table(&all_forms()));
            0
        }
    };
    std::process::exit(exit_code);
}

/// Returns whether any submission failed validation.
fn run_check(args: &CheckArgs) -> anyhow::Result<bool> {
    let settings = load_settings(args.config.as_deref(), args.collect_all)?;
    let report = check_files(&args.files, &settings)?;
    match args.format {
        ReportFormatArg::Table => print_summary(&report),
        ReportFormatArg::Json => println!("{}", serde_json::to_string_pretty(&report)?),
    }
    Ok(report.has_failures())
}

/// Build logging configuration from CLI flags with consistent precedence.
fn log_config_from_cli(cli: &Cli) -> LogConfig {
    let mut config = LogConfig {
        level_filter: cli.verbosity.tracing_level_filter(),
        ..LogConfig::default()
    };
    config.use_env_filter = !(cli.verbosity.is_present() || cli.log_level.is_some());
    if let Some(level) = cli.log_level {
        config.level_filter = match level {
            LogLevelArg::Error => LevelFilter::ERROR,
            LogLevelArg::Warn => LevelFilter::WARN,
            LogLevelArg::Info => LevelFilter::INFO,
            LogLevelArg::Debug => LevelFilter::DEBUG,
            LogLevelArg::Trace => LevelFilter::TRACE,
        };
    }
    config.format = match cli.log_format {
        LogFormatArg::Pretty => LogFormat::Pretty,
        LogFormatArg::Compact => LogFormat::Compact,
        LogFormatArg::Json => LogFormat::Json,
    };
    config.log_file = cli.log_file.clone();
    config.log_data = cli.log_data;
    config.with_ansi = match cli.color.color {
        ColorChoice::Always => true,
        ColorChoice::Never => false,
        ColorChoice::Auto => cli.log_file.is_none() && io::stderr().is_terminal(),
    };
    config
}
