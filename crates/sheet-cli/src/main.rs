//! Sample sheet validator CLI.

use clap::{ColorChoice, Parser};
use sheet_cli::commands::{ValidateRequest, run_validate};
use sheet_cli::logging::{LogConfig, LogFormat, init_logging};
use sheet_cli::summary::{print_text_report, render_json};
use std::io::{self, IsTerminal};
use tracing::error;
use tracing::level_filters::LevelFilter;

mod cli;

use crate::cli::{Cli, LogFormatArg, LogLevelArg, ReportFormatArg};

const EXIT_CLEAN: i32 = 0;
const EXIT_SHEET_ERRORS: i32 = 1;
const EXIT_FATAL: i32 = 2;

fn main() {
    let cli = Cli::parse();
    cli.color.write_global();
    let log_config = log_config_from_cli(&cli);
    if let Err(error) = init_logging(&log_config) {
        eprintln!("error: failed to initialize logging: {error}");
        std::process::exit(EXIT_FATAL);
    }
    let request = ValidateRequest {
        samplesheet: cli.samplesheet.clone(),
        name_patterns: cli.name_patterns.clone(),
        name_patterns_file: cli.name_patterns_file.clone(),
        strict_columns: cli.strict_columns,
    };
    let exit_code = match run_validate(&request) {
        Ok(report) => {
            match cli.format {
                ReportFormatArg::Text => print_text_report(&report),
                ReportFormatArg::Json => match render_json(&report) {
                    Ok(json) => println!("{json}"),
                    Err(error) => {
                        eprintln!("error: render report: {error}");
                        std::process::exit(EXIT_FATAL);
                    }
                },
            }
            if report.is_clean() {
                EXIT_CLEAN
            } else {
                EXIT_SHEET_ERRORS
            }
        }
        Err(err) => {
            error!("{err:#}");
            eprintln!("error: {err:#}");
            EXIT_FATAL
        }
    };
    std::process::exit(exit_code);
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
    config.with_ansi = match cli.color.color {
        ColorChoice::Always => true,
        ColorChoice::Never => false,
        ColorChoice::Auto => cli.log_file.is_none() && io::stderr().is_terminal(),
    };
    config
}
