//! titledb CLI
//!
//! Command-line interface for building and querying per-title catalogs
//! from console title databases.

mod cli_types;
mod commands;
mod error;
mod settings;
mod spinner;

use std::io::Write;

use clap::Parser;
use log::{Level, LevelFilter};

use cli_types::{Cli, Commands, ConfigAction};
pub(crate) use error::CliError;

fn main() {
    let cli = Cli::parse();
    init_logging(cli.quiet, cli.verbose);

    let result = match cli.command {
        Commands::Stats { rejected } => {
            commands::stats::run_stats(&cli.sources, rejected, cli.quiet)
        }
        Commands::Show { id } => commands::show::run_show(&cli.sources, &id, cli.quiet),
        Commands::Classify { ids } => {
            let failed = commands::classify::run_classify(&ids);
            if failed > 0 {
                std::process::exit(1);
            }
            Ok(())
        }
        Commands::Config { action } => match action {
            ConfigAction::Show => {
                commands::config::run_config_show(&cli.sources);
                Ok(())
            }
            ConfigAction::Path => {
                commands::config::run_config_path();
                Ok(())
            }
            ConfigAction::SetSources => commands::config::run_config_set_sources(&cli.sources),
            ConfigAction::Clear => commands::config::run_config_clear(),
        },
    };

    if let Err(e) = result {
        log::error!("{}", e);
        std::process::exit(1);
    }
}

/// Install the logger. Normal output is message-only at info level;
/// `--verbose` adds timestamps and debug messages, `--quiet` keeps only
/// warnings and errors. `RUST_LOG` still overrides both.
fn init_logging(quiet: bool, verbose: bool) {
    let level = if quiet {
        LevelFilter::Warn
    } else if verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };

    let mut builder = env_logger::Builder::new();
    builder
        .filter_level(level)
        .parse_env(env_logger::Env::default())
        .target(env_logger::Target::Stdout);

    if verbose {
        builder.format_timestamp_millis().format_target(false);
    } else {
        builder.format(|buf, record| match record.level() {
            Level::Info => writeln!(buf, "{}", record.args()),
            level => writeln!(buf, "{}: {}", level, record.args()),
        });
    }
    builder.init();
}

/// Emit an empty line through the logger.
pub(crate) fn log_blank() {
    log::info!("");
}
