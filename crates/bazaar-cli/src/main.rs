//! Bazaar marketplace CLI.

use clap::Parser;
use tracing_subscriber::EnvFilter;

mod cli;
mod commands;

use crate::cli::{Cli, Command};
use crate::commands::{
    report_failure, run_login, run_probe, run_register, run_stats_watch, run_watch,
};

fn main() {
    let cli = Cli::parse();
    init_logging(&cli);
    let result = match &cli.command {
        Command::Probe => run_probe(&cli.base_url),
        Command::Login(args) => run_login(&cli.base_url, args),
        Command::Register(args) => run_register(&cli.base_url, args),
        Command::Watch(args) => run_watch(&cli.base_url, args),
        Command::StatsWatch(args) => run_stats_watch(&cli.base_url, args),
    };
    let exit_code = match result {
        Ok(()) => 0,
        Err(error) => report_failure(&error),
    };
    std::process::exit(exit_code);
}

/// RUST_LOG wins when set and no explicit -v/-q was given.
fn init_logging(cli: &Cli) {
    let filter = if cli.verbosity.is_present() {
        EnvFilter::new(cli.verbosity.tracing_level_filter().to_string())
    } else {
        EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(cli.verbosity.tracing_level_filter().to_string()))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .without_time()
        .with_writer(std::io::stderr)
        .init();
}
