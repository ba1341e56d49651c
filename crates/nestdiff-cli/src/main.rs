use std::process::ExitCode;

use clap::Parser;
use colored::Colorize;
use tracing::Level;

mod cli;
mod commands;
mod config;
mod input;
mod output;

fn main() -> ExitCode {
    let cli = cli::Cli::parse();
    let level = if cli.verbose { Level::DEBUG } else { Level::WARN };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();

    match commands::run_command(cli) {
        Ok(outcome) => outcome.exit_code(),
        Err(err) => {
            eprintln!("{} {err:#}", "error:".red().bold());
            ExitCode::from(2)
        }
    }
}
