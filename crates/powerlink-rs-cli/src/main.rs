// src/main.rs

use clap::Parser;
use log::info;
use powerlink_rs_cli::cli::Cli;
use powerlink_rs_cli::{ErrorCodeCrossReference, Reporter, commands};
use std::process::ExitCode;

fn main() -> ExitCode {
    let cli = Cli::parse();
    let table = ErrorCodeCrossReference::new();
    let reporter = Reporter::new(&table, cli.language());

    if let Err(result) = commands::prepare(&reporter, &cli.log_config(), &cli.error_table) {
        eprintln!("{}", reporter.format_cli(&result));
        return ExitCode::FAILURE;
    }
    info!("powerlink-cli v{}", env!("CARGO_PKG_VERSION"));

    match commands::run(&reporter, &cli.command) {
        Ok(output) => {
            println!("{}", output);
            ExitCode::SUCCESS
        }
        Err(result) => {
            eprintln!("{}", reporter.format_cli(&result));
            ExitCode::FAILURE
        }
    }
}
