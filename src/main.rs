mod cli;
mod commands;
mod help_details;
mod installers;
mod libs;
mod logger;
mod schemas;

use clap::Parser;
use cli::args::Cli;
use commands::{list, setup};
use schemas::configuration::Configuration;
use std::process::ExitCode;

fn main() -> ExitCode {
    let cli = Cli::parse();
    logger::init(cli.debug);

    if cli.list_targets {
        list::run();
        return ExitCode::SUCCESS;
    }

    let config = match Configuration::from_cli(&cli) {
        Ok(config) => config,
        Err(e) => {
            log_error!("{}", e);
            return ExitCode::FAILURE;
        }
    };

    match setup::run(&config) {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::FAILURE,
        Err(e) => {
            log_error!("{:#}", e);
            ExitCode::FAILURE
        }
    }
}
