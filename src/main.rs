// src/main.rs
use std::{io, process::ExitCode};

use checkpoints::{app, cli::Args, config::Config, logging};
use clap::Parser;

fn main() -> ExitCode {
    let config = Config::from(Args::parse());
    logging::init(config.log_level);

    match app::run(&config, &mut io::stdout()) {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {e:#}");
            ExitCode::FAILURE
        }
    }
}
