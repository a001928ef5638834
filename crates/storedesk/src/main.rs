//! storedesk - Entry Point
//!
//! Exit status: 0 when the mutation is valid, 1 when it is not, 2 when the
//! run itself failed (configuration, input, logging).

use clap::Parser;
use std::process::ExitCode;
use storedesk::{Cli, run};

fn main() -> ExitCode {
    let cli = Cli::parse();
    match run(&cli) {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::from(1),
        Err(err) => {
            eprintln!("error: {err:#}");
            ExitCode::from(2)
        }
    }
}
