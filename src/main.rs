//! wallclock binary - inspection CLI for the desktop clock overlay.

use std::{error::Error, process};

use clap::Parser;
use wallclock::{cli, tracing_config};

fn main() -> Result<(), Box<dyn Error>> {
    let args = cli::Cli::parse();

    tracing_config::init()?;

    match cli::execute(args.command) {
        Ok(output) => {
            if !output.trim().is_empty() {
                println!("{output}");
            }
            Ok(())
        }
        Err(e) => {
            eprintln!("error: {e}");
            process::exit(1);
        }
    }
}
