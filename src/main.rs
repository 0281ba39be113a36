//! kswitch - interactive kubectl context picker
//!
//! Lists the contexts kubectl knows about and activates the one picked.

mod cli;
mod commands;
mod config;
mod context;
mod error;
mod kubectl;
mod picker;

use crate::cli::Cli;
use clap::Parser;

/// Initialize tracing subscriber based on verbosity level
fn init_tracing(verbosity: u8) {
    use tracing_subscriber::{fmt, EnvFilter};

    let filter = match verbosity {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };

    fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    if let Err(err) = commands::pick_and_switch() {
        println!("Error running program: {:#}", err);
        std::process::exit(1);
    }
}
