//! # venice-models
//!
//! Lists the models available from the Venice AI API and flags the ones
//! likely to work with a free account.
//!
//! Exits with status 1 only when `VENICE_API_KEY` is missing. HTTP and
//! network failures are printed to stdout and the process exits normally.

mod cli;
mod core;
mod run;

use std::io;

use clap::Parser;
use dotenv::dotenv;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load environment variables from .env file
    dotenv().ok();

    let args = cli::Args::parse();
    run::init_logger(&args);
    log::debug!("{} v{}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"));

    // Missing key is the one fatal precondition; report it on stdout before any request
    let config = core::config::load().unwrap_or_else(|e| {
        println!("Error: {}", e);
        println!("{}", e.hint());
        std::process::exit(1);
    });

    let mut stdout = io::stdout().lock();
    run::run(&config, &mut stdout).await?;
    Ok(())
}
