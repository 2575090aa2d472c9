use std::io;

use clap::Parser;
use owo_colors::OwoColorize;
use tracing::debug;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

use utext::cli::{Args, OutputFormat};
use utext::commands::execute;
use utext::output::{format_json, format_table, format_text};

/// Log to stderr so results on stdout stay pipeable. RUST_LOG sets the level.
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(io::stderr))
        .with(filter)
        .init();
}

fn main() {
    let args = Args::parse();
    init_tracing();
    debug!(version = utext::VERSION, "utext starting");

    if let Err(e) = args.validate() {
        eprintln!("{} {}", "Error:".red(), e);
        std::process::exit(1);
    }

    let outcome = match execute(&args.command) {
        Ok(outcome) => outcome,
        Err(e) => {
            eprintln!("{} {}", "Error:".red(), e);
            std::process::exit(1);
        }
    };

    match args.format {
        OutputFormat::Text if args.verbose => print!("{}", format_table(&outcome)),
        OutputFormat::Text => print!("{}", format_text(&outcome)),
        OutputFormat::Json => println!("{}", format_json(&outcome)),
    }
}
