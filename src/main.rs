//! PulseUX CLI - Stimulation Tracker
//!
//! Command-line entry point for the PulseUX stimulation tracker.

use std::io;
use std::process;

use clap::Parser;
use env_logger::Env;
use log::info;

use pulseux::cli::{commands, Cli};
use pulseux::{InputMode, Tracker};

fn main() {
    // Initialize logger
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();
    let mode: InputMode = cli.mode.into();

    let tracker = match Tracker::new(&cli.tracker_options()) {
        Ok(tracker) => tracker,
        Err(e) => {
            eprintln!("Initialization failed: {}", e);
            if let Some(hint) = e.hint() {
                eprintln!("{}", hint);
            }
            process::exit(1);
        }
    };

    info!("PulseUX v{}", env!("CARGO_PKG_VERSION"));
    println!("Initializing PulseUX in [{}] mode...\n", mode);

    match cli.single_input() {
        Some(payload) => commands::run_once(&tracker, mode, payload),
        None => commands::run_interactive(&tracker, io::stdin().lock()),
    }
}
