mod args;
mod demo;

use std::fs::File;

use clap::Parser;
use log::info;
use simplelog::{Config, LevelFilter, WriteLogger};
use snafu::ErrorCompat;

use crate::args::Args;
use crate::demo::tui::Tui;

fn main() {
    let args = Args::parse();

    // The terminal is owned by the interface, so logs go to a file.
    let level = if args.verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };
    let log_path = args
        .log_file
        .clone()
        .unwrap_or_else(|| "normchoice.log".to_string());
    match File::create(&log_path) {
        Ok(file) => {
            let _ = WriteLogger::init(level, Config::default(), file);
        }
        Err(e) => {
            eprintln!("Could not create log file {}: {}", log_path, e);
        }
    }
    info!("starting: {:?}", args);

    if let Err(e) = demo::run_demo(&args) {
        // Leave the terminal usable before reporting.
        let _ = Tui::restore_terminal();
        eprintln!("An error occured {}", e);
        if let Some(bt) = ErrorCompat::backtrace(&e) {
            eprintln!("trace: {}", bt);
        }
        std::process::exit(1);
    }
}
