// src/main.rs
use clap::Parser as _;
use dirkeep::cli::{Args, run};
use dirkeep::{exit_codes, logging};
use std::process;

fn main() {
    logging::init();

    match run(Args::parse()) {
        Ok(summary) if summary.is_clean() => process::exit(exit_codes::OK),
        Ok(_) => process::exit(exit_codes::PARTIAL),
        Err(err) => {
            eprintln!("dirkeep: {err:#}");
            process::exit(exit_codes::FATAL);
        }
    }
}
