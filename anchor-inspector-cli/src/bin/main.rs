use std::process;

use anchor_inspector_cli::cli::Cli;
use anchor_inspector_cli::commands;
use clap::Parser;

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();
    if let Err(e) = commands::run(cli) {
        eprintln!("❌ {}", e);
        process::exit(1);
    }
}
