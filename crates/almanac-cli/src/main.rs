mod cli;
mod commands;
mod config;
mod logging;

use std::process;

use anyhow::Result;
use clap::Parser;

use crate::cli::{Cli, Command};
use crate::commands::Context;

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    if let Err(e) = run(cli) {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    let ctx = Context::load(cli.config.as_deref(), cli.lang.as_deref())?;
    match cli.command {
        Command::Show(args) => commands::show(&ctx, args),
        Command::Add(args) => commands::add(&ctx, args),
        Command::Between(args) => commands::between(args),
        Command::Easter(args) => commands::easter(&ctx, args),
        Command::Week(args) => commands::week(args),
        Command::Format(args) => commands::format(&ctx, args),
    }
}
