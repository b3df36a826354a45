//! `stockroom` command-line tool.

mod cli;
mod commands;
mod output;
mod settings;

use std::process::ExitCode;

use anyhow::Context;
use clap::Parser;

use crate::cli::{Cli, Command, ProductAction};
use crate::settings::Settings;

fn main() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();
    let settings = Settings::load(&cli)?;

    stockroom_log::init_with(settings.log.clone()).context("failed to initialize logging")?;
    tracing::debug!(?settings, "settings loaded");

    match &cli.command {
        Command::Validate { form } => commands::validate::run(form, &settings),
        Command::Product { action } => match action {
            ProductAction::Check(args) => commands::product::check(args, &settings),
            ProductAction::List(args) => commands::product::list(args, &settings),
        },
    }
}
