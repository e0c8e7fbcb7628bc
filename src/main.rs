//! arctree CLI - browse and edit compressed archives as a tree
//!
//! Usage: arctree [ARCHIVE] [OPTIONS]
//!
//! Commands:
//!   help-shortcuts  List the keyboard shortcuts of the browse tree

mod cli;
mod commands;
mod ui;

use anyhow::Result;
use clap::Parser;

use arctree::config::Config;
use arctree::SevenZipArchiver;

use cli::{Cli, Commands};
use commands::browse::{cmd_browse, BrowseOptions};
use commands::create::{cmd_create, AfterCreate};
use ui::context::UiContext;
use ui::prompts;
use ui::terminal::restore_terminal;

fn main() {
    if let Err(err) = run() {
        restore_terminal();
        eprintln!("Error: {:#}", err);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    if let Err(err) = arctree::logging::init(cli.verbose) {
        eprintln!("Warning: logging disabled: {}", err);
    }

    let (mut config, warnings) = Config::load_or_default();
    cli.apply_to(&mut config);
    let ui = UiContext::new(&config);
    for warning in &warnings {
        prompts::warning(&ui, &warning.to_string());
    }

    ctrlc::set_handler(|| {
        restore_terminal();
        std::process::exit(130);
    })?;

    match cli.command {
        Some(Commands::HelpShortcuts) => {
            commands::help::cmd_help_shortcuts(&ui);
            Ok(())
        }
        None => {
            let mut archive = cli.archive;
            if let Some(name) = &cli.create {
                let cwd = std::env::current_dir()?;
                let archiver = SevenZipArchiver::new(&config.archiver.program);
                let name = name.to_string_lossy();
                match cmd_create(&archiver, &config, &ui, &cwd, Some(&name))? {
                    AfterCreate::Browse(path) => archive = Some(path),
                    AfterCreate::Back if archive.is_some() => {}
                    AfterCreate::Back | AfterCreate::Quit => return Ok(()),
                }
            }
            cmd_browse(
                &config,
                &ui,
                BrowseOptions {
                    archive,
                    yes: cli.yes,
                },
            )
        }
    }
}
