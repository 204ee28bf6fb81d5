//! Shadow Sync CLI
//!
//! The command-line interface for pulling public edits into private files
//! and pushing private files out to their public twins.

mod cli;
mod commands;
mod context;
mod error;
mod logging;

use std::path::Path;

use clap::Parser;
use colored::Colorize;

use cli::{Cli, Commands};
use error::Result;
use logging::LogHandle;
use shadow_core::ShadowController;

fn main() {
    if let Err(e) = run() {
        eprintln!("{}: {}", "error".red().bold(), e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    // Completion scripts go to stdout untouched by logging
    if let Some(Commands::Completions { shell }) = cli.command {
        commands::run_completions(shell);
        return Ok(());
    }

    let logs = logging::init(cli.verbose)?;

    match cli.command {
        Some(cmd) => execute_command(cmd, cli.config.as_deref(), &logs),
        None => {
            println!("{} Shadow Sync CLI", "shadow".green().bold());
            println!();
            println!("Run {} for available commands.", "shadow --help".cyan());
            Ok(())
        }
    }
}

fn execute_command(cmd: Commands, config: Option<&Path>, logs: &LogHandle) -> Result<()> {
    let cwd = std::env::current_dir()?;

    // Propagation tracing can be switched on by a flag or by the config file
    let controller = |sync: &cli::SyncArgs| -> Result<ShadowController> {
        let controller = context::controller(&cwd, config, sync)?;
        if controller.config().trace {
            logs.enable_trace()?;
        }
        Ok(controller)
    };

    match cmd {
        Commands::Pull {
            files,
            dry_run,
            json,
            sync,
        } => {
            let controller = controller(&sync)?;
            commands::run_pull(&controller, &files, dry_run, json)
        }
        Commands::Push {
            files,
            dry_run,
            json,
            backup,
        } => {
            let sync = cli::SyncArgs {
                backup,
                ..Default::default()
            };
            let controller = controller(&sync)?;
            commands::run_push(&controller, &files, dry_run, json)
        }
        Commands::Check { files, sync } => {
            let controller = controller(&sync)?;
            commands::run_check(&controller, &files)
        }
        Commands::Locate { file, line } => {
            let controller = context::controller(&cwd, config, &cli::SyncArgs::default())?;
            commands::run_locate(&controller, &file, line)
        }
        Commands::Marker { files, list } => {
            let controller = context::controller(&cwd, config, &cli::SyncArgs::default())?;
            commands::run_marker(&controller, &files, list)
        }
        Commands::Init { force } => commands::run_init(&cwd, force),
        Commands::Completions { shell } => {
            commands::run_completions(shell);
            Ok(())
        }
    }
}
