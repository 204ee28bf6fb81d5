//! CLI argument parsing using clap derive

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use clap_complete::Shell;
use shadow_content::DiffAlgorithm;

/// Shadow Sync - Keep marker-annotated private files in step with their public twins
#[derive(Parser, Debug)]
#[command(name = "shadow")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Config file to use instead of searching for .shadow.toml
    #[arg(short, long, global = true, env = "SHADOW_CONFIG")]
    pub config: Option<PathBuf>,

    /// The command to run
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Overrides for values normally read from the config file
#[derive(Args, Debug, Clone, Default, PartialEq, Eq)]
pub struct SyncArgs {
    /// Keep numbered backups (name.~N~) of overwritten files
    #[arg(long)]
    pub backup: bool,

    /// Line alignment algorithm (myers, patience, lcs)
    #[arg(long)]
    pub algorithm: Option<DiffAlgorithm>,

    /// Log every diff operation to stderr
    #[arg(long)]
    pub trace: bool,
}

/// Available commands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// Merge edits of public files into their private files
    ///
    /// Examples:
    ///   shadow pull src/app.py
    ///   shadow pull src/*.py --dry-run
    ///   shadow pull main.c --algorithm patience --backup
    Pull {
        /// Public files to pull
        #[arg(required = true)]
        files: Vec<PathBuf>,

        /// Preview changes without applying them
        #[arg(long)]
        dry_run: bool,

        /// Output the reports as JSON
        #[arg(long)]
        json: bool,

        #[command(flatten)]
        sync: SyncArgs,
    },

    /// Regenerate public files from their private files
    ///
    /// Examples:
    ///   shadow push src/LeoFolder/app.py
    Push {
        /// Private files (inside the shadow directory) to push
        #[arg(required = true)]
        files: Vec<PathBuf>,

        /// Preview changes without applying them
        #[arg(long)]
        dry_run: bool,

        /// Output the reports as JSON
        #[arg(long)]
        json: bool,

        /// Keep numbered backups (name.~N~) of overwritten files
        #[arg(long)]
        backup: bool,
    },

    /// Report public files whose edits are not yet in their private files
    ///
    /// Exits non-zero when any file is out of sync.
    Check {
        /// Public files to check
        #[arg(required = true)]
        files: Vec<PathBuf>,

        #[command(flatten)]
        sync: SyncArgs,
    },

    /// Print the private line number for a public line
    Locate {
        /// Public file
        file: PathBuf,

        /// 1-based line number in the public file
        line: usize,
    },

    /// Show the marker prefix used for files
    Marker {
        /// File names to classify
        #[arg(required_unless_present = "list")]
        files: Vec<PathBuf>,

        /// Print every known extension and its marker instead
        #[arg(long, conflicts_with = "files")]
        list: bool,
    },

    /// Write a default .shadow.toml in the current directory
    Init {
        /// Overwrite an existing config file
        #[arg(long)]
        force: bool,
    },

    /// Generate shell completions
    ///
    /// Examples:
    ///   shadow completions bash > ~/.local/share/bash-completion/completions/shadow
    ///   shadow completions zsh > ~/.zfunc/_shadow
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}
