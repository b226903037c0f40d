pub mod commands;
pub mod output;

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Push local .env configuration to your app's deployment slots.
#[derive(Parser, Debug)]
#[command(name = "slotsync", version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Path to the stored-target file (default: under the user config dir)
    #[arg(long, global = true)]
    pub prefs: Option<PathBuf>,

    /// Path to an alternative .slotsync.toml
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Resolve a target environment and push the local .env file to it
    Push,

    /// Forget the target remembered from previous runs
    Forget,
}
