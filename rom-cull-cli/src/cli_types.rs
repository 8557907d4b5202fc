//! CLI type definitions: command enums and argument structs.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

#[derive(Parser)]
#[command(name = "rom-cull")]
#[command(about = "Find duplicate ROM titles and keep the best release of each", long_about = None)]
pub(crate) struct Cli {
    /// Root path of the ROM collection (defaults to settings, then current directory)
    #[arg(short, long, global = true)]
    pub root: Option<PathBuf>,

    /// Only show warnings and errors (suppress normal output)
    #[arg(long, global = true)]
    pub quiet: bool,

    /// Enable verbose/debug logging (timestamps + debug-level messages)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Write log output to a file (ANSI codes stripped)
    #[arg(long, global = true)]
    pub logfile: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

/// Common arguments for commands that build the file list.
#[derive(Args, Clone)]
pub(crate) struct ScanArgs {
    /// Subdirectory names to skip at any depth (e.g., images,videos,manuals)
    #[arg(long, value_delimiter = ',')]
    pub ignore_dirs: Option<Vec<String>>,

    /// Cached file list to reuse instead of walking the collection
    #[arg(long)]
    pub cache_file: Option<PathBuf>,

    /// Always walk the collection and leave the cached file list alone
    #[arg(long)]
    pub no_cache: bool,
}

#[derive(Subcommand)]
pub(crate) enum Commands {
    /// Rank duplicate titles and report (or delete) the ones not worth keeping
    Clean {
        /// Region preference order, most preferred first (case sensitive, e.g., U,E)
        #[arg(long, value_delimiter = ',')]
        regions: Option<Vec<String>>,

        /// WARNING: delete every file marked KO
        #[arg(long)]
        delete: bool,

        #[command(flatten)]
        scan: ScanArgs,
    },

    /// List every distinct filename tag in the collection
    Tags {
        #[command(flatten)]
        scan: ScanArgs,
    },

    /// Manage the cached file list
    Cache {
        #[command(subcommand)]
        action: CacheAction,

        /// Cached file list location (defaults to settings)
        #[arg(long, global = true)]
        cache_file: Option<PathBuf>,
    },

    /// Show settings
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand)]
pub(crate) enum CacheAction {
    /// Show where the cached file list lives and how many paths it holds
    Show,

    /// Remove the cached file list so the next run walks the collection
    Clear,
}

#[derive(Subcommand)]
pub(crate) enum ConfigAction {
    /// Show the settings file location and effective values
    Show,

    /// Print the settings file path
    Path,
}
