//! brave-profiles: CLI that provisions numbered Brave browser profiles
//!
//! This tool is not affiliated with or endorsed by Brave Software, Inc.
//! It only writes to the local Brave user data directory.

use anyhow::Result;
use clap::{Parser, Subcommand};
use owo_colors::OwoColorize;
use std::path::PathBuf;

use brave_profiles::brave::ProfileManager;
use brave_profiles::config;

mod commands;

#[derive(Parser)]
#[command(name = "brave-profiles")]
#[command(about = "Provision numbered Brave browser profiles", long_about = None)]
#[command(version)]
struct Cli {
    /// Brave user data directory (defaults to the platform location)
    #[arg(long, global = true, value_name = "PATH")]
    user_data_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Create profiles until the target count exists (default)
    Ensure {
        /// Total number of numbered profiles wanted
        #[arg(short, long, default_value_t = config::DEFAULT_PROFILE_COUNT)]
        count: usize,

        /// Show what would be created without making changes
        #[arg(short = 'n', long)]
        dry_run: bool,
    },

    /// List numbered profiles and whether Brave knows about them
    List,

    /// Add an existing profile directory to Local State
    Register {
        /// Profile number (the N in "Profile N")
        number: u64,
    },
}

fn main() {
    let cli = Cli::parse();

    // Failures are reported, not turned into an exit code
    if let Err(e) = run(cli) {
        eprintln!("{} {:#}", "Error:".red(), e);
    }
}

fn run(cli: Cli) -> Result<()> {
    let user_data_dir = config::resolve_user_data_dir(cli.user_data_dir)?;
    let manager = ProfileManager::new(user_data_dir);

    let command = cli.command.unwrap_or(Commands::Ensure {
        count: config::DEFAULT_PROFILE_COUNT,
        dry_run: false,
    });

    match command {
        Commands::Ensure { count, dry_run } => {
            if dry_run {
                println!("{}", "(DRY-RUN MODE - no changes will be made)".blue());
            }
            commands::ensure::execute(&manager, count, dry_run)?;
        }

        Commands::List => {
            let output = commands::list::execute(&manager)?;
            println!("{}", output);
        }

        Commands::Register { number } => {
            commands::register::execute(&manager, number)?;
        }
    }

    Ok(())
}
