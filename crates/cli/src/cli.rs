use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::commands::{plan_command, properties_command};
use crate::utils::parse_env_pair;

#[derive(Parser, Debug)]
#[command(name = "gradle-task")]
#[command(version, about, long_about = None)]
#[command(after_help = "ENVIRONMENT:\n    RUST_LOG=debug    Enable debug logging")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Resolve the Gradle command for a task configuration
    #[command(visible_alias = "p")]
    Plan {
        /// Task configuration JSON file
        #[arg(short, long)]
        config: PathBuf,

        /// Directory containing the Gradle wrapper (defaults to current directory)
        #[arg(short, long)]
        working_dir: Option<PathBuf>,

        /// Environment override, takes precedence over the process environment
        #[arg(short, long = "env", value_name = "KEY=VALUE", value_parser = parse_env_pair)]
        env: Vec<(String, String)>,

        /// Fill missing properties with their defaults
        #[arg(long)]
        defaults: bool,

        /// Print the plan as JSON
        #[arg(long)]
        json: bool,

        /// Show the command breakdown
        #[arg(short, long)]
        verbose: bool,

        /// Report the wrapper permission fix without applying it
        #[arg(short, long)]
        dry_run: bool,
    },
    /// List the task properties and the options they map to
    Properties {
        /// Print as JSON
        #[arg(long)]
        json: bool,
    },
}

impl Commands {
    /// Execute the command
    pub fn execute(self) -> Result<()> {
        match self {
            Commands::Plan {
                config,
                working_dir,
                env,
                defaults,
                json,
                verbose,
                dry_run,
            } => plan_command(crate::commands::PlanArgs {
                config,
                working_dir,
                env,
                defaults,
                json,
                verbose,
                dry_run,
            }),
            Commands::Properties { json } => properties_command(json),
        }
    }
}
