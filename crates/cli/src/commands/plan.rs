use anyhow::{Context, Result};
use gradle_task_core::{CommandResolver, TaskConfiguration};
use serde::Serialize;
use std::collections::HashMap;
use std::path::PathBuf;
use tracing::{debug, warn};

use crate::display::print_command_breakdown;

#[derive(Debug, Clone, Default)]
pub struct PlanArgs {
    pub config: PathBuf,
    pub working_dir: Option<PathBuf>,
    pub env: Vec<(String, String)>,
    pub defaults: bool,
    pub json: bool,
    pub verbose: bool,
    pub dry_run: bool,
}

#[derive(Serialize)]
struct PlanOutput<'a> {
    #[serde(flatten)]
    plan: &'a gradle_task_core::CommandPlan,
    applied: bool,
}

pub fn plan_command(args: PlanArgs) -> Result<()> {
    debug!("Planning Gradle command from {:?}", args.config);

    let mut config = TaskConfiguration::load(&args.config)
        .with_context(|| format!("Failed to load task configuration {}", args.config.display()))?;
    if args.defaults {
        config = config.with_defaults();
    }
    for key in config.unknown_keys() {
        warn!("Ignoring unknown task property: {}", key);
    }

    let environment: HashMap<String, String> = args.env.into_iter().collect();
    let working_dir = match args.working_dir {
        Some(dir) => dir,
        None => std::env::current_dir().context("Failed to read current directory")?,
    };

    let resolver = CommandResolver::from_task_config(&config)
        .with_environment(environment)
        .with_working_directory(working_dir);
    let plan = resolver.resolve();

    let applied = match &plan.permission_fix {
        Some(fix) if !args.dry_run => fix.apply_logged(),
        _ => false,
    };

    if args.json {
        let output = PlanOutput {
            plan: &plan,
            applied,
        };
        println!("{}", serde_json::to_string_pretty(&output)?);
        return Ok(());
    }

    println!("{}", plan.command.to_shell_command());
    if args.verbose {
        print_command_breakdown(&plan, resolver.config());
    }
    if let Some(fix) = &plan.permission_fix {
        if args.dry_run {
            println!("Pending: chmod u+x {}", fix.path().display());
        } else if applied {
            println!("Made executable: {}", fix.path().display());
        }
    }

    Ok(())
}
