use gradle_task_core::command::ExecutableSource;
use gradle_task_core::{CommandPlan, GradleTaskConfig};

pub fn print_command_breakdown(plan: &CommandPlan, config: &GradleTaskConfig) {
    println!("   🔧 Command breakdown:");
    println!("      • executable: {}", plan.command.executable());

    let source = match plan.command.source {
        ExecutableSource::Wrapper => "wrapper script",
        ExecutableSource::GradleHome => "gradle home",
        ExecutableSource::SearchPath => "PATH",
        ExecutableSource::Bare => "unresolved (launcher PATH)",
    };
    println!("      • resolved from: {}", source);
    println!("      • platform: {}", plan.platform);

    if !config.options.is_empty() {
        println!("      • options: {}", config.options.join(" "));
    }
    if !config.tasks.is_empty() {
        println!("      • tasks: {}", config.tasks.join(" "));
    }
    if let Some(fix) = &plan.permission_fix {
        println!("      • permission fix: u+x {}", fix.path().display());
    }
}
