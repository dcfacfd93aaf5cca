//! Gradle command resolution

pub mod gradle_command;
pub mod permissions;
pub mod plan;
pub mod resolver;

// Re-export commonly used types
pub use gradle_command::{ExecutableSource, GradleCommand};
pub use permissions::PermissionFix;
pub use plan::{CommandPlan, GradleTaskConfig, plan};
pub use resolver::CommandResolver;
