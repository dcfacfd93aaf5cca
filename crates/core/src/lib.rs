//! gradle-task - Command resolution for Gradle pipeline tasks
//!
//! This crate provides functionality to:
//! - Read Gradle task settings from a property source or a JSON configuration
//! - Choose between the project wrapper and an installed Gradle binary
//! - Produce the ordered command tokens plus any permission fix the wrapper needs
pub mod command;
pub mod config;
pub mod env;
pub mod error;
pub mod interfaces;
pub mod platform;
pub mod services;

// Re-export commonly used types and traits
pub use error::{Error, Result};

// Re-export main API components
pub use command::{CommandPlan, CommandResolver, GradleCommand, GradleTaskConfig, PermissionFix};
pub use config::{GradleProperty, PropertySource, TaskConfiguration};
pub use env::{Environment, MapEnvironment, OverlayEnvironment, ProcessEnvironment};
pub use platform::Platform;
