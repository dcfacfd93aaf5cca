//! Fluent command resolution over task properties
//!
//! # Example
//! ```
//! use gradle_task_core::command::CommandResolver;
//! use std::collections::HashMap;
//!
//! let mut props = HashMap::new();
//! props.insert("Tasks".to_string(), "clean build".to_string());
//! props.insert("Offline".to_string(), "true".to_string());
//!
//! let command = CommandResolver::from_config(&props)
//!     .with_working_directory("/ws")
//!     .use_wrapper("UseWrapper")
//!     .with_tasks("Tasks")
//!     .with_option("Offline", "--offline")
//!     .build();
//! assert_eq!(&command[1..], ["--offline", "clean", "build"]);
//! ```

use super::plan::{CommandPlan, GradleTaskConfig, plan};
use crate::config::{GradleProperty, PropertySource, is_truthy, non_blank, split_tokens};
use crate::env::{Environment, OverlayEnvironment, ProcessEnvironment};
use crate::interfaces::PathResolver;
use crate::services::DefaultPathResolver;
use std::collections::HashMap;
use std::path::PathBuf;

/// Accumulates directives read from task properties, then resolves the command.
///
/// Directives only read properties; all lookups and filesystem work happen in
/// [`CommandResolver::resolve`] and [`CommandResolver::build`].
pub struct CommandResolver<'a, P: ?Sized, E = ProcessEnvironment, R = DefaultPathResolver> {
    properties: &'a P,
    environment: OverlayEnvironment<E>,
    paths: R,
    config: GradleTaskConfig,
}

impl<'a, P: PropertySource + ?Sized> CommandResolver<'a, P> {
    /// Create a resolver reading from the given properties, backed by the
    /// process environment and the real filesystem
    pub fn from_config(properties: &'a P) -> Self {
        Self {
            properties,
            environment: OverlayEnvironment::default(),
            paths: DefaultPathResolver::new(),
            config: GradleTaskConfig::default(),
        }
    }
}

impl<'a, P, E, R> CommandResolver<'a, P, E, R>
where
    P: PropertySource + ?Sized,
    E: Environment,
    R: PathResolver,
{
    /// Replace the environment that overrides are layered on
    pub fn with_fallback_environment<F: Environment>(
        self,
        fallback: F,
    ) -> CommandResolver<'a, P, F, R> {
        let overrides = self.environment.overrides().clone();
        CommandResolver {
            properties: self.properties,
            environment: OverlayEnvironment::with_fallback(overrides, fallback),
            paths: self.paths,
            config: self.config,
        }
    }

    pub fn with_path_resolver<S: PathResolver>(self, paths: S) -> CommandResolver<'a, P, E, S> {
        CommandResolver {
            properties: self.properties,
            environment: self.environment,
            paths,
            config: self.config,
        }
    }

    /// Replace the environment overrides
    pub fn with_environment(mut self, environment: HashMap<String, String>) -> Self {
        self.environment.set_overrides(environment);
        self
    }

    pub fn with_working_directory(mut self, working_directory: impl Into<PathBuf>) -> Self {
        self.config.working_directory = Some(working_directory.into());
        self
    }

    pub fn use_wrapper(mut self, property_key: &str) -> Self {
        self.config.use_wrapper = self.is_property_set(property_key);
        self
    }

    pub fn make_wrapper_executable(mut self, property_key: &str) -> Self {
        self.config.make_wrapper_executable = self.is_property_set(property_key);
        self
    }

    pub fn with_gradle_home(mut self, property_key: &str) -> Self {
        self.config.gradle_home =
            non_blank(self.properties.get(property_key)).map(str::to_string);
        self
    }

    pub fn with_tasks(mut self, property_key: &str) -> Self {
        let tasks = split_tokens(self.properties.get(property_key));
        self.config.tasks.extend(tasks);
        self
    }

    /// Register `option` when the flag property is set
    pub fn with_option(mut self, property_key: &str, option: &str) -> Self {
        if self.is_property_set(property_key) {
            self.config.options.push(option.to_string());
        }
        self
    }

    pub fn with_additional_options(mut self, property_key: &str) -> Self {
        let options = split_tokens(self.properties.get(property_key));
        self.config.options.extend(options);
        self
    }

    /// Apply every known property in the standard order: wrapper settings,
    /// home, tasks, flag options, then additional options
    pub fn with_known_properties(self) -> Self {
        let resolver = self
            .use_wrapper(GradleProperty::UseWrapper.key())
            .make_wrapper_executable(GradleProperty::MakeWrapperExecutable.key())
            .with_gradle_home(GradleProperty::GradleHome.key())
            .with_tasks(GradleProperty::Tasks.key());

        GradleProperty::FLAGS
            .into_iter()
            .fold(resolver, |resolver, flag| match flag.option() {
                Some(option) => resolver.with_option(flag.key(), option),
                None => resolver,
            })
            .with_additional_options(GradleProperty::AdditionalOptions.key())
    }

    /// The configuration accumulated so far
    pub fn config(&self) -> &GradleTaskConfig {
        &self.config
    }

    /// Plan the command without touching the filesystem permissions
    pub fn resolve(&self) -> CommandPlan {
        plan(&self.config, &self.environment, &self.paths)
    }

    /// Resolve the command and apply the wrapper permission fix.
    ///
    /// A failed permission change is logged; the command is returned regardless.
    pub fn build(self) -> Vec<String> {
        self.resolve().apply()
    }

    fn is_property_set(&self, property_key: &str) -> bool {
        is_truthy(self.properties.get(property_key))
    }
}

impl<'a, P: PropertySource + ?Sized> CommandResolver<'a, P> {
    /// Resolver with every known property applied
    pub fn from_task_config(properties: &'a P) -> Self {
        Self::from_config(properties).with_known_properties()
    }
}
