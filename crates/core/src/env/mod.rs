//! Execution environment lookups
//!
//! Resolution reads variables through the [`Environment`] capability instead of
//! touching the process environment directly, so tests can inject a snapshot.

use std::collections::HashMap;

/// Name of the OS-identifying entry, answered like any other variable
pub const OS_NAME: &str = "os.name";
pub const GRADLE_HOME: &str = "GRADLE_HOME";
pub const PATH: &str = "PATH";

/// Read-only view of environment variables
pub trait Environment {
    fn lookup(&self, name: &str) -> Option<String>;
}

impl<E: Environment + ?Sized> Environment for &E {
    fn lookup(&self, name: &str) -> Option<String> {
        (**self).lookup(name)
    }
}

/// The real process environment
///
/// `os.name` is not a process variable; it is answered with the platform
/// identifier the binary was compiled for.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessEnvironment;

impl Environment for ProcessEnvironment {
    fn lookup(&self, name: &str) -> Option<String> {
        if name == OS_NAME {
            return Some(std::env::consts::OS.to_string());
        }
        std::env::var(name).ok()
    }
}

/// Environment backed only by a map
#[derive(Debug, Clone, Default)]
pub struct MapEnvironment {
    vars: HashMap<String, String>,
}

impl MapEnvironment {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.vars.insert(name.into(), value.into());
        self
    }
}

impl From<HashMap<String, String>> for MapEnvironment {
    fn from(vars: HashMap<String, String>) -> Self {
        Self { vars }
    }
}

impl Environment for MapEnvironment {
    fn lookup(&self, name: &str) -> Option<String> {
        self.vars.get(name).cloned()
    }
}

/// Caller-supplied overrides layered on top of a fallback environment.
///
/// A key present in the overrides always wins, even when its value is empty.
#[derive(Debug, Clone, Default)]
pub struct OverlayEnvironment<E = ProcessEnvironment> {
    overrides: HashMap<String, String>,
    fallback: E,
}

impl OverlayEnvironment<ProcessEnvironment> {
    pub fn new(overrides: HashMap<String, String>) -> Self {
        Self::with_fallback(overrides, ProcessEnvironment)
    }
}

impl<E: Environment> OverlayEnvironment<E> {
    pub fn with_fallback(overrides: HashMap<String, String>, fallback: E) -> Self {
        Self {
            overrides,
            fallback,
        }
    }

    pub fn overrides(&self) -> &HashMap<String, String> {
        &self.overrides
    }

    pub fn set_overrides(&mut self, overrides: HashMap<String, String>) {
        self.overrides = overrides;
    }
}

impl<E: Environment> Environment for OverlayEnvironment<E> {
    fn lookup(&self, name: &str) -> Option<String> {
        match self.overrides.get(name) {
            Some(value) => Some(value.clone()),
            None => self.fallback.lookup(name),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn overrides(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_overlay_prefers_overrides() {
        let real = MapEnvironment::new()
            .with(GRADLE_HOME, "/real/gradle")
            .with(PATH, "/usr/bin");
        let env =
            OverlayEnvironment::with_fallback(overrides(&[(GRADLE_HOME, "/override")]), real);

        assert_eq!(env.lookup(GRADLE_HOME).as_deref(), Some("/override"));
        assert_eq!(env.lookup(PATH).as_deref(), Some("/usr/bin"));
        assert_eq!(env.lookup("HOME"), None);
    }

    #[test]
    fn test_empty_override_still_shadows() {
        let real = MapEnvironment::new().with(PATH, "/usr/bin");
        let env = OverlayEnvironment::with_fallback(overrides(&[(PATH, "")]), real);
        assert_eq!(env.lookup(PATH).as_deref(), Some(""));
    }

    #[test]
    fn test_process_environment_reports_os_name() {
        let os = ProcessEnvironment.lookup(OS_NAME).unwrap();
        assert_eq!(os, std::env::consts::OS);
    }
}
