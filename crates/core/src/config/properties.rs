//! Known Gradle task properties

use serde::Serialize;
use std::fmt;

/// Property keys understood by the Gradle task, with their defaults and the
/// command-line flag each boolean property maps to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum GradleProperty {
    UseWrapper,
    MakeWrapperExecutable,
    GradleHome,
    Tasks,
    Daemon,
    Offline,
    Debug,
    AdditionalOptions,
}

impl GradleProperty {
    pub const ALL: [GradleProperty; 8] = [
        GradleProperty::UseWrapper,
        GradleProperty::MakeWrapperExecutable,
        GradleProperty::GradleHome,
        GradleProperty::Tasks,
        GradleProperty::Daemon,
        GradleProperty::Offline,
        GradleProperty::Debug,
        GradleProperty::AdditionalOptions,
    ];

    /// Flag properties in the order their options are emitted
    pub const FLAGS: [GradleProperty; 3] = [
        GradleProperty::Daemon,
        GradleProperty::Offline,
        GradleProperty::Debug,
    ];

    /// The key this property is stored under in the task configuration
    pub fn key(self) -> &'static str {
        match self {
            GradleProperty::UseWrapper => "UseWrapper",
            GradleProperty::MakeWrapperExecutable => "MakeWrapperExecutable",
            GradleProperty::GradleHome => "GradleHome",
            GradleProperty::Tasks => "Tasks",
            GradleProperty::Daemon => "Daemon",
            GradleProperty::Offline => "Offline",
            GradleProperty::Debug => "Debug",
            GradleProperty::AdditionalOptions => "AdditionalOptions",
        }
    }

    pub fn default_value(self) -> Option<&'static str> {
        match self {
            GradleProperty::UseWrapper => Some("true"),
            _ => None,
        }
    }

    /// Gradle option emitted when this flag property is set
    pub fn option(self) -> Option<&'static str> {
        match self {
            GradleProperty::Daemon => Some("--daemon"),
            GradleProperty::Offline => Some("--offline"),
            GradleProperty::Debug => Some("--debug"),
            _ => None,
        }
    }

    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|p| p.key() == key)
    }
}

impl fmt::Display for GradleProperty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keys_round_trip() {
        for property in GradleProperty::ALL {
            assert_eq!(GradleProperty::from_key(property.key()), Some(property));
        }
        assert_eq!(GradleProperty::from_key("Deamon"), None);
    }

    #[test]
    fn test_only_flags_have_options() {
        for property in GradleProperty::ALL {
            assert_eq!(
                property.option().is_some(),
                GradleProperty::FLAGS.contains(&property),
                "{property}"
            );
        }
    }

    #[test]
    fn test_wrapper_is_on_by_default() {
        assert_eq!(GradleProperty::UseWrapper.default_value(), Some("true"));
        assert_eq!(GradleProperty::Tasks.default_value(), None);
    }
}
