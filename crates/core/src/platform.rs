//! Platform detection and per-platform executable names

use crate::env::{Environment, OS_NAME};
use serde::Serialize;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Platform {
    Windows,
    Unix,
}

/// Launcher names for one platform
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Executables {
    /// Wrapper script, relative to the project directory
    pub wrapper: &'static str,
    /// Installed Gradle binary name
    pub gradle: &'static str,
}

const WINDOWS: Executables = Executables {
    wrapper: "./gradlew.bat",
    gradle: "gradle.bat",
};

const UNIX: Executables = Executables {
    wrapper: "./gradlew",
    gradle: "gradle",
};

impl Platform {
    /// Any OS name containing `win`, ignoring case, is Windows
    pub fn from_os_name(os: Option<&str>) -> Self {
        match os {
            Some(name) if name.to_lowercase().contains("win") => Platform::Windows,
            _ => Platform::Unix,
        }
    }

    pub fn detect<E: Environment + ?Sized>(env: &E) -> Self {
        Self::from_os_name(env.lookup(OS_NAME).as_deref())
    }

    pub fn executables(self) -> &'static Executables {
        match self {
            Platform::Windows => &WINDOWS,
            Platform::Unix => &UNIX,
        }
    }

    pub fn wrapper(self) -> &'static str {
        self.executables().wrapper
    }

    pub fn gradle(self) -> &'static str {
        self.executables().gradle
    }

    pub fn is_windows(self) -> bool {
        self == Platform::Windows
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Platform::Windows => write!(f, "windows"),
            Platform::Unix => write!(f, "unix"),
        }
    }
}
