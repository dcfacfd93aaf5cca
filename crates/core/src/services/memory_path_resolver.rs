//! In-memory path resolver
//!
//! Answers file existence from a fixed set of paths. Used to plan commands
//! without a real filesystem.

use crate::interfaces::PathResolver;
use std::collections::HashSet;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone)]
pub struct MemoryPathResolver {
    current_dir: PathBuf,
    files: HashSet<PathBuf>,
}

impl MemoryPathResolver {
    pub fn new(current_dir: impl Into<PathBuf>) -> Self {
        Self {
            current_dir: current_dir.into(),
            files: HashSet::new(),
        }
    }

    pub fn with_file(mut self, path: impl AsRef<Path>) -> Self {
        let path = self.absolute(path.as_ref());
        self.files.insert(path);
        self
    }
}

impl PathResolver for MemoryPathResolver {
    fn current_dir(&self) -> PathBuf {
        self.current_dir.clone()
    }

    fn is_file(&self, path: &Path) -> bool {
        self.files.contains(&self.absolute(path))
    }
}

#[cfg(all(test, unix))]
mod tests {
    use super::*;

    #[test]
    fn test_files_are_normalized() {
        let resolver = MemoryPathResolver::new("/work").with_file("/usr/bin/./gradle");
        assert!(resolver.is_file(Path::new("/usr/bin/gradle")));
        assert!(resolver.is_file(Path::new("/usr/lib/../bin/gradle")));
        assert!(!resolver.is_file(Path::new("/usr/bin")));
    }

    #[test]
    fn test_relative_paths_use_current_dir() {
        let resolver = MemoryPathResolver::new("/work").with_file("gradlew");
        assert!(resolver.is_file(Path::new("/work/gradlew")));
        assert_eq!(resolver.absolute(Path::new("./gradlew")), PathBuf::from("/work/gradlew"));
    }
}
