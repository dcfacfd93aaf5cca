//! Default path resolver implementation
//!
//! Provides standard file system based path resolution.

use crate::interfaces::PathResolver;
use std::path::{Path, PathBuf};

/// Default implementation of PathResolver using std::fs
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultPathResolver;

impl DefaultPathResolver {
    pub fn new() -> Self {
        Self
    }
}

impl PathResolver for DefaultPathResolver {
    fn current_dir(&self) -> PathBuf {
        // An unreadable cwd leaves relative paths relative
        std::env::current_dir().unwrap_or_default()
    }

    fn is_file(&self, path: &Path) -> bool {
        path.is_file()
    }
}
