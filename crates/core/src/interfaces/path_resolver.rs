//! Path resolution interface
//!
//! Planning only needs a handful of filesystem questions. Putting them behind a
//! trait keeps the planner pure and lets tests describe the filesystem in memory.

use std::path::{Component, Path, PathBuf};

/// Trait for path resolution operations
pub trait PathResolver {
    /// Directory that relative paths are resolved against
    fn current_dir(&self) -> PathBuf;

    /// Check if a regular file exists at the path
    fn is_file(&self, path: &Path) -> bool;

    /// Make the path absolute against [`PathResolver::current_dir`] and normalize it
    fn absolute(&self, path: &Path) -> PathBuf {
        if path.is_absolute() {
            self.normalize(path)
        } else {
            self.normalize(&self.current_dir().join(path))
        }
    }

    /// Lexically normalize a path (drop `.`, fold `..`, strip trailing separators)
    ///
    /// `..` never climbs above the root.
    fn normalize(&self, path: &Path) -> PathBuf {
        normalize_lexically(path)
    }
}

impl<R: PathResolver + ?Sized> PathResolver for &R {
    fn current_dir(&self) -> PathBuf {
        (**self).current_dir()
    }

    fn is_file(&self, path: &Path) -> bool {
        (**self).is_file(path)
    }

    fn absolute(&self, path: &Path) -> PathBuf {
        (**self).absolute(path)
    }

    fn normalize(&self, path: &Path) -> PathBuf {
        (**self).normalize(path)
    }
}

pub fn normalize_lexically(path: &Path) -> PathBuf {
    let mut components: Vec<Component<'_>> = Vec::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => match components.last() {
                Some(Component::Normal(_)) => {
                    components.pop();
                }
                Some(Component::RootDir) | Some(Component::Prefix(_)) => {}
                _ => components.push(component),
            },
            c => components.push(c),
        }
    }

    if components.is_empty() {
        return PathBuf::new();
    }
    components.iter().collect()
}
