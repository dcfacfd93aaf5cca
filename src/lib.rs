//! gradle-task - Resolve Gradle command lines for pipeline tasks
//!
//! Facade over [`gradle_task_core`]; the workspace root exists to host the
//! cross-crate integration tests in `tests/`.
pub use gradle_task_core::*;
