//! Service implementations of the capability interfaces

pub mod default_path_resolver;
pub mod memory_path_resolver;

pub use default_path_resolver::DefaultPathResolver;
pub use memory_path_resolver::MemoryPathResolver;
