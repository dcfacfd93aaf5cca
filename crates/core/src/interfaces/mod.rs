//! Capability interfaces injected into command planning

pub mod path_resolver;

pub use path_resolver::PathResolver;
