pub mod parser;

pub use parser::parse_env_pair;
