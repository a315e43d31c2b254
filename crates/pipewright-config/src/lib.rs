//! KDL configuration parsing for pipewright.
//!
//! This crate handles parsing of the stack declaration file
//! (`pipewright.kdl`) into the core StackConfig record. The core itself
//! never reads files; everything it needs arrives as literal values.

pub mod error;
pub mod stack;

pub use error::{ConfigError, ConfigResult};
pub use stack::parse_stack_config;
