//! Core domain types and declaration builders for pipewright.
//!
//! This crate contains:
//! - Logical identifiers and the resource graph
//! - Execution role and permission policy types
//! - Source trigger and artifact types
//! - Build specification and build project types
//! - Pipeline and stage definitions
//! - The stack assembler mapping configuration to a resource graph
//! - A status projection for declared pipeline runs
//!
//! Declaration is a single synchronous pass: the same configuration always
//! produces the same graph, with no ids, timestamps, or ordering generated
//! at runtime.

pub mod artifact;
pub mod buildspec;
pub mod graph;
pub mod id;
pub mod pipeline;
pub mod project;
pub mod role;
pub mod source;
pub mod stack;
pub mod status;

pub use id::LogicalId;
pub use stack::{StackConfig, declare};
