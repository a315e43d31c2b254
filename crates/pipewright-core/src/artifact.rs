//! Artifact types for passing data between stages.

use derive_more::Display;
use serde::{Deserialize, Serialize};

/// An opaque named payload passed between stages.
///
/// Handles compare by name: the output handle a trigger declares and the
/// input handle a build action consumes are the same artifact exactly when
/// they compare equal.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, Display)]
#[display("{_0}")]
pub struct ArtifactHandle(String);

impl ArtifactHandle {
    pub fn new(name: &str) -> Self {
        Self(name.to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// The store that carries artifacts from one stage to the next.
///
/// Provisioned alongside the pipeline; the platform owns its lifecycle.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ArtifactStore {
    pub name: String,
}

impl ArtifactStore {
    /// Store provisioned for a stack's pipeline.
    pub fn for_stack(stack_name: &str) -> Self {
        Self {
            name: format!("{}-artifacts", stack_name),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_handles_with_the_same_name_are_the_same_artifact() {
        assert_eq!(ArtifactHandle::new("source"), ArtifactHandle::new("source"));
        assert_ne!(ArtifactHandle::new("source"), ArtifactHandle::new("build"));
    }

    #[test]
    fn test_store_name_derived_from_stack_name() {
        let store = ArtifactStore::for_stack("demo");
        assert_eq!(store.name, "demo-artifacts");
    }
}
