//! Logical identifiers for declared resources.

use derive_more::Display;
use serde::{Deserialize, Serialize};

/// Names a node in the resource graph.
///
/// Logical ids are fixed by the assembly rather than generated, so declaring
/// the same configuration twice yields the same ids.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, Display)]
#[display("{_0}")]
pub struct LogicalId(String);

impl LogicalId {
    pub fn new(id: &str) -> Self {
        Self(id.to_string())
    }

    /// Get the underlying name.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for LogicalId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl From<String> for LogicalId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_logical_id_displays_as_its_name() {
        let id = LogicalId::new("PipelineRole");
        assert_eq!(id.to_string(), "PipelineRole");
        assert_eq!(id.as_str(), "PipelineRole");
    }

    #[test]
    fn test_logical_id_equality_is_by_name() {
        assert_eq!(LogicalId::new("Build"), LogicalId::from("Build"));
        assert_ne!(LogicalId::new("Build"), LogicalId::new("Pipeline"));
    }
}
