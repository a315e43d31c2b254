//! Source trigger types.

use serde::{Deserialize, Serialize};

use crate::artifact::ArtifactHandle;

/// Branch every pipeline checks out.
pub const DEFAULT_BRANCH: &str = "main";

/// A by-name reference to a repository that already exists in the target
/// account. Resolving never creates one; an unknown name is rejected by the
/// platform when the declaration is applied, not here.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RepositoryRef {
    pub name: String,
}

impl RepositoryRef {
    pub fn by_name(name: &str) -> Self {
        Self {
            name: name.to_string(),
        }
    }
}

/// Checks out a repository branch into an output artifact.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SourceTrigger {
    pub repository: RepositoryRef,
    /// Must exist in the repository at trigger-evaluation time.
    pub branch: String,
    pub output: ArtifactHandle,
    /// Full clone rather than a shallow export, so the build environment
    /// sees real git history.
    pub full_clone: bool,
}

impl SourceTrigger {
    /// Trigger that checks out `main` from the named repository.
    pub fn checkout(repository_name: &str) -> Self {
        Self {
            repository: RepositoryRef::by_name(repository_name),
            branch: DEFAULT_BRANCH.to_string(),
            output: ArtifactHandle::new("source"),
            full_clone: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_checkout_targets_main() {
        let trigger = SourceTrigger::checkout("demo-repo");
        assert_eq!(trigger.branch, "main");
        assert_eq!(trigger.repository.name, "demo-repo");
    }

    #[test]
    fn test_checkout_declares_one_output_artifact() {
        let trigger = SourceTrigger::checkout("demo-repo");
        assert_eq!(trigger.output, ArtifactHandle::new("source"));
    }

    #[test]
    fn test_checkout_is_a_full_clone() {
        assert!(SourceTrigger::checkout("demo-repo").full_clone);
    }
}
