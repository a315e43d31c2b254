//! Pipeline and stage definitions.

use serde::{Deserialize, Serialize};

use crate::artifact::ArtifactHandle;
use crate::source::SourceTrigger;

/// A declared pipeline: ordered stages sharing one execution role.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Pipeline {
    pub name: String,
    /// Name of the execution role shared by every action.
    pub role: String,
    /// Stages execute strictly in order; a stage begins only after every
    /// action in the previous stage has succeeded.
    pub stages: Vec<Stage>,
    /// Cross-account artifact encryption keys; off for single-account
    /// deployments.
    pub cross_account_keys: bool,
}

impl Pipeline {
    /// Look up a stage by name.
    pub fn stage(&self, name: &str) -> Option<&Stage> {
        self.stages.iter().find(|s| s.name == name)
    }
}

/// An ordered group of actions.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Stage {
    pub name: String,
    pub actions: Vec<Action>,
}

/// A single unit of work inside a stage.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Action {
    pub name: String,
    /// Name of the role this action assumes.
    pub role: String,
    pub kind: ActionKind,
}

/// What an action does.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActionKind {
    /// Check out source into the trigger's output artifact.
    Source { trigger: SourceTrigger },
    /// Run a named build project against an input artifact.
    Build {
        project: String,
        input: ArtifactHandle,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    fn two_stage_pipeline() -> Pipeline {
        Pipeline {
            name: "demo".to_string(),
            role: "demo-reproduction-role".to_string(),
            stages: vec![
                Stage {
                    name: "Source".to_string(),
                    actions: vec![Action {
                        name: "Checkout".to_string(),
                        role: "demo-reproduction-role".to_string(),
                        kind: ActionKind::Source {
                            trigger: SourceTrigger::checkout("demo-repo"),
                        },
                    }],
                },
                Stage {
                    name: "CI".to_string(),
                    actions: vec![Action {
                        name: "CI".to_string(),
                        role: "demo-reproduction-role".to_string(),
                        kind: ActionKind::Build {
                            project: "demo".to_string(),
                            input: ArtifactHandle::new("source"),
                        },
                    }],
                },
            ],
            cross_account_keys: false,
        }
    }

    #[test]
    fn test_stage_lookup_by_name() {
        let pipeline = two_stage_pipeline();
        assert!(pipeline.stage("Source").is_some());
        assert!(pipeline.stage("CI").is_some());
        assert!(pipeline.stage("Deploy").is_none());
    }
}
