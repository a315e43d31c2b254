//! Terminal status projection for a declared pipeline run.
//!
//! The declaration fixes the run semantics: stages execute strictly in
//! order, and every action in a stage must succeed before the next stage
//! starts. [`project_run`] computes the terminal statuses those rules assign
//! once each action's outcome is known. It runs no commands and queries no
//! platform.

use serde::{Deserialize, Serialize};

use crate::pipeline::{Action, Pipeline, Stage};

/// Outcome of a single action, as reported by the execution platform.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ActionOutcome {
    Succeeded,
    /// Non-zero exit from any command run by the action.
    Failed,
}

/// Terminal status of one stage.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StageStatus {
    Succeeded,
    Failed,
    /// An earlier stage failed, so this one was never invoked.
    NotRun,
}

impl StageStatus {
    pub fn is_success(&self) -> bool {
        matches!(self, StageStatus::Succeeded)
    }
}

/// Terminal status of the whole run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PipelineStatus {
    Succeeded,
    Failed { stage: String },
}

impl PipelineStatus {
    pub fn is_success(&self) -> bool {
        matches!(self, PipelineStatus::Succeeded)
    }
}

/// Status assigned to one stage by a projected run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StageResult {
    pub name: String,
    pub status: StageStatus,
}

/// Result of projecting a run over a declared pipeline.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunProjection {
    pub pipeline: PipelineStatus,
    pub stages: Vec<StageResult>,
}

impl RunProjection {
    /// Look up a stage's projected result by name.
    pub fn stage(&self, name: &str) -> Option<&StageResult> {
        self.stages.iter().find(|s| s.name == name)
    }
}

/// Walk the declared stages in order, asking `outcome` for each action's
/// result. The first failed action fails its stage and the run; later stages
/// are never invoked, and earlier successes stand.
pub fn project_run<F>(pipeline: &Pipeline, mut outcome: F) -> RunProjection
where
    F: FnMut(&Stage, &Action) -> ActionOutcome,
{
    let mut stages = Vec::with_capacity(pipeline.stages.len());
    let mut failed_stage: Option<String> = None;

    for stage in &pipeline.stages {
        if failed_stage.is_some() {
            stages.push(StageResult {
                name: stage.name.clone(),
                status: StageStatus::NotRun,
            });
            continue;
        }

        let failed = stage
            .actions
            .iter()
            .any(|action| outcome(stage, action) == ActionOutcome::Failed);

        let status = if failed {
            failed_stage = Some(stage.name.clone());
            StageStatus::Failed
        } else {
            StageStatus::Succeeded
        };
        stages.push(StageResult {
            name: stage.name.clone(),
            status,
        });
    }

    let pipeline_status = match failed_stage {
        Some(stage) => PipelineStatus::Failed { stage },
        None => PipelineStatus::Succeeded,
    };

    RunProjection {
        pipeline: pipeline_status,
        stages,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::stack::{CI_STAGE, SOURCE_STAGE, StackConfig, declare};

    fn declared_pipeline() -> Pipeline {
        let config = StackConfig {
            stack_name: "demo".to_string(),
            repository_name: "demo-repo".to_string(),
            account: "111111111111".to_string(),
            region: "eu-west-1".to_string(),
        };
        declare(&config).pipelines().next().unwrap().clone()
    }

    #[test]
    fn test_all_actions_succeeding_succeeds_the_run() {
        let pipeline = declared_pipeline();
        let run = project_run(&pipeline, |_, _| ActionOutcome::Succeeded);

        assert!(run.pipeline.is_success());
        for stage in &run.stages {
            assert!(stage.status.is_success());
        }
    }

    #[test]
    fn test_failed_build_fails_ci_but_source_success_stands() {
        let pipeline = declared_pipeline();
        let run = project_run(&pipeline, |stage, _| {
            if stage.name == CI_STAGE {
                ActionOutcome::Failed
            } else {
                ActionOutcome::Succeeded
            }
        });

        assert_eq!(run.stage(SOURCE_STAGE).unwrap().status, StageStatus::Succeeded);
        assert_eq!(run.stage(CI_STAGE).unwrap().status, StageStatus::Failed);
        assert_eq!(
            run.pipeline,
            PipelineStatus::Failed {
                stage: CI_STAGE.to_string()
            }
        );
    }

    #[test]
    fn test_failed_source_never_invokes_ci() {
        let pipeline = declared_pipeline();
        let run = project_run(&pipeline, |stage, _| {
            if stage.name == SOURCE_STAGE {
                ActionOutcome::Failed
            } else {
                ActionOutcome::Succeeded
            }
        });

        assert_eq!(run.stage(SOURCE_STAGE).unwrap().status, StageStatus::Failed);
        assert_eq!(run.stage(CI_STAGE).unwrap().status, StageStatus::NotRun);
        assert_eq!(
            run.pipeline,
            PipelineStatus::Failed {
                stage: SOURCE_STAGE.to_string()
            }
        );
    }
}
