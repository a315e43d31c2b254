//! Stack configuration and the declaration assembler.

use serde::{Deserialize, Serialize};

use crate::artifact::ArtifactStore;
use crate::buildspec::BuildSpec;
use crate::graph::{Resource, ResourceGraph, ResourceNode};
use crate::pipeline::{Action, ActionKind, Pipeline, Stage};
use crate::project::BuildProject;
use crate::role::ExecutionRole;
use crate::source::SourceTrigger;

/// Inputs for one declaration pass.
///
/// All fields are literal configuration. The stack name must be unique
/// within the account/region pair; the platform enforces that at apply time.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StackConfig {
    pub stack_name: String,
    pub repository_name: String,
    pub account: String,
    pub region: String,
}

// Logical ids for the graph nodes. Fixed, so the same configuration always
// produces the same ids.
const ROLE_ID: &str = "PipelineRole";
const STORE_ID: &str = "ArtifactStore";
const PROJECT_ID: &str = "Build";
const PIPELINE_ID: &str = "Pipeline";

/// Stage names, in execution order.
pub const SOURCE_STAGE: &str = "Source";
pub const CI_STAGE: &str = "CI";

const CHECKOUT_ACTION: &str = "Checkout";
const CI_ACTION: &str = "CI";

/// Map a stack configuration to its full resource graph.
///
/// One synchronous, infallible pass: the execution role, the artifact store,
/// the build project, and a two-stage pipeline (`Source` then `CI`) wired to
/// share the role and pass one source artifact between stages. Every entity
/// derives from the configuration alone, so declaring the same config twice
/// yields identical graphs.
pub fn declare(config: &StackConfig) -> ResourceGraph {
    let role = ExecutionRole::for_stack(&config.stack_name);
    let trigger = SourceTrigger::checkout(&config.repository_name);
    let store = ArtifactStore::for_stack(&config.stack_name);
    let project = BuildProject::for_stack(&config.stack_name, &role, BuildSpec::ci());

    let pipeline = Pipeline {
        name: config.stack_name.clone(),
        role: role.name.clone(),
        stages: vec![
            Stage {
                name: SOURCE_STAGE.to_string(),
                actions: vec![Action {
                    name: CHECKOUT_ACTION.to_string(),
                    role: role.name.clone(),
                    kind: ActionKind::Source {
                        trigger: trigger.clone(),
                    },
                }],
            },
            Stage {
                name: CI_STAGE.to_string(),
                actions: vec![Action {
                    name: CI_ACTION.to_string(),
                    role: role.name.clone(),
                    kind: ActionKind::Build {
                        project: project.name.clone(),
                        input: trigger.output.clone(),
                    },
                }],
            },
        ],
        cross_account_keys: false,
    };

    let mut graph = ResourceGraph::new(&config.stack_name, &config.account, &config.region);
    graph.add(ResourceNode::new(ROLE_ID, Resource::Role(role)));
    graph.add(ResourceNode::new(STORE_ID, Resource::ArtifactStore(store)));
    graph.add(ResourceNode::new(PROJECT_ID, Resource::BuildProject(project)).after(ROLE_ID));
    graph.add(
        ResourceNode::new(PIPELINE_ID, Resource::Pipeline(pipeline))
            .after(ROLE_ID)
            .after(STORE_ID)
            .after(PROJECT_ID),
    );
    graph
}
