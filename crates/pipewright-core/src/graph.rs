//! The declared resource graph.

use serde::{Deserialize, Serialize};

use crate::artifact::ArtifactStore;
use crate::id::LogicalId;
use crate::pipeline::Pipeline;
use crate::project::BuildProject;
use crate::role::ExecutionRole;

/// A declared resource.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Resource {
    Role(ExecutionRole),
    ArtifactStore(ArtifactStore),
    BuildProject(BuildProject),
    Pipeline(Pipeline),
}

/// One graph node: a resource plus the nodes it must be provisioned after.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResourceNode {
    pub id: LogicalId,
    pub depends_on: Vec<LogicalId>,
    pub resource: Resource,
}

impl ResourceNode {
    pub fn new(id: impl Into<LogicalId>, resource: Resource) -> Self {
        Self {
            id: id.into(),
            depends_on: Vec::new(),
            resource,
        }
    }

    /// Add a provisioning-order edge to another node.
    pub fn after(mut self, id: impl Into<LogicalId>) -> Self {
        self.depends_on.push(id.into());
        self
    }
}

/// The whole declaration for one stack: target coordinates plus resources in
/// provisioning order.
///
/// Submitted as a unit; the provisioning platform owns creation, update, and
/// teardown of the live resources it describes.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResourceGraph {
    pub stack_name: String,
    pub account: String,
    pub region: String,
    pub resources: Vec<ResourceNode>,
}

impl ResourceGraph {
    pub fn new(stack_name: &str, account: &str, region: &str) -> Self {
        Self {
            stack_name: stack_name.to_string(),
            account: account.to_string(),
            region: region.to_string(),
            resources: Vec::new(),
        }
    }

    pub fn add(&mut self, node: ResourceNode) {
        self.resources.push(node);
    }

    /// Look up a node by logical id.
    pub fn get(&self, id: &LogicalId) -> Option<&ResourceNode> {
        self.resources.iter().find(|n| &n.id == id)
    }

    pub fn roles(&self) -> impl Iterator<Item = &ExecutionRole> {
        self.resources.iter().filter_map(|n| match &n.resource {
            Resource::Role(role) => Some(role),
            _ => None,
        })
    }

    pub fn projects(&self) -> impl Iterator<Item = &BuildProject> {
        self.resources.iter().filter_map(|n| match &n.resource {
            Resource::BuildProject(project) => Some(project),
            _ => None,
        })
    }

    pub fn pipelines(&self) -> impl Iterator<Item = &Pipeline> {
        self.resources.iter().filter_map(|n| match &n.resource {
            Resource::Pipeline(pipeline) => Some(pipeline),
            _ => None,
        })
    }

    /// Render the declaration as pretty-printed JSON.
    pub fn to_json_pretty(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}
