//! Build project types.

use serde::{Deserialize, Serialize};

use crate::buildspec::BuildSpec;
use crate::role::ExecutionRole;

/// Image every build environment is provisioned from.
pub const BUILD_IMAGE: &str = "aws/codebuild/standard:6.0";

/// Dependency cache scope for a build project.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CacheMode {
    None,
    Source,
}

impl std::fmt::Display for CacheMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CacheMode::None => write!(f, "none"),
            CacheMode::Source => write!(f, "source"),
        }
    }
}

/// An isolated build environment bound to a build specification.
///
/// One instance is provisioned per pipeline execution; work inside it does
/// not fan out.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BuildProject {
    pub name: String,
    /// Name of the execution role the environment runs under.
    pub role: String,
    pub image: String,
    pub cache: CacheMode,
    pub spec: BuildSpec,
}

impl BuildProject {
    /// Build project for a stack, named after it and running under the
    /// shared role. Source-level dependencies are cached between executions.
    pub fn for_stack(stack_name: &str, role: &ExecutionRole, spec: BuildSpec) -> Self {
        Self {
            name: stack_name.to_string(),
            role: role.name.clone(),
            image: BUILD_IMAGE.to_string(),
            cache: CacheMode::Source,
            spec,
        }
    }
}
