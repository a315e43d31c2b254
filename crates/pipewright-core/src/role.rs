//! Execution role and permission policy types.

use derive_more::Display;
use serde::{Deserialize, Serialize};

/// Resource pattern matching everything in the target account.
pub const ALL_RESOURCES: &str = "*";

/// Action prefixes granted to the pipeline role. Each prefix covers one
/// managed service's full action space.
pub const PROVISIONING_ACTIONS: [&str; 12] = [
    "apigateway:*",
    "cloudwatch:*",
    "cloudformation:*",
    "events:*",
    "iam:*",
    "lambda:*",
    "logs:*",
    "s3:*",
    "route53:*",
    "acm:*",
    "cloudfront:*",
    "secretsmanager:*",
];

/// Effect of a policy statement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Effect {
    Allow,
    Deny,
}

impl std::fmt::Display for Effect {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Effect::Allow => write!(f, "allow"),
            Effect::Deny => write!(f, "deny"),
        }
    }
}

/// A service identity allowed to assume a role.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Display)]
#[display("{_0}")]
pub struct ServicePrincipal(String);

impl ServicePrincipal {
    /// The build execution service.
    pub fn build_service() -> Self {
        Self("codebuild.amazonaws.com".to_string())
    }

    /// The pipeline orchestration service.
    pub fn pipeline_service() -> Self {
        Self("codepipeline.amazonaws.com".to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// A single permission grant: an effect over action patterns and resource
/// patterns.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PolicyStatement {
    pub effect: Effect,
    pub actions: Vec<String>,
    pub resources: Vec<String>,
}

impl PolicyStatement {
    /// Allow the given actions on every resource in the account.
    pub fn allow_all_resources(actions: impl IntoIterator<Item = impl Into<String>>) -> Self {
        Self {
            effect: Effect::Allow,
            actions: actions.into_iter().map(Into::into).collect(),
            resources: vec![ALL_RESOURCES.to_string()],
        }
    }
}

/// An ordered list of permission statements attached to a role.
///
/// Statements are plain data, so a policy can be inspected and rendered
/// without parsing an opaque literal.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PolicyDocument {
    pub statements: Vec<PolicyStatement>,
}

impl PolicyDocument {
    /// The fixed grant the pipeline role carries: every managed service's
    /// full action space, account-wide.
    pub fn provisioning_grant() -> Self {
        Self {
            statements: vec![PolicyStatement::allow_all_resources(PROVISIONING_ACTIONS)],
        }
    }
}

/// The identity assumed by the checkout and build actions.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExecutionRole {
    pub name: String,
    pub description: String,
    pub trusted_principals: Vec<ServicePrincipal>,
    pub policy: PolicyDocument,
}

impl ExecutionRole {
    /// Build the role shared by a stack's pipeline and build environment.
    /// The name derives from the stack name as `<stack>-reproduction-role`.
    pub fn for_stack(stack_name: &str) -> Self {
        Self {
            name: format!("{}-reproduction-role", stack_name),
            description: format!("Role assumed by \"{}\" pipeline", stack_name),
            trusted_principals: vec![
                ServicePrincipal::build_service(),
                ServicePrincipal::pipeline_service(),
            ],
            policy: PolicyDocument::provisioning_grant(),
        }
    }
}
