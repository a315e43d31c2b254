//! Stack configuration parsing.

use crate::{ConfigError, ConfigResult};
use kdl::{KdlDocument, KdlNode};
use pipewright_core::StackConfig;

/// Parse a stack configuration from KDL text.
///
/// ```kdl
/// stack "my-stack" {
///     repository "my-repo"
///     account "123456789012"
///     region "eu-west-1"
/// }
/// ```
pub fn parse_stack_config(kdl: &str) -> ConfigResult<StackConfig> {
    let doc: KdlDocument = kdl.parse()?;

    let mut stack: Option<&KdlNode> = None;
    for node in doc.nodes() {
        match node.name().value() {
            "stack" => {
                if stack.is_some() {
                    return Err(ConfigError::Duplicate("stack".to_string()));
                }
                stack = Some(node);
            }
            _ => {} // Ignore unknown nodes
        }
    }

    let node = stack.ok_or_else(|| ConfigError::MissingField("stack".to_string()))?;
    let stack_name = get_first_string_arg(node);

    let mut repository_name = None;
    let mut account = None;
    let mut region = None;

    if let Some(children) = node.children() {
        for child in children.nodes() {
            match child.name().value() {
                "repository" => repository_name = get_first_string_arg(child),
                "account" => account = get_first_string_arg(child),
                "region" => region = get_first_string_arg(child),
                _ => {}
            }
        }
    }

    Ok(StackConfig {
        stack_name: require(stack_name, "stack name")?,
        repository_name: require(repository_name, "repository")?,
        account: require(account, "account")?,
        region: require(region, "region")?,
    })
}

/// Reject missing or empty values.
fn require(value: Option<String>, field: &str) -> ConfigResult<String> {
    match value {
        Some(v) if !v.is_empty() => Ok(v),
        Some(_) => Err(ConfigError::InvalidValue {
            field: field.to_string(),
            message: "must not be empty".to_string(),
        }),
        None => Err(ConfigError::MissingField(field.to_string())),
    }
}

fn get_first_string_arg(node: &KdlNode) -> Option<String> {
    node.entries()
        .iter()
        .find(|e| e.name().is_none())
        .and_then(|e| e.value().as_string())
        .map(|s| s.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_full_stack_config() {
        let kdl = r#"
            stack "pnp-pipeline-reproduction" {
                repository "pnp-reproduction"
                account "352405683916"
                region "eu-west-1"
            }
        "#;

        let config = parse_stack_config(kdl).unwrap();
        assert_eq!(config.stack_name, "pnp-pipeline-reproduction");
        assert_eq!(config.repository_name, "pnp-reproduction");
        assert_eq!(config.account, "352405683916");
        assert_eq!(config.region, "eu-west-1");
    }

    #[test]
    fn test_unknown_nodes_are_ignored() {
        let kdl = r#"
            owner "platform-team"

            stack "demo" {
                repository "demo-repo"
                account "111111111111"
                region "eu-west-1"
                notes "only the four known fields matter"
            }
        "#;

        let config = parse_stack_config(kdl).unwrap();
        assert_eq!(config.stack_name, "demo");
    }

    #[test]
    fn test_missing_repository_is_reported() {
        let kdl = r#"
            stack "demo" {
                account "111111111111"
                region "eu-west-1"
            }
        "#;

        let result = parse_stack_config(kdl);
        assert!(matches!(
            result.unwrap_err(),
            ConfigError::MissingField(field) if field == "repository"
        ));
    }

    #[test]
    fn test_empty_stack_name_is_rejected() {
        let kdl = r#"
            stack "" {
                repository "demo-repo"
                account "111111111111"
                region "eu-west-1"
            }
        "#;

        let result = parse_stack_config(kdl);
        assert!(matches!(result.unwrap_err(), ConfigError::InvalidValue { .. }));
    }

    #[test]
    fn test_duplicate_stack_node_is_rejected() {
        let kdl = r#"
            stack "one" {
                repository "r"
                account "1"
                region "eu-west-1"
            }
            stack "two" {
                repository "r"
                account "1"
                region "eu-west-1"
            }
        "#;

        let result = parse_stack_config(kdl);
        assert!(matches!(result.unwrap_err(), ConfigError::Duplicate(_)));
    }

    #[test]
    fn test_missing_stack_node_is_reported() {
        let result = parse_stack_config("owner \"platform-team\"");
        assert!(matches!(
            result.unwrap_err(),
            ConfigError::MissingField(field) if field == "stack"
        ));
    }

    #[test]
    fn test_malformed_kdl_is_a_parse_error() {
        let result = parse_stack_config("stack \"demo\" {");
        assert!(matches!(result.unwrap_err(), ConfigError::Parse(_)));
    }
}
