//! CLI command implementations.

use anyhow::Result;
use pipewright_core::role::ExecutionRole;
use pipewright_core::{StackConfig, declare};
use tracing::info;

fn load_config(path: &str) -> Result<StackConfig> {
    let content = std::fs::read_to_string(path)?;
    let config = pipewright_config::parse_stack_config(&content)?;
    Ok(config)
}

/// Declare the stack and render its resource graph as JSON.
pub fn synth(config_path: &str, output: Option<&str>) -> Result<()> {
    let config = load_config(config_path)?;
    info!(stack = %config.stack_name, region = %config.region, "Declaring stack");

    let graph = declare(&config);
    let rendered = graph.to_json_pretty()?;

    match output {
        Some(path) => {
            std::fs::write(path, &rendered)?;
            info!(path = %path, resources = graph.resources.len(), "Declaration written");
        }
        None => println!("{}", rendered),
    }

    Ok(())
}

/// Check that a configuration file parses.
pub fn validate(path: &str) -> Result<()> {
    let content = std::fs::read_to_string(path)?;
    match pipewright_config::parse_stack_config(&content) {
        Ok(config) => {
            println!("Configuration is valid (stack: {})", config.stack_name);
            Ok(())
        }
        Err(e) => {
            println!("Configuration error: {}", e);
            std::process::exit(1);
        }
    }
}

/// Render the execution role's policy document.
pub fn policy(config_path: &str) -> Result<()> {
    let config = load_config(config_path)?;
    let role = ExecutionRole::for_stack(&config.stack_name);
    println!("{}", serde_json::to_string_pretty(&role.policy)?);
    Ok(())
}
