//! pipewright CLI tool.

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

mod commands;

#[derive(Parser)]
#[command(name = "pipewright")]
#[command(about = "Declare CI pipelines as resource graphs", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Render the resource-graph declaration for a stack
    Synth {
        /// Path to the stack configuration file
        #[arg(long, env = "PIPEWRIGHT_CONFIG", default_value = "pipewright.kdl")]
        config: String,
        /// Write the declaration here instead of stdout
        #[arg(short, long)]
        output: Option<String>,
    },
    /// Validate a stack configuration file
    Validate {
        /// Path to the configuration file
        #[arg(default_value = "pipewright.kdl")]
        path: String,
    },
    /// Render the execution role's policy document for review
    Policy {
        /// Path to the stack configuration file
        #[arg(long, env = "PIPEWRIGHT_CONFIG", default_value = "pipewright.kdl")]
        config: String,
    },
}

fn main() -> anyhow::Result<()> {
    // Initialize tracing; declarations go to stdout, logs to stderr
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Synth { config, output } => {
            commands::synth(&config, output.as_deref())?;
        }
        Commands::Validate { path } => {
            commands::validate(&path)?;
        }
        Commands::Policy { config } => {
            commands::policy(&config)?;
        }
    }

    Ok(())
}
