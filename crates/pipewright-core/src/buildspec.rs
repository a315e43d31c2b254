//! Build specification types and builder.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Specification format version understood by the build service.
pub const SPEC_VERSION: &str = "0.2";

/// Phases a build moves through, in execution order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PhaseName {
    Install,
    Build,
}

impl std::fmt::Display for PhaseName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PhaseName::Install => write!(f, "install"),
            PhaseName::Build => write!(f, "build"),
        }
    }
}

/// One phase of a build. Commands run sequentially; the first non-zero exit
/// fails the phase and with it the stage.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BuildPhase {
    pub name: PhaseName,
    pub commands: Vec<String>,
}

/// Declarative description of what the build environment runs.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BuildSpec {
    pub version: String,
    /// Runtime baselines pinned before the install phase runs.
    pub runtime_versions: BTreeMap<String, String>,
    /// Phases in execution order.
    pub phases: Vec<BuildPhase>,
}

impl BuildSpec {
    pub fn builder() -> BuildSpecBuilder {
        BuildSpecBuilder::default()
    }

    /// The fixed specification the CI stage runs: upgrade node, install
    /// dependencies and the monorepo task runner, then build the one target.
    pub fn ci() -> Self {
        Self::builder()
            .runtime("nodejs", "16")
            .install_command("n 18")
            .install_command("npm ci")
            .install_command("npm i -g nx")
            .build_command("nx run my-lib:build --verbose")
            .finish()
    }
}

/// Assembles a [`BuildSpec`]. The phase order is fixed at install then
/// build, whatever order commands are added in.
#[derive(Debug, Default)]
pub struct BuildSpecBuilder {
    runtime_versions: BTreeMap<String, String>,
    install: Vec<String>,
    build: Vec<String>,
}

impl BuildSpecBuilder {
    /// Pin a runtime to a version baseline.
    pub fn runtime(mut self, name: &str, version: &str) -> Self {
        self.runtime_versions
            .insert(name.to_string(), version.to_string());
        self
    }

    /// Append a command to the install phase.
    pub fn install_command(mut self, command: &str) -> Self {
        self.install.push(command.to_string());
        self
    }

    /// Append a command to the build phase.
    pub fn build_command(mut self, command: &str) -> Self {
        self.build.push(command.to_string());
        self
    }

    pub fn finish(self) -> BuildSpec {
        BuildSpec {
            version: SPEC_VERSION.to_string(),
            runtime_versions: self.runtime_versions,
            phases: vec![
                BuildPhase {
                    name: PhaseName::Install,
                    commands: self.install,
                },
                BuildPhase {
                    name: PhaseName::Build,
                    commands: self.build,
                },
            ],
        }
    }
}
