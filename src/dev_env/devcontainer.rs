use anyhow::Result;
use serde_json::json;

use super::ConfigTemplate;
use crate::config::RunConfig;
use crate::paths;

const EXTENSIONS: &[&str] = &[
    "ms-python.python",
    "ms-python.vscode-pylance",
    "redhat.vscode-yaml",
    "ms-azuretools.vscode-docker",
];

/// `.devcontainer/devcontainer.json`, attached to the compose `web` service.
pub struct DevContainer;

impl ConfigTemplate for DevContainer {
    fn path(&self) -> &'static str {
        paths::DEVCONTAINER
    }

    fn render(&self, _config: &RunConfig) -> Result<String> {
        let descriptor = json!({
            "name": "Dev Container",
            "dockerComposeFile": paths::DOCKER_COMPOSE,
            "service": super::docker::WEB_SERVICE,
            "workspaceFolder": "/app",
            "extensions": EXTENSIONS,
        });

        Ok(serde_json::to_string_pretty(&descriptor)? + "\n")
    }
}
