use anyhow::Result;
use serde_json::json;

use super::ConfigTemplate;
use crate::config::RunConfig;
use crate::paths;

/// Globs hidden from the VS Code explorer.
const FILES_EXCLUDE: &[&str] = &[
    "**/.git",
    "**/.svn",
    "**/.hg",
    "**/.DS_Store",
    "**/__pycache__",
    "**/*.pyc",
    "**/*.pyo",
    "**/*.pyd",
    "**/*.sqlite3",
    "**/*.log",
];

/// `.vscode/settings.json`: venv interpreter, pylint + flake8, black on save.
pub struct VsCodeSettings;

impl ConfigTemplate for VsCodeSettings {
    fn path(&self) -> &'static str {
        paths::VSCODE_SETTINGS
    }

    fn render(&self, _config: &RunConfig) -> Result<String> {
        let exclude: serde_json::Map<String, serde_json::Value> = FILES_EXCLUDE
            .iter()
            .map(|glob| (glob.to_string(), json!(true)))
            .collect();

        let settings = json!({
            "python.pythonPath": "venv/bin/python",
            "python.linting.pylintEnabled": true,
            "python.linting.flake8Enabled": true,
            "python.formatting.provider": "black",
            "editor.formatOnSave": true,
            "files.exclude": exclude,
        });

        Ok(serde_json::to_string_pretty(&settings)? + "\n")
    }
}
