use anyhow::Result;

use super::ConfigTemplate;
use crate::config::RunConfig;
use crate::paths;

/// Ignore patterns, each listed once.
pub const PATTERNS: &[&str] = &[
    "venv/",
    "__pycache__/",
    "*.pyc",
    "*.pyo",
    "*.pyd",
    "*.sqlite3",
    "*.log",
    "Dockerfile",
    ".vscode/",
    "db.sqlite3",
];

/// `.gitignore`
pub struct GitIgnore;

impl ConfigTemplate for GitIgnore {
    fn path(&self) -> &'static str {
        paths::GITIGNORE
    }

    fn render(&self, _config: &RunConfig) -> Result<String> {
        let mut contents = PATTERNS.join("\n");
        contents.push('\n');
        Ok(contents)
    }
}
