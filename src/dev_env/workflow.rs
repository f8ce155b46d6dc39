use anyhow::Result;

use super::ConfigTemplate;
use crate::config::RunConfig;
use crate::paths;

const MAIN_WORKFLOW: &str = r#"name: CI

on: [push, pull_request]

jobs:
  build:
    runs-on: ubuntu-latest
    steps:
    - uses: actions/checkout@v2
    - name: Set up Python
      uses: actions/setup-python@v2
      with:
        python-version: 3.x
    - name: Install dependencies
      run: |
        python -m pip install --upgrade pip
        pip install -r requirements.txt
    - name: Lint with flake8
      run: |
        flake8 .
    - name: Test with pytest
      run: |
        pytest
"#;

/// `.github/workflows/main.yml`: flake8 + pytest on every push and PR.
pub struct CiWorkflow;

impl ConfigTemplate for CiWorkflow {
    fn path(&self) -> &'static str {
        paths::CI_WORKFLOW
    }

    fn render(&self, _config: &RunConfig) -> Result<String> {
        Ok(MAIN_WORKFLOW.to_string())
    }
}
