//! Scripted command runner shared by the integration tests.

use std::cell::RefCell;
use std::fs;
use std::path::Path;

use devenv::{CommandError, CommandRunner, Invocation};

#[derive(Default)]
pub struct ScriptedRunner {
    calls: RefCell<Vec<String>>,
    missing: Vec<&'static str>,
    failures: Vec<(&'static str, i32)>,
}

#[allow(dead_code)]
impl ScriptedRunner {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn missing(mut self, program: &'static str) -> Self {
        self.missing.push(program);
        self
    }

    pub fn failing(mut self, prefix: &'static str, code: i32) -> Self {
        self.failures.push((prefix, code));
        self
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.borrow().clone()
    }

    pub fn programs(&self) -> Vec<String> {
        self.calls()
            .iter()
            .map(|call| call.split_whitespace().next().unwrap_or_default().to_string())
            .collect()
    }

    fn record(&self, invocation: &Invocation) -> Result<(), CommandError> {
        let rendered = invocation.to_string();
        self.calls.borrow_mut().push(rendered.clone());
        match self.failures.iter().find(|(prefix, _)| rendered.starts_with(prefix)) {
            Some((_, code)) => Err(CommandError::Failed {
                command: rendered,
                code: Some(*code),
            }),
            None => Ok(()),
        }
    }
}

impl CommandRunner for ScriptedRunner {
    fn run(&self, invocation: &Invocation) -> Result<(), CommandError> {
        self.record(invocation)?;

        let args = invocation.arguments();
        if invocation.program() == "django-admin"
            && args.first().map(String::as_str) == Some("startproject")
        {
            let base = invocation.cwd().unwrap_or_else(|| Path::new("."));
            let root = base.join(&args[1]);
            fs::create_dir_all(root.join(&args[1])).unwrap();
            fs::write(root.join("manage.py"), "#!/usr/bin/env python\n").unwrap();
        }
        Ok(())
    }

    fn capture(&self, invocation: &Invocation) -> Result<String, CommandError> {
        self.record(invocation)?;
        Ok("Django==5.0.6\nflake8==7.0.0\npytest==8.2.0\n".to_string())
    }

    fn probe(&self, invocation: &Invocation) -> bool {
        self.calls.borrow_mut().push(format!("probe {invocation}"));
        !self.missing.iter().any(|p| *p == invocation.program())
    }
}
