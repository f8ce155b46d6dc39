use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use super::ConfigTemplate;
use crate::config::RunConfig;
use crate::paths;

pub const COMPOSE_VERSION: &str = "3.8";

pub const WEB_SERVICE: &str = "web";
pub const DB_SERVICE: &str = "db";
pub const CACHE_SERVICE: &str = "cache";

/// Plain scalars that YAML 1.1 readers (PyYAML, compose v1) resolve to
/// booleans. `serde_yaml` follows YAML 1.2 and leaves them unquoted.
const YAML11_BOOLS: &[&str] = &[
    "y", "Y", "yes", "Yes", "YES", "n", "N", "no", "No", "NO", "true", "True", "TRUE", "false",
    "False", "FALSE", "on", "On", "ON", "off", "Off", "OFF",
];

const DOCKERFILE: &str = r#"FROM python:3
ENV PYTHONUNBUFFERED 1
RUN mkdir /code
WORKDIR /code
COPY requirements.txt /code/
RUN pip install -r requirements.txt
COPY . /code/
"#;

/// The subset of the compose schema the generated file uses.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComposeFile {
    pub version: String,
    pub services: BTreeMap<String, ComposeService>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComposeService {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub build: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub command: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub ports: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub depends_on: Vec<String>,
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub environment: BTreeMap<String, String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub volumes: Vec<String>,
}

impl ComposeFile {
    /// Django web app backed by postgres and redis. The project name doubles
    /// as the postgres database name.
    pub fn for_project(project_name: &str) -> Self {
        let web = ComposeService {
            build: Some(".".to_string()),
            command: Some("python manage.py runserver 0.0.0.0:8000".to_string()),
            ports: strings(&["8000:8000"]),
            depends_on: strings(&[DB_SERVICE, CACHE_SERVICE]),
            volumes: strings(&["./app:/app"]),
            ..Default::default()
        };

        let db = ComposeService {
            image: Some("postgres".to_string()),
            environment: BTreeMap::from([
                ("POSTGRES_DB".to_string(), project_name.to_string()),
                ("POSTGRES_USER".to_string(), "postgres".to_string()),
                ("POSTGRES_PASSWORD".to_string(), "postgres".to_string()),
            ]),
            volumes: strings(&["./data/db:/var/lib/postgresql/data"]),
            ..Default::default()
        };

        let cache = ComposeService {
            image: Some("redis".to_string()),
            ports: strings(&["6379:6379"]),
            volumes: strings(&["./data/redis:/data"]),
            ..Default::default()
        };

        Self {
            version: COMPOSE_VERSION.to_string(),
            services: BTreeMap::from([
                (WEB_SERVICE.to_string(), web),
                (DB_SERVICE.to_string(), db),
                (CACHE_SERVICE.to_string(), cache),
            ]),
        }
    }
}

fn strings(values: &[&str]) -> Vec<String> {
    values.iter().map(|v| v.to_string()).collect()
}

/// `docker-compose.yml`
pub struct Compose;

impl ConfigTemplate for Compose {
    fn path(&self) -> &'static str {
        paths::DOCKER_COMPOSE
    }

    fn render(&self, config: &RunConfig) -> Result<String> {
        let compose = ComposeFile::for_project(config.project_name());
        Ok(quote_yaml11_bools(&serde_yaml::to_string(&compose)?))
    }
}

/// Single-quote mapping values a YAML 1.1 reader would take for a boolean.
fn quote_yaml11_bools(yaml: &str) -> String {
    let mut quoted = String::with_capacity(yaml.len());
    for line in yaml.lines() {
        match line.split_once(": ") {
            Some((key, value)) if YAML11_BOOLS.contains(&value) => {
                quoted.push_str(&format!("{key}: '{value}'"));
            }
            _ => quoted.push_str(line),
        }
        quoted.push('\n');
    }
    quoted
}

/// `Dockerfile` for the `web` service image.
pub struct Dockerfile;

impl ConfigTemplate for Dockerfile {
    fn path(&self) -> &'static str {
        paths::DOCKERFILE
    }

    fn render(&self, _config: &RunConfig) -> Result<String> {
        Ok(DOCKERFILE.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::environment::HostOs;

    fn render_compose(name: &str) -> Result<ComposeFile> {
        let config = RunConfig::new(name, "/work", HostOs::Unix)?;
        Ok(serde_yaml::from_str(&Compose.render(&config)?)?)
    }

    #[test]
    fn test_compose_has_three_services() -> Result<()> {
        let compose = render_compose("blog")?;

        assert_eq!(compose.version, "3.8");
        let names: Vec<&str> = compose.services.keys().map(String::as_str).collect();
        assert_eq!(names, vec!["cache", "db", "web"]);

        let web = &compose.services["web"];
        assert_eq!(web.build.as_deref(), Some("."));
        assert_eq!(web.ports, vec!["8000:8000"]);
        assert_eq!(web.depends_on, vec!["db", "cache"]);

        let cache = &compose.services["cache"];
        assert_eq!(cache.image.as_deref(), Some("redis"));
        assert_eq!(cache.ports, vec!["6379:6379"]);

        assert_eq!(compose.services["db"].image.as_deref(), Some("postgres"));
        Ok(())
    }

    #[test]
    fn test_project_name_becomes_database_name() -> Result<()> {
        for name in ["blog", "shop-api", "3.8"] {
            let compose = render_compose(name)?;
            let env = &compose.services["db"].environment;
            assert_eq!(env["POSTGRES_DB"], name);
            assert_eq!(env["POSTGRES_USER"], "postgres");
        }
        Ok(())
    }

    #[test]
    fn test_yaml11_boolean_names_are_quoted() -> Result<()> {
        for name in ["yes", "on", "off", "Y", "no"] {
            let config = RunConfig::new(name, "/work", HostOs::Unix)?;
            let rendered = Compose.render(&config)?;

            assert!(
                rendered.contains(&format!("POSTGRES_DB: '{name}'")),
                "{name} left unquoted:\n{rendered}"
            );
            let compose: ComposeFile = serde_yaml::from_str(&rendered)?;
            assert_eq!(compose.services["db"].environment["POSTGRES_DB"], name);
        }
        Ok(())
    }

    #[test]
    fn test_quoting_leaves_other_values_alone() {
        let yaml = "a: yes\nb: 'on'\nc: postgres\nd:\n- off-site\n";
        assert_eq!(
            quote_yaml11_bools(yaml),
            "a: 'yes'\nb: 'on'\nc: postgres\nd:\n- off-site\n"
        );
    }

    #[test]
    fn test_compose_version_stays_a_string() -> Result<()> {
        let config = RunConfig::new("blog", "/work", HostOs::Unix)?;
        let value: serde_yaml::Value = serde_yaml::from_str(&Compose.render(&config)?)?;
        assert_eq!(value["version"].as_str(), Some("3.8"));
        Ok(())
    }

    #[test]
    fn test_dockerfile_installs_requirements() -> Result<()> {
        let config = RunConfig::new("blog", "/work", HostOs::Unix)?;
        let dockerfile = Dockerfile.render(&config)?;
        let lines: Vec<&str> = dockerfile.lines().collect();

        assert_eq!(lines.first(), Some(&"FROM python:3"));
        assert!(lines.contains(&"RUN pip install -r requirements.txt"));
        assert_eq!(lines.last(), Some(&"COPY . /code/"));
        Ok(())
    }
}
