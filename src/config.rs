use crate::github::{github_client::DEFAULT_API_URL, RepositoryId};
use anyhow::{bail, Result};
use serde::{Deserialize, Serialize};
use std::{
    env,
    io::ErrorKind,
    path::{Path, PathBuf},
    time::Duration,
};

const DEFAULT_CONFIG_FILE_NAME: &str = "release-notifier.yaml";
const DEFAULT_STATE_FILE_NAME: &str = "last_releases.json";
const DEFAULT_SERVER_ADDRESS: &str = "0.0.0.0:8080";
const DEFAULT_REPOSITORIES: [&str; 3] = [
    "nestjs/nest",
    "slackapi/slack-github-action",
    "microsoft/typescript",
];

const GITHUB_TOKEN_VAR: &str = "GITHUB_ACCESS_TOKEN";
const SLACK_WEBHOOK_VAR: &str = "SLACK_WEBHOOK_URL";

#[derive(Debug, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "Config::default_repositories")]
    pub repositories: Vec<String>,
    #[serde(default = "Config::default_api_url")]
    pub api_url: String,
    #[serde(default)]
    pub timeout_secs: Option<u64>,
    #[serde(default)]
    pub state: StateConfig,
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(skip)]
    pub secrets: Secrets,
}

impl Config {
    /// Reads the YAML file at `path`, or `release-notifier.yaml` when no path
    /// is given. A missing default file means defaults; a missing explicit
    /// file is an error. Secrets are always taken from the environment.
    pub async fn load(path: Option<&Path>) -> Result<Config> {
        let (path, explicit) = match path {
            Some(path) => (path.to_path_buf(), true),
            None => (PathBuf::from(DEFAULT_CONFIG_FILE_NAME), false),
        };

        let mut config = match tokio::fs::read_to_string(&path).await {
            Ok(config_string) => Config::parse(&config_string)?,
            Err(err) if err.kind() == ErrorKind::NotFound && !explicit => {
                log::debug!("{} not found, using defaults", path.display());
                Config::default()
            }
            Err(err) => return Err(err.into()),
        };

        config.secrets = Secrets::from_env();

        Ok(config)
    }

    pub fn parse(config_string: &str) -> Result<Config> {
        if config_string.trim().is_empty() {
            return Ok(Config::default());
        }

        let config = serde_yaml::from_str::<Config>(config_string)?;

        Ok(config)
    }

    /// Configured repositories in listed order; malformed entries are skipped.
    pub fn repositories(&self) -> Vec<RepositoryId> {
        self.repositories
            .iter()
            .filter_map(|repo| match repo.parse::<RepositoryId>() {
                Ok(id) => Some(id),
                Err(err) => {
                    log::warn!("Skipping {}", err);
                    None
                }
            })
            .collect()
    }

    pub fn webhook_url(&self) -> Result<&str> {
        match self.secrets.webhook_url.as_deref() {
            Some(url) => Ok(url),
            None => bail!("{} must be set", SLACK_WEBHOOK_VAR),
        }
    }

    pub fn github_token(&self) -> Option<String> {
        self.secrets.github_token.to_owned()
    }

    pub fn timeout(&self) -> Option<Duration> {
        self.timeout_secs.map(Duration::from_secs)
    }

    fn default_repositories() -> Vec<String> {
        DEFAULT_REPOSITORIES.iter().map(|r| r.to_string()).collect()
    }

    fn default_api_url() -> String {
        DEFAULT_API_URL.to_owned()
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            repositories: Config::default_repositories(),
            api_url: Config::default_api_url(),
            timeout_secs: None,
            state: StateConfig::default(),
            server: ServerConfig::default(),
            secrets: Secrets::default(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum StateConfig {
    File {
        #[serde(default = "StateConfig::default_path")]
        path: PathBuf,
    },
    Gist {
        id: String,
        #[serde(default = "StateConfig::default_file")]
        file: String,
    },
}

impl StateConfig {
    fn default_path() -> PathBuf {
        PathBuf::from(DEFAULT_STATE_FILE_NAME)
    }

    fn default_file() -> String {
        DEFAULT_STATE_FILE_NAME.to_owned()
    }
}

impl Default for StateConfig {
    fn default() -> Self {
        StateConfig::File {
            path: StateConfig::default_path(),
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "ServerConfig::default_address")]
    pub address: String,
}

impl ServerConfig {
    fn default_address() -> String {
        DEFAULT_SERVER_ADDRESS.to_owned()
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        ServerConfig {
            address: ServerConfig::default_address(),
        }
    }
}

#[derive(Debug, Default)]
pub struct Secrets {
    pub github_token: Option<String>,
    pub webhook_url: Option<String>,
}

impl Secrets {
    fn from_env() -> Self {
        Secrets {
            github_token: non_empty_var(GITHUB_TOKEN_VAR),
            webhook_url: non_empty_var(SLACK_WEBHOOK_VAR),
        }
    }
}

fn non_empty_var(name: &str) -> Option<String> {
    env::var(name).ok().filter(|value| !value.trim().is_empty())
}
