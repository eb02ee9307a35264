//! Last-seen release per repository, loaded once and saved once per run.

mod file;
mod gist;

pub use file::FileStateStore;
pub use gist::GistStateStore;

use crate::{config::StateConfig, github::GithubClient, http};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("failed to access state file: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse state: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("failed to reach remote state: {0}")]
    Remote(#[from] http::Error),
}

/// Repository id (`owner/name`) to release id.
#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ReleaseState(BTreeMap<String, String>);

impl ReleaseState {
    pub fn get(&self, repo: &str) -> Option<&str> {
        self.0.get(repo).map(String::as_str)
    }

    /// True when `release_id` differs from what was last recorded, or
    /// nothing was recorded yet.
    pub fn is_new(&self, repo: &str, release_id: &str) -> bool {
        self.get(repo) != Some(release_id)
    }

    pub fn record(&mut self, repo: impl Into<String>, release_id: impl Into<String>) {
        self.0.insert(repo.into(), release_id.into());
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn from_json(json: &str) -> Result<Self, Error> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn to_json(&self) -> Result<String, Error> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

impl<K, V> FromIterator<(K, V)> for ReleaseState
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        ReleaseState(
            iter.into_iter()
                .map(|(repo, id)| (repo.into(), id.into()))
                .collect(),
        )
    }
}

/// Persistence for [`ReleaseState`]. Implementors provide `read`/`write`;
/// `load`/`save` never fail and only log.
pub trait StateStore {
    /// `Ok(None)` when nothing has been stored yet.
    async fn read(&self) -> Result<Option<ReleaseState>, Error>;

    async fn write(&self, state: &ReleaseState) -> Result<(), Error>;

    async fn load(&self) -> ReleaseState {
        match self.read().await {
            Ok(Some(state)) if !state.is_empty() => {
                log::debug!("loaded {} stored releases", state.len());
                state
            }
            Ok(_) => {
                log::info!("No stored releases found, starting fresh");
                ReleaseState::default()
            }
            Err(err) => {
                log::warn!("Cannot load stored releases, starting fresh: {}", err);
                ReleaseState::default()
            }
        }
    }

    async fn save(&self, state: &ReleaseState) {
        match self.write(state).await {
            Ok(()) => log::debug!("saved {} releases", state.len()),
            Err(err) => log::error!("Cannot save releases: {}", err),
        }
    }
}

/// The store selected by configuration.
pub enum Backend {
    File(FileStateStore),
    Gist(GistStateStore),
}

impl Backend {
    pub fn from_config(config: &StateConfig, github: &GithubClient) -> Self {
        match config {
            StateConfig::File { path } => Backend::File(FileStateStore::new(path)),
            StateConfig::Gist { id, file } => {
                Backend::Gist(GistStateStore::new(github.clone(), id, file))
            }
        }
    }
}

impl StateStore for Backend {
    async fn read(&self) -> Result<Option<ReleaseState>, Error> {
        match self {
            Backend::File(store) => store.read().await,
            Backend::Gist(store) => store.read().await,
        }
    }

    async fn write(&self, state: &ReleaseState) -> Result<(), Error> {
        match self {
            Backend::File(store) => store.write(state).await,
            Backend::Gist(store) => store.write(state).await,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_treat_unknown_repository_as_new() {
        let state = ReleaseState::default();

        assert!(state.is_new("acme/widget", "101"));
    }

    #[test]
    fn should_compare_against_recorded_id() {
        let mut state = ReleaseState::default();
        state.record("acme/widget", "100");

        assert!(!state.is_new("acme/widget", "100"));
        assert!(state.is_new("acme/widget", "101"));
    }

    #[test]
    fn should_write_pretty_sorted_json() -> Result<(), Error> {
        let state: ReleaseState = [("nestjs/nest", "2"), ("microsoft/typescript", "1")]
            .into_iter()
            .collect();

        assert_eq!(
            state.to_json()?,
            "{\n  \"microsoft/typescript\": \"1\",\n  \"nestjs/nest\": \"2\"\n}"
        );

        Ok(())
    }

    #[test]
    fn should_reject_non_string_ids() {
        assert!(ReleaseState::from_json(r#"{"acme/widget": 101}"#).is_err());
    }
}
