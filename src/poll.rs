use crate::{
    config::Config,
    github::{GithubClient, RepositoryId},
    http::{self, HttpClient},
    markup,
    slack::{message::Message, SlackClient},
    state::{ReleaseState, StateStore},
};
use anyhow::{Context, Result};
use thiserror::Error;

/// Which step of a repository check failed.
#[derive(Debug, Error)]
pub enum Error {
    #[error("cannot fetch latest release: {0}")]
    Release(#[source] http::Error),
    #[error("cannot fetch repository metadata: {0}")]
    Repository(#[source] http::Error),
    #[error("cannot post notification: {0}")]
    Webhook(#[source] http::Error),
}

#[derive(Debug, PartialEq)]
pub enum Outcome {
    Unchanged,
    Notified { release_id: String },
}

#[derive(Debug, Default, PartialEq)]
pub struct Summary {
    pub notified: Vec<String>,
    pub unchanged: Vec<String>,
    pub failed: Vec<String>,
}

/// Checks every configured repository once and notifies about new releases.
pub struct Notifier {
    github: GithubClient,
    slack: SlackClient,
    repositories: Vec<RepositoryId>,
}

impl Notifier {
    pub fn new(github: GithubClient, slack: SlackClient, repositories: Vec<RepositoryId>) -> Self {
        Notifier {
            github,
            slack,
            repositories,
        }
    }

    pub fn from_config(config: &Config) -> Result<Self> {
        let http = HttpClient::new(config.timeout()).context("Cannot create the http client")?;
        let webhook_url = config.webhook_url()?;

        let github = GithubClient::new(http.clone(), &config.api_url, config.github_token());
        let slack = SlackClient::new(http, webhook_url);

        Ok(Notifier::new(github, slack, config.repositories()))
    }

    pub fn github(&self) -> &GithubClient {
        &self.github
    }

    /// Runs one full cycle: load state, check each repository in order,
    /// save state once. Per-repository failures are logged and skipped.
    pub async fn run<S>(&self, store: &S) -> Summary
    where
        S: StateStore,
    {
        let mut state = store.load().await;
        let mut summary = Summary::default();

        for repo in &self.repositories {
            let name = repo.to_string();

            match self.check(repo, &mut state).await {
                Ok(Outcome::Notified { release_id }) => {
                    log::info!("Notification sent for {} release {}", name, release_id);
                    summary.notified.push(name);
                }
                Ok(Outcome::Unchanged) => {
                    log::info!("No new releases for {}", name);
                    summary.unchanged.push(name);
                }
                Err(err) => {
                    log::error!("Error checking {}: {}", name, err);
                    summary.failed.push(name);
                }
            }
        }

        store.save(&state).await;

        summary
    }

    /// State is only touched once the webhook accepted the message, so a
    /// failed post is retried on the next run.
    pub async fn check(
        &self,
        repo: &RepositoryId,
        state: &mut ReleaseState,
    ) -> Result<Outcome, Error> {
        let handler = self.github.repo(repo);

        let release = handler.releases().latest().await.map_err(Error::Release)?;
        let repository = handler.info().await.map_err(Error::Repository)?;

        let key = repo.to_string();
        if !state.is_new(&key, &release.id) {
            return Ok(Outcome::Unchanged);
        }

        log::debug!("new release {} for {}", release.id, key);
        let notes = markup::convert(&self.github, release.body.as_deref()).await;
        let message = Message::release(repo, &release, &repository.avatar_url, &notes);

        self.slack.post(&message).await.map_err(Error::Webhook)?;

        state.record(key, release.id.to_owned());

        Ok(Outcome::Notified {
            release_id: release.id,
        })
    }
}
