use super::release_handler::ReleaseHandler;
use crate::{
    github::{
        github_client::GithubClient,
        repository::{Repository, RepositoryId},
    },
    http::Error,
};

pub struct RepositoryHandler<'a> {
    client: &'a GithubClient,
    repo: &'a RepositoryId,
}

impl<'a> RepositoryHandler<'a> {
    pub fn new(client: &'a GithubClient, repo: &'a RepositoryId) -> Self {
        RepositoryHandler { client, repo }
    }

    pub fn releases(&self) -> ReleaseHandler<'a> {
        ReleaseHandler::new(self.client, self.repo)
    }

    pub async fn info(&self) -> Result<Repository, Error> {
        self.client.get_repository(self.repo).await
    }
}
