use crate::{
    github::{github_client::GithubClient, release::Release, repository::RepositoryId},
    http::Error,
};

pub struct ReleaseHandler<'a> {
    client: &'a GithubClient,
    repo: &'a RepositoryId,
}

impl<'a> ReleaseHandler<'a> {
    pub fn new(client: &'a GithubClient, repo: &'a RepositoryId) -> Self {
        ReleaseHandler { client, repo }
    }

    pub async fn latest(&self) -> Result<Release, Error> {
        self.client.get_latest_release(self.repo).await
    }
}
