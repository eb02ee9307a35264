use crate::{github::github_client::GithubClient, http::Error};

pub struct GistHandler<'a> {
    client: &'a GithubClient,
    id: &'a str,
}

impl<'a> GistHandler<'a> {
    pub fn new(client: &'a GithubClient, id: &'a str) -> Self {
        GistHandler { client, id }
    }

    /// Content of `file`, or `None` when the gist has no such file.
    pub async fn file(&self, file: &str) -> Result<Option<String>, Error> {
        self.client.get_gist_file(self.id, file).await
    }

    pub async fn update_file(&self, file: &str, content: &str) -> Result<(), Error> {
        self.client.update_gist_file(self.id, file, content).await
    }
}
