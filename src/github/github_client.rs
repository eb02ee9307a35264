use super::{
    handler::{gist_handler::GistHandler, repository_handler::RepositoryHandler},
    release::Release,
    repository::{Repository, RepositoryId},
    request::{MarkdownRequest, UpdateGistRequest},
    response::{GistResponse, ReleaseResponse, RepositoryResponse},
};
use crate::{
    http::{Error, Headers, HttpClient, ResponseHandler},
    markup::MarkdownRenderer,
};

pub const DEFAULT_API_URL: &str = "https://api.github.com";

#[derive(Clone, Debug)]
pub struct GithubClient {
    http: HttpClient,
    api_url: String,
    token: Option<String>,
}

impl GithubClient {
    pub fn new(http: HttpClient, api_url: impl Into<String>, token: Option<String>) -> Self {
        let api_url: String = api_url.into();

        GithubClient {
            http,
            api_url: api_url.trim_end_matches('/').to_owned(),
            token,
        }
    }

    pub fn repo<'a>(&'a self, repo: &'a RepositoryId) -> RepositoryHandler<'a> {
        RepositoryHandler::new(self, repo)
    }

    pub fn gist<'a>(&'a self, id: &'a str) -> GistHandler<'a> {
        GistHandler::new(self, id)
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.api_url, path)
    }

    fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }

    pub(super) async fn get_latest_release(&self, repo: &RepositoryId) -> Result<Release, Error> {
        let uri = self.url(&format!("repos/{}/{}/releases/latest", repo.owner, repo.name));
        log::debug!("fetching latest release from {}", uri);

        let release = self
            .http
            .get(uri)
            .github_headers(self.token())
            .send()
            .await
            .handle_json::<ReleaseResponse>()
            .await?;

        Ok(release.into())
    }

    pub(super) async fn get_repository(&self, repo: &RepositoryId) -> Result<Repository, Error> {
        let uri = self.url(&format!("repos/{}/{}", repo.owner, repo.name));
        log::debug!("fetching repository metadata from {}", uri);

        let repository = self
            .http
            .get(uri)
            .github_headers(self.token())
            .send()
            .await
            .handle_json::<RepositoryResponse>()
            .await?;

        Ok(repository.into())
    }

    pub async fn render_markdown(&self, text: &str) -> Result<String, Error> {
        let uri = self.url("markdown");
        log::debug!("rendering {} chars of markdown", text.chars().count());

        self.http
            .post(uri)
            .github_headers(self.token())
            .json(&MarkdownRequest::new(text))
            .send()
            .await
            .handle_text()
            .await
    }

    pub(super) async fn get_gist_file(
        &self,
        id: &str,
        file: &str,
    ) -> Result<Option<String>, Error> {
        let uri = self.url(&format!("gists/{}", id));
        log::debug!("fetching gist {}", id);

        let gist = self
            .http
            .get(uri)
            .github_headers(self.token())
            .send()
            .await
            .handle_json::<GistResponse>()
            .await?;

        Ok(gist.into_content(file))
    }

    pub(super) async fn update_gist_file(
        &self,
        id: &str,
        file: &str,
        content: &str,
    ) -> Result<(), Error> {
        let uri = self.url(&format!("gists/{}", id));
        log::debug!("updating gist {}", id);

        self.http
            .patch(uri)
            .github_headers(self.token())
            .json(&UpdateGistRequest::single_file(file, content))
            .send()
            .await
            .handle_text()
            .await?;

        Ok(())
    }
}

impl MarkdownRenderer for GithubClient {
    async fn render(&self, markdown: &str) -> Result<String, Error> {
        self.render_markdown(markdown).await
    }
}
