use super::{Error, ReleaseState, StateStore};
use crate::github::GithubClient;

/// Keeps the state as a single JSON file inside a GitHub gist.
pub struct GistStateStore {
    github: GithubClient,
    id: String,
    file: String,
}

impl GistStateStore {
    pub fn new(github: GithubClient, id: impl Into<String>, file: impl Into<String>) -> Self {
        GistStateStore {
            github,
            id: id.into(),
            file: file.into(),
        }
    }
}

impl StateStore for GistStateStore {
    async fn read(&self) -> Result<Option<ReleaseState>, Error> {
        match self.github.gist(&self.id).file(&self.file).await? {
            Some(content) if !content.trim().is_empty() => {
                ReleaseState::from_json(&content).map(Some)
            }
            _ => Ok(None),
        }
    }

    async fn write(&self, state: &ReleaseState) -> Result<(), Error> {
        let content = state.to_json()?;

        self.github
            .gist(&self.id)
            .update_file(&self.file, &content)
            .await?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::http::HttpClient;
    use anyhow::Result;
    use mockito::{Matcher, Server};
    use serde_json::json;

    fn store(url: String) -> Result<GistStateStore> {
        let github = GithubClient::new(HttpClient::new(None)?, url, Some("test_token".to_owned()));

        Ok(GistStateStore::new(github, "abc123", "last_releases.json"))
    }

    #[tokio::test]
    async fn should_load_state_from_gist() -> Result<()> {
        let mut server = Server::new_async().await;
        server
            .mock("GET", "/gists/abc123")
            .match_header("authorization", "Bearer test_token")
            .with_body(
                json!({
                    "files": { "last_releases.json": { "content": "{\"acme/widget\": \"100\"}" } }
                })
                .to_string(),
            )
            .create_async()
            .await;

        let state = store(server.url())?.load().await;

        assert_eq!(state.get("acme/widget"), Some("100"));

        Ok(())
    }

    #[tokio::test]
    async fn should_degrade_to_empty_state_when_gist_is_unreachable() -> Result<()> {
        let mut server = Server::new_async().await;
        server
            .mock("GET", "/gists/abc123")
            .with_status(404)
            .create_async()
            .await;

        let state = store(server.url())?.load().await;

        assert!(state.is_empty());

        Ok(())
    }

    #[tokio::test]
    async fn should_patch_gist_with_pretty_json() -> Result<()> {
        let mut server = Server::new_async().await;
        let mock = server
            .mock("PATCH", "/gists/abc123")
            .match_body(Matcher::Json(json!({
                "files": {
                    "last_releases.json": { "content": "{\n  \"acme/widget\": \"101\"\n}" }
                }
            })))
            .with_body("{}")
            .create_async()
            .await;

        let mut state = ReleaseState::default();
        state.record("acme/widget", "101");
        store(server.url())?.save(&state).await;

        mock.assert_async().await;

        Ok(())
    }
}
