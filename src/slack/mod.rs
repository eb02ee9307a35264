pub mod message;

use crate::http::{Error, HttpClient, ResponseHandler};
use message::Message;

/// Posts messages to a single incoming webhook.
#[derive(Clone, Debug)]
pub struct SlackClient {
    http: HttpClient,
    webhook_url: String,
}

impl SlackClient {
    pub fn new(http: HttpClient, webhook_url: impl Into<String>) -> Self {
        SlackClient {
            http,
            webhook_url: webhook_url.into(),
        }
    }

    pub async fn post(&self, message: &Message) -> Result<(), Error> {
        log::debug!("posting {} blocks to slack", message.blocks.len());

        self.http
            .post(&self.webhook_url)
            .json(message)
            .send()
            .await
            .handle_text()
            .await?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::github::{Release, RepositoryId};
    use anyhow::Result;
    use mockito::{Matcher, Server};

    fn message() -> Message {
        Message::release(
            &RepositoryId::new("acme", "widget"),
            &Release::new("101", "v1.0.1", None, "https://example.com/r/101"),
            "https://avatars.example/acme.png",
            "notes",
        )
    }

    #[tokio::test]
    async fn should_post_json_payload() -> Result<()> {
        let mut server = Server::new_async().await;
        let mock = server
            .mock("POST", "/services/T000/B000/XXX")
            .match_header("content-type", "application/json")
            .match_body(Matcher::Regex(
                r#"^\{"blocks":\[\{"type":"section".*View Release"#.to_owned(),
            ))
            .with_body("ok")
            .create_async()
            .await;

        let slack = SlackClient::new(
            HttpClient::new(None)?,
            format!("{}/services/T000/B000/XXX", server.url()),
        );
        slack.post(&message()).await?;

        mock.assert_async().await;

        Ok(())
    }

    #[tokio::test]
    async fn should_fail_on_webhook_error() -> Result<()> {
        let mut server = Server::new_async().await;
        server
            .mock("POST", "/hook")
            .with_status(500)
            .with_body("internal_error")
            .create_async()
            .await;

        let slack = SlackClient::new(HttpClient::new(None)?, format!("{}/hook", server.url()));
        let result = slack.post(&message()).await;

        assert!(matches!(
            result,
            Err(Error::StatusError { status: 500, .. })
        ));

        Ok(())
    }
}
