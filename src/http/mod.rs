pub mod response;

use reqwest::{
    header::{ACCEPT, USER_AGENT},
    Client, RequestBuilder,
};
use serde::de::DeserializeOwned;
use std::{ops::Deref, time::Duration};
use thiserror::Error;

use self::response::{AsyncFrom, Json, Raw, Response};

pub const USER_AGENT_NAME: &str = "release-notifier";
const GITHUB_API_VERSION: &str = "2022-11-28";

#[derive(Clone, Debug)]
pub struct HttpClient {
    client: Client,
}

impl HttpClient {
    pub fn new(timeout: Option<Duration>) -> Result<Self, Error> {
        let mut builder = Client::builder().user_agent(USER_AGENT_NAME);

        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }

        let client = builder
            .build()
            .map_err(|cause| Error::ClientBuildError { cause })?;

        Ok(HttpClient { client })
    }
}

impl Deref for HttpClient {
    type Target = Client;

    fn deref(&self) -> &Self::Target {
        &self.client
    }
}

pub trait Headers {
    fn github_headers(self, token: Option<&str>) -> RequestBuilder;
}

impl Headers for RequestBuilder {
    fn github_headers(self, token: Option<&str>) -> RequestBuilder {
        let builder = self
            .header(ACCEPT, "application/vnd.github+json")
            .header("X-GitHub-Api-Version", GITHUB_API_VERSION)
            .header(USER_AGENT, USER_AGENT_NAME);

        match token {
            Some(token) => builder.bearer_auth(token),
            None => builder,
        }
    }
}

/// Turns the outcome of `RequestBuilder::send` into a typed payload.
pub trait ResponseHandler {
    async fn handle_json<T>(self) -> Result<T, Error>
    where
        T: DeserializeOwned;

    async fn handle_text(self) -> Result<String, Error>;
}

impl ResponseHandler for Result<reqwest::Response, reqwest::Error> {
    async fn handle_json<T>(self) -> Result<T, Error>
    where
        T: DeserializeOwned,
    {
        let response = self.map_err(|cause| Error::RequestError { cause })?;

        Response::<Json, T>::async_from(response).await.collect()
    }

    async fn handle_text(self) -> Result<String, Error> {
        let response = self.map_err(|cause| Error::RequestError { cause })?;

        Response::<Raw, String>::async_from(response).await.collect()
    }
}

#[derive(Debug, Error)]
pub enum Error {
    #[error("Failed to build the http client: {cause}")]
    ClientBuildError {
        #[source]
        cause: reqwest::Error,
    },
    #[error("Request failed: {cause}")]
    RequestError {
        #[source]
        cause: reqwest::Error,
    },
    #[error("Unexpected status {status}: {message}")]
    StatusError { status: u16, message: String },
    #[error("Failed to read response text: {cause}")]
    ReadResponseTextError {
        #[source]
        cause: reqwest::Error,
    },
    #[error("Failed to parse response: {cause}")]
    ParseResponseError {
        #[source]
        cause: serde_json::Error,
    },
}
