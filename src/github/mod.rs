pub mod github_client;
mod handler;
pub mod release;
pub mod repository;
mod request;
mod response;

pub use github_client::GithubClient;
pub use release::Release;
pub use repository::RepositoryId;
