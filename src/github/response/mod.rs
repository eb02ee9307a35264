mod gist_response;
mod release_response;
mod repository_response;

pub use gist_response::GistResponse;
pub use release_response::ReleaseResponse;
pub use repository_response::RepositoryResponse;
