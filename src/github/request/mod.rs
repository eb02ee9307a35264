mod markdown_request;
mod update_gist_request;

pub use markdown_request::MarkdownRequest;
pub use update_gist_request::UpdateGistRequest;
