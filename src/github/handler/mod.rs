pub mod gist_handler;
pub mod release_handler;
pub mod repository_handler;
