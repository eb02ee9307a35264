use serde::Serialize;
use std::collections::HashMap;

#[derive(Debug, Serialize)]
pub struct UpdateGistRequest {
    pub files: HashMap<String, GistFileContent>,
}

#[derive(Debug, Serialize)]
pub struct GistFileContent {
    pub content: String,
}

impl UpdateGistRequest {
    pub fn single_file(name: impl Into<String>, content: impl Into<String>) -> Self {
        let mut files = HashMap::new();
        files.insert(
            name.into(),
            GistFileContent {
                content: content.into(),
            },
        );

        UpdateGistRequest { files }
    }
}
