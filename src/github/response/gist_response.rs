use serde::Deserialize;
use std::collections::HashMap;

#[derive(Debug, Deserialize)]
pub struct GistResponse {
    #[serde(default)]
    pub files: HashMap<String, Option<GistFile>>,
}

#[derive(Debug, Deserialize)]
pub struct GistFile {
    pub content: Option<String>,
}

impl GistResponse {
    pub fn into_content(mut self, file: &str) -> Option<String> {
        self.files.remove(file).flatten().and_then(|f| f.content)
    }
}
