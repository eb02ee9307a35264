use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct MarkdownRequest {
    pub text: String,
}

impl MarkdownRequest {
    pub fn new(text: impl Into<String>) -> Self {
        MarkdownRequest { text: text.into() }
    }
}
