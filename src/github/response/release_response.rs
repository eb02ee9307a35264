use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct ReleaseResponse {
    pub id: u64,
    pub name: Option<String>,
    pub tag_name: Option<String>,
    pub body: Option<String>,
    pub html_url: String,
}
