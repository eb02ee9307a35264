use super::response::ReleaseResponse;

/// The latest published release of a watched repository.
#[derive(Debug, Clone, PartialEq)]
pub struct Release {
    pub id: String,
    pub name: String,
    pub body: Option<String>,
    pub html_url: String,
}

impl Release {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        body: Option<String>,
        html_url: impl Into<String>,
    ) -> Self {
        Release {
            id: id.into(),
            name: name.into(),
            body,
            html_url: html_url.into(),
        }
    }
}

impl From<ReleaseResponse> for Release {
    fn from(response: ReleaseResponse) -> Self {
        let id = response.id.to_string();

        // untitled releases fall back to their tag, then to the id
        let name = [response.name, response.tag_name]
            .into_iter()
            .flatten()
            .find(|name| !name.trim().is_empty())
            .unwrap_or_else(|| id.to_owned());

        Release::new(id, name, response.body, response.html_url)
    }
}
