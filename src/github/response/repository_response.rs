use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct RepositoryResponse {
    pub owner: OwnerResponse,
}

#[derive(Debug, Deserialize)]
pub struct OwnerResponse {
    pub avatar_url: String,
}
