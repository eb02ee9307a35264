use super::response::RepositoryResponse;
use std::{fmt, str::FromStr};
use thiserror::Error;

/// A repository reference in `owner/name` form.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RepositoryId {
    pub owner: String,
    pub name: String,
}

impl RepositoryId {
    pub fn new(owner: impl Into<String>, name: impl Into<String>) -> Self {
        RepositoryId {
            owner: owner.into(),
            name: name.into(),
        }
    }
}

#[derive(Debug, Error, PartialEq)]
#[error("invalid repository '{0}', expected 'owner/name'")]
pub struct InvalidRepositoryId(pub String);

impl FromStr for RepositoryId {
    type Err = InvalidRepositoryId;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let value = value.trim();

        match value.split_once('/') {
            Some((owner, name))
                if !owner.is_empty() && !name.is_empty() && !name.contains('/') =>
            {
                Ok(RepositoryId::new(owner, name))
            }
            _ => Err(InvalidRepositoryId(value.to_owned())),
        }
    }
}

impl fmt::Display for RepositoryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.owner, self.name)
    }
}

/// Repository metadata needed to decorate a notification.
#[derive(Debug, Clone, PartialEq)]
pub struct Repository {
    pub avatar_url: String,
}

impl From<RepositoryResponse> for Repository {
    fn from(response: RepositoryResponse) -> Self {
        Repository {
            avatar_url: response.owner.avatar_url,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_parse_owner_and_name() {
        let id: RepositoryId = "nestjs/nest".parse().unwrap();

        assert_eq!(id.owner, "nestjs");
        assert_eq!(id.name, "nest");
        assert_eq!(id.to_string(), "nestjs/nest");
    }

    #[test]
    fn should_trim_surrounding_whitespace() {
        let id: RepositoryId = " microsoft/typescript ".parse().unwrap();

        assert_eq!(id.to_string(), "microsoft/typescript");
    }

    #[test]
    fn should_reject_malformed_ids() {
        for value in ["nest", "/nest", "nestjs/", "a/b/c", ""] {
            assert!(value.parse::<RepositoryId>().is_err(), "{value}");
        }
    }
}
