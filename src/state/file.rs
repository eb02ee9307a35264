use super::{Error, ReleaseState, StateStore};
use std::{
    io::ErrorKind,
    path::{Path, PathBuf},
};

pub struct FileStateStore {
    path: PathBuf,
}

impl FileStateStore {
    pub fn new(path: impl AsRef<Path>) -> Self {
        FileStateStore {
            path: path.as_ref().to_path_buf(),
        }
    }
}

impl StateStore for FileStateStore {
    async fn read(&self) -> Result<Option<ReleaseState>, Error> {
        let content = match tokio::fs::read_to_string(&self.path).await {
            Ok(content) => content,
            Err(err) if err.kind() == ErrorKind::NotFound => return Ok(None),
            Err(err) => return Err(err.into()),
        };

        ReleaseState::from_json(&content).map(Some)
    }

    async fn write(&self, state: &ReleaseState) -> Result<(), Error> {
        log::debug!("writing state to {}", self.path.display());
        tokio::fs::write(&self.path, state.to_json()?).await?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempdir::TempDir;

    #[tokio::test]
    async fn should_load_empty_state_when_file_is_missing() -> anyhow::Result<()> {
        let dir = TempDir::new("state")?;
        let store = FileStateStore::new(dir.path().join("last_releases.json"));

        assert!(store.read().await?.is_none());
        assert!(store.load().await.is_empty());

        dir.close()?;
        Ok(())
    }

    #[tokio::test]
    async fn should_load_empty_state_when_file_is_corrupt() -> anyhow::Result<()> {
        let dir = TempDir::new("state")?;
        let path = dir.path().join("last_releases.json");
        std::fs::write(&path, "not json")?;

        let store = FileStateStore::new(&path);

        assert!(store.read().await.is_err());
        assert!(store.load().await.is_empty());

        dir.close()?;
        Ok(())
    }

    #[tokio::test]
    async fn should_load_empty_state_from_empty_object() -> anyhow::Result<()> {
        let dir = TempDir::new("state")?;
        let path = dir.path().join("last_releases.json");
        std::fs::write(&path, "{}")?;

        let store = FileStateStore::new(&path);

        assert_eq!(store.read().await?, Some(ReleaseState::default()));
        assert_eq!(store.load().await, ReleaseState::default());

        dir.close()?;
        Ok(())
    }

    #[tokio::test]
    async fn should_overwrite_whole_file_on_save() -> anyhow::Result<()> {
        let dir = TempDir::new("state")?;
        let path = dir.path().join("last_releases.json");
        std::fs::write(&path, r#"{"old/repo": "1"}"#)?;

        let store = FileStateStore::new(&path);
        let mut state = ReleaseState::default();
        state.record("acme/widget", "101");
        store.save(&state).await;

        assert_eq!(
            std::fs::read_to_string(&path)?,
            "{\n  \"acme/widget\": \"101\"\n}"
        );
        assert_eq!(store.load().await, state);

        dir.close()?;
        Ok(())
    }

    #[tokio::test]
    async fn should_not_panic_when_save_fails() -> anyhow::Result<()> {
        let dir = TempDir::new("state")?;
        let store = FileStateStore::new(dir.path().join("missing").join("last_releases.json"));

        store.save(&ReleaseState::default()).await;

        assert!(store.write(&ReleaseState::default()).await.is_err());

        dir.close()?;
        Ok(())
    }
}
