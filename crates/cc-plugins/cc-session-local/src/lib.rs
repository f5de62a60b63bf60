//! # cc-session-local
//! citizen-connect/crates/cc-plugins/cc-session-local/src/lib.rs
//! Local implementations of `SessionSlot`.
//! `FileSessionSlot` keeps the signed-in user as a JSON file on disk;
//! `MemorySessionSlot` keeps it for the lifetime of the process only.

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use cc_core::error::{AppError, Result};
use cc_core::models::SessionUser;
use cc_core::traits::SessionSlot;
use tokio::fs;
use tokio::sync::Mutex;
use tracing::debug;

pub struct FileSessionSlot {
    /// Location of the slot (e.g., "./data/cc_user.json")
    path: PathBuf,
}

impl FileSessionSlot {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[async_trait]
impl SessionSlot for FileSessionSlot {
    async fn load(&self) -> Result<Option<SessionUser>> {
        let raw = match fs::read_to_string(&self.path).await {
            Ok(raw) => raw,
            Err(err) if err.kind() == ErrorKind::NotFound => return Ok(None),
            Err(err) => {
                return Err(AppError::StorageReadError(format!("{}: {err}", self.path.display())))
            }
        };

        serde_json::from_str(&raw)
            .map(Some)
            .map_err(|err| AppError::StorageReadError(format!("{}: {err}", self.path.display())))
    }

    async fn save(&self, user: &SessionUser) -> Result<()> {
        let body = serde_json::to_string_pretty(user).map_err(|err| AppError::Internal(err.to_string()))?;

        // 1. Ensure the parent directory exists
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)
                .await
                .map_err(|err| AppError::Internal(format!("{}: {err}", parent.display())))?;
        }

        // 2. Overwrite the slot
        fs::write(&self.path, body)
            .await
            .map_err(|err| AppError::Internal(format!("{}: {err}", self.path.display())))?;

        debug!(path = %self.path.display(), "session slot written");
        Ok(())
    }

    async fn clear(&self) -> Result<()> {
        match fs::remove_file(&self.path).await {
            Ok(()) => Ok(()),
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(()),
            Err(err) => Err(AppError::Internal(format!("{}: {err}", self.path.display()))),
        }
    }
}

/// Process-local slot; nothing survives a restart.
#[derive(Default)]
pub struct MemorySessionSlot {
    user: Mutex<Option<SessionUser>>,
}

impl MemorySessionSlot {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl SessionSlot for MemorySessionSlot {
    async fn load(&self) -> Result<Option<SessionUser>> {
        Ok(self.user.lock().await.clone())
    }

    async fn save(&self, user: &SessionUser) -> Result<()> {
        *self.user.lock().await = Some(user.clone());
        Ok(())
    }

    async fn clear(&self) -> Result<()> {
        self.user.lock().await.take();
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cc_core::models::Role;

    fn scratch_path() -> PathBuf {
        std::env::temp_dir()
            .join(format!("cc-session-{}", uuid::Uuid::new_v4().simple()))
            .join("cc_user.json")
    }

    fn user() -> SessionUser {
        SessionUser {
            id: "a1b2c3d4e".into(),
            name: "Jane Doe".into(),
            email: "jane.doe@x.com".into(),
            role: Role::Politician,
            avatar: None,
        }
    }

    #[tokio::test]
    async fn missing_file_is_empty_slot() {
        let slot = FileSessionSlot::new(scratch_path());
        assert_eq!(slot.load().await.unwrap(), None);
    }

    #[tokio::test]
    async fn saved_user_is_read_back() {
        let slot = FileSessionSlot::new(scratch_path());
        slot.save(&user()).await.unwrap();

        assert_eq!(slot.load().await.unwrap(), Some(user()));
        slot.clear().await.unwrap();
    }

    #[tokio::test]
    async fn corrupt_file_is_a_read_error() {
        let slot = FileSessionSlot::new(scratch_path());
        fs::create_dir_all(slot.path().parent().unwrap()).await.unwrap();
        fs::write(slot.path(), "{ not json").await.unwrap();

        let err = slot.load().await.unwrap_err();
        assert!(matches!(err, AppError::StorageReadError(_)));
        slot.clear().await.unwrap();
    }

    #[tokio::test]
    async fn unknown_role_is_a_read_error() {
        let slot = FileSessionSlot::new(scratch_path());
        fs::create_dir_all(slot.path().parent().unwrap()).await.unwrap();
        fs::write(slot.path(), r#"{"id":"1","name":"X","email":"x@y","role":"king"}"#)
            .await
            .unwrap();

        assert!(slot.load().await.is_err());
        slot.clear().await.unwrap();
    }

    #[tokio::test]
    async fn clear_is_idempotent() {
        let slot = FileSessionSlot::new(scratch_path());
        slot.save(&user()).await.unwrap();

        slot.clear().await.unwrap();
        slot.clear().await.unwrap();
        assert_eq!(slot.load().await.unwrap(), None);
    }

    #[tokio::test]
    async fn memory_slot_round_trip() {
        let slot = MemorySessionSlot::new();
        assert_eq!(slot.load().await.unwrap(), None);

        slot.save(&user()).await.unwrap();
        assert_eq!(slot.load().await.unwrap(), Some(user()));

        slot.clear().await.unwrap();
        assert_eq!(slot.load().await.unwrap(), None);
    }
}
