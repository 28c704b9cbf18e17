//! Session record storage - load/save/clear against one JSON file.
//!
//! `load()` tolerates corrupt or unparsable persisted data by treating it
//! as absent and clearing it; a parse failure never propagates to the
//! caller.

use crate::error::StoreResult;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use teller_core::Session;

/// File-backed store for the single persisted session record.
pub struct SessionStore {
    path: PathBuf,
}

impl SessionStore {
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load the persisted session, if any.
    ///
    /// Unreadable content, JSON that does not decode as a session record,
    /// and records violating the role-shape invariant are all treated the
    /// same way: the record is cleared and `None` is returned.
    pub fn load(&self) -> Option<Session> {
        let raw = fs::read_to_string(&self.path).ok()?;

        let session = match serde_json::from_str::<Session>(&raw) {
            Ok(session) => session,
            Err(err) => {
                tracing::warn!(path = %self.path.display(), %err, "clearing corrupt session record");
                self.discard();
                return None;
            }
        };

        if let Err(err) = session.check_shape() {
            tracing::warn!(path = %self.path.display(), %err, "clearing malformed session record");
            self.discard();
            return None;
        }

        Some(session)
    }

    /// Persist the session, replacing any previous record wholesale.
    pub fn save(&self, session: &Session) -> StoreResult<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        let json = serde_json::to_string_pretty(session)?;
        fs::write(&self.path, json)?;
        Ok(())
    }

    /// Remove the persisted record. Removing an absent record is not an
    /// error.
    pub fn clear(&self) -> StoreResult<()> {
        match fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(()),
            Err(err) => Err(err.into()),
        }
    }

    fn discard(&self) {
        let _ = fs::remove_file(&self.path);
    }
}
