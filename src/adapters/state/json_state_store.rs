use std::fs;
use std::path::{Path, PathBuf};

use crate::core::errors::{Result, TfeError};
use crate::core::models::key_state::GpgKeyState;
use crate::core::traits::state_store::StateStore;

/// Default state file, relative to the working directory.
pub const DEFAULT_STATE_FILE: &str = "registry_gpg_key.json";

/// Keeps resource state as a pretty-printed JSON file.
///
/// Writes go to a sibling temp file first and are renamed into place, so an
/// interrupted write never leaves a truncated state file behind.
#[derive(Clone)]
pub struct JsonStateStore {
    path: PathBuf,
}

impl JsonStateStore {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn state_error(&self, detail: String) -> TfeError {
        TfeError::StateError {
            path: self.path.clone(),
            detail,
        }
    }
}

impl StateStore for JsonStateStore {
    fn load(&self) -> Result<Option<GpgKeyState>> {
        if !self.path.exists() {
            return Ok(None);
        }

        let content = fs::read_to_string(&self.path)?;
        if content.trim().is_empty() {
            return Ok(None);
        }

        serde_json::from_str(&content)
            .map(Some)
            .map_err(|e| self.state_error(format!("Malformed state: {e}")))
    }

    fn save(&self, state: &GpgKeyState) -> Result<()> {
        let json = serde_json::to_string_pretty(state)
            .map_err(|e| self.state_error(format!("Failed to serialize state: {e}")))?;

        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
            && !parent.exists()
        {
            fs::create_dir_all(parent)?;
        }

        let tmp = self.path.with_extension("json.tmp");
        fs::write(&tmp, json + "\n")?;
        fs::rename(&tmp, &self.path)?;
        Ok(())
    }

    fn remove(&self) -> Result<()> {
        match fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}
