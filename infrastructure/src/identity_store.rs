use anyhow::Context;
use domain::identity::Identity;
use shared::types::Result;
use std::fs;
use std::path::{Path, PathBuf};

const STATE_FILE: &str = "identity.json";

/// File-backed persistence for the identity pair: two server-issued
/// string values that survive restarts.
pub struct IdentityStore {
    path: PathBuf,
}

impl IdentityStore {
    pub fn new(state_dir: impl AsRef<Path>) -> Self {
        Self {
            path: state_dir.as_ref().join(STATE_FILE),
        }
    }

    /// Load the persisted pair; a missing file means a first-time user.
    pub fn load(&self) -> Result<Identity> {
        if !self.path.exists() {
            return Ok(Identity::default());
        }
        let data = fs::read_to_string(&self.path)
            .with_context(|| format!("Failed to read identity file at {:?}", self.path))?;
        let identity = serde_json::from_str(&data)
            .with_context(|| format!("Corrupt identity file at {:?}", self.path))?;
        Ok(identity)
    }

    pub fn save(&self, identity: &Identity) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        let data = serde_json::to_string_pretty(identity)?;
        fs::write(&self.path, data)
            .with_context(|| format!("Failed to write identity file at {:?}", self.path))?;
        Ok(())
    }

    pub fn clear(&self) -> Result<()> {
        if self.path.exists() {
            fs::remove_file(&self.path)?;
        }
        Ok(())
    }
}
