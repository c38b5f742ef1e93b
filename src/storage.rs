//! Secret persistence for the local backend.
//!
//! Secrets live in `<data_dir>/config.json` as
//! `{ "secrets": [ { "name": ..., "shared_secret": ... } ] }`.

use std::fs::{self, File};
use std::io::{BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};

use crate::error::{GuardError, GuardResult};
use crate::models::{AccountSecret, SecretsFile};

/// The secrets file name inside the data directory.
const SECRETS_FILE: &str = "config.json";

/// Reads and writes the secrets file.
#[derive(Debug, Clone)]
pub struct SecretStore {
    path: PathBuf,
}

impl SecretStore {
    /// Store rooted at `data_dir`. Nothing is touched until the first save.
    pub fn new(data_dir: impl AsRef<Path>) -> Self {
        Self {
            path: data_dir.as_ref().join(SECRETS_FILE),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load secrets from disk.
    ///
    /// A missing file is an empty list. An unreadable or corrupt file is
    /// logged and also treated as empty so a bad file never blocks startup.
    pub fn load(&self) -> Vec<AccountSecret> {
        if !self.path.exists() {
            return Vec::new();
        }

        let file = match File::open(&self.path) {
            Ok(f) => f,
            Err(e) => {
                tracing::warn!("Failed to open secrets file {:?}: {}", self.path, e);
                return Vec::new();
            }
        };

        match serde_json::from_reader::<_, SecretsFile>(BufReader::new(file)) {
            Ok(contents) => contents.secrets,
            Err(e) => {
                tracing::warn!("Ignoring unparsable secrets file {:?}: {}", self.path, e);
                Vec::new()
            }
        }
    }

    /// Write `secrets` to disk, creating the parent directory if needed.
    pub fn save(&self, secrets: &[AccountSecret]) -> GuardResult<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.exists() {
                fs::create_dir_all(parent)?;
            }
        }

        let contents = SecretsFile {
            secrets: secrets.to_vec(),
        };

        let file = File::create(&self.path)?;
        let mut writer = BufWriter::new(file);
        serde_json::to_writer_pretty(&mut writer, &contents)
            .map_err(|e| GuardError::Storage(format!("Failed to serialize secrets: {}", e)))?;
        writer.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_load_missing_file_is_empty() {
        let dir = TempDir::new().unwrap();
        let store = SecretStore::new(dir.path());
        assert!(store.load().is_empty());
    }

    #[test]
    fn test_save_creates_directory_and_persists_order() {
        let dir = TempDir::new().unwrap();
        let store = SecretStore::new(dir.path().join("nested").join("guard"));

        let secrets = vec![
            AccountSecret::new("Main", "QUJDRDEyMzQ="),
            AccountSecret::new("Alt", "MTIzNDU2Nzg5MDEyMzQ1Njc4OTA="),
        ];
        store.save(&secrets).unwrap();

        assert!(store.path().exists());
        assert_eq!(store.load(), secrets);
    }

    #[test]
    fn test_corrupt_file_is_treated_as_empty() {
        let dir = TempDir::new().unwrap();
        let store = SecretStore::new(dir.path());
        fs::write(store.path(), "{ not json").unwrap();
        assert!(store.load().is_empty());
    }

    #[test]
    fn test_file_format_is_plain_json() {
        let dir = TempDir::new().unwrap();
        let store = SecretStore::new(dir.path());
        store.save(&[AccountSecret::new("Main", "abc=")]).unwrap();

        let raw = fs::read_to_string(store.path()).unwrap();
        let value: serde_json::Value = serde_json::from_str(&raw).unwrap();
        assert_eq!(value["secrets"][0]["name"], "Main");
        assert_eq!(value["secrets"][0]["shared_secret"], "abc=");
    }
}
