// src/key_store.rs
//
// API key persistence: one plaintext file holding the trimmed key.
// Plaintext is a known limitation; the file lives wherever the user runs from.

use std::{
    fs,
    path::{Path, PathBuf},
};

use crate::{
    config::consts::API_KEY_FILENAME,
    error::{RmsError, RmsResult},
};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct KeyStore {
    path: PathBuf,
}

impl Default for KeyStore {
    fn default() -> Self {
        Self::new(API_KEY_FILENAME)
    }
}

impl KeyStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Saved key, if any. Missing, unreadable or blank files all mean "no key".
    pub fn load(&self) -> Option<String> {
        if !self.path.exists() {
            return None;
        }
        match fs::read_to_string(&self.path) {
            Ok(text) => {
                let key = text.trim();
                if key.is_empty() {
                    logd!("Key: {} is blank", self.path.display());
                    None
                } else {
                    logf!("Key: loaded from {}", self.path.display());
                    Some(s!(key))
                }
            }
            Err(e) => {
                loge!("Key: could not read {}: {}", self.path.display(), e);
                None
            }
        }
    }

    /// Overwrite the key file with the trimmed key.
    pub fn save(&self, key: &str) -> RmsResult<&Path> {
        let key = key.trim();
        if key.is_empty() {
            return Err(RmsError::Validation(s!("API key is empty; nothing to save")));
        }
        fs::write(&self.path, key).map_err(|e| RmsError::io(&self.path, e))?;
        logf!("Key: saved to {}", self.path.display());
        Ok(&self.path)
    }
}
