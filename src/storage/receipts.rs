use std::{
    fs,
    path::{Path, PathBuf},
};

use uuid::Uuid;

use crate::{
    core::utils::ensure_dir,
    errors::{Result, TrackerError},
};

use super::ReceiptStore;

/// Keeps receipt files in a flat directory, one file per key.
#[derive(Debug, Clone)]
pub struct DirReceiptStore {
    dir: PathBuf,
}

impl DirReceiptStore {
    pub fn new(dir: impl Into<PathBuf>) -> Result<Self> {
        let dir = dir.into();
        ensure_dir(&dir)?;
        Ok(Self { dir })
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    pub fn path(&self, key: &str) -> Result<PathBuf> {
        if key.is_empty() || key.contains(['/', '\\']) || key.starts_with('.') {
            return Err(TrackerError::Receipt(format!("invalid receipt key `{key}`")));
        }
        Ok(self.dir.join(key))
    }
}

impl ReceiptStore for DirReceiptStore {
    fn put(&self, file_name: &str, bytes: &[u8]) -> Result<String> {
        let key = format!("{}_{}", Uuid::new_v4().simple(), sanitize_file_name(file_name));
        let path = self.path(&key)?;
        fs::write(&path, bytes).map_err(|err| TrackerError::Receipt(err.to_string()))?;
        tracing::debug!(%key, size = bytes.len(), "stored receipt");
        Ok(key)
    }

    fn remove(&self, key: &str) -> Result<()> {
        let path = self.path(key)?;
        fs::remove_file(&path).map_err(|err| {
            TrackerError::Receipt(format!("cannot remove `{}`: {err}", path.display()))
        })
    }
}

/// Keeps ASCII letters, digits, `-` and `.`; everything else becomes `_`.
fn sanitize_file_name(name: &str) -> String {
    let base = name.rsplit(['/', '\\']).next().unwrap_or(name).trim();
    let sanitized: String = base
        .chars()
        .map(|c| match c {
            'a'..='z' | 'A'..='Z' | '0'..='9' | '-' | '.' => c,
            _ => '_',
        })
        .collect();
    let sanitized = sanitized.trim_start_matches('.').to_string();
    if sanitized.is_empty() {
        "receipt".into()
    } else {
        sanitized
    }
}
