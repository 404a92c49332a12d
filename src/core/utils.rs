use dirs::home_dir;
use std::{
    env,
    fs::{self, File},
    io::Write,
    path::{Path, PathBuf},
};

use crate::errors::Result;

const DEFAULT_DIR_NAME: &str = ".expense_core";
const HOME_ENV: &str = "EXPENSE_CORE_HOME";
const COLLECTIONS_FILE: &str = "collections.json";
const RECEIPTS_DIR: &str = "receipts";
const CONFIG_FILE: &str = "config.json";
const TMP_SUFFIX: &str = "tmp";

/// Resolves the on-disk layout under the application data directory.
pub struct PathResolver;

impl PathResolver {
    /// Explicit root, else `EXPENSE_CORE_HOME`, else `~/.expense_core`.
    pub fn resolve_base(root: Option<PathBuf>) -> PathBuf {
        if let Some(root) = root {
            return root;
        }
        Self::base_dir()
    }

    pub fn base_dir() -> PathBuf {
        if let Some(custom) = env::var_os(HOME_ENV) {
            return PathBuf::from(custom);
        }
        home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(DEFAULT_DIR_NAME)
    }

    pub fn collections_file_in(base: &Path) -> PathBuf {
        base.join(COLLECTIONS_FILE)
    }

    pub fn receipts_dir_in(base: &Path) -> PathBuf {
        base.join(RECEIPTS_DIR)
    }

    pub fn config_file_in(base: &Path) -> PathBuf {
        base.join(CONFIG_FILE)
    }
}

pub fn ensure_dir(path: &Path) -> Result<()> {
    if !path.exists() {
        fs::create_dir_all(path)?;
    }
    Ok(())
}

/// Replaces `path` with `data` by writing and syncing `<path>.tmp`, then
/// renaming it over the target.
pub fn write_atomic(path: &Path, data: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        ensure_dir(parent)?;
    }
    let tmp = tmp_path(path);
    let mut file = File::create(&tmp)?;
    file.write_all(data.as_bytes())?;
    file.sync_all()?;
    fs::rename(&tmp, path)?;
    Ok(())
}

fn tmp_path(path: &Path) -> PathBuf {
    let mut tmp = path.to_path_buf();
    let ext = match path.extension().and_then(|ext| ext.to_str()) {
        Some(existing) => format!("{existing}.{TMP_SUFFIX}"),
        None => TMP_SUFFIX.to_string(),
    };
    tmp.set_extension(ext);
    tmp
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn explicit_root_wins() {
        let root = PathBuf::from("/tmp/explicit-root");
        assert_eq!(PathResolver::resolve_base(Some(root.clone())), root);
        assert_eq!(
            PathResolver::collections_file_in(&root),
            root.join("collections.json")
        );
        assert_eq!(PathResolver::receipts_dir_in(&root), root.join("receipts"));
    }

    #[test]
    fn write_atomic_replaces_contents_and_cleans_up() {
        let temp = tempfile::TempDir::new().unwrap();
        let target = temp.path().join("nested").join("config.json");
        write_atomic(&target, "first").unwrap();
        write_atomic(&target, "second").unwrap();
        assert_eq!(fs::read_to_string(&target).unwrap(), "second");
        assert_eq!(tmp_path(&target), target.with_extension("json.tmp"));
        assert!(!tmp_path(&target).exists());
    }
}
