use std::{
    collections::HashSet,
    fs,
    path::{Path, PathBuf},
};

use crate::{
    core::{
        collections::{Collections, CURRENT_SCHEMA_VERSION},
        utils::{ensure_dir, write_atomic, PathResolver},
    },
    domain::Category,
    errors::{Result, TrackerError},
};

use super::StorageBackend;

/// Stores every collection in a single pretty-printed JSON file.
#[derive(Debug, Clone)]
pub struct JsonStorage {
    root: PathBuf,
    collections_file: PathBuf,
}

impl JsonStorage {
    pub fn new(root: Option<PathBuf>) -> Result<Self> {
        let root = PathResolver::resolve_base(root);
        ensure_dir(&root)?;
        let collections_file = PathResolver::collections_file_in(&root);
        Ok(Self {
            root,
            collections_file,
        })
    }

    pub fn base_dir(&self) -> &Path {
        &self.root
    }

    pub fn collections_path(&self) -> &Path {
        &self.collections_file
    }
}

impl StorageBackend for JsonStorage {
    fn load(&self) -> Result<Collections> {
        if !self.collections_file.exists() {
            return Ok(Collections::default());
        }
        let collections = load_collections_from_path(&self.collections_file)?;
        for warning in collection_warnings(&collections) {
            tracing::warn!(path = %self.collections_file.display(), "{warning}");
        }
        Ok(collections)
    }

    fn save(&self, collections: &Collections) -> Result<()> {
        save_collections_to_path(collections, &self.collections_file)
    }
}

/// Writes the collections atomically by staging to a temporary file.
pub fn save_collections_to_path(collections: &Collections, path: &Path) -> Result<()> {
    let json = serde_json::to_string_pretty(collections)?;
    write_atomic(path, &json)
}

pub fn load_collections_from_path(path: &Path) -> Result<Collections> {
    let data = fs::read_to_string(path)?;
    let collections: Collections = serde_json::from_str(&data)?;
    if collections.schema_version > CURRENT_SCHEMA_VERSION {
        return Err(TrackerError::Storage(format!(
            "`{}` is from a newer schema version ({})",
            path.display(),
            collections.schema_version
        )));
    }
    validate_records(&collections).map_err(|err| {
        TrackerError::Storage(format!("`{}` holds an invalid record: {err}", path.display()))
    })?;
    Ok(collections)
}

fn validate_records(collections: &Collections) -> Result<()> {
    for expense in &collections.expenses {
        expense.validate_stored()?;
    }
    for category in &collections.categories {
        Category::validate_name(&category.name)?;
    }
    for budget in &collections.budgets {
        budget.validate()?;
    }
    Ok(())
}

/// Detects expenses pointing at categories that no longer exist.
pub fn collection_warnings(collections: &Collections) -> Vec<String> {
    let category_ids: HashSet<_> = collections.categories.iter().map(|c| c.id).collect();
    collections
        .expenses
        .iter()
        .filter(|expense| !category_ids.contains(&expense.category_id))
        .map(|expense| {
            format!(
                "expense {} references missing category {}",
                expense.id, expense.category_id
            )
        })
        .collect()
}
