pub mod json_backend;
pub mod receipts;

use crate::core::collections::Collections;
use crate::errors::Result;

/// Abstraction over persistence backends capable of storing the record collections.
pub trait StorageBackend: Send + Sync {
    /// Loads the stored collections; a backend with nothing stored yet returns empty ones.
    fn load(&self) -> Result<Collections>;
    fn save(&self, collections: &Collections) -> Result<()>;
}

/// Blob storage for receipt files attached to expenses.
pub trait ReceiptStore: Send + Sync {
    /// Stores the bytes and returns the key recorded on the expense.
    fn put(&self, file_name: &str, bytes: &[u8]) -> Result<String>;
    fn remove(&self, key: &str) -> Result<()>;
}

pub use json_backend::{collection_warnings, JsonStorage};
pub use receipts::DirReceiptStore;
