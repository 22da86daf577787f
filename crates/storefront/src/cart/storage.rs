//! Persisted cart storage backends.
//!
//! The cart survives sessions through a profile-scoped key-value document,
//! with the serialized line array held under a single fixed key.
//! [`KeyValueStorage`] is the seam; [`FileStorage`] is the real backend and
//! [`MemoryStorage`] the test double.

use std::fs;
use std::io;
use std::path::PathBuf;

use serde::{Serialize, de::DeserializeOwned};
use serde_json::{Map, Value};
use thiserror::Error;

/// The key under which the serialized cart line array is persisted.
pub const CART_KEY: &str = "majikBloomCart";

/// Storage backend errors.
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("storage I/O error: {0}")]
    Io(#[from] io::Error),
    #[error("storage payload error: {0}")]
    Payload(#[from] serde_json::Error),
}

/// A string-keyed store of JSON-serializable values.
pub trait KeyValueStorage {
    /// Read and deserialize the value under `key`, if any.
    ///
    /// # Errors
    ///
    /// Returns an error if the backing document cannot be read or the stored
    /// value does not deserialize as `T`.
    fn get<T: DeserializeOwned>(&self, key: &str) -> Result<Option<T>, StorageError>;

    /// Serialize `value` and store it under `key`, replacing any prior value.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization or the backing write fails.
    fn set<T: Serialize>(&mut self, key: &str, value: &T) -> Result<(), StorageError>;
}

// =============================================================================
// FileStorage
// =============================================================================

/// Key-value storage backed by a single JSON document on disk.
///
/// The document is an object mapping keys to values. A missing file reads
/// as empty; a corrupt document is replaced wholesale on the next write.
#[derive(Debug, Clone)]
pub struct FileStorage {
    path: PathBuf,
}

impl FileStorage {
    /// Create a storage handle for the document at `path`.
    ///
    /// The file is not touched until the first read or write.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    fn read_document(&self) -> Result<Map<String, Value>, StorageError> {
        let text = match fs::read_to_string(&self.path) {
            Ok(text) => text,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(Map::new()),
            Err(e) => return Err(e.into()),
        };

        Ok(serde_json::from_str(&text)?)
    }
}

impl KeyValueStorage for FileStorage {
    fn get<T: DeserializeOwned>(&self, key: &str) -> Result<Option<T>, StorageError> {
        let document = self.read_document()?;
        match document.get(key) {
            Some(value) => Ok(Some(serde_json::from_value(value.clone())?)),
            None => Ok(None),
        }
    }

    fn set<T: Serialize>(&mut self, key: &str, value: &T) -> Result<(), StorageError> {
        // A document that no longer parses is discarded rather than kept
        // as a write obstacle; the in-memory cart is authoritative.
        let mut document = self.read_document().unwrap_or_default();
        document.insert(key.to_owned(), serde_json::to_value(value)?);

        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent)?;
        }

        fs::write(&self.path, serde_json::to_string(&document)?)?;
        Ok(())
    }
}

// =============================================================================
// MemoryStorage
// =============================================================================

/// In-memory key-value storage for tests.
///
/// Handles share one bucket when cloned, so a second store instance can
/// rehydrate from what a first instance persisted.
#[derive(Debug, Clone, Default)]
pub struct MemoryStorage {
    entries: std::rc::Rc<std::cell::RefCell<Map<String, Value>>>,
}

impl MemoryStorage {
    /// Create an empty in-memory storage bucket.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a raw JSON value, bypassing serialization.
    ///
    /// Lets tests seed payloads of the wrong shape.
    pub fn insert_raw(&mut self, key: &str, value: Value) {
        self.entries.borrow_mut().insert(key.to_owned(), value);
    }
}

impl KeyValueStorage for MemoryStorage {
    fn get<T: DeserializeOwned>(&self, key: &str) -> Result<Option<T>, StorageError> {
        match self.entries.borrow().get(key) {
            Some(value) => Ok(Some(serde_json::from_value(value.clone())?)),
            None => Ok(None),
        }
    }

    fn set<T: Serialize>(&mut self, key: &str, value: &T) -> Result<(), StorageError> {
        self.entries
            .borrow_mut()
            .insert(key.to_owned(), serde_json::to_value(value)?);
        Ok(())
    }
}
