//! Generic file-backed keyed store with a write-through cache.
//!
//! Each record is persisted as one JSON object per file, named `<id>.json`
//! under the store's root directory. An unbounded in-memory map sits in front
//! of the directory so hot ids are deserialized at most once. Every
//! successful `create`/`update` commits the record to disk before returning,
//! so a subsequent reader process never observes the cache ahead of the
//! durable store.

use std::collections::HashMap;
use std::fs;
use std::marker::PhantomData;
use std::path::{Path, PathBuf};
use std::sync::{Mutex, MutexGuard};

use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::json;
use tracing::error;

use crate::domain::entities::Keyed;
use crate::error::AppError;

/// File extension of persisted records.
const RECORD_SUFFIX: &str = "json";

/// Durable, cached CRUD store for one record kind.
///
/// A single mutex guards the cache map and the backing directory; every
/// operation holds it for its full duration, making each call atomic with
/// respect to other calls on the same store instance. Operations only touch
/// local files and are expected to complete quickly.
#[derive(Debug)]
pub struct FileStore<T> {
    root: PathBuf,
    cache: Mutex<HashMap<String, T>>,
}

impl<T> FileStore<T>
where
    T: Keyed + Clone + Serialize + DeserializeOwned,
{
    /// Opens a store rooted at `root`, creating the directory if absent.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] when the directory cannot be created.
    pub fn open(root: impl Into<PathBuf>) -> Result<Self, AppError> {
        let root = root.into();
        fs::create_dir_all(&root).map_err(|e| {
            AppError::internal(
                "Failed to create store directory",
                json!({ "path": root.display().to_string(), "reason": e.to_string() }),
            )
        })?;

        Ok(Self {
            root,
            cache: Mutex::new(HashMap::new()),
        })
    }

    /// Inserts the record into the cache and commits it to disk.
    ///
    /// Overwrites silently when the id is already present; rejecting
    /// duplicate ids is the caller's responsibility.
    pub fn create(&self, record: &T) -> Result<(), AppError> {
        let mut cache = self.lock_cache();
        cache.insert(record.key().to_owned(), record.clone());
        self.commit(record)
    }

    /// Returns the record with the given id, if any.
    ///
    /// Cache hits return immediately. On a miss the backing file is loaded
    /// lazily and the cache populated. A missing file is an ordinary
    /// `Ok(None)`.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Corruption`] when the backing file exists but
    /// cannot be deserialized.
    pub fn read(&self, id: &str) -> Result<Option<T>, AppError> {
        let mut cache = self.lock_cache();
        self.read_locked(&mut cache, id)
    }

    /// Replaces an existing record and commits the replacement to disk.
    ///
    /// Existence is verified through the same lazy read as [`Self::read`],
    /// so a record present only on disk still counts. Returns `Ok(false)`
    /// when no record with the id exists.
    pub fn update(&self, record: &T) -> Result<bool, AppError> {
        let mut cache = self.lock_cache();
        if self.read_locked(&mut cache, record.key())?.is_none() {
            return Ok(false);
        }

        cache.insert(record.key().to_owned(), record.clone());
        self.commit(record)?;
        Ok(true)
    }

    /// Removes the record from the cache and deletes its backing file.
    ///
    /// Returns `Ok(true)` when the id was present in the cache or on disk,
    /// `Ok(false)` otherwise; a second delete of the same record therefore
    /// returns `Ok(false)`.
    pub fn delete(&self, record: &T) -> Result<bool, AppError> {
        let mut cache = self.lock_cache();
        let id = record.key();
        let cached = cache.remove(id).is_some();

        let path = self.record_path(id);
        if path.exists() {
            fs::remove_file(&path).map_err(|e| {
                AppError::internal(
                    "Failed to delete record file",
                    json!({ "path": path.display().to_string(), "reason": e.to_string() }),
                )
            })?;
            return Ok(true);
        }

        Ok(cached)
    }

    /// Returns a lazy, single-pass iterator over every record persisted in
    /// the backing directory, deserializing each file on demand.
    ///
    /// Used to warm derived state at startup. Records created after the
    /// iterator is obtained may or may not be visited.
    pub fn iter(&self) -> Result<RecordIter<T>, AppError> {
        let entries = fs::read_dir(&self.root).map_err(|e| {
            AppError::internal(
                "Failed to scan store directory",
                json!({ "path": self.root.display().to_string(), "reason": e.to_string() }),
            )
        })?;

        Ok(RecordIter {
            entries,
            _record: PhantomData,
        })
    }

    /// Serializes the full record to its backing file, overwriting any
    /// existing content.
    ///
    /// Invoked at the end of every successful `create`/`update`; business
    /// logic never calls it directly.
    fn commit(&self, record: &T) -> Result<(), AppError> {
        let path = self.record_path(record.key());
        let body = serde_json::to_vec(record).map_err(|e| {
            AppError::internal(
                "Failed to serialize record",
                json!({ "id": record.key(), "reason": e.to_string() }),
            )
        })?;

        fs::write(&path, body).map_err(|e| {
            AppError::internal(
                "Failed to write record file",
                json!({ "path": path.display().to_string(), "reason": e.to_string() }),
            )
        })
    }

    fn read_locked(
        &self,
        cache: &mut HashMap<String, T>,
        id: &str,
    ) -> Result<Option<T>, AppError> {
        if let Some(record) = cache.get(id) {
            return Ok(Some(record.clone()));
        }

        let path = self.record_path(id);
        if !path.exists() {
            return Ok(None);
        }

        let record = deserialize_record::<T>(&path)?;
        cache.insert(id.to_owned(), record.clone());
        Ok(Some(record))
    }

    fn record_path(&self, id: &str) -> PathBuf {
        self.root.join(format!("{}.{}", id, RECORD_SUFFIX))
    }

    fn lock_cache(&self) -> MutexGuard<'_, HashMap<String, T>> {
        self.cache.lock().expect("store cache lock poisoned")
    }
}

/// Lazy iterator over the records of a [`FileStore`] backing directory.
///
/// Finite, non-restartable, single-pass. Yields `Err` for files that can no
/// longer be deserialized instead of skipping them.
pub struct RecordIter<T> {
    entries: fs::ReadDir,
    _record: PhantomData<T>,
}

impl<T: DeserializeOwned> Iterator for RecordIter<T> {
    type Item = Result<T, AppError>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let entry = match self.entries.next()? {
                Ok(entry) => entry,
                Err(e) => {
                    return Some(Err(AppError::internal(
                        "Failed to scan store directory",
                        json!({ "reason": e.to_string() }),
                    )));
                }
            };

            let path = entry.path();
            if path.extension().and_then(|ext| ext.to_str()) == Some(RECORD_SUFFIX) {
                return Some(deserialize_record(&path));
            }
        }
    }
}

fn deserialize_record<T: DeserializeOwned>(path: &Path) -> Result<T, AppError> {
    let body = fs::read(path).map_err(|e| {
        AppError::internal(
            "Failed to read record file",
            json!({ "path": path.display().to_string(), "reason": e.to_string() }),
        )
    })?;

    serde_json::from_slice(&body).map_err(|e| {
        error!("Unable to parse the record file {}: {}", path.display(), e);
        AppError::corruption(
            "Unable to parse record file",
            json!({ "path": path.display().to_string(), "reason": e.to_string() }),
        )
    })
}
