//! JSON file store for the shared dataset.
//!
//! The [`Store`] owns the single mutable dataset and its synchronization
//! primitive. Every operation's load(+save) cycle runs under one mutex, so
//! at most one read-modify-write is in flight at a time and readers always
//! see either the pre- or post-state of a mutation, never an interleaving.
//! This is the sole concurrency-control mechanism in the service; there is
//! no per-record locking.

use std::fs;
use std::path::{Path, PathBuf};

use parking_lot::Mutex;
use tracing::warn;

use crate::error::{HrError, HrResult};
use crate::models::Dataset;

/// File-backed store for the service dataset.
///
/// On load, a missing or unparseable file is deterministically reset to the
/// fixed seed dataset and re-persisted before being returned, so the service
/// self-heals and never fails outward on that condition. Genuine I/O errors
/// surface as [`HrError::Internal`].
///
/// # Example
///
/// ```no_run
/// use leave_desk::store::Store;
///
/// let store = Store::open("data.json");
/// let user_count = store.read(|data| Ok(data.users.len()))?;
/// # Ok::<(), leave_desk::error::HrError>(())
/// ```
pub struct Store {
    path: PathBuf,
    lock: Mutex<()>,
}

impl Store {
    /// Creates a store backed by the given file path. No I/O happens until
    /// the first access.
    pub fn open<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
            lock: Mutex::new(()),
        }
    }

    /// Runs a read-only closure over the current dataset, under the lock.
    pub fn read<T>(&self, f: impl FnOnce(&Dataset) -> HrResult<T>) -> HrResult<T> {
        let _guard = self.lock.lock();
        let data = self.load_locked()?;
        f(&data)
    }

    /// Runs a read-modify-write closure under the lock. The whole document
    /// is rewritten when the closure succeeds; on error nothing is written.
    pub fn update<T>(&self, f: impl FnOnce(&mut Dataset) -> HrResult<T>) -> HrResult<T> {
        let _guard = self.lock.lock();
        let mut data = self.load_locked()?;
        let out = f(&mut data)?;
        self.save_locked(&data)?;
        Ok(out)
    }

    /// Loads the persisted document, seeding it when missing or corrupt.
    /// Caller must hold the lock.
    fn load_locked(&self) -> HrResult<Dataset> {
        let text = match fs::read_to_string(&self.path) {
            Ok(text) => text,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
                return self.reseed_locked("store file missing");
            }
            Err(err) => {
                return Err(HrError::internal(format!(
                    "failed to read {}: {err}",
                    self.path.display()
                )));
            }
        };

        match serde_json::from_str(&text) {
            Ok(data) => Ok(data),
            Err(err) => {
                warn!(path = %self.path.display(), error = %err, "store file unparseable");
                self.reseed_locked("store file unparseable")
            }
        }
    }

    /// Writes the seed dataset to disk and returns it.
    fn reseed_locked(&self, reason: &str) -> HrResult<Dataset> {
        warn!(path = %self.path.display(), reason, "resetting store to seed dataset");
        let seed = Dataset::seed();
        self.save_locked(&seed)?;
        Ok(seed)
    }

    /// Rewrites the whole document. Caller must hold the lock.
    fn save_locked(&self, data: &Dataset) -> HrResult<()> {
        let text = serde_json::to_string_pretty(data)?;
        fs::write(&self.path, text).map_err(|err| {
            HrError::internal(format!("failed to write {}: {err}", self.path.display()))
        })
    }
}
