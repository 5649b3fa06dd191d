//! File storage for saved filters, with XDG path support.
//!
//! The filter data is stored as JSON at `~/.local/share/tasklens/filters.json`
//! on Unix. Both synchronous (`std::fs`) and asynchronous (`tokio::fs`)
//! methods are provided; writes go through a temp file plus rename so a
//! crash mid-write cannot corrupt the data on disk.

use std::fs;
use std::io;
use std::path::PathBuf;

use directories::ProjectDirs;
use thiserror::Error;

use crate::FilterData;

/// Filter data filename.
const FILTER_FILENAME: &str = "filters.json";

/// Application name (for XDG paths).
const APPLICATION: &str = "tasklens";

/// Errors that can occur during filter storage operations.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Failed to determine the XDG data directory.
    #[error("failed to determine data directory: no valid home directory found")]
    NoDataDir,

    /// I/O error during file read.
    #[error("failed to read filter file '{path}': {source}")]
    Read {
        /// The path that failed to read.
        path: PathBuf,
        /// The underlying I/O error.
        #[source]
        source: io::Error,
    },

    /// I/O error during file write.
    #[error("failed to write filter file '{path}': {source}")]
    Write {
        /// The path that failed to write.
        path: PathBuf,
        /// The underlying I/O error.
        #[source]
        source: io::Error,
    },

    /// I/O error during directory creation.
    #[error("failed to create data directory '{path}': {source}")]
    CreateDir {
        /// The directory path that failed to create.
        path: PathBuf,
        /// The underlying I/O error.
        #[source]
        source: io::Error,
    },

    /// I/O error during file delete.
    #[error("failed to delete filter file '{path}': {source}")]
    Delete {
        /// The path that failed to delete.
        path: PathBuf,
        /// The underlying I/O error.
        #[source]
        source: io::Error,
    },

    /// JSON serialization/deserialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type for filter store operations.
pub type StoreResult<T> = Result<T, StoreError>;

/// Persistent storage for saved filters and query history.
///
/// File operations are not atomic across processes; in typical use the
/// store is owned by a single [`FilterManager`](crate::FilterManager) on
/// one thread.
///
/// # Example
///
/// ```no_run
/// use tasklens_store::{FilterData, FilterDataStore};
///
/// let store = FilterDataStore::new()?;
/// let data = store.load_or_default()?;
/// store.save(&data)?;
/// # Ok::<(), tasklens_store::StoreError>(())
/// ```
#[derive(Debug, Clone)]
pub struct FilterDataStore {
    path: PathBuf,
}

impl FilterDataStore {
    /// Creates a store at the default XDG data path.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::NoDataDir`] if the home directory cannot be
    /// determined.
    pub fn new() -> StoreResult<Self> {
        let path = Self::default_path()?;
        Ok(Self { path })
    }

    /// Creates a store with a custom path. Primarily useful for testing.
    pub fn with_path(path: PathBuf) -> Self {
        Self { path }
    }

    /// Returns the default XDG data path for the filter file.
    ///
    /// On Unix: `~/.local/share/tasklens/filters.json`.
    pub fn default_path() -> StoreResult<PathBuf> {
        let project_dirs =
            ProjectDirs::from("", "", APPLICATION).ok_or(StoreError::NoDataDir)?;
        Ok(project_dirs.data_dir().join(FILTER_FILENAME))
    }

    /// Returns the path to the filter file.
    pub fn path(&self) -> &PathBuf {
        &self.path
    }

    /// Returns true if the filter file exists on disk.
    pub fn exists(&self) -> bool {
        self.path.exists()
    }

    /// Loads the filter data from disk.
    ///
    /// A missing file is a [`StoreError::Read`] with `ErrorKind::NotFound`;
    /// use [`load_or_default`](Self::load_or_default) to treat that as
    /// empty data instead.
    pub fn load(&self) -> StoreResult<FilterData> {
        let contents = fs::read_to_string(&self.path).map_err(|e| StoreError::Read {
            path: self.path.clone(),
            source: e,
        })?;
        Ok(serde_json::from_str(&contents)?)
    }

    /// Loads the filter data, returning empty data if the file is missing.
    pub fn load_or_default(&self) -> StoreResult<FilterData> {
        match self.load() {
            Ok(data) => Ok(data),
            Err(StoreError::Read { ref source, .. })
                if source.kind() == io::ErrorKind::NotFound =>
            {
                Ok(FilterData::default())
            }
            Err(e) => Err(e),
        }
    }

    /// Saves the filter data to disk atomically.
    ///
    /// Creates the parent directory if needed, writes to a temp file, then
    /// renames over the target.
    pub fn save(&self, data: &FilterData) -> StoreResult<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).map_err(|e| StoreError::CreateDir {
                path: parent.to_path_buf(),
                source: e,
            })?;
        }

        let json = serde_json::to_string_pretty(data)?;

        let temp_path = self.path.with_extension("tmp");
        fs::write(&temp_path, &json).map_err(|e| StoreError::Write {
            path: temp_path.clone(),
            source: e,
        })?;
        fs::rename(&temp_path, &self.path).map_err(|e| StoreError::Write {
            path: self.path.clone(),
            source: e,
        })?;

        Ok(())
    }

    /// Deletes the filter file. Missing files are not an error.
    pub fn delete(&self) -> StoreResult<()> {
        match fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(StoreError::Delete {
                path: self.path.clone(),
                source: e,
            }),
        }
    }

    /// Async equivalent of [`load`](Self::load).
    pub async fn load_async(&self) -> StoreResult<FilterData> {
        let contents =
            tokio::fs::read_to_string(&self.path)
                .await
                .map_err(|e| StoreError::Read {
                    path: self.path.clone(),
                    source: e,
                })?;
        Ok(serde_json::from_str(&contents)?)
    }

    /// Async equivalent of [`load_or_default`](Self::load_or_default).
    pub async fn load_or_default_async(&self) -> StoreResult<FilterData> {
        match self.load_async().await {
            Ok(data) => Ok(data),
            Err(StoreError::Read { ref source, .. })
                if source.kind() == io::ErrorKind::NotFound =>
            {
                Ok(FilterData::default())
            }
            Err(e) => Err(e),
        }
    }

    /// Async equivalent of [`save`](Self::save), same atomic-write scheme.
    pub async fn save_async(&self, data: &FilterData) -> StoreResult<()> {
        if let Some(parent) = self.path.parent() {
            tokio::fs::create_dir_all(parent)
                .await
                .map_err(|e| StoreError::CreateDir {
                    path: parent.to_path_buf(),
                    source: e,
                })?;
        }

        let json = serde_json::to_string_pretty(data)?;

        let temp_path = self.path.with_extension("tmp");
        tokio::fs::write(&temp_path, &json)
            .await
            .map_err(|e| StoreError::Write {
                path: temp_path.clone(),
                source: e,
            })?;
        tokio::fs::rename(&temp_path, &self.path)
            .await
            .map_err(|e| StoreError::Write {
                path: self.path.clone(),
                source: e,
            })?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_default_path_is_absolute_and_named() {
        let path = FilterDataStore::default_path().expect("should get default path");
        assert!(path.is_absolute());
        let path_str = path.to_string_lossy();
        assert!(path_str.contains("tasklens"), "path: {}", path_str);
        assert!(path_str.ends_with("filters.json"), "path: {}", path_str);
    }

    #[test]
    fn test_with_path_keeps_custom_path() {
        let custom = PathBuf::from("/tmp/test/filters.json");
        let store = FilterDataStore::with_path(custom.clone());
        assert_eq!(store.path(), &custom);
    }

    #[test]
    fn test_save_and_load_round_trip() {
        let temp = tempdir().expect("failed to create temp dir");
        let store = FilterDataStore::with_path(temp.path().join("filters.json"));

        let mut data = FilterData::new();
        data.recent_queries.push("status:active".to_string());

        store.save(&data).expect("save failed");
        let loaded = store.load().expect("load failed");
        assert_eq!(loaded, data);
    }

    #[test]
    fn test_save_creates_parent_directory() {
        let temp = tempdir().expect("failed to create temp dir");
        let path = temp.path().join("nested").join("dir").join("filters.json");
        let store = FilterDataStore::with_path(path.clone());

        store.save(&FilterData::new()).expect("save failed");
        assert!(path.exists());
    }

    #[test]
    fn test_atomic_write_leaves_no_temp_file() {
        let temp = tempdir().expect("failed to create temp dir");
        let path = temp.path().join("filters.json");
        let store = FilterDataStore::with_path(path.clone());

        store.save(&FilterData::new()).expect("save failed");
        assert!(path.exists());
        assert!(!path.with_extension("tmp").exists());
    }

    #[test]
    fn test_load_missing_file_is_not_found() {
        let store = FilterDataStore::with_path(PathBuf::from("/nonexistent/filters.json"));
        match store.load() {
            Err(StoreError::Read { source, .. }) => {
                assert_eq!(source.kind(), io::ErrorKind::NotFound);
            }
            other => panic!("expected Read error, got {other:?}"),
        }
    }

    #[test]
    fn test_load_or_default_missing_file() {
        let store = FilterDataStore::with_path(PathBuf::from("/nonexistent/filters.json"));
        let data = store.load_or_default().expect("should default");
        assert!(data.is_empty());
    }

    #[test]
    fn test_load_corrupt_json_is_error() {
        let temp = tempdir().expect("failed to create temp dir");
        let path = temp.path().join("filters.json");
        fs::write(&path, "not json").expect("write failed");

        let store = FilterDataStore::with_path(path);
        assert!(matches!(store.load(), Err(StoreError::Json(_))));
        // Corruption is not silently treated as empty data
        assert!(store.load_or_default().is_err());
    }

    #[test]
    fn test_delete_missing_file_is_ok() {
        let store = FilterDataStore::with_path(PathBuf::from("/nonexistent/filters.json"));
        assert!(store.delete().is_ok());
    }

    #[test]
    fn test_read_error_message_includes_path() {
        let error = StoreError::Read {
            path: PathBuf::from("/home/user/.local/share/tasklens/filters.json"),
            source: io::Error::new(io::ErrorKind::PermissionDenied, "permission denied"),
        };
        assert_eq!(
            error.to_string(),
            "failed to read filter file '/home/user/.local/share/tasklens/filters.json': permission denied"
        );
    }

    #[tokio::test]
    async fn test_save_and_load_async() {
        let temp = tempdir().expect("failed to create temp dir");
        let store = FilterDataStore::with_path(temp.path().join("filters.json"));

        let mut data = FilterData::new();
        data.recent_queries.push("due:overdue".to_string());

        store.save_async(&data).await.expect("save_async failed");
        let loaded = store.load_async().await.expect("load_async failed");
        assert_eq!(loaded, data);
    }

    #[tokio::test]
    async fn test_load_or_default_async_missing_file() {
        let store = FilterDataStore::with_path(PathBuf::from("/nonexistent/filters.json"));
        let data = store
            .load_or_default_async()
            .await
            .expect("should default");
        assert!(data.is_empty());
    }
}
