//! JSON file implementation of the entry store.

use std::collections::{BTreeMap, HashMap};
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use tracing::info;

use crate::domain::entities::Entry;
use crate::domain::errors::StorageError;
use crate::domain::repositories::EntryStore;

/// Stores the forward map as a single JSON object keyed by code.
///
/// ```json
/// {
///   "g": { "url": "https://github.com/meain", "code": "g", "mode": "sub",
///          "redirectCount": 3, "shortenCount": 1 }
/// }
/// ```
///
/// Saves write a sibling `.tmp` file and rename it over the target, so a
/// crash mid-write leaves the previous contents intact. Keys are written in
/// sorted order.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    /// Creates a store backed by `path`. The file is not touched until the
    /// first load or save.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn tmp_path(&self) -> PathBuf {
        let mut name = self
            .path
            .file_name()
            .map(|n| n.to_os_string())
            .unwrap_or_default();
        name.push(".tmp");
        self.path.with_file_name(name)
    }
}

#[async_trait]
impl EntryStore for JsonFileStore {
    async fn load(&self) -> Result<HashMap<String, Entry>, StorageError> {
        let data = match tokio::fs::read(&self.path).await {
            Ok(data) => data,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                info!(path = %self.path.display(), "Data file not found, starting empty");
                return Ok(HashMap::new());
            }
            Err(e) => return Err(e.into()),
        };

        if data.iter().all(u8::is_ascii_whitespace) {
            info!(path = %self.path.display(), "Data file is empty");
            return Ok(HashMap::new());
        }

        Ok(serde_json::from_slice(&data)?)
    }

    async fn save(&self, entries: &HashMap<String, Entry>) -> Result<(), StorageError> {
        let ordered: BTreeMap<&String, &Entry> = entries.iter().collect();
        let json = serde_json::to_vec_pretty(&ordered)?;

        let tmp = self.tmp_path();
        tokio::fs::write(&tmp, json).await?;
        tokio::fs::rename(&tmp, &self.path).await?;

        Ok(())
    }

    fn describe(&self) -> String {
        format!("json file {}", self.path.display())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::Mode;

    fn sample() -> HashMap<String, Entry> {
        let mut sub = Entry::new("https://github.com/meain", "g", Mode::Sub);
        sub.redirect_count = 3;
        [
            Entry::new("https://domain.tld", "domain", Mode::Exact),
            sub,
        ]
        .into_iter()
        .map(|e| (e.code.clone(), e))
        .collect()
    }

    #[tokio::test]
    async fn test_missing_file_loads_empty() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonFileStore::new(dir.path().join("data.json"));

        assert!(store.load().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_empty_file_loads_empty() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("data.json");
        std::fs::write(&path, "  \n").unwrap();

        let store = JsonFileStore::new(path);

        assert!(store.load().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_save_then_load() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonFileStore::new(dir.path().join("data.json"));

        store.save(&sample()).await.unwrap();
        let loaded = store.load().await.unwrap();

        assert_eq!(loaded, sample());
        assert!(!store.tmp_path().exists());
    }

    #[tokio::test]
    async fn test_save_writes_sorted_keys() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonFileStore::new(dir.path().join("data.json"));

        store.save(&sample()).await.unwrap();
        let text = std::fs::read_to_string(store.path()).unwrap();

        let domain = text.find("\"domain\":").unwrap();
        let g = text.find("\"g\":").unwrap();
        assert!(domain < g);
        assert!(text.contains("\"redirectCount\": 3"));
    }

    #[tokio::test]
    async fn test_loads_legacy_format() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("data.json");
        std::fs::write(
            &path,
            r#"{"domain":{"Url":"https://domain.tld","Code":"domain","Mode":"exact","Count":2,"Scount":1}}"#,
        )
        .unwrap();

        let loaded = JsonFileStore::new(path).load().await.unwrap();

        let entry = &loaded["domain"];
        assert_eq!(entry.url, "https://domain.tld");
        assert_eq!(entry.redirect_count, 2);
        assert_eq!(entry.shorten_count, 1);
    }

    #[tokio::test]
    async fn test_corrupt_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("data.json");
        std::fs::write(&path, "{not json").unwrap();

        let result = JsonFileStore::new(path).load().await;

        assert!(matches!(result, Err(StorageError::Serialization(_))));
    }

    #[tokio::test]
    async fn test_save_into_missing_directory_fails() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonFileStore::new(dir.path().join("missing").join("data.json"));

        let result = store.save(&sample()).await;

        assert!(matches!(result, Err(StorageError::Io(_))));
    }
}
