//! In-memory parameter store.
//!
//! Serves a fixed list of parameters with the same paging and path rules
//! as Parameter Store. Backs `--from-file` snapshots and the test suite.
//!
//! Snapshot format (JSON):
//!
//! ```json
//! [
//!   { "name": "/app/db/pass", "type": "SecureString", "value": "secret1" },
//!   { "name": "plainKey", "type": "String", "value": "secret1" }
//! ]
//! ```

use serde::Deserialize;
use std::cell::Cell;
use std::collections::HashSet;
use std::path::Path;
use tracing::debug;

use super::ParameterStore;
use crate::core::constants::{DESCRIBE_PAGE_SIZE, PATH_SEPARATOR};
use crate::core::types::{Page, ParameterMetadata, ParameterType, ParameterValue};
use crate::error::StoreError;

/// Snapshot entry as stored on disk.
#[derive(Debug, Deserialize)]
struct SnapshotEntry {
    name: String,
    #[serde(rename = "type")]
    kind: ParameterType,
    value: String,
}

#[derive(Debug, Clone)]
struct Stored {
    meta: ParameterMetadata,
    value: ParameterValue,
}

/// Parameter store held entirely in memory.
#[derive(Debug)]
pub struct MemoryStore {
    params: Vec<Stored>,
    page_size: usize,
    fail_describe_page: Option<usize>,
    unreadable: HashSet<String>,
    requests: Cell<usize>,
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

impl MemoryStore {
    pub fn new() -> Self {
        Self {
            params: Vec::new(),
            page_size: DESCRIBE_PAGE_SIZE as usize,
            fail_describe_page: None,
            unreadable: HashSet::new(),
            requests: Cell::new(0),
        }
    }

    /// Load a JSON snapshot file.
    pub fn from_snapshot(path: &Path) -> Result<Self, StoreError> {
        let snapshot_err = |reason: String| StoreError::Snapshot {
            path: path.display().to_string(),
            reason,
        };

        let contents = std::fs::read_to_string(path).map_err(|e| snapshot_err(e.to_string()))?;
        let entries: Vec<SnapshotEntry> =
            serde_json::from_str(&contents).map_err(|e| snapshot_err(e.to_string()))?;

        debug!(path = %path.display(), parameters = entries.len(), "loaded snapshot");

        Ok(entries.into_iter().fold(Self::new(), |store, e| {
            store.with_parameter(e.name, e.kind, e.value)
        }))
    }

    /// Add a parameter. Enumeration returns parameters in insertion order.
    pub fn with_parameter(
        mut self,
        name: impl Into<String>,
        kind: ParameterType,
        value: impl Into<String>,
    ) -> Self {
        let name = name.into();
        self.params.push(Stored {
            meta: ParameterMetadata::new(name.clone(), kind),
            value: ParameterValue::new(name, value),
        });
        self
    }

    /// Number of items per page for every paged operation.
    pub fn with_page_size(mut self, size: usize) -> Self {
        self.page_size = size.max(1);
        self
    }

    /// Make the describe request for page `page` (0-based) fail.
    pub fn fail_describe_on_page(mut self, page: usize) -> Self {
        self.fail_describe_page = Some(page);
        self
    }

    /// Make reads of `name` fail, directly or through a path listing.
    pub fn with_unreadable(mut self, name: impl Into<String>) -> Self {
        self.unreadable.insert(name.into());
        self
    }

    /// Total number of requests served so far.
    pub fn requests(&self) -> usize {
        self.requests.get()
    }

    fn record_request(&self) {
        self.requests.set(self.requests.get() + 1);
    }

    fn parse_token(token: Option<&str>) -> Result<usize, String> {
        match token {
            None => Ok(0),
            Some(t) => t
                .parse()
                .map_err(|_| format!("invalid next token: {}", t)),
        }
    }

    fn page_of<T: Clone>(&self, items: &[T], start: usize) -> Page<T> {
        let end = (start + self.page_size).min(items.len());
        let next = (end < items.len()).then(|| end.to_string());
        Page::new(items[start.min(end)..end].to_vec(), next)
    }
}

fn is_under(path: &str, name: &str) -> bool {
    let prefix = path.trim_end_matches(PATH_SEPARATOR);
    name.strip_prefix(prefix)
        .is_some_and(|rest| rest.starts_with(PATH_SEPARATOR) && rest.len() > 1)
}

impl ParameterStore for MemoryStore {
    fn describe_parameters(
        &self,
        types: &[ParameterType],
        next_token: Option<&str>,
    ) -> Result<Page<ParameterMetadata>, StoreError> {
        self.record_request();
        let start = Self::parse_token(next_token).map_err(StoreError::Describe)?;

        let matching: Vec<ParameterMetadata> = self
            .params
            .iter()
            .filter(|p| types.contains(&p.meta.kind))
            .map(|p| p.meta.clone())
            .collect();

        let page_index = start / self.page_size;
        if self.fail_describe_page == Some(page_index) {
            return Err(StoreError::Describe(format!(
                "simulated failure on page {}",
                page_index
            )));
        }

        Ok(self.page_of(&matching, start))
    }

    fn get_parameter(&self, name: &str) -> Result<ParameterValue, StoreError> {
        self.record_request();
        if self.unreadable.contains(name) {
            return Err(StoreError::Get {
                name: name.to_string(),
                reason: "AccessDeniedException".to_string(),
            });
        }

        self.params
            .iter()
            .find(|p| p.meta.name == name)
            .map(|p| p.value.clone())
            .ok_or_else(|| StoreError::Get {
                name: name.to_string(),
                reason: "ParameterNotFound".to_string(),
            })
    }

    fn get_parameters_by_path(
        &self,
        path: &str,
        next_token: Option<&str>,
    ) -> Result<Page<ParameterValue>, StoreError> {
        self.record_request();
        let start = Self::parse_token(next_token).map_err(|reason| StoreError::GetByPath {
            path: path.to_string(),
            reason,
        })?;

        let below: Vec<ParameterValue> = self
            .params
            .iter()
            .filter(|p| is_under(path, &p.meta.name))
            .map(|p| p.value.clone())
            .collect();

        let page = self.page_of(&below, start);
        if page.items.iter().any(|v| self.unreadable.contains(&v.name)) {
            return Err(StoreError::GetByPath {
                path: path.to_string(),
                reason: "AccessDeniedException".to_string(),
            });
        }

        Ok(page)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::pages::Pages;

    fn store() -> MemoryStore {
        MemoryStore::new()
            .with_parameter("/app/db/pass", ParameterType::SecureString, "secret1")
            .with_parameter("/app/db/user", ParameterType::String, "admin")
            .with_parameter("/application", ParameterType::String, "x")
            .with_parameter("plainKey", ParameterType::String, "secret1")
            .with_parameter("list", ParameterType::StringList, "a,b")
    }

    #[test]
    fn test_describe_filters_by_type() {
        let page = store()
            .describe_parameters(&[ParameterType::String], None)
            .unwrap();
        let names: Vec<_> = page.items.iter().map(|m| m.name.as_str()).collect();
        assert_eq!(names, vec!["/app/db/user", "/application", "plainKey"]);
        assert!(page.next_token.is_none());
    }

    #[test]
    fn test_describe_pages() {
        let store = store().with_page_size(2);
        let types = [ParameterType::String, ParameterType::SecureString];

        let first = store.describe_parameters(&types, None).unwrap();
        assert_eq!(first.items.len(), 2);
        assert_eq!(first.next_token.as_deref(), Some("2"));

        let second = store.describe_parameters(&types, Some("2")).unwrap();
        assert_eq!(second.items.len(), 2);
        assert!(second.next_token.is_none());
    }

    #[test]
    fn test_describe_invalid_token() {
        assert!(store()
            .describe_parameters(&[ParameterType::String], Some("nope"))
            .is_err());
    }

    #[test]
    fn test_describe_failure_on_page() {
        let store = store().with_page_size(1).fail_describe_on_page(1);
        let types = [ParameterType::String];
        assert!(store.describe_parameters(&types, None).is_ok());
        assert!(store.describe_parameters(&types, Some("1")).is_err());
    }

    #[test]
    fn test_path_is_segment_aware() {
        let store = store();
        let names: Vec<String> = Pages::new(|t: Option<&str>| store.get_parameters_by_path("/app", t))
            .map(|r| r.unwrap().name)
            .collect();
        assert_eq!(names, vec!["/app/db/pass", "/app/db/user"]);
    }

    #[test]
    fn test_path_listing_pages() {
        let store = store().with_page_size(1);
        let all: Vec<_> = Pages::new(|t: Option<&str>| store.get_parameters_by_path("/app", t))
            .collect::<Result<_, _>>()
            .unwrap();
        assert_eq!(all.len(), 2);
        assert_eq!(store.requests(), 2);
    }

    #[test]
    fn test_get_parameter() {
        let store = store();
        assert_eq!(store.get_parameter("plainKey").unwrap().value(), "secret1");
        assert!(matches!(
            store.get_parameter("missing"),
            Err(StoreError::Get { .. })
        ));
    }

    #[test]
    fn test_unreadable() {
        let store = store().with_unreadable("/app/db/user");
        assert!(store.get_parameter("/app/db/user").is_err());
        assert!(store.get_parameters_by_path("/app", None).is_err());
        assert!(store.get_parameter("plainKey").is_ok());
    }

    #[test]
    fn test_is_under() {
        assert!(is_under("/app", "/app/x"));
        assert!(is_under("/app/", "/app/x/y"));
        assert!(!is_under("/app", "/app"));
        assert!(!is_under("/app", "/application"));
        assert!(is_under("/", "/anything"));
    }

    #[test]
    fn test_from_snapshot() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("params.json");
        std::fs::write(
            &path,
            r#"[
                {"name": "/a/b", "type": "SecureString", "value": "v1"},
                {"name": "c", "type": "String", "value": "v2"}
            ]"#,
        )
        .unwrap();

        let store = MemoryStore::from_snapshot(&path).unwrap();
        assert_eq!(store.get_parameter("c").unwrap().value(), "v2");
        let page = store
            .describe_parameters(&[ParameterType::SecureString], None)
            .unwrap();
        assert_eq!(page.items, vec![ParameterMetadata::new("/a/b", ParameterType::SecureString)]);
    }

    #[test]
    fn test_from_snapshot_rejects_bad_json() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("params.json");
        std::fs::write(&path, "{not json").unwrap();
        assert!(matches!(
            MemoryStore::from_snapshot(&path),
            Err(StoreError::Snapshot { .. })
        ));
    }
}
