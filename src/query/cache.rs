//! Memoizing loader for on-disk SQL resources.

use std::collections::hash_map::Entry;
use std::collections::HashMap;
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::scanner::{strip_sql_comments_from_file, StripError};

/// Errors from loading a SQL resource through the cache.
#[derive(Debug, Error)]
pub enum QueryCacheError {
    #[error("SQL resource {module}/{name} not found at {path}")]
    NotFound {
        module: String,
        name: String,
        path: PathBuf,
    },
    #[error("failed to load SQL resource {module}/{name}")]
    Load {
        module: String,
        name: String,
        #[source]
        source: StripError,
    },
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
struct QueryKey {
    module: String,
    name: String,
}

/// Cache of comment-stripped SQL resources.
///
/// Resources live under a root directory as `<root>/<module>/<name>` and
/// are stripped once on first access. Instances are independent and hold no
/// shared state; wrap one in a lock if it must be shared across threads.
#[derive(Debug)]
pub struct QueryCache {
    root: PathBuf,
    queries: HashMap<QueryKey, String>,
}

impl QueryCache {
    /// Create an empty cache rooted at `root`.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            queries: HashMap::new(),
        }
    }

    /// Root directory the cache resolves resources against.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Load the resource `name` under `module`, stripped of comments.
    ///
    /// The first access reads and strips the file; later accesses return
    /// the cached text.
    pub fn get(&mut self, module: &str, name: &str) -> Result<&str, QueryCacheError> {
        let key = QueryKey {
            module: module.to_string(),
            name: name.to_string(),
        };
        let path = resource_path(&self.root, module, name);
        match self.queries.entry(key) {
            Entry::Occupied(entry) => {
                log::trace!("query cache hit for {}/{}", module, name);
                Ok(entry.into_mut().as_str())
            }
            Entry::Vacant(entry) => {
                log::debug!(
                    "query cache miss for {}/{}, loading {}",
                    module,
                    name,
                    path.display()
                );
                let sql = load_resource(&path, module, name)?;
                Ok(entry.insert(sql).as_str())
            }
        }
    }

    /// Load the resource bypassing the cache.
    pub fn get_uncached(&self, module: &str, name: &str) -> Result<String, QueryCacheError> {
        let path = resource_path(&self.root, module, name);
        load_resource(&path, module, name)
    }

    /// Drop a cached entry. Returns true if one was present.
    pub fn invalidate(&mut self, module: &str, name: &str) -> bool {
        let key = QueryKey {
            module: module.to_string(),
            name: name.to_string(),
        };
        self.queries.remove(&key).is_some()
    }

    /// Drop all cached entries.
    pub fn clear(&mut self) {
        self.queries.clear();
    }

    /// Number of cached entries.
    pub fn len(&self) -> usize {
        self.queries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.queries.is_empty()
    }
}

fn resource_path(root: &Path, module: &str, name: &str) -> PathBuf {
    root.join(module).join(name)
}

fn load_resource(path: &Path, module: &str, name: &str) -> Result<String, QueryCacheError> {
    if !path.is_file() {
        return Err(QueryCacheError::NotFound {
            module: module.to_string(),
            name: name.to_string(),
            path: path.to_path_buf(),
        });
    }
    strip_sql_comments_from_file(path).map_err(|source| QueryCacheError::Load {
        module: module.to_string(),
        name: name.to_string(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn write_resource(root: &Path, module: &str, name: &str, content: &str) {
        let dir = root.join(module);
        fs::create_dir_all(&dir).unwrap();
        fs::write(dir.join(name), content).unwrap();
    }

    #[test]
    fn test_get_strips_comments_on_load() {
        let tmp = TempDir::new().unwrap();
        write_resource(
            tmp.path(),
            "reports",
            "daily.sql",
            "-- daily report\nselect 1 from dual\n",
        );

        let mut cache = QueryCache::new(tmp.path());
        let sql = cache.get("reports", "daily.sql").unwrap();
        assert_eq!(sql, "select 1 from dual\n");
    }

    #[test]
    fn test_get_memoizes_first_load() {
        let tmp = TempDir::new().unwrap();
        write_resource(tmp.path(), "reports", "daily.sql", "select 1\n");

        let mut cache = QueryCache::new(tmp.path());
        assert_eq!(cache.get("reports", "daily.sql").unwrap(), "select 1\n");
        assert_eq!(cache.len(), 1);

        // Replace the file; cached text must survive.
        write_resource(tmp.path(), "reports", "daily.sql", "select 2\n");
        assert_eq!(cache.get("reports", "daily.sql").unwrap(), "select 1\n");
    }

    #[test]
    fn test_get_uncached_bypasses_cache() {
        let tmp = TempDir::new().unwrap();
        write_resource(tmp.path(), "reports", "daily.sql", "select 1\n");

        let mut cache = QueryCache::new(tmp.path());
        assert_eq!(cache.get("reports", "daily.sql").unwrap(), "select 1\n");

        write_resource(tmp.path(), "reports", "daily.sql", "select 2\n");
        assert_eq!(cache.get_uncached("reports", "daily.sql").unwrap(), "select 2\n");
        // Cached entry unchanged.
        assert_eq!(cache.get("reports", "daily.sql").unwrap(), "select 1\n");
    }

    #[test]
    fn test_invalidate_forces_reload() {
        let tmp = TempDir::new().unwrap();
        write_resource(tmp.path(), "reports", "daily.sql", "select 1\n");

        let mut cache = QueryCache::new(tmp.path());
        cache.get("reports", "daily.sql").unwrap();

        write_resource(tmp.path(), "reports", "daily.sql", "select 2\n");
        assert!(cache.invalidate("reports", "daily.sql"));
        assert!(!cache.invalidate("reports", "daily.sql"));
        assert_eq!(cache.get("reports", "daily.sql").unwrap(), "select 2\n");
    }

    #[test]
    fn test_missing_resource_is_not_found() {
        let tmp = TempDir::new().unwrap();
        let mut cache = QueryCache::new(tmp.path());

        let err = cache.get("reports", "missing.sql").unwrap_err();
        match err {
            QueryCacheError::NotFound { module, name, .. } => {
                assert_eq!(module, "reports");
                assert_eq!(name, "missing.sql");
            }
            other => panic!("expected NotFound, got {other:?}"),
        }
        assert!(cache.is_empty());
    }

    #[test]
    fn test_separate_modules_do_not_collide() {
        let tmp = TempDir::new().unwrap();
        write_resource(tmp.path(), "users", "find.sql", "select 'u'\n");
        write_resource(tmp.path(), "orders", "find.sql", "select 'o'\n");

        let mut cache = QueryCache::new(tmp.path());
        assert_eq!(cache.get("users", "find.sql").unwrap(), "select 'u'\n");
        assert_eq!(cache.get("orders", "find.sql").unwrap(), "select 'o'\n");
        assert_eq!(cache.len(), 2);
    }
}
