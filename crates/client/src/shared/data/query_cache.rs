//! In-memory cache of GET responses keyed by path and query string.
//!
//! Lists are fetched once and filtered locally, so the cache is what keeps
//! repeated views (and per-keystroke server searches with the same text)
//! from refetching. Mutations invalidate by key prefix; the bulk import is
//! the one place that edits cached lists directly.

use serde::Serialize;
use serde_json::Value;
use std::collections::HashMap;
use std::sync::RwLock;

use contracts::domain::a003_lot::Lot;
use contracts::domain::common::AggregateRoot;

const LIST_KEYS: [&str; 3] = ["data", "items", "lots"];

/// Query parameters that make the server return a subset of the collection
const NARROWING_PARAMS: [&str; 1] = ["search"];

#[derive(Debug, Default)]
pub struct QueryCache {
    entries: RwLock<HashMap<String, Value>>,
}

impl QueryCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Cache key for a request
    pub fn key(path: &str, query: Option<&str>) -> String {
        match query {
            Some(q) if !q.is_empty() => format!("{}?{}", path, q),
            _ => path.to_string(),
        }
    }

    pub fn get(&self, key: &str) -> Option<Value> {
        let entries = self.entries.read().unwrap_or_else(|e| e.into_inner());
        entries.get(key).cloned()
    }

    pub fn insert(&self, key: String, value: Value) {
        let mut entries = self.entries.write().unwrap_or_else(|e| e.into_inner());
        entries.insert(key, value);
    }

    pub fn remove(&self, key: &str) -> Option<Value> {
        let mut entries = self.entries.write().unwrap_or_else(|e| e.into_inner());
        entries.remove(key)
    }

    pub fn contains(&self, key: &str) -> bool {
        let entries = self.entries.read().unwrap_or_else(|e| e.into_inner());
        entries.contains_key(key)
    }

    pub fn len(&self) -> usize {
        let entries = self.entries.read().unwrap_or_else(|e| e.into_inner());
        entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Drop every entry whose key starts with `prefix`; returns how many were dropped
    pub fn invalidate_prefix(&self, prefix: &str) -> usize {
        let mut entries = self.entries.write().unwrap_or_else(|e| e.into_inner());
        let before = entries.len();
        entries.retain(|key, _| !key.starts_with(prefix));
        let removed = before - entries.len();
        if removed > 0 {
            tracing::debug!("Invalidated {} cached queries under {}", removed, prefix);
        }
        removed
    }

    pub fn clear(&self) {
        let mut entries = self.entries.write().unwrap_or_else(|e| e.into_inner());
        entries.clear();
    }

    /// Append `items` to every cached full list of `collection`, skipping ids
    /// already present. Lists the server narrowed (e.g. by `search`) cannot be
    /// extended locally and are dropped instead. Returns the number of list
    /// entries touched.
    pub fn merge_into_lists<T: Serialize>(&self, collection: &str, items: &[T]) -> usize {
        let values: Vec<Value> = items
            .iter()
            .filter_map(|item| serde_json::to_value(item).ok())
            .collect();
        if values.is_empty() {
            return 0;
        }

        let mut entries = self.entries.write().unwrap_or_else(|e| e.into_inner());
        let mut touched = 0;
        entries.retain(|key, value| {
            let query = match key.strip_prefix(collection) {
                Some("") => "",
                Some(rest) if rest.starts_with('?') => &rest[1..],
                _ => return true,
            };
            if is_narrowed(query) {
                tracing::debug!("Dropping narrowed list {}", key);
                touched += 1;
                return false;
            }
            if append_to_list(value, &values) {
                touched += 1;
            }
            true
        });
        touched
    }

    /// Merge lots created by a bulk import into cached lot lists
    pub fn merge_created_lots(&self, lots: &[Lot]) -> usize {
        let touched = self.merge_into_lists(&Lot::api_path(), lots);
        tracing::debug!("Merged {} created lots into {} cached lists", lots.len(), touched);
        touched
    }
}

fn append_to_list(value: &mut Value, items: &[Value]) -> bool {
    match value {
        Value::Array(list) => {
            push_new(list, items);
            true
        }
        Value::Object(map) => {
            let Some(list_key) = LIST_KEYS
                .iter()
                .find(|k| map.get(**k).map(Value::is_array).unwrap_or(false))
            else {
                return false;
            };
            let appended = match map.get_mut(*list_key) {
                Some(Value::Array(list)) => push_new(list, items),
                _ => 0,
            };
            if let Some(total) = map.get("total").and_then(Value::as_u64) {
                map.insert("total".into(), Value::from(total + appended));
            }
            true
        }
        _ => false,
    }
}

fn is_narrowed(query: &str) -> bool {
    query.split('&').any(|pair| {
        let (name, value) = pair.split_once('=').unwrap_or((pair, ""));
        NARROWING_PARAMS.contains(&name) && !value.is_empty()
    })
}

fn push_new(list: &mut Vec<Value>, items: &[Value]) -> u64 {
    let mut appended = 0;
    for item in items {
        let id = item.get("id");
        let exists = id.is_some() && list.iter().any(|existing| existing.get("id") == id);
        if !exists {
            list.push(item.clone());
            appended += 1;
        }
    }
    appended
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_key() {
        assert_eq!(QueryCache::key("/api/lots", None), "/api/lots");
        assert_eq!(
            QueryCache::key("/api/lots", Some("limit=10000")),
            "/api/lots?limit=10000"
        );
    }

    #[test]
    fn test_invalidate_prefix() {
        let cache = QueryCache::new();
        cache.insert("/api/lots?limit=10000".into(), json!([]));
        cache.insert("/api/lots/1".into(), json!({}));
        cache.insert("/api/parks".into(), json!([]));
        assert_eq!(cache.invalidate_prefix("/api/lots"), 2);
        assert_eq!(cache.len(), 1);
        assert!(cache.contains("/api/parks"));
    }

    #[test]
    fn test_merge_into_plain_and_wrapped_lists() {
        let cache = QueryCache::new();
        cache.insert("/api/lots?limit=10000".into(), json!([{"id": "a"}]));
        cache.insert("/api/lots?page=1".into(), json!({"lots": [], "total": 0}));
        cache.insert("/api/lots/a".into(), json!({"id": "a"}));
        cache.insert("/api/lots/a/photos".into(), json!([]));

        let touched = cache.merge_into_lists("/api/lots", &[json!({"id": "a"}), json!({"id": "b"})]);
        assert_eq!(touched, 2);

        let plain = cache.get("/api/lots?limit=10000").unwrap();
        assert_eq!(plain.as_array().unwrap().len(), 2);
        let wrapped = cache.get("/api/lots?page=1").unwrap();
        assert_eq!(wrapped["lots"].as_array().unwrap().len(), 2);
        assert_eq!(wrapped["total"], json!(2));
        assert_eq!(cache.get("/api/lots/a").unwrap(), json!({"id": "a"}));
        assert_eq!(cache.get("/api/lots/a/photos").unwrap(), json!([]));
    }

    #[test]
    fn test_merge_drops_searched_lists() {
        let cache = QueryCache::new();
        cache.insert("/api/lots?limit=10000&search=oak".into(), json!([{"id": "a"}]));
        cache.insert("/api/lots?limit=10000&search=".into(), json!([]));

        cache.merge_into_lists("/api/lots", &[json!({"id": "b"})]);

        assert!(!cache.contains("/api/lots?limit=10000&search=oak"));
        assert_eq!(
            cache.get("/api/lots?limit=10000&search=").unwrap(),
            json!([{"id": "b"}])
        );
    }
}
