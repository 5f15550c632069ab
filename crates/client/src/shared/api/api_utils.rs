//! Helpers for building API URLs and query strings

use serde::{Deserialize, Serialize};

/// Join a base URL like `http://host:3000/` with a path like `/api/lots`
pub fn api_url(base_url: &str, path: &str) -> String {
    format!(
        "{}/{}",
        base_url.trim_end_matches('/'),
        path.trim_start_matches('/')
    )
}

/// `/api/lots` + `id` -> `/api/lots/<id>`
pub fn item_path(collection: &str, id: &str) -> String {
    format!(
        "{}/{}",
        collection.trim_end_matches('/'),
        urlencoding::encode(id)
    )
}

/// Encode query parameters; `None` when there is nothing to send
pub fn encode_query<Q: Serialize>(params: &Q) -> Option<String> {
    match serde_qs::to_string(params) {
        Ok(qs) if !qs.is_empty() => Some(qs),
        Ok(_) => None,
        Err(e) => {
            tracing::warn!("Failed to encode query parameters: {}", e);
            None
        }
    }
}

/// List endpoints answer either with a bare array or with a wrapper object
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum ListEnvelope<T> {
    Plain(Vec<T>),
    Wrapped {
        #[serde(
            alias = "items",
            alias = "lots",
            alias = "parks",
            alias = "companies",
            alias = "tenants",
            alias = "showings",
            alias = "photos",
            alias = "specialStatuses"
        )]
        data: Vec<T>,
        #[serde(default)]
        total: Option<usize>,
    },
}

impl<T> ListEnvelope<T> {
    pub fn into_vec(self) -> Vec<T> {
        match self {
            ListEnvelope::Plain(items) => items,
            ListEnvelope::Wrapped { data, .. } => data,
        }
    }

    pub fn total(&self) -> usize {
        match self {
            ListEnvelope::Plain(items) => items.len(),
            ListEnvelope::Wrapped { data, total } => total.unwrap_or(data.len()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Serialize)]
    #[serde(rename_all = "camelCase")]
    struct Params {
        limit: usize,
        #[serde(skip_serializing_if = "Option::is_none")]
        search: Option<String>,
    }

    #[test]
    fn test_api_url() {
        assert_eq!(
            api_url("http://127.0.0.1:3000/", "/api/lots"),
            "http://127.0.0.1:3000/api/lots"
        );
        assert_eq!(item_path("/api/lots", "a b"), "/api/lots/a%20b");
    }

    #[test]
    fn test_encode_query() {
        let q = encode_query(&Params {
            limit: 10000,
            search: Some("oakwood".into()),
        });
        assert_eq!(q.as_deref(), Some("limit=10000&search=oakwood"));

        #[derive(Serialize)]
        struct NoFilters {
            #[serde(skip_serializing_if = "Option::is_none")]
            search: Option<String>,
        }
        assert_eq!(encode_query(&NoFilters { search: None }), None);
    }

    #[test]
    fn test_list_envelope_shapes() {
        let plain: ListEnvelope<u32> = serde_json::from_str("[1,2,3]").unwrap();
        assert_eq!(plain.total(), 3);
        let wrapped: ListEnvelope<u32> =
            serde_json::from_str(r#"{"lots": [1, 2], "total": 40}"#).unwrap();
        assert_eq!(wrapped.total(), 40);
        assert_eq!(wrapped.into_vec(), vec![1, 2]);
    }
}
