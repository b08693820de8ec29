//! Paginated collections and query string encoding

use serde::{Deserialize, Serialize};

use super::models::null_as_default;

/// One page of results plus the total number of items across all pages.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(bound(deserialize = "T: Deserialize<'de>"))]
pub struct Page<T> {
    /// Items on this page, in API order
    #[serde(default = "Vec::new", deserialize_with = "null_as_default")]
    pub data: Vec<T>,

    /// Total number of items
    #[serde(default)]
    pub total: i64,
}

impl<T> Default for Page<T> {
    fn default() -> Self {
        Self {
            data: Vec::new(),
            total: 0,
        }
    }
}

impl<T> Page<T> {
    pub fn new(data: Vec<T>, total: i64) -> Self {
        Self { data, total }
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }
}

/// Form-urlencode `params`, sorted by key.
pub(crate) fn encode_query(mut params: Vec<(&'static str, String)>) -> String {
    params.sort_by(|a, b| a.0.cmp(b.0));
    url::form_urlencoded::Serializer::new(String::new())
        .extend_pairs(params)
        .finish()
}
