//
// Copyright (c) 2024, 2025 Oracle and/or its affiliates. All rights reserved.
//
// Licensed under the Universal Permissive License v 1.0 as shown at
//  https://oss.oracle.com/licenses/upl/
//
//! Result and argument types used by [`Collection`](crate::Collection) operations.
use crate::serializer::JsonSerializer;
use chrono::{DateTime, TimeZone, Utc};
use serde_derive::{Deserialize, Serialize};
use serde_json::Value;

/// Metadata describing the result of a successful write.
///
/// `location` is the service path of the written revision, in the form
/// `/v0/{collection}/{key}/refs/{reference}`; it always contains both the
/// key and the version reference.
#[derive(Default, Debug, Clone, PartialEq, Eq)]
pub struct KvMetadata {
    pub collection_name: String,
    pub key: String,
    pub version_reference: String,
    pub location: String,
}

/// A single item read from a collection.
#[derive(Default, Debug, Clone, PartialEq)]
pub struct KvObject<T> {
    pub collection_name: String,
    pub key: String,
    pub version_reference: String,
    pub location: String,
    pub value: T,
}

/// Path information attached to each item of a list, search or history result.
#[derive(Default, Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrchestratePath {
    #[serde(default)]
    pub collection: String,
    #[serde(default)]
    pub kind: String,
    #[serde(default)]
    pub key: String,
    #[serde(rename = "ref", default)]
    pub version_reference: String,
    #[serde(rename = "reftime", default)]
    pub reference_time: Option<i64>,
    #[serde(default)]
    pub tombstone: bool,
}

impl OrchestratePath {
    /// The time the referenced revision was written.
    pub fn reftime(&self) -> Option<DateTime<Utc>> {
        self.reference_time
            .and_then(|ms| Utc.timestamp_millis_opt(ms).single())
    }
}

/// One item of a [`ListResults`].
///
/// `value` is `None` for history entries requested without values and for
/// tombstones.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ListItem<T> {
    pub path: OrchestratePath,
    pub value: Option<T>,
    pub reftime: Option<i64>,
}

/// Items returned by list, relation and history operations.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ListResults<T> {
    #[serde(default)]
    pub count: u64,
    #[serde(default = "Vec::new")]
    pub results: Vec<ListItem<T>>,
    /// Service path of the next page, if any.
    pub next: Option<String>,
    /// Service path of the previous page, if any.
    pub prev: Option<String>,
}

/// One item of a [`SearchResults`].
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct SearchItem<T> {
    pub path: OrchestratePath,
    pub value: T,
    #[serde(default)]
    pub score: f64,
    pub distance: Option<f64>,
    pub reftime: Option<i64>,
}

/// Items returned by search operations.
///
/// `count` is the number of results in this page; `total_count` is the number
/// of matches across all pages.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct SearchResults<T> {
    #[serde(default)]
    pub count: u64,
    #[serde(default)]
    pub total_count: u64,
    #[serde(default = "Vec::new")]
    pub results: Vec<SearchItem<T>>,
    pub next: Option<String>,
    pub prev: Option<String>,
}

// Results are first decoded with raw json values, then each value is run
// through the client's serializer.
impl ListResults<Value> {
    pub(crate) fn convert<T: serde::de::DeserializeOwned>(
        self,
        ser: &JsonSerializer,
    ) -> Result<ListResults<T>, serde_json::Error> {
        let mut results = Vec::with_capacity(self.results.len());
        for item in self.results {
            let value = match item.value {
                Some(v) => Some(ser.from_value(v)?),
                None => None,
            };
            results.push(ListItem {
                path: item.path,
                value,
                reftime: item.reftime,
            });
        }
        Ok(ListResults {
            count: self.count,
            results,
            next: self.next,
            prev: self.prev,
        })
    }
}

impl SearchResults<Value> {
    pub(crate) fn convert<T: serde::de::DeserializeOwned>(
        self,
        ser: &JsonSerializer,
    ) -> Result<SearchResults<T>, serde_json::Error> {
        let mut results = Vec::with_capacity(self.results.len());
        for item in self.results {
            results.push(SearchItem {
                path: item.path,
                value: ser.from_value(item.value)?,
                score: item.score,
                distance: item.distance,
                reftime: item.reftime,
            });
        }
        Ok(SearchResults {
            count: self.count,
            total_count: self.total_count,
            results,
            next: self.next,
            prev: self.prev,
        })
    }
}

/// A (collection, key) pair naming one end of a graph relation.
#[derive(Default, Debug, Clone, PartialEq, Eq)]
pub struct GraphNode {
    pub collection_name: String,
    pub key: String,
}

impl GraphNode {
    pub fn new(collection_name: &str, key: &str) -> GraphNode {
        GraphNode {
            collection_name: collection_name.to_string(),
            key: key.to_string(),
        }
    }
}

/// A single JSON Patch style operation, applied by the service.
///
/// Paths are JSON pointers into the stored item, such as `/description`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PatchOperation {
    pub op: String,
    pub path: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub from: Option<String>,
}

impl PatchOperation {
    /// Create an operation with an arbitrary `op` name and optional value.
    pub fn new(op: &str, path: &str, value: Option<Value>) -> PatchOperation {
        PatchOperation {
            op: op.to_string(),
            path: path.to_string(),
            value,
            from: None,
        }
    }
    pub fn add(path: &str, value: impl Into<Value>) -> PatchOperation {
        Self::new("add", path, Some(value.into()))
    }
    pub fn remove(path: &str) -> PatchOperation {
        Self::new("remove", path, None)
    }
    pub fn replace(path: &str, value: impl Into<Value>) -> PatchOperation {
        Self::new("replace", path, Some(value.into()))
    }
    pub fn test(path: &str, value: impl Into<Value>) -> PatchOperation {
        Self::new("test", path, Some(value.into()))
    }
    /// Increment a numeric field. A `None` amount increments by one.
    pub fn inc(path: &str, amount: Option<i64>) -> PatchOperation {
        Self::new("inc", path, amount.map(Value::from))
    }
    /// Initialize a field only if it does not already exist.
    pub fn init(path: &str, value: impl Into<Value>) -> PatchOperation {
        Self::new("init", path, Some(value.into()))
    }
    /// Shallow-merge an object into the object at `path`.
    pub fn merge(path: &str, value: impl Into<Value>) -> PatchOperation {
        Self::new("merge", path, Some(value.into()))
    }
    pub fn move_from(from: &str, path: &str) -> PatchOperation {
        PatchOperation {
            from: Some(from.to_string()),
            ..Self::new("move", path, None)
        }
    }
    pub fn copy_from(from: &str, path: &str) -> PatchOperation {
        PatchOperation {
            from: Some(from.to_string()),
            ..Self::new("copy", path, None)
        }
    }
}
