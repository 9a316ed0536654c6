//
// Copyright (c) 2024, 2025 Oracle and/or its affiliates. All rights reserved.
//
// Licensed under the Universal Permissive License v 1.0 as shown at
//  https://oss.oracle.com/licenses/upl/
//
//! Optional parameters for [`Collection`](crate::Collection) operations.
//!
//! Every struct here implements [`Default`] and has chained setters:
//! ```
//! use orchestrate_rust_sdk::SearchOptions;
//! let opts = SearchOptions::new().sort("value.name:asc").limit(20).offset(40);
//! ```

/// Largest page size accepted by list, search and history operations.
pub const MAX_LIMIT: u32 = 100;

/// Options for [`Collection::search_with_options()`](crate::Collection::search_with_options()).
///
/// Unset values are left to the service defaults.
#[derive(Default, Debug, Clone)]
pub struct SearchOptions {
    pub(crate) sort: Option<String>,
    pub(crate) limit: Option<u32>,
    pub(crate) offset: Option<u32>,
}

impl SearchOptions {
    pub fn new() -> SearchOptions {
        SearchOptions {
            ..Default::default()
        }
    }
    /// Sort specification, such as `value.sortField:desc`.
    pub fn sort(mut self, sort: &str) -> SearchOptions {
        self.sort = Some(sort.to_string());
        self
    }
    /// Number of results to return, between 1 and 100.
    pub fn limit(mut self, limit: u32) -> SearchOptions {
        self.limit = Some(limit);
        self
    }
    pub fn offset(mut self, offset: u32) -> SearchOptions {
        self.offset = Some(offset);
        self
    }
}

/// Options for [`Collection::get_links()`](crate::Collection::get_links()).
#[derive(Default, Debug, Clone)]
pub struct LinkOptions {
    pub(crate) limit: Option<u32>,
    pub(crate) offset: Option<u32>,
}

impl LinkOptions {
    pub fn new() -> LinkOptions {
        LinkOptions {
            ..Default::default()
        }
    }
    pub fn limit(mut self, limit: u32) -> LinkOptions {
        self.limit = Some(limit);
        self
    }
    pub fn offset(mut self, offset: u32) -> LinkOptions {
        self.offset = Some(offset);
        self
    }
}

/// Options for [`Collection::history()`](crate::Collection::history()).
#[derive(Default, Debug, Clone)]
pub struct HistoryOptions {
    pub(crate) values: bool,
    pub(crate) limit: Option<u32>,
    pub(crate) offset: Option<u32>,
}

impl HistoryOptions {
    pub fn new() -> HistoryOptions {
        HistoryOptions {
            ..Default::default()
        }
    }
    /// Include the item value of every revision. By default only the
    /// revision paths are returned.
    pub fn values(mut self, values: bool) -> HistoryOptions {
        self.values = values;
        self
    }
    pub fn limit(mut self, limit: u32) -> HistoryOptions {
        self.limit = Some(limit);
        self
    }
    pub fn offset(mut self, offset: u32) -> HistoryOptions {
        self.offset = Some(offset);
        self
    }
}

/// Options for [`Collection::exclusive_list()`](crate::Collection::exclusive_list()):
/// list keys strictly after `after_key` and/or strictly before `before_key`.
#[derive(Debug, Clone)]
pub struct ExclusiveListOptions {
    pub(crate) limit: u32,
    pub(crate) after_key: Option<String>,
    pub(crate) before_key: Option<String>,
}

impl Default for ExclusiveListOptions {
    fn default() -> Self {
        ExclusiveListOptions {
            limit: MAX_LIMIT,
            after_key: None,
            before_key: None,
        }
    }
}

impl ExclusiveListOptions {
    pub fn new() -> ExclusiveListOptions {
        ExclusiveListOptions {
            ..Default::default()
        }
    }
    /// Number of items to return, between 1 and 100. The default is 100.
    pub fn limit(mut self, limit: u32) -> ExclusiveListOptions {
        self.limit = limit;
        self
    }
    pub fn after_key(mut self, key: &str) -> ExclusiveListOptions {
        self.after_key = Some(key.to_string());
        self
    }
    pub fn before_key(mut self, key: &str) -> ExclusiveListOptions {
        self.before_key = Some(key.to_string());
        self
    }
}

/// Options for [`Collection::inclusive_list()`](crate::Collection::inclusive_list()):
/// list keys from `start_key` and/or up to `end_key`, both included.
#[derive(Debug, Clone)]
pub struct InclusiveListOptions {
    pub(crate) limit: u32,
    pub(crate) start_key: Option<String>,
    pub(crate) end_key: Option<String>,
}

impl Default for InclusiveListOptions {
    fn default() -> Self {
        InclusiveListOptions {
            limit: MAX_LIMIT,
            start_key: None,
            end_key: None,
        }
    }
}

impl InclusiveListOptions {
    pub fn new() -> InclusiveListOptions {
        InclusiveListOptions {
            ..Default::default()
        }
    }
    /// Number of items to return, between 1 and 100. The default is 100.
    pub fn limit(mut self, limit: u32) -> InclusiveListOptions {
        self.limit = limit;
        self
    }
    pub fn start_key(mut self, key: &str) -> InclusiveListOptions {
        self.start_key = Some(key.to_string());
        self
    }
    pub fn end_key(mut self, key: &str) -> InclusiveListOptions {
        self.end_key = Some(key.to_string());
        self
    }
}

/// Options for [`Collection::delete()`](crate::Collection::delete()).
///
/// By default the item and its whole history are purged, unconditionally.
#[derive(Debug, Clone)]
pub struct DeleteOptions {
    pub(crate) purge: bool,
    pub(crate) reference: Option<String>,
}

impl Default for DeleteOptions {
    fn default() -> Self {
        DeleteOptions {
            purge: true,
            reference: None,
        }
    }
}

impl DeleteOptions {
    pub fn new() -> DeleteOptions {
        DeleteOptions {
            ..Default::default()
        }
    }
    /// If `false`, leave a tombstone that keeps the item history.
    pub fn purge(mut self, purge: bool) -> DeleteOptions {
        self.purge = purge;
        self
    }
    /// Delete only if the stored revision matches `reference`.
    pub fn if_match(mut self, reference: &str) -> DeleteOptions {
        self.reference = Some(reference.to_string());
        self
    }
}
