//
// Copyright (c) 2024, 2025 Oracle and/or its affiliates. All rights reserved.
//
// Licensed under the Universal Permissive License v 1.0 as shown at
//  https://oss.oracle.com/licenses/upl/
//
use crate::error::{ia_err, OrchestrateError};
use url::Url;

/// Check that `value` can be used as a single path segment.
///
/// `.` and `..` are dot segments: URL parsing resolves them against the
/// rest of the path (percent-encoded or not), so they can never address a
/// collection, key or relation.
pub(crate) fn check_segment(name: &str, value: &str) -> Result<(), OrchestrateError> {
    match value {
        "" => ia_err!("{}: value cannot be null or empty", name),
        "." | ".." => ia_err!("{}: '{}' is not a valid path segment", name, value),
        _ => Ok(()),
    }
}

/// Builds service URLs from a host, path segments and query parameters.
///
/// Every step consumes the builder and returns it, so a partially built
/// value can be cloned and extended without affecting the original.
/// Segments are percent-encoded individually: a key containing `/` stays a
/// single path segment. Callers reject dot segments with [`check_segment`]
/// first; `segment` would silently drop them.
#[derive(Debug, Clone)]
pub(crate) struct UrlBuilder {
    url: Url,
}

impl UrlBuilder {
    pub(crate) fn new(host: &Url) -> UrlBuilder {
        UrlBuilder { url: host.clone() }
    }

    pub(crate) fn segment(mut self, segment: &str) -> UrlBuilder {
        // host is validated as http(s) when the client is built, so this
        // is never a cannot-be-a-base url
        if let Ok(mut segs) = self.url.path_segments_mut() {
            segs.pop_if_empty().push(segment);
        }
        self
    }

    pub(crate) fn query(mut self, name: &str, value: &str) -> UrlBuilder {
        self.url.query_pairs_mut().append_pair(name, value);
        self
    }

    /// Append a query parameter only if `value` is present and non-empty.
    pub(crate) fn query_opt(self, name: &str, value: Option<&str>) -> UrlBuilder {
        match value {
            Some(v) if !v.is_empty() => self.query(name, v),
            _ => self,
        }
    }

    pub(crate) fn build(self) -> Url {
        self.url
    }
}
