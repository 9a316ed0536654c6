//
// Copyright (c) 2024, 2025 Oracle and/or its affiliates. All rights reserved.
//
// Licensed under the Universal Permissive License v 1.0 as shown at
//  https://oss.oracle.com/licenses/upl/
//
//! Conditional writes and version references.
//!
//! Every write returns an opaque version reference identifying the revision
//! it created. Writes can be made conditional on the stored revision:
//!
//! - create-only writes send `If-None-Match: "*"` and fail if the key has a value,
//! - compare-and-swap writes send `If-Match: "<reference>"` and fail if the
//!   stored revision is a different one,
//! - unconditional writes send neither header and overwrite any current value.
use crate::error::OrchestrateError;
use crate::types::KvMetadata;
use reqwest::header::{HeaderMap, HeaderValue, ETAG, IF_MATCH, IF_NONE_MATCH, LOCATION};
use tracing::trace;

/// The precondition attached to a write request.
#[derive(Default, Debug, Clone, PartialEq, Eq)]
pub(crate) enum Precondition {
    /// Write regardless of the stored revision.
    #[default]
    None,
    /// Write only if the key has no value.
    IfAbsent,
    /// Write only if the stored revision equals the given reference.
    IfMatch(String),
}

impl Precondition {
    /// Compare-and-swap if a reference is given, unconditional otherwise.
    ///
    /// The reference is used verbatim; its format is not checked locally.
    pub(crate) fn from_reference(reference: Option<&str>) -> Precondition {
        match reference {
            Some(r) => Precondition::IfMatch(r.to_string()),
            None => Precondition::None,
        }
    }

    /// Add the matching precondition header, if any, to `headers`.
    pub(crate) fn apply(&self, headers: &mut HeaderMap) -> Result<(), OrchestrateError> {
        match self {
            Precondition::None => {}
            Precondition::IfAbsent => {
                headers.insert(IF_NONE_MATCH, HeaderValue::from_static("\"*\""));
            }
            Precondition::IfMatch(r) => {
                headers.insert(IF_MATCH, HeaderValue::from_str(&quote_reference(r))?);
            }
        }
        Ok(())
    }
}

pub(crate) fn quote_reference(reference: &str) -> String {
    format!("\"{}\"", reference)
}

/// Strip the quotes (and weak validator prefix) from an `ETag` header value.
pub(crate) fn unquote_etag(etag: &str) -> &str {
    let s = etag.trim();
    let s = s.strip_prefix("W/").unwrap_or(s);
    let s = s.strip_prefix('"').unwrap_or(s);
    s.strip_suffix('"').unwrap_or(s)
}

/// Split a revision location (`/v0/{collection}/{key}/refs/{reference}`)
/// into its collection, key and reference segments.
pub(crate) fn parse_location(location: &str) -> Option<(&str, &str, &str)> {
    let path = location.split(['?', '#']).next().unwrap_or("");
    let segs: Vec<&str> = path.split('/').filter(|s| !s.is_empty()).collect();
    let i = segs.iter().rposition(|s| *s == "refs")?;
    if i < 2 || i + 1 >= segs.len() {
        return None;
    }
    Some((segs[i - 2], segs[i - 1], segs[i + 1]))
}

fn header_str<'a>(headers: &'a HeaderMap, name: &reqwest::header::HeaderName) -> Option<&'a str> {
    headers.get(name).and_then(|v| v.to_str().ok())
}

/// Build write metadata from the `ETag` and `Location` response headers.
///
/// `collection` and `key` are what the caller asked for; when the caller did
/// not choose a key (server-assigned keys), it is recovered from `Location`.
/// A response without either header yields metadata with only the caller's
/// context filled in.
pub(crate) fn metadata_from_headers(
    headers: &HeaderMap,
    collection: &str,
    key: Option<&str>,
) -> KvMetadata {
    let location = header_str(headers, &LOCATION).unwrap_or("").to_string();
    let parsed = parse_location(&location);
    let version_reference = match header_str(headers, &ETAG) {
        Some(etag) => unquote_etag(etag).to_string(),
        None => parsed.map(|(_, _, r)| r.to_string()).unwrap_or_default(),
    };
    let key = match key {
        Some(k) => k.to_string(),
        None => parsed.map(|(_, k, _)| k.to_string()).unwrap_or_default(),
    };
    trace!(
        "write metadata: key={} ref={} location={}",
        key,
        version_reference,
        location
    );
    KvMetadata {
        collection_name: collection.to_string(),
        key,
        version_reference,
        location,
    }
}
