//
// Copyright (c) 2024, 2025 Oracle and/or its affiliates. All rights reserved.
//
// Licensed under the Universal Permissive License v 1.0 as shown at
//  https://oss.oracle.com/licenses/upl/
//
//! In-process mock of the Orchestrate REST API, served with axum on an
//! ephemeral local port.
//!
//! It keeps items, revisions and relations in memory and implements the
//! conditional write rules, so client behavior can be checked end to end.
//! Every request is recorded for later inspection.
#![allow(dead_code)]

use axum::body::Bytes;
use axum::extract::State;
use axum::http::{header, HeaderMap, HeaderValue, Method, StatusCode, Uri};
use axum::response::{IntoResponse, Response};
use axum::Router;
use base64::prelude::{Engine as _, BASE64_STANDARD};
use orchestrate_rust_sdk::{Client, OrchestrateError};
use percent_encoding::percent_decode_str;
use serde_json::{json, Map, Value};
use std::collections::{BTreeMap, HashMap};
use std::error::Error;
use std::net::SocketAddr;
use std::sync::{Arc, Mutex, MutexGuard};
use std::time::Duration;

pub const API_KEY: &str = "0d8f4c6e-valid-key";

/// A request as received by the mock.
#[derive(Debug, Clone)]
pub struct Recorded {
    pub method: String,
    pub path: String,
    pub query: HashMap<String, String>,
    pub headers: HeaderMap,
    pub body: Vec<u8>,
}

impl Recorded {
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(name).and_then(|v| v.to_str().ok())
    }
    pub fn json(&self) -> Value {
        serde_json::from_slice(&self.body).unwrap_or(Value::Null)
    }
}

#[derive(Debug, Clone)]
struct Revision {
    reference: String,
    // None for tombstones
    value: Option<Value>,
    reftime: i64,
}

type RelationKey = (String, String, String);

#[derive(Default)]
pub struct Store {
    // collection -> key -> revisions, oldest first
    items: BTreeMap<String, BTreeMap<String, Vec<Revision>>>,
    // (collection, key, kind) -> (collection, key) -> properties
    relations: BTreeMap<RelationKey, BTreeMap<(String, String), Value>>,
    requests: Vec<Recorded>,
    clock: i64,
}

type Shared = Arc<Mutex<Store>>;

pub struct MockServer {
    pub addr: SocketAddr,
    store: Shared,
}

impl MockServer {
    pub async fn start() -> Result<MockServer, Box<dyn Error>> {
        let store: Shared = Arc::new(Mutex::new(Store {
            clock: 1_400_000_000_000,
            ..Default::default()
        }));
        let app = Router::new().fallback(handle).with_state(store.clone());
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await?;
        let addr = listener.local_addr()?;
        tokio::spawn(async move {
            let _ = axum::serve(listener, app).await;
        });
        Ok(MockServer { addr, store })
    }

    pub fn host(&self) -> String {
        format!("http://{}/v0", self.addr)
    }

    pub fn client(&self) -> Result<Client, OrchestrateError> {
        self.client_with_key(API_KEY)
    }

    pub fn client_with_key(&self, key: &str) -> Result<Client, OrchestrateError> {
        Client::builder()
            .api_key(key)?
            .host(&self.host())?
            .timeout(Duration::from_secs(10))?
            .build()
    }

    fn lock(&self) -> MutexGuard<'_, Store> {
        lock(&self.store)
    }

    pub fn requests(&self) -> Vec<Recorded> {
        self.lock().requests.clone()
    }

    pub fn request_count(&self) -> usize {
        self.lock().requests.len()
    }

    pub fn last_request(&self) -> Option<Recorded> {
        self.lock().requests.last().cloned()
    }

    /// Current value of an item, bypassing the API.
    pub fn stored(&self, collection: &str, key: &str) -> Option<Value> {
        self.lock().current(collection, key).and_then(|r| r.value)
    }

    /// Number of revisions kept for an item, tombstones included.
    pub fn revision_count(&self, collection: &str, key: &str) -> usize {
        self.lock()
            .items
            .get(collection)
            .and_then(|c| c.get(key))
            .map(|r| r.len())
            .unwrap_or(0)
    }
}

fn lock(store: &Shared) -> MutexGuard<'_, Store> {
    match store.lock() {
        Ok(s) => s,
        Err(poisoned) => poisoned.into_inner(),
    }
}

fn decode_segment(s: &str) -> String {
    percent_decode_str(s).decode_utf8_lossy().into_owned()
}

fn query_map(uri: &Uri) -> HashMap<String, String> {
    url::form_urlencoded::parse(uri.query().unwrap_or("").as_bytes())
        .into_owned()
        .collect()
}

fn header_str<'a>(headers: &'a HeaderMap, name: &str) -> Option<&'a str> {
    headers.get(name).and_then(|v| v.to_str().ok())
}

fn error(status: StatusCode, code: &str, message: &str) -> Response {
    let body = json!({"message": message, "code": code});
    (
        status,
        [(header::CONTENT_TYPE, "application/json")],
        body.to_string(),
    )
        .into_response()
}

fn not_found() -> Response {
    error(
        StatusCode::NOT_FOUND,
        "items_not_found",
        "The requested items could not be found.",
    )
}

fn empty(status: StatusCode) -> Response {
    status.into_response()
}

fn json_ok(body: Value) -> Response {
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "application/json")],
        body.to_string(),
    )
        .into_response()
}

fn written(collection: &str, key: &str, reference: &str) -> Response {
    let mut h = HeaderMap::new();
    let location = format!("/v0/{}/{}/refs/{}", collection, key, reference);
    if let Ok(v) = HeaderValue::from_str(&location) {
        h.insert(header::LOCATION, v);
    }
    if let Ok(v) = HeaderValue::from_str(&format!("\"{}\"", reference)) {
        h.insert(header::ETAG, v);
    }
    (StatusCode::CREATED, h).into_response()
}

fn authorized(headers: &HeaderMap) -> bool {
    let expected = format!("Basic {}", BASE64_STANDARD.encode(format!("{}:", API_KEY)));
    header_str(headers, "authorization") == Some(expected.as_str())
}

fn limit_offset(q: &HashMap<String, String>, default_limit: usize) -> (usize, usize) {
    let limit = q
        .get("limit")
        .and_then(|l| l.parse().ok())
        .unwrap_or(default_limit);
    let offset = q.get("offset").and_then(|o| o.parse().ok()).unwrap_or(0);
    (limit, offset)
}

fn path_json(collection: &str, key: &str, rev: &Revision) -> Value {
    let mut p = json!({
        "collection": collection,
        "kind": "item",
        "key": key,
        "ref": rev.reference,
        "reftime": rev.reftime,
    });
    if rev.value.is_none() {
        p["tombstone"] = json!(true);
    }
    p
}

// Resolve "value.field" or "field" against an item value.
fn field<'a>(value: &'a Value, name: &str) -> Option<&'a Value> {
    let name = name.strip_prefix("value.").unwrap_or(name);
    let mut v = value;
    for part in name.split('.') {
        v = v.get(part)?;
    }
    Some(v)
}

fn matches(value: &Value, query: &str) -> bool {
    if query == "*" {
        return true;
    }
    if let Some(i) = query.find(":NEAR:") {
        return field(value, &query[..i]).is_some();
    }
    match query.split_once(':') {
        Some((f, term)) => match field(value, f) {
            Some(Value::String(s)) => s == term,
            Some(other) => other.to_string() == term,
            None => false,
        },
        None => match value.as_object() {
            Some(m) => m.values().any(|v| v.as_str() == Some(query)),
            None => false,
        },
    }
}

fn set_pointer(doc: &mut Value, path: &str, value: Value) -> bool {
    let (parent, last) = match path.rsplit_once('/') {
        Some(p) => p,
        None => return false,
    };
    match doc.pointer_mut(parent).and_then(|p| p.as_object_mut()) {
        Some(obj) => {
            obj.insert(last.to_string(), value);
            true
        }
        None => false,
    }
}

fn remove_pointer(doc: &mut Value, path: &str) -> bool {
    let (parent, last) = match path.rsplit_once('/') {
        Some(p) => p,
        None => return false,
    };
    match doc.pointer_mut(parent).and_then(|p| p.as_object_mut()) {
        Some(obj) => obj.remove(last).is_some(),
        None => false,
    }
}

fn apply_patch(doc: &mut Value, ops: &[Value]) -> Result<(), Response> {
    let bad = |m: &str| error(StatusCode::BAD_REQUEST, "patch_op_invalid", m);
    for op in ops {
        let name = op["op"].as_str().unwrap_or("");
        let path = op["path"].as_str().unwrap_or("");
        let ok = match name {
            "add" | "replace" => set_pointer(doc, path, op["value"].clone()),
            "remove" => remove_pointer(doc, path),
            "init" => {
                if doc.pointer(path).is_none() {
                    set_pointer(doc, path, op["value"].clone())
                } else {
                    true
                }
            }
            "inc" => {
                let by = op.get("value").and_then(|v| v.as_i64()).unwrap_or(1);
                let cur = doc.pointer(path).and_then(|v| v.as_i64()).unwrap_or(0);
                set_pointer(doc, path, json!(cur + by))
            }
            "test" => {
                if doc.pointer(path) != Some(&op["value"]) {
                    return Err(error(
                        StatusCode::CONFLICT,
                        "patch_test_failed",
                        "The test operation did not match.",
                    ));
                }
                true
            }
            "move" | "copy" => {
                let from = op["from"].as_str().unwrap_or("");
                match doc.pointer(from).cloned() {
                    Some(v) => {
                        if name == "move" {
                            remove_pointer(doc, from);
                        }
                        set_pointer(doc, path, v)
                    }
                    None => false,
                }
            }
            _ => false,
        };
        if !ok {
            return Err(bad(&format!("cannot apply '{}' to '{}'", name, path)));
        }
    }
    Ok(())
}

impl Store {
    fn next_ref(&mut self) -> (String, i64) {
        self.clock += 1;
        (format!("{:016x}", rand::random::<u64>()), self.clock)
    }

    fn current(&self, collection: &str, key: &str) -> Option<Revision> {
        let rev = self.items.get(collection)?.get(key)?.last()?;
        if rev.value.is_some() {
            Some(rev.clone())
        } else {
            None
        }
    }

    fn check_precondition(
        &self,
        collection: &str,
        key: &str,
        headers: &HeaderMap,
    ) -> Option<Response> {
        let current = self.current(collection, key);
        if header_str(headers, "if-none-match") == Some("\"*\"") && current.is_some() {
            return Some(error(
                StatusCode::PRECONDITION_FAILED,
                "item_already_present",
                "The item is already present.",
            ));
        }
        if let Some(v) = header_str(headers, "if-match") {
            let want = v.trim_matches('"');
            match current {
                Some(r) if r.reference == want => {}
                _ => {
                    return Some(error(
                        StatusCode::PRECONDITION_FAILED,
                        "item_version_mismatch",
                        "The version of the item does not match.",
                    ))
                }
            }
        }
        None
    }

    fn store(&mut self, collection: &str, key: &str, value: Option<Value>) -> String {
        let (reference, reftime) = self.next_ref();
        self.items
            .entry(collection.to_string())
            .or_default()
            .entry(key.to_string())
            .or_default()
            .push(Revision {
                reference: reference.clone(),
                value,
                reftime,
            });
        reference
    }

    fn add(&mut self, collection: &str, body: &[u8]) -> Response {
        let value: Value = match serde_json::from_slice(body) {
            Ok(v) => v,
            Err(_) => return error(StatusCode::BAD_REQUEST, "api_bad_request", "invalid json"),
        };
        let key = format!("{:016x}", rand::random::<u64>());
        let r = self.store(collection, &key, Some(value));
        written(collection, &key, &r)
    }

    fn put(&mut self, collection: &str, key: &str, headers: &HeaderMap, body: &[u8]) -> Response {
        if let Some(resp) = self.check_precondition(collection, key, headers) {
            return resp;
        }
        let value: Value = match serde_json::from_slice(body) {
            Ok(v) => v,
            Err(_) => return error(StatusCode::BAD_REQUEST, "api_bad_request", "invalid json"),
        };
        let r = self.store(collection, key, Some(value));
        written(collection, key, &r)
    }

    fn get(&self, collection: &str, key: &str, reference: Option<&str>) -> Response {
        let rev = match reference {
            None => self.current(collection, key),
            Some(r) => self
                .items
                .get(collection)
                .and_then(|c| c.get(key))
                .and_then(|revs| revs.iter().find(|rev| rev.reference == r))
                .cloned(),
        };
        let rev = match rev {
            Some(r) => r,
            None => return not_found(),
        };
        let value = match &rev.value {
            Some(v) => v.clone(),
            None => return not_found(),
        };
        let mut h = HeaderMap::new();
        let location = format!("/v0/{}/{}/refs/{}", collection, key, rev.reference);
        if let Ok(v) = HeaderValue::from_str(&location) {
            h.insert(header::CONTENT_LOCATION, v);
        }
        if let Ok(v) = HeaderValue::from_str(&format!("\"{}\"", rev.reference)) {
            h.insert(header::ETAG, v);
        }
        h.insert(header::CONTENT_TYPE, HeaderValue::from_static("application/json"));
        (StatusCode::OK, h, value.to_string()).into_response()
    }

    fn patch(&mut self, collection: &str, key: &str, headers: &HeaderMap, body: &[u8]) -> Response {
        let mut doc = match self.current(collection, key) {
            Some(Revision { value: Some(v), .. }) => v,
            _ => return not_found(),
        };
        if let Some(resp) = self.check_precondition(collection, key, headers) {
            return resp;
        }
        let patch: Value = match serde_json::from_slice(body) {
            Ok(v) => v,
            Err(_) => return error(StatusCode::BAD_REQUEST, "api_bad_request", "invalid json"),
        };
        match header_str(headers, "content-type") {
            Some("application/merge-patch+json") => {
                let (Some(target), Some(fields)) = (doc.as_object_mut(), patch.as_object()) else {
                    return error(StatusCode::BAD_REQUEST, "api_bad_request", "not an object");
                };
                for (k, v) in fields {
                    target.insert(k.clone(), v.clone());
                }
            }
            Some("application/json-patch+json") => {
                let ops = match patch.as_array() {
                    Some(a) => a.clone(),
                    None => {
                        return error(StatusCode::BAD_REQUEST, "api_bad_request", "not an array")
                    }
                };
                if let Err(resp) = apply_patch(&mut doc, &ops) {
                    return resp;
                }
            }
            _ => {
                return error(
                    StatusCode::UNSUPPORTED_MEDIA_TYPE,
                    "api_bad_request",
                    "unsupported content type",
                )
            }
        }
        let r = self.store(collection, key, Some(doc));
        written(collection, key, &r)
    }

    fn delete(
        &mut self,
        collection: &str,
        key: &str,
        headers: &HeaderMap,
        q: &HashMap<String, String>,
    ) -> Response {
        if let Some(resp) = self.check_precondition(collection, key, headers) {
            return resp;
        }
        if q.get("purge").map(String::as_str) == Some("true") {
            if let Some(c) = self.items.get_mut(collection) {
                c.remove(key);
            }
        } else if self.current(collection, key).is_some() {
            self.store(collection, key, None);
        }
        empty(StatusCode::NO_CONTENT)
    }

    fn delete_collection(&mut self, collection: &str, q: &HashMap<String, String>) -> Response {
        if q.get("force").map(String::as_str) != Some("true") {
            return error(
                StatusCode::CONFLICT,
                "api_bad_request",
                "force=true is required to delete a collection",
            );
        }
        self.items.remove(collection);
        self.relations.retain(|(c, _, _), _| c != collection);
        empty(StatusCode::NO_CONTENT)
    }

    fn list(&self, collection: &str, q: &HashMap<String, String>) -> Response {
        let (limit, _) = limit_offset(q, 10);
        let get = |name: &str| q.get(name).map(String::as_str);
        let mut results = Vec::new();
        let mut more = false;
        let mut last_key = String::new();
        if let Some(items) = self.items.get(collection) {
            for (key, revs) in items {
                let k = key.as_str();
                if get("afterKey").is_some_and(|b| k <= b)
                    || get("beforeKey").is_some_and(|b| k >= b)
                    || get("startKey").is_some_and(|b| k < b)
                    || get("endKey").is_some_and(|b| k > b)
                {
                    continue;
                }
                let rev = match revs.last() {
                    Some(r) if r.value.is_some() => r,
                    _ => continue,
                };
                if results.len() == limit {
                    more = true;
                    break;
                }
                results.push(json!({
                    "path": path_json(collection, key, rev),
                    "value": rev.value,
                    "reftime": rev.reftime,
                }));
                last_key = key.clone();
            }
        }
        let mut body = json!({"count": results.len(), "results": results});
        if more {
            let next: String = url::form_urlencoded::Serializer::new(String::new())
                .append_pair("limit", &limit.to_string())
                .append_pair("afterKey", &last_key)
                .finish();
            body["next"] = json!(format!("/v0/{}?{}", collection, next));
        }
        json_ok(body)
    }

    fn search(&self, collection: &str, q: &HashMap<String, String>) -> Response {
        let query = q.get("query").map(String::as_str).unwrap_or("");
        if query.contains("((") {
            return error(StatusCode::BAD_REQUEST, "search_query_malformed", "malformed query");
        }
        let (limit, offset) = limit_offset(q, 10);
        let mut hits: Vec<(String, Revision)> = Vec::new();
        if let Some(items) = self.items.get(collection) {
            for (key, revs) in items {
                if let Some(rev) = revs.last() {
                    if rev.value.as_ref().is_some_and(|v| matches(v, query)) {
                        hits.push((key.clone(), rev.clone()));
                    }
                }
            }
        }
        if let Some(sort) = q.get("sort") {
            let (f, dir) = sort.split_once(':').unwrap_or((sort.as_str(), "asc"));
            let sort_key = |r: &Revision| -> String {
                r.value
                    .as_ref()
                    .and_then(|v| field(v, f))
                    .map(|v| match v {
                        Value::String(s) => s.clone(),
                        other => format!("{:>20}", other.to_string()),
                    })
                    .unwrap_or_default()
            };
            hits.sort_by_key(|(_, r)| sort_key(r));
            if dir == "desc" {
                hits.reverse();
            }
        }
        let total = hits.len();
        let near = query.contains(":NEAR:");
        let results: Vec<Value> = hits
            .iter()
            .skip(offset)
            .take(limit)
            .map(|(key, rev)| {
                let mut item = json!({
                    "path": path_json(collection, key, rev),
                    "value": rev.value,
                    "score": 1.0,
                    "reftime": rev.reftime,
                });
                if near {
                    item["distance"] = json!(0.0);
                }
                item
            })
            .collect();
        let mut body = json!({"count": results.len(), "total_count": total, "results": results});
        if offset + limit < total {
            let next: String = url::form_urlencoded::Serializer::new(String::new())
                .append_pair("query", query)
                .append_pair("limit", &limit.to_string())
                .append_pair("offset", &(offset + limit).to_string())
                .finish();
            body["next"] = json!(format!("/v0/{}?{}", collection, next));
        }
        if offset > 0 {
            body["prev"] = json!(format!("/v0/{}?query={}", collection, query));
        }
        json_ok(body)
    }

    fn history(&self, collection: &str, key: &str, q: &HashMap<String, String>) -> Response {
        let revs = match self.items.get(collection).and_then(|c| c.get(key)) {
            Some(r) => r,
            None => return not_found(),
        };
        let (limit, offset) = limit_offset(q, 10);
        let values = q.get("values").map(String::as_str) == Some("true");
        let results: Vec<Value> = revs
            .iter()
            .rev()
            .skip(offset)
            .take(limit)
            .map(|rev| {
                let mut item = json!({
                    "path": path_json(collection, key, rev),
                    "reftime": rev.reftime,
                });
                if values {
                    if let Some(v) = &rev.value {
                        item["value"] = v.clone();
                    }
                }
                item
            })
            .collect();
        json_ok(json!({"count": results.len(), "results": results}))
    }

    fn put_relation(
        &mut self,
        from: (&str, &str),
        kind: &str,
        to: (&str, &str),
        body: &[u8],
    ) -> Response {
        if self.current(from.0, from.1).is_none() || self.current(to.0, to.1).is_none() {
            return not_found();
        }
        let props = if body.is_empty() {
            Value::Object(Map::new())
        } else {
            match serde_json::from_slice(body) {
                Ok(v) => v,
                Err(_) => return error(StatusCode::BAD_REQUEST, "api_bad_request", "invalid json"),
            }
        };
        self.relations
            .entry((from.0.to_string(), from.1.to_string(), kind.to_string()))
            .or_default()
            .insert((to.0.to_string(), to.1.to_string()), props);
        empty(StatusCode::NO_CONTENT)
    }

    fn get_relation(&self, from: (&str, &str), kind: &str, to: (&str, &str)) -> Response {
        let key = (from.0.to_string(), from.1.to_string(), kind.to_string());
        match self
            .relations
            .get(&key)
            .and_then(|m| m.get(&(to.0.to_string(), to.1.to_string())))
        {
            Some(props) => json_ok(props.clone()),
            None => not_found(),
        }
    }

    fn delete_relation(&mut self, from: (&str, &str), kind: &str, to: (&str, &str)) -> Response {
        let key = (from.0.to_string(), from.1.to_string(), kind.to_string());
        if let Some(m) = self.relations.get_mut(&key) {
            m.remove(&(to.0.to_string(), to.1.to_string()));
        }
        empty(StatusCode::NO_CONTENT)
    }

    fn relations(
        &self,
        collection: &str,
        key: &str,
        kind: &str,
        q: &HashMap<String, String>,
    ) -> Response {
        if self.current(collection, key).is_none() {
            return not_found();
        }
        let (limit, offset) = limit_offset(q, 10);
        let rel = (collection.to_string(), key.to_string(), kind.to_string());
        let results: Vec<Value> = self
            .relations
            .get(&rel)
            .map(|m| {
                m.keys()
                    .filter_map(|(c, k)| self.current(c, k).map(|rev| (c, k, rev)))
                    .skip(offset)
                    .take(limit)
                    .map(|(c, k, rev)| {
                        json!({
                            "path": path_json(c, k, &rev),
                            "value": rev.value,
                            "reftime": rev.reftime,
                        })
                    })
                    .collect()
            })
            .unwrap_or_default();
        json_ok(json!({"count": results.len(), "results": results}))
    }
}

async fn handle(
    State(store): State<Shared>,
    method: Method,
    uri: Uri,
    headers: HeaderMap,
    body: Bytes,
) -> Response {
    let mut st = lock(&store);
    let q = query_map(&uri);
    st.requests.push(Recorded {
        method: method.to_string(),
        path: uri.path().to_string(),
        query: q.clone(),
        headers: headers.clone(),
        body: body.to_vec(),
    });
    if !authorized(&headers) {
        return error(
            StatusCode::UNAUTHORIZED,
            "security_unauthorized",
            "Valid API key required.",
        );
    }
    let decoded: Vec<String> = uri
        .path()
        .split('/')
        .filter(|s| !s.is_empty())
        .map(decode_segment)
        .collect();
    let mut segs: Vec<&str> = decoded.iter().map(String::as_str).collect();
    if segs.first() == Some(&"v0") {
        segs.remove(0);
    }
    if segs.first() == Some(&"broken") {
        return empty(StatusCode::INTERNAL_SERVER_ERROR);
    }
    match (method.as_str(), segs.as_slice()) {
        ("HEAD", []) | ("GET", []) => empty(StatusCode::OK),
        ("POST", [c]) => st.add(c, &body),
        ("GET", [c]) if q.contains_key("query") => st.search(c, &q),
        ("GET", [c]) => st.list(c, &q),
        ("DELETE", [c]) => st.delete_collection(c, &q),
        ("PUT", [c, k]) => st.put(c, k, &headers, &body),
        ("GET", [c, k]) => st.get(c, k, None),
        ("PATCH", [c, k]) => st.patch(c, k, &headers, &body),
        ("DELETE", [c, k]) => st.delete(c, k, &headers, &q),
        ("GET", [c, k, "refs"]) => st.history(c, k, &q),
        ("GET", [c, k, "refs", r]) => st.get(c, k, Some(*r)),
        ("GET", [c, k, "relations", kind]) => st.relations(c, k, kind, &q),
        ("PUT", [c, k, "relation", kind, c2, k2]) => {
            st.put_relation((*c, *k), kind, (*c2, *k2), &body)
        }
        ("GET", [c, k, "relation", kind, c2, k2]) => {
            st.get_relation((*c, *k), kind, (*c2, *k2))
        }
        ("DELETE", [c, k, "relation", kind, c2, k2]) => {
            st.delete_relation((*c, *k), kind, (*c2, *k2))
        }
        _ => error(StatusCode::NOT_FOUND, "api_not_found", "unknown endpoint"),
    }
}
