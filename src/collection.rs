//
// Copyright (c) 2024, 2025 Oracle and/or its affiliates. All rights reserved.
//
// Licensed under the Universal Permissive License v 1.0 as shown at
//  https://oss.oracle.com/licenses/upl/
//
use crate::client::{ApiRequest, Client, Payload};
use crate::conditional::Precondition;
use crate::error::{ia_err, OrchestrateError};
use crate::options::{
    DeleteOptions, ExclusiveListOptions, HistoryOptions, InclusiveListOptions, LinkOptions,
    SearchOptions, MAX_LIMIT,
};
use crate::response::{
    check_response, decode_body, decode_error, decode_value, metadata, object, ApiResponse,
    RequestContext,
};
use crate::types::{
    GraphNode, KvMetadata, KvObject, ListResults, PatchOperation, SearchResults,
};
use crate::url_builder::{check_segment, UrlBuilder};
use bigdecimal::BigDecimal;
use reqwest::Method;
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;
use std::result::Result;
use url::Url;

/// A named collection of items.
///
/// Created with [`Client::collection()`]. Every method issues a single HTTP
/// request (except [`update()`](Collection::update())), validating its
/// arguments first: an invalid argument fails with
/// [`ErrorCode::IllegalArgument`](crate::ErrorCode::IllegalArgument) without
/// any network call.
///
/// Collections are cheap to clone and safe to share across tasks.
#[derive(Clone, Debug)]
pub struct Collection {
    client: Client,
    name: String,
}

/// Format a geo-distance query: `{field}:NEAR:{lat:{latitude} lon:{longitude} dist:{distance}}`.
///
/// Latitude and longitude are printed exactly as given.
pub fn near_query(
    field: &str,
    latitude: &BigDecimal,
    longitude: &BigDecimal,
    distance: &str,
) -> String {
    format!(
        "{}:NEAR:{{lat:{} lon:{} dist:{}}}",
        field, latitude, longitude, distance
    )
}

fn check_not_empty(name: &str, value: &str) -> Result<(), OrchestrateError> {
    if value.is_empty() {
        return ia_err!("{}: value cannot be null or empty", name);
    }
    Ok(())
}

fn check_limit(limit: u32) -> Result<(), OrchestrateError> {
    if !(1..=MAX_LIMIT).contains(&limit) {
        return ia_err!("limit must be between 1 and {}, got {}", MAX_LIMIT, limit);
    }
    Ok(())
}

fn check_opt_limit(limit: Option<u32>) -> Result<(), OrchestrateError> {
    match limit {
        Some(l) => check_limit(l),
        None => Ok(()),
    }
}

impl Collection {
    pub(crate) fn new(client: Client, name: &str) -> Collection {
        Collection {
            client,
            name: name.to_string(),
        }
    }

    /// The name of this collection.
    pub fn name(&self) -> &str {
        &self.name
    }

    fn url(&self) -> UrlBuilder {
        UrlBuilder::new(self.client.host()).segment(&self.name)
    }

    fn key_url(&self, key: &str) -> UrlBuilder {
        self.url().segment(key)
    }

    // Serialize an item, rejecting values that serialize to null.
    fn item_payload<T: Serialize + ?Sized>(
        &self,
        item: &T,
    ) -> Result<Vec<u8>, OrchestrateError> {
        let value = self.client.serializer().to_value(item)?;
        if value.is_null() {
            return ia_err!("item: value cannot be null");
        }
        self.client.serializer().encode(&value)
    }

    async fn execute(
        &self,
        req: ApiRequest,
        ctx: &RequestContext<'_>,
    ) -> Result<ApiResponse, OrchestrateError> {
        let resp = self.client.send(req).await?;
        check_response(resp, ctx)
    }

    async fn write(
        &self,
        req: ApiRequest,
        ctx: &RequestContext<'_>,
    ) -> Result<KvMetadata, OrchestrateError> {
        let resp = self.execute(req, ctx).await?;
        Ok(metadata(&resp, ctx))
    }

    async fn get_list<T: DeserializeOwned>(
        &self,
        url: Url,
        ctx: &RequestContext<'_>,
    ) -> Result<ListResults<T>, OrchestrateError> {
        let resp = self.execute(ApiRequest::new(Method::GET, url), ctx).await?;
        let raw: ListResults<Value> = decode_body(&resp, ctx)?;
        raw.convert(self.client.serializer())
            .map_err(|e| decode_error(resp.status, e, ctx))
    }

    async fn get_search<T: DeserializeOwned>(
        &self,
        url: Url,
        ctx: &RequestContext<'_>,
    ) -> Result<SearchResults<T>, OrchestrateError> {
        let resp = self.execute(ApiRequest::new(Method::GET, url), ctx).await?;
        let raw: SearchResults<Value> = decode_body(&resp, ctx)?;
        raw.convert(self.client.serializer())
            .map_err(|e| decode_error(resp.status, e, ctx))
    }

    // Resolve a `next` link returned by the service against the host.
    fn continuation_url(&self, next: &str) -> Result<Url, OrchestrateError> {
        Ok(self.client.host().join(next)?)
    }

    /// Store `item` under a key chosen by the service.
    ///
    /// The generated key is returned in [`KvMetadata::key`].
    pub async fn add<T: Serialize + ?Sized>(
        &self,
        item: &T,
    ) -> Result<KvMetadata, OrchestrateError> {
        let body = self.item_payload(item)?;
        let ctx = RequestContext::collection(&self.name);
        let req = ApiRequest::new(Method::POST, self.url().build()).body(Payload::Json(body));
        self.write(req, &ctx).await
    }

    /// Store `item` under `key` only if the key has no value yet.
    ///
    /// Fails with [`ErrorCode::PreconditionFailed`](crate::ErrorCode::PreconditionFailed)
    /// if the key already holds a value; the stored value is left unchanged.
    pub async fn try_add<T: Serialize + ?Sized>(
        &self,
        key: &str,
        item: &T,
    ) -> Result<KvMetadata, OrchestrateError> {
        check_segment("key", key)?;
        let body = self.item_payload(item)?;
        let ctx = RequestContext::key(&self.name, key);
        let req = ApiRequest::new(Method::PUT, self.key_url(key).build())
            .precondition(Precondition::IfAbsent)
            .body(Payload::Json(body));
        self.write(req, &ctx).await
    }

    /// Store `item` under `key`, creating or overwriting it.
    ///
    /// If `reference` is given, the write only succeeds if the stored revision
    /// matches it.
    pub async fn add_or_update<T: Serialize + ?Sized>(
        &self,
        key: &str,
        item: &T,
        reference: Option<&str>,
    ) -> Result<KvMetadata, OrchestrateError> {
        check_segment("key", key)?;
        let body = self.item_payload(item)?;
        let ctx = RequestContext::key(&self.name, key);
        let req = ApiRequest::new(Method::PUT, self.key_url(key).build())
            .precondition(Precondition::from_reference(reference))
            .body(Payload::Json(body));
        self.write(req, &ctx).await
    }

    /// Replace the value of an existing `key`.
    ///
    /// The key is read first; if it does not exist the not-found failure is
    /// returned and no write is attempted. If `reference` is given, the write
    /// only succeeds if the stored revision matches it.
    pub async fn update<T: Serialize + ?Sized>(
        &self,
        key: &str,
        item: &T,
        reference: Option<&str>,
    ) -> Result<KvMetadata, OrchestrateError> {
        check_segment("key", key)?;
        let body = self.item_payload(item)?;
        self.get::<Value>(key).await?;

        let ctx = RequestContext::key(&self.name, key);
        let req = ApiRequest::new(Method::PUT, self.key_url(key).build())
            .precondition(Precondition::from_reference(reference))
            .body(Payload::Json(body));
        self.write(req, &ctx).await
    }

    /// Delete `key`.
    ///
    /// See [`DeleteOptions`] for purging and conditional deletes.
    pub async fn delete(&self, key: &str, opts: &DeleteOptions) -> Result<(), OrchestrateError> {
        check_segment("key", key)?;
        let ctx = RequestContext::key(&self.name, key);
        let url = self
            .key_url(key)
            .query("purge", if opts.purge { "true" } else { "false" })
            .build();
        let req = ApiRequest::new(Method::DELETE, url)
            .precondition(Precondition::from_reference(opts.reference.as_deref()));
        self.execute(req, &ctx).await?;
        Ok(())
    }

    /// Read the current value of `key`.
    pub async fn get<T: DeserializeOwned>(
        &self,
        key: &str,
    ) -> Result<KvObject<T>, OrchestrateError> {
        check_segment("key", key)?;
        let ctx = RequestContext::key(&self.name, key);
        let resp = self
            .execute(ApiRequest::new(Method::GET, self.key_url(key).build()), &ctx)
            .await?;
        object(&resp, self.client.serializer(), &ctx)
    }

    /// Read the revision of `key` identified by `reference`.
    pub async fn get_version<T: DeserializeOwned>(
        &self,
        key: &str,
        reference: &str,
    ) -> Result<KvObject<T>, OrchestrateError> {
        check_segment("key", key)?;
        check_segment("reference", reference)?;
        let ctx = RequestContext::key(&self.name, key);
        let url = self.key_url(key).segment("refs").segment(reference).build();
        let resp = self.execute(ApiRequest::new(Method::GET, url), &ctx).await?;
        let mut obj: KvObject<T> = object(&resp, self.client.serializer(), &ctx)?;
        if obj.version_reference.is_empty() {
            obj.version_reference = reference.to_string();
        }
        Ok(obj)
    }

    /// Shallow-merge the fields of `item` into the stored value of `key`.
    ///
    /// Fields present in `item` are added or overwritten; all other stored
    /// fields are kept. The merge is performed by the service.
    pub async fn merge<T: Serialize + ?Sized>(
        &self,
        key: &str,
        item: &T,
        reference: Option<&str>,
    ) -> Result<KvMetadata, OrchestrateError> {
        check_segment("key", key)?;
        let body = self.item_payload(item)?;
        let ctx = RequestContext::key(&self.name, key);
        let req = ApiRequest::new(Method::PATCH, self.key_url(key).build())
            .precondition(Precondition::from_reference(reference))
            .body(Payload::MergePatch(body));
        self.write(req, &ctx).await
    }

    /// Apply a list of [`PatchOperation`]s to the stored value of `key`.
    ///
    /// The operations are applied by the service, atomically. Operation
    /// values go through the client's [`JsonSerializer`](crate::JsonSerializer)
    /// like any stored item; paths are sent as given.
    pub async fn patch(
        &self,
        key: &str,
        operations: &[PatchOperation],
        reference: Option<&str>,
    ) -> Result<KvMetadata, OrchestrateError> {
        check_segment("key", key)?;
        if operations.is_empty() {
            return ia_err!("operations: value cannot be empty");
        }
        let serializer = self.client.serializer();
        let mut encoded = Vec::with_capacity(operations.len());
        for op in operations {
            let mut op = op.clone();
            if let Some(v) = op.value.take() {
                op.value = Some(serializer.to_value(&v)?);
            }
            encoded.push(op);
        }
        let body = serde_json::to_vec(&encoded)?;
        let ctx = RequestContext::key(&self.name, key);
        let req = ApiRequest::new(Method::PATCH, self.key_url(key).build())
            .precondition(Precondition::from_reference(reference))
            .body(Payload::JsonPatch(body));
        self.write(req, &ctx).await
    }

    /// List up to `limit` items (1 to 100) in key order.
    pub async fn list<T: DeserializeOwned>(
        &self,
        limit: u32,
    ) -> Result<ListResults<T>, OrchestrateError> {
        check_limit(limit)?;
        let ctx = RequestContext::collection(&self.name);
        let url = self.url().query("limit", &limit.to_string()).build();
        self.get_list(url, &ctx).await
    }

    /// List items with keys strictly between the given bounds.
    pub async fn exclusive_list<T: DeserializeOwned>(
        &self,
        opts: &ExclusiveListOptions,
    ) -> Result<ListResults<T>, OrchestrateError> {
        check_limit(opts.limit)?;
        let ctx = RequestContext::collection(&self.name);
        let url = self
            .url()
            .query("limit", &opts.limit.to_string())
            .query_opt("beforeKey", opts.before_key.as_deref())
            .query_opt("afterKey", opts.after_key.as_deref())
            .build();
        self.get_list(url, &ctx).await
    }

    /// List items with keys within the given bounds, bounds included.
    pub async fn inclusive_list<T: DeserializeOwned>(
        &self,
        opts: &InclusiveListOptions,
    ) -> Result<ListResults<T>, OrchestrateError> {
        check_limit(opts.limit)?;
        let ctx = RequestContext::collection(&self.name);
        let url = self
            .url()
            .query("limit", &opts.limit.to_string())
            .query_opt("startKey", opts.start_key.as_deref())
            .query_opt("endKey", opts.end_key.as_deref())
            .build();
        self.get_list(url, &ctx).await
    }

    /// Fetch the page following `results`, or `None` if it was the last page.
    pub async fn next_list_page<T: DeserializeOwned>(
        &self,
        results: &ListResults<T>,
    ) -> Result<Option<ListResults<T>>, OrchestrateError> {
        let next = match results.next.as_deref() {
            Some(n) if !n.is_empty() => n,
            _ => return Ok(None),
        };
        let ctx = RequestContext::collection(&self.name);
        let url = self.continuation_url(next)?;
        Ok(Some(self.get_list(url, &ctx).await?))
    }

    /// Search the collection with a Lucene-style query.
    pub async fn search<T: DeserializeOwned>(
        &self,
        query: &str,
    ) -> Result<SearchResults<T>, OrchestrateError> {
        self.search_with_options(query, &SearchOptions::default()).await
    }

    /// Search the collection with a Lucene-style query, with sorting and paging.
    pub async fn search_with_options<T: DeserializeOwned>(
        &self,
        query: &str,
        opts: &SearchOptions,
    ) -> Result<SearchResults<T>, OrchestrateError> {
        check_not_empty("query", query)?;
        check_opt_limit(opts.limit)?;
        let ctx = RequestContext::collection(&self.name);
        let mut url = self
            .url()
            .query("query", query)
            .query_opt("sort", opts.sort.as_deref());
        if let Some(l) = opts.limit {
            url = url.query("limit", &l.to_string());
        }
        if let Some(o) = opts.offset {
            url = url.query("offset", &o.to_string());
        }
        self.get_search(url.build(), &ctx).await
    }

    /// Find items whose `field` holds a location within `distance` (such as
    /// `100km`) of the given coordinates.
    ///
    /// Equivalent to [`search()`](Collection::search()) with the query built by [`near_query()`].
    pub async fn geo_search<T: DeserializeOwned>(
        &self,
        field: &str,
        latitude: &BigDecimal,
        longitude: &BigDecimal,
        distance: &str,
    ) -> Result<SearchResults<T>, OrchestrateError> {
        check_not_empty("field", field)?;
        check_not_empty("distance", distance)?;
        self.search(&near_query(field, latitude, longitude, distance))
            .await
    }

    /// Fetch the search page following `results`, or `None` if it was the last page.
    pub async fn next_search_page<T: DeserializeOwned>(
        &self,
        results: &SearchResults<T>,
    ) -> Result<Option<SearchResults<T>>, OrchestrateError> {
        let next = match results.next.as_deref() {
            Some(n) if !n.is_empty() => n,
            _ => return Ok(None),
        };
        let ctx = RequestContext::collection(&self.name);
        let url = self.continuation_url(next)?;
        Ok(Some(self.get_search(url, &ctx).await?))
    }

    /// List the items related to `key` through relations of the given `kind`.
    pub async fn get_links<T: DeserializeOwned>(
        &self,
        key: &str,
        kind: &str,
        opts: &LinkOptions,
    ) -> Result<ListResults<T>, OrchestrateError> {
        check_segment("key", key)?;
        check_segment("kind", kind)?;
        check_opt_limit(opts.limit)?;
        let ctx = RequestContext::key(&self.name, key);
        let mut url = self.key_url(key).segment("relations").segment(kind);
        if let Some(l) = opts.limit {
            url = url.query("limit", &l.to_string());
        }
        if let Some(o) = opts.offset {
            url = url.query("offset", &o.to_string());
        }
        self.get_list(url.build(), &ctx).await
    }

    fn relation_url(
        &self,
        key: &str,
        kind: &str,
        dest: &GraphNode,
    ) -> Result<UrlBuilder, OrchestrateError> {
        check_segment("key", key)?;
        check_segment("kind", kind)?;
        check_segment("destination collection", &dest.collection_name)?;
        check_segment("destination key", &dest.key)?;
        Ok(self
            .key_url(key)
            .segment("relation")
            .segment(kind)
            .segment(&dest.collection_name)
            .segment(&dest.key))
    }

    /// Read the relation of `kind` from `key` to `dest`.
    ///
    /// The returned value is the relation's properties.
    pub async fn get_link<T: DeserializeOwned>(
        &self,
        key: &str,
        kind: &str,
        dest: &GraphNode,
    ) -> Result<T, OrchestrateError> {
        let url = self.relation_url(key, kind, dest)?.build();
        let ctx = RequestContext::key(&self.name, key);
        let resp = self.execute(ApiRequest::new(Method::GET, url), &ctx).await?;
        decode_value(&resp, self.client.serializer(), &ctx)
    }

    /// Create a relation of `kind` from `key` to `dest`.
    pub async fn add_link(
        &self,
        key: &str,
        kind: &str,
        dest: &GraphNode,
    ) -> Result<(), OrchestrateError> {
        let url = self.relation_url(key, kind, dest)?.build();
        let ctx = RequestContext::key(&self.name, key);
        self.execute(ApiRequest::new(Method::PUT, url), &ctx).await?;
        Ok(())
    }

    /// Create a relation of `kind` from `key` to `dest`, storing `properties` on it.
    pub async fn add_link_with_properties<T: Serialize + ?Sized>(
        &self,
        key: &str,
        kind: &str,
        dest: &GraphNode,
        properties: &T,
    ) -> Result<(), OrchestrateError> {
        let url = self.relation_url(key, kind, dest)?.build();
        let body = self.item_payload(properties)?;
        let ctx = RequestContext::key(&self.name, key);
        let req = ApiRequest::new(Method::PUT, url).body(Payload::Json(body));
        self.execute(req, &ctx).await?;
        Ok(())
    }

    /// Remove the relation of `kind` from `key` to `dest`.
    pub async fn delete_link(
        &self,
        key: &str,
        kind: &str,
        dest: &GraphNode,
    ) -> Result<(), OrchestrateError> {
        let url = self
            .relation_url(key, kind, dest)?
            .query("purge", "true")
            .build();
        let ctx = RequestContext::key(&self.name, key);
        self.execute(ApiRequest::new(Method::DELETE, url), &ctx).await?;
        Ok(())
    }

    /// List the revisions of `key`, newest first.
    pub async fn history<T: DeserializeOwned>(
        &self,
        key: &str,
        opts: &HistoryOptions,
    ) -> Result<ListResults<T>, OrchestrateError> {
        check_segment("key", key)?;
        check_opt_limit(opts.limit)?;
        let ctx = RequestContext::key(&self.name, key);
        let mut url = self.key_url(key).segment("refs");
        if opts.values {
            url = url.query("values", "true");
        }
        if let Some(l) = opts.limit {
            url = url.query("limit", &l.to_string());
        }
        if let Some(o) = opts.offset {
            url = url.query("offset", &o.to_string());
        }
        self.get_list(url.build(), &ctx).await
    }
}
