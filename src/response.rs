//
// Copyright (c) 2024, 2025 Oracle and/or its affiliates. All rights reserved.
//
// Licensed under the Universal Permissive License v 1.0 as shown at
//  https://oss.oracle.com/licenses/upl/
//
use crate::conditional::{metadata_from_headers, unquote_etag};
use crate::error::{ErrorCode, OrchestrateError, INVALID_CREDENTIALS_MESSAGE};
use crate::serializer::JsonSerializer;
use crate::types::{KvMetadata, KvObject};
use bytes::Bytes;
use reqwest::header::{HeaderMap, HeaderName, CONTENT_LOCATION, ETAG};
use reqwest::StatusCode;
use serde::de::DeserializeOwned;
use serde_derive::Deserialize;
use tracing::debug;

/// A response as received from the transport, before interpretation.
#[derive(Debug)]
pub(crate) struct ApiResponse {
    pub(crate) status: StatusCode,
    pub(crate) headers: HeaderMap,
    pub(crate) body: Bytes,
}

/// The collection and (if any) key a request was made for.
///
/// Used to fill in failure context and write metadata.
#[derive(Debug, Clone, Copy)]
pub(crate) struct RequestContext<'a> {
    pub(crate) collection: &'a str,
    pub(crate) key: Option<&'a str>,
}

impl<'a> RequestContext<'a> {
    pub(crate) fn collection(collection: &'a str) -> Self {
        RequestContext {
            collection,
            key: None,
        }
    }
    pub(crate) fn key(collection: &'a str, key: &'a str) -> Self {
        RequestContext {
            collection,
            key: Some(key),
        }
    }
}

// Error body sent by the service: {"message": "...", "code": "items_not_found", ...}
#[derive(Default, Debug, Deserialize)]
struct ErrorBody {
    message: Option<String>,
    code: Option<String>,
}

/// Pass successful responses through, turn all others into an [`OrchestrateError`].
pub(crate) fn check_response(
    resp: ApiResponse,
    ctx: &RequestContext,
) -> Result<ApiResponse, OrchestrateError> {
    if resp.status.is_success() {
        return Ok(resp);
    }
    Err(error_from_response(resp.status, &resp.body, ctx))
}

pub(crate) fn error_from_response(
    status: StatusCode,
    body: &[u8],
    ctx: &RequestContext,
) -> OrchestrateError {
    let eb: ErrorBody = serde_json::from_slice(body).unwrap_or_default();
    let server_message = match eb.message {
        Some(m) if !m.is_empty() => Some(m),
        _ => {
            let text = String::from_utf8_lossy(body).trim().to_string();
            if text.is_empty() || eb.code.is_some() {
                None
            } else {
                Some(text)
            }
        }
    };
    let mut err = OrchestrateError::from_status(status.as_u16(), "");
    err.message = match err.code {
        ErrorCode::Unauthorized => INVALID_CREDENTIALS_MESSAGE.to_string(),
        ErrorCode::NotFound => match ctx.key {
            Some(k) => format!("Key: {} was not found in collection: {}", k, ctx.collection),
            None => server_message.unwrap_or_else(|| {
                format!("The requested resource was not found in collection: {}", ctx.collection)
            }),
        },
        ErrorCode::PreconditionFailed => server_message.unwrap_or_else(|| {
            format!(
                "Precondition failed for key: {} in collection: {}",
                ctx.key.unwrap_or(""),
                ctx.collection
            )
        }),
        _ => server_message.unwrap_or_else(|| {
            status
                .canonical_reason()
                .unwrap_or("request failed")
                .to_string()
        }),
    };
    debug!(
        "request failed: status={} code={:?} service_code={:?}",
        status, err.code, eb.code
    );
    err.with_context(ctx.collection, ctx.key)
}

pub(crate) fn decode_error(
    status: StatusCode,
    e: serde_json::Error,
    ctx: &RequestContext,
) -> OrchestrateError {
    let mut err = OrchestrateError::new(
        ErrorCode::RequestFailed,
        &format!("could not decode response body: {}", e),
    );
    err.status = Some(status.as_u16());
    err.with_context(ctx.collection, ctx.key)
}

/// Decode a json response body into a result envelope.
pub(crate) fn decode_body<T: DeserializeOwned>(
    resp: &ApiResponse,
    ctx: &RequestContext,
) -> Result<T, OrchestrateError> {
    serde_json::from_slice(&resp.body).map_err(|e| decode_error(resp.status, e, ctx))
}

/// Decode a json response body that is a single item value.
pub(crate) fn decode_value<T: DeserializeOwned>(
    resp: &ApiResponse,
    ser: &JsonSerializer,
    ctx: &RequestContext,
) -> Result<T, OrchestrateError> {
    let value: serde_json::Value = decode_body(resp, ctx)?;
    ser.from_value(value)
        .map_err(|e| decode_error(resp.status, e, ctx))
}

pub(crate) fn metadata(resp: &ApiResponse, ctx: &RequestContext) -> KvMetadata {
    metadata_from_headers(&resp.headers, ctx.collection, ctx.key)
}

/// Build a [`KvObject`] from a read response.
///
/// The version reference comes from the `ETag` header, the location from
/// `Content-Location`.
pub(crate) fn object<T: DeserializeOwned>(
    resp: &ApiResponse,
    ser: &JsonSerializer,
    ctx: &RequestContext,
) -> Result<KvObject<T>, OrchestrateError> {
    let value = decode_value(resp, ser, ctx)?;
    let header = |name: HeaderName| resp.headers.get(name).and_then(|v| v.to_str().ok());
    let version_reference = header(ETAG).map(unquote_etag).unwrap_or("").to_string();
    let location = header(CONTENT_LOCATION).unwrap_or("").to_string();
    Ok(KvObject {
        collection_name: ctx.collection.to_string(),
        key: ctx.key.unwrap_or("").to_string(),
        version_reference,
        location,
        value,
    })
}
