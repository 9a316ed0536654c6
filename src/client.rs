//
// Copyright (c) 2024, 2025 Oracle and/or its affiliates. All rights reserved.
//
// Licensed under the Universal Permissive License v 1.0 as shown at
//  https://oss.oracle.com/licenses/upl/
//
use crate::client_builder::ClientBuilder;
use crate::collection::Collection;
use crate::conditional::Precondition;
use crate::error::{ia_err, user_agent, OrchestrateError};
use crate::response::{check_response, ApiResponse, RequestContext};
use crate::serializer::JsonSerializer;
use crate::types::KvMetadata;
use crate::url_builder::{check_segment, UrlBuilder};
use base64::prelude::{Engine as _, BASE64_STANDARD};
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, AUTHORIZATION, CONTENT_TYPE, USER_AGENT};
use reqwest::Method;
use serde::Serialize;

use std::result::Result;
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, trace};
use url::Url;

/// **The main Orchestrate client**.
///
/// This should be created once and used throughout the application
/// lifetime, across all threads and tasks. It holds only immutable
/// configuration and the underlying [`reqwest::Client`] connection pool.
///
/// Note: there is no need to enclose this struct in an `Rc` or [`Arc`], as it uses an
/// [`Arc`] internally, so calling `.clone()` on this struct will always return the
/// same underlying client.
#[derive(Clone, Debug)]
pub struct Client {
    // Use an inner Arc so cloning keeps the same contents
    pub(crate) inner: Arc<ClientRef>,
}

#[derive(Debug)]
pub(crate) struct ClientRef {
    pub(crate) client: reqwest::Client,
    pub(crate) host: Url,
    pub(crate) serializer: JsonSerializer,
    authorization: HeaderValue,
    timeout: Duration,
}

/// Body of a request, tagged with the content type the service expects for it.
#[derive(Debug)]
pub(crate) enum Payload {
    Json(Vec<u8>),
    MergePatch(Vec<u8>),
    JsonPatch(Vec<u8>),
}

impl Payload {
    fn content_type(&self) -> &'static str {
        match self {
            Payload::Json(_) => "application/json",
            Payload::MergePatch(_) => "application/merge-patch+json",
            Payload::JsonPatch(_) => "application/json-patch+json",
        }
    }
    fn into_bytes(self) -> Vec<u8> {
        match self {
            Payload::Json(b) | Payload::MergePatch(b) | Payload::JsonPatch(b) => b,
        }
    }
}

/// A fully described request, ready to be sent.
#[derive(Debug)]
pub(crate) struct ApiRequest {
    pub(crate) method: Method,
    pub(crate) url: Url,
    pub(crate) precondition: Precondition,
    pub(crate) body: Option<Payload>,
}

impl ApiRequest {
    pub(crate) fn new(method: Method, url: Url) -> ApiRequest {
        ApiRequest {
            method,
            url,
            precondition: Precondition::None,
            body: None,
        }
    }
    pub(crate) fn precondition(mut self, p: Precondition) -> ApiRequest {
        self.precondition = p;
        self
    }
    pub(crate) fn body(mut self, body: Payload) -> ApiRequest {
        self.body = Some(body);
        self
    }
}

impl Client {
    /// Create a new [`ClientBuilder`].
    pub fn builder() -> ClientBuilder {
        ClientBuilder::new()
    }

    // Create the new Client based on builder configuration
    pub(crate) fn new(builder: ClientBuilder) -> Result<Client, OrchestrateError> {
        if builder.api_key.is_empty() {
            if builder.from_environment {
                return ia_err!("cannot build client: no api key specified. set ORCHESTRATE_API_KEY or ORCHESTRATE_AUTH_FILE environment.");
            }
            return ia_err!("cannot build client: no api key specified");
        }
        let host = Url::parse(&builder.host)?;
        if host.cannot_be_a_base() {
            return ia_err!("invalid host '{}'", builder.host);
        }
        // default timeout to 30 seconds
        let timeout = builder.timeout.unwrap_or(Duration::from_secs(30));
        let client = match &builder.client {
            Some(c) => c.clone(),
            None => reqwest::Client::builder()
                .timeout(timeout)
                .connect_timeout(timeout)
                .build()?,
        };
        // Basic auth: the api key is the user name, the password is empty
        let creds = BASE64_STANDARD.encode(format!("{}:", builder.api_key));
        let mut authorization = HeaderValue::from_str(&format!("Basic {}", creds))?;
        authorization.set_sensitive(true);
        debug!("Creating new Client: {:?}", builder);
        Ok(Client {
            inner: Arc::new(ClientRef {
                client,
                host,
                serializer: builder.serializer,
                authorization,
                timeout,
            }),
        })
    }

    /// Get a [`Collection`] for the given collection name.
    ///
    /// This makes no network call; the collection does not need to exist yet.
    pub fn collection(&self, name: &str) -> Result<Collection, OrchestrateError> {
        check_segment("collection name", name)?;
        Ok(Collection::new(self.clone(), name))
    }

    /// Check that the service is reachable and the API key is valid.
    pub async fn ping(&self) -> Result<(), OrchestrateError> {
        let url = self.inner.host.clone();
        let resp = self.send(ApiRequest::new(Method::HEAD, url)).await?;
        check_response(resp, &RequestContext::collection(""))?;
        Ok(())
    }

    /// Create a collection by storing its first item under `key`.
    ///
    /// Collections are created implicitly by their first write; this fails
    /// with a precondition failure if `key` already holds a value.
    pub async fn create_collection<T: Serialize + ?Sized>(
        &self,
        name: &str,
        key: &str,
        item: &T,
    ) -> Result<KvMetadata, OrchestrateError> {
        self.collection(name)?.try_add(key, item).await
    }

    /// Delete a collection and all of its items, permanently.
    pub async fn delete_collection(&self, name: &str) -> Result<(), OrchestrateError> {
        check_segment("collection name", name)?;
        let url = UrlBuilder::new(&self.inner.host)
            .segment(name)
            .query("force", "true")
            .build();
        let resp = self.send(ApiRequest::new(Method::DELETE, url)).await?;
        check_response(resp, &RequestContext::collection(name))?;
        Ok(())
    }

    pub(crate) fn host(&self) -> &Url {
        &self.inner.host
    }

    pub(crate) fn serializer(&self) -> &JsonSerializer {
        &self.inner.serializer
    }

    /// Send a single request and return the raw response.
    ///
    /// Only transport failures are reported as errors here; the status code
    /// is interpreted by the caller.
    pub(crate) async fn send(&self, req: ApiRequest) -> Result<ApiResponse, OrchestrateError> {
        let mut headers = HeaderMap::new();
        headers.insert(AUTHORIZATION, self.inner.authorization.clone());
        headers.insert(USER_AGENT, HeaderValue::from_str(user_agent())?);
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
        req.precondition.apply(&mut headers)?;

        trace!("{} {} precondition={:?}", req.method, req.url, req.precondition);
        let mut rb = self
            .inner
            .client
            .request(req.method.clone(), req.url.clone())
            .timeout(self.inner.timeout);
        if let Some(body) = req.body {
            headers.insert(CONTENT_TYPE, HeaderValue::from_static(body.content_type()));
            rb = rb.body(body.into_bytes());
        }
        let resp = rb.headers(headers).send().await?;

        let status = resp.status();
        let headers = resp.headers().clone();
        let body = resp.bytes().await?;
        debug!(
            "{} {} -> {} ({} bytes)",
            req.method,
            req.url.path(),
            status,
            body.len()
        );
        Ok(ApiResponse {
            status,
            headers,
            body,
        })
    }
}
