//
// Copyright (c) 2024 Oracle and/or its affiliates. All rights reserved.
//
// Licensed under the Universal Permissive License v 1.0 as shown at
//  https://oss.oracle.com/licenses/upl/
//
use num_enum::TryFromPrimitive;

include!(concat!(env!("OUT_DIR"), "/ua.rs"));

pub(crate) fn sdk_version() -> &'static str {
    SDK_VERSION
}

pub(crate) fn user_agent() -> &'static str {
    USER_AGENT
}

/// Message returned for every operation attempted with invalid credentials.
pub const INVALID_CREDENTIALS_MESSAGE: &str = "Valid credentials are required.";

/// The error type returned by every fallible operation in this library.
///
/// The [`code`](OrchestrateError::code) field classifies the failure. Errors
/// reported by the service carry the HTTP `status`; errors raised locally
/// (argument validation, transport failures) may not.
#[derive(Debug, Clone)]
pub struct OrchestrateError {
    pub code: ErrorCode,
    pub status: Option<u16>,
    pub message: String,
    pub collection: Option<String>,
    pub key: Option<String>,
}

impl std::error::Error for OrchestrateError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        None
    }
}

impl std::fmt::Display for OrchestrateError {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        if let Some(s) = self.status {
            return write!(
                f,
                "code={:?} status={} message=\"{}\"",
                self.code, s, self.message
            );
        }
        write!(f, "code={:?} message=\"{}\"", self.code, self.message)
    }
}

impl OrchestrateError {
    pub fn new(code: ErrorCode, msg: &str) -> OrchestrateError {
        OrchestrateError {
            code,
            status: None,
            message: msg.to_string(),
            collection: None,
            key: None,
        }
    }

    /// Create an error from an HTTP status returned by the service.
    ///
    /// Statuses without a dedicated [`ErrorCode`] map to [`ErrorCode::RequestFailed`].
    pub fn from_status(status: u16, msg: &str) -> OrchestrateError {
        let code = match ErrorCode::try_from(status) {
            Ok(c) if status >= 400 => c,
            _ => ErrorCode::RequestFailed,
        };
        OrchestrateError {
            code,
            status: Some(status),
            message: msg.to_string(),
            collection: None,
            key: None,
        }
    }

    pub(crate) fn with_context(mut self, collection: &str, key: Option<&str>) -> Self {
        self.collection = Some(collection.to_string());
        self.key = key.map(|k| k.to_string());
        self
    }

    /// True if this error was raised before any request was sent.
    pub fn is_validation(&self) -> bool {
        self.code == ErrorCode::IllegalArgument
    }
}

macro_rules! ia_error {
    ($($t:tt)*) => {{
        let m = format!($($t)*);
        crate::error::OrchestrateError::new(
            crate::error::ErrorCode::IllegalArgument,
            &format!("{} ({})", m, crate::error::sdk_version()),
        )
    }};
}

pub(crate) use ia_error;

macro_rules! ia_err {
    ($($t:tt)*) => {{
        Err(crate::error::ia_error!($($t)*))
    }};
}

pub(crate) use ia_err;

impl From<reqwest::Error> for OrchestrateError {
    fn from(e: reqwest::Error) -> Self {
        let mut err = OrchestrateError::new(
            ErrorCode::Transport,
            &format!("reqwest error: {} ({})", e, sdk_version()),
        );
        if let Some(s) = e.status() {
            err.status = Some(s.as_u16());
        }
        err
    }
}

impl From<reqwest::header::InvalidHeaderValue> for OrchestrateError {
    fn from(e: reqwest::header::InvalidHeaderValue) -> Self {
        ia_error!("invalid header value: {}", e)
    }
}

impl From<url::ParseError> for OrchestrateError {
    fn from(e: url::ParseError) -> Self {
        ia_error!("error parsing url: {}", e)
    }
}

impl From<serde_json::Error> for OrchestrateError {
    fn from(e: serde_json::Error) -> Self {
        ia_error!("error serializing item: {}", e)
    }
}

/// The closed set of failure kinds.
///
/// The three codes mapped from HTTP statuses use the status as their
/// discriminant, so `ErrorCode::try_from(404)` yields [`ErrorCode::NotFound`].
#[derive(Debug, Clone, Copy, Eq, PartialEq, TryFromPrimitive)]
#[repr(u16)]
pub enum ErrorCode {
    /// The caller supplied an invalid argument. Raised before any network call.
    IllegalArgument = 1,

    /// The request could not be sent or the response could not be read
    /// (connection refused, timeout, TLS failure, ...).
    Transport = 2,

    /// Any other failure status returned by the service, including server
    /// errors and success bodies that could not be decoded.
    RequestFailed = 3,

    /// The API key is missing or invalid.
    Unauthorized = 401,

    /// The key or resource does not exist.
    NotFound = 404,

    /// A conditional write did not hold: the stored version did not match
    /// the supplied reference, or a create-only write found an existing value.
    #[num_enum(alternatives = [409])]
    PreconditionFailed = 412,
}
