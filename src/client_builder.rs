//
// Copyright (c) 2024, 2025 Oracle and/or its affiliates. All rights reserved.
//
// Licensed under the Universal Permissive License v 1.0 as shown at
//  https://oss.oracle.com/licenses/upl/
//
//! Builder for creating an Orchestrate [`Client`](crate::Client)
//!

use std::default::Default;
use std::env;
use std::result::Result;
use std::time::Duration;

use crate::client::Client;
use crate::error::{ia_err, OrchestrateError};
use crate::file_utils::expand_user_home;
use crate::serializer::JsonSerializer;
use ini::Ini;
use tracing::debug;

/// The public Orchestrate API endpoint.
pub const DEFAULT_HOST: &str = "https://api.orchestrate.io/v0";

const DEFAULT_CONFIG_FILE_PATH: &str = "~/.orchestrate/config";
const API_KEY: &str = "api_key";
const HOST: &str = "host";

/// Builder used to set all the parameters to create an Orchestrate [`Client`](crate::Client).
///
/// Later calls override earlier ones, so defaults can be set in code and then
/// overridden by [`from_environment()`](ClientBuilder::from_environment()):
///```no_run
/// # use orchestrate_rust_sdk::Client;
/// # fn run() -> Result<(), Box<dyn std::error::Error>> {
///   let client = Client::builder()
///       .api_key_from_file("~/.orchestrate/config")?
///       .from_environment()?
///       .build()?;
/// # Ok(())
/// # }
///```
#[derive(Clone)]
pub struct ClientBuilder {
    pub(crate) host: String,
    pub(crate) api_key: String,
    pub(crate) timeout: Option<Duration>,
    pub(crate) client: Option<reqwest::Client>,
    pub(crate) serializer: JsonSerializer,
    // For error messaging
    pub(crate) from_environment: bool,
}

// api key is never printed
impl std::fmt::Debug for ClientBuilder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ClientBuilder")
            .field("host", &self.host)
            .field("api_key", &if self.api_key.is_empty() { "" } else { "***" })
            .field("timeout", &self.timeout)
            .field("serializer", &self.serializer)
            .finish()
    }
}

impl Default for ClientBuilder {
    fn default() -> Self {
        ClientBuilder {
            host: DEFAULT_HOST.to_string(),
            api_key: String::new(),
            timeout: None,
            client: None,
            serializer: JsonSerializer::default(),
            from_environment: false,
        }
    }
}

impl ClientBuilder {
    /// Create a new ClientBuilder pointing at the public Orchestrate endpoint.
    ///
    /// The default ClientBuilder has no API key. Call [`api_key()`](ClientBuilder::api_key()),
    /// [`api_key_from_file()`](ClientBuilder::api_key_from_file()) or
    /// [`from_environment()`](ClientBuilder::from_environment()) before building.
    pub fn new() -> Self {
        ClientBuilder {
            ..Default::default()
        }
    }

    /// Build a new [`Client`].
    ///
    /// If the builder holds a [`reqwest::Client`] it is cloned and used;
    /// otherwise a new one is created with the configured timeout.
    pub fn build(self) -> Result<Client, OrchestrateError> {
        Client::new(self)
    }

    /// Gather configuration settings from the current environment.
    ///
    /// | variable | description |
    /// | -------- | ----------- |
    /// | `ORCHESTRATE_AUTH_FILE` | Credentials file, see [`ClientBuilder::api_key_from_file()`]. Read first, so the variables below override it. |
    /// | `ORCHESTRATE_API_KEY` | The API key. See [`ClientBuilder::api_key()`]. |
    /// | `ORCHESTRATE_HOST` | The service endpoint. See [`ClientBuilder::host()`]. |
    /// | `ORCHESTRATE_TIMEOUT_SECS` | Request timeout in whole seconds. See [`ClientBuilder::timeout()`]. |
    ///
    pub fn from_environment(mut self) -> Result<Self, OrchestrateError> {
        self.from_environment = true;
        if let Ok(val) = env::var("ORCHESTRATE_AUTH_FILE") {
            self = self.api_key_from_file(&val)?;
        }
        if let Ok(val) = env::var("ORCHESTRATE_API_KEY") {
            self = self.api_key(&val)?;
        }
        if let Ok(val) = env::var("ORCHESTRATE_HOST") {
            self = self.host(&val)?;
        }
        if let Ok(val) = env::var("ORCHESTRATE_TIMEOUT_SECS") {
            match val.trim().parse::<u64>() {
                Ok(secs) => self = self.timeout(Duration::from_secs(secs))?,
                Err(_) => {
                    return ia_err!("invalid value '{}' for ORCHESTRATE_TIMEOUT_SECS", val);
                }
            }
        }
        Ok(self)
    }

    /// Set the API key used to authenticate every request.
    pub fn api_key(mut self, api_key: &str) -> Result<Self, OrchestrateError> {
        let k = api_key.trim();
        if k.is_empty() {
            return ia_err!("api key must not be empty");
        }
        self.api_key = k.to_string();
        Ok(self)
    }

    /// Set the service endpoint, including the API version path, such as
    /// `https://api.orchestrate.io/v0`.
    ///
    /// The value must be an `http` or `https` URL. This is typically used to
    /// target a regional endpoint or a local test server.
    pub fn host(mut self, host: &str) -> Result<Self, OrchestrateError> {
        let u = url::Url::parse(host.trim())?;
        if u.scheme() != "http" && u.scheme() != "https" {
            return ia_err!("invalid host '{}': scheme must be http or https", host);
        }
        self.host = u.to_string();
        Ok(self)
    }

    /// Read the API key (and optionally the host) from a credentials file,
    /// using the `DEFAULT` profile.
    pub fn api_key_from_file(self, config_file: &str) -> Result<Self, OrchestrateError> {
        self.api_key_from_file_with_profile(config_file, "DEFAULT")
    }

    /// Read the API key (and optionally the host) from a profile of a credentials file.
    ///
    /// The file uses ini syntax. `api_key` is required, `host` is optional:
    ///```ini
    /// [DEFAULT]
    /// api_key=<your-api-key>
    ///
    /// [eu]
    /// api_key=<another-api-key>
    /// host=https://api.aws-eu-west-1.orchestrate.io/v0
    ///```
    /// A leading `~/` in the path is expanded to the home directory. An empty
    /// path means `~/.orchestrate/config`.
    pub fn api_key_from_file_with_profile(
        mut self,
        config_file: &str,
        profile: &str,
    ) -> Result<Self, OrchestrateError> {
        let path = if config_file.is_empty() {
            DEFAULT_CONFIG_FILE_PATH
        } else {
            config_file
        };
        let file_path = expand_user_home(path)?;
        debug!(
            "Reading Orchestrate credentials from file {} and profile {}",
            file_path, profile
        );
        let config = match Ini::load_from_file(&file_path) {
            Ok(c) => c,
            Err(e) => {
                return ia_err!("error reading credentials file '{}': {}", file_path, e);
            }
        };
        let section = match config.section(Some(profile)) {
            Some(s) => s,
            None => {
                return ia_err!(
                    "error reading credentials file '{}': missing profile '{}'",
                    file_path,
                    profile
                );
            }
        };
        match section.get(API_KEY) {
            Some(k) => self = self.api_key(k)?,
            None => {
                return ia_err!(
                    "error reading credentials file '{}': missing field '{}'",
                    file_path,
                    API_KEY
                );
            }
        }
        if let Some(h) = section.get(HOST) {
            self = self.host(h)?;
        }
        Ok(self)
    }

    /// Specify the timeout used for operations.
    ///
    /// This is used for both connection and request timeouts. The default is 30 seconds.
    pub fn timeout(mut self, timeout: Duration) -> Result<Self, OrchestrateError> {
        if timeout.is_zero() {
            return ia_err!("timeout must be greater than zero");
        }
        self.timeout = Some(timeout);
        Ok(self)
    }

    /// Specify a [`reqwest::Client`] to use for all http/s connections.
    ///
    /// By default, the [`Client`] creates an internal [`reqwest::Client`]. If your
    /// application already has one, pass it here to share its connection pool.
    pub fn reqwest_client(mut self, client: &reqwest::Client) -> Result<Self, OrchestrateError> {
        self.client = Some(client.clone());
        Ok(self)
    }

    /// Specify the [`JsonSerializer`] used to convert item values.
    pub fn serializer(mut self, serializer: JsonSerializer) -> Result<Self, OrchestrateError> {
        self.serializer = serializer;
        Ok(self)
    }
}
