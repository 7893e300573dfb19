//! Authenticated GET transport.
//!
//! Every request goes to a fixed base URL with the two credential headers.
//! The decoded body is checked for an `errors` envelope before anything else
//! looks at it.

use std::fmt;
use std::sync::Arc;

use reqwest::blocking::Client;
use reqwest::header::{HeaderMap, HeaderName, HeaderValue};
use reqwest::Url;
use serde_json::{Map, Value};
use tracing::{debug, error, warn};

use crate::converters::value_to_string;
use crate::error::{MappingError, Result, SoundChartsError};

use super::endpoints::Endpoint;

/// Header carrying the application id.
pub const APP_ID_HEADER: &str = "x-app-id";

/// Header carrying the API key.
pub const API_KEY_HEADER: &str = "x-api-key";

/// Credentials sent on every request.
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    app_id: String,
    api_key: String,
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("app_id", &self.app_id)
            .field("api_key", &"[REDACTED]")
            .finish()
    }
}

impl Credentials {
    /// Create credentials from an application id and API key.
    ///
    /// # Errors
    ///
    /// Returns `Config` if either value is empty.
    pub fn new(app_id: impl Into<String>, api_key: impl Into<String>) -> Result<Self> {
        let app_id = app_id.into();
        let api_key = api_key.into();
        if app_id.trim().is_empty() {
            return Err(SoundChartsError::Config("app id cannot be empty".to_string()));
        }
        if api_key.trim().is_empty() {
            return Err(SoundChartsError::Config("API key cannot be empty".to_string()));
        }
        Ok(Self { app_id, api_key })
    }

    /// Public sandbox credentials, limited to the demo catalogue.
    pub fn sandbox() -> Self {
        Self {
            app_id: "soundcharts".to_string(),
            api_key: "soundcharts".to_string(),
        }
    }

    pub fn app_id(&self) -> &str {
        &self.app_id
    }

    fn headers(&self) -> Result<HeaderMap> {
        let mut headers = HeaderMap::new();
        for (name, value) in [(APP_ID_HEADER, &self.app_id), (API_KEY_HEADER, &self.api_key)] {
            let value = HeaderValue::from_str(value).map_err(|_| {
                SoundChartsError::Config(format!("{} is not a valid header value", name))
            })?;
            headers.insert(HeaderName::from_static(name), value);
        }
        Ok(headers)
    }
}

/// Status and body of a completed HTTP exchange.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawResponse {
    pub status: u16,
    pub body: String,
}

/// The HTTP mechanism used by [`Transport`].
///
/// Implemented for the blocking reqwest client; tests substitute a mock.
pub trait HttpBackend: Send + Sync {
    /// Perform one GET and return the raw response.
    fn get(&self, url: &Url, headers: &HeaderMap) -> Result<RawResponse>;
}

impl HttpBackend for Client {
    fn get(&self, url: &Url, headers: &HeaderMap) -> Result<RawResponse> {
        let response = Client::get(self, url.clone())
            .headers(headers.clone())
            .send()?;
        let status = response.status().as_u16();
        let body = response.text()?;
        Ok(RawResponse { status, body })
    }
}

/// Issues authenticated GETs against the API and inspects the envelope.
#[derive(Clone)]
pub struct Transport {
    base_url: Url,
    credentials: Credentials,
    backend: Arc<dyn HttpBackend>,
}

impl fmt::Debug for Transport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Transport")
            .field("base_url", &self.base_url.as_str())
            .field("credentials", &self.credentials)
            .finish()
    }
}

impl Transport {
    /// Any path on `base_url` is kept as a prefix of every endpoint path.
    pub fn new(mut base_url: Url, credentials: Credentials, backend: Arc<dyn HttpBackend>) -> Self {
        if !base_url.path().ends_with('/') {
            let path = format!("{}/", base_url.path());
            base_url.set_path(&path);
        }
        Self {
            base_url,
            credentials,
            backend,
        }
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Full request URL for an endpoint.
    pub fn url_for(&self, endpoint: &Endpoint) -> Result<Url> {
        let relative = endpoint.path_and_query();
        Ok(self.base_url.join(relative.trim_start_matches('/'))?)
    }

    /// GET an endpoint and return the decoded mapping.
    ///
    /// # Errors
    ///
    /// - `Api` if the body holds a non-empty `errors` list, whatever else it
    ///   contains
    /// - `Request` if the HTTP exchange failed
    /// - `Decode` if the body is not JSON
    /// - `Mapping` if the body is JSON but not an object
    pub fn get(&self, endpoint: &Endpoint) -> Result<Map<String, Value>> {
        let url = self.url_for(endpoint)?;
        debug!("GET {}", url);

        let headers = self.credentials.headers()?;
        let response = self.backend.get(&url, &headers)?;
        let data: Value = serde_json::from_str(&response.body)?;

        check_errors(response.status, &data)?;

        if !(200..300).contains(&response.status) {
            warn!(
                "Non-success status {} without error envelope for {}",
                response.status, endpoint.path
            );
        }

        match data {
            Value::Object(map) => Ok(map),
            _ => Err(MappingError::InvalidType {
                field: "response".to_string(),
                expected: "an object",
            }
            .into()),
        }
    }

    /// GET a single-resource endpoint and take its `object`.
    pub fn object(&self, endpoint: &Endpoint) -> Result<Value> {
        let mut data = self.get(endpoint)?;
        data.remove("object")
            .ok_or_else(|| MappingError::MissingEnvelope { key: "object" }.into())
    }

    /// GET a list endpoint and take its `items`.
    pub fn items(&self, endpoint: &Endpoint) -> Result<Vec<Value>> {
        let mut data = self.get(endpoint)?;
        match data.remove("items") {
            Some(Value::Array(items)) => Ok(items),
            Some(_) => Err(MappingError::InvalidType {
                field: "items".to_string(),
                expected: "a list",
            }
            .into()),
            None => Err(MappingError::MissingEnvelope { key: "items" }.into()),
        }
    }
}

/// Raise an `Api` error if the response carries an `errors` envelope.
///
/// Code and message come from the first error element.
pub fn check_errors(http_status: u16, data: &Value) -> Result<()> {
    let first = match data
        .get("errors")
        .and_then(|e| e.as_array())
        .and_then(|e| e.first())
    {
        Some(first) => first,
        None => return Ok(()),
    };

    let code = first
        .get("code")
        .filter(|c| !c.is_null())
        .map(value_to_string)
        .unwrap_or_default();
    let message = first
        .get("message")
        .and_then(|m| m.as_str())
        .unwrap_or("Unknown error")
        .to_string();

    error!("SoundCharts API error {} ({}): {}", code, http_status, message);
    Err(SoundChartsError::Api {
        http_status,
        code,
        message,
    })
}

#[cfg(test)]
pub(crate) mod mock {
    use super::*;
    use mockall::mock;

    mock! {
        pub Backend {}

        impl HttpBackend for Backend {
            fn get(&self, url: &Url, headers: &HeaderMap) -> Result<RawResponse>;
        }
    }
}
