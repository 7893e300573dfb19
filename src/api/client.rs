//! SoundCharts API client.
//!
//! Operations are spread over one `impl SoundCharts` block per resource
//! (songs, artists, playlists). Every operation is one GET followed by one
//! mapping step; nothing is cached between calls.

use std::sync::Arc;

use reqwest::blocking::Client;
use reqwest::Url;
use serde_json::{Map, Value};
use tracing::debug;

use crate::error::Result;

use super::endpoints::Endpoint;
use super::transport::{Credentials, HttpBackend, Transport};

/// Base URL for the SoundCharts customer API.
pub const API_BASE_URL: &str = "https://customer.api.soundcharts.com";

const USER_AGENT: &str = concat!("soundcharts-rs/", env!("CARGO_PKG_VERSION"));

/// SoundCharts API client.
///
/// Calls are blocking. The client only holds read-only configuration, so it
/// can be cloned or shared between threads freely.
///
/// # Example
///
/// ```rust,no_run
/// use soundcharts::SoundCharts;
///
/// fn main() -> Result<(), Box<dyn std::error::Error>> {
///     let sc = SoundCharts::new("your_app_id", "your_api_key")?;
///     let song = sc.song("7d534228-5165-11e9-9375-549f35161576")?;
///     println!("Song: {} by {}", song.name, song.artists_string(", "));
///     Ok(())
/// }
/// ```
#[derive(Debug, Clone)]
pub struct SoundCharts {
    transport: Transport,
}

impl SoundCharts {
    /// Create a client against the production API.
    ///
    /// # Errors
    ///
    /// Returns `Config` if a credential is empty, or `Request` if the HTTP
    /// client cannot be built.
    pub fn new(app_id: impl Into<String>, api_key: impl Into<String>) -> Result<Self> {
        Self::builder(Credentials::new(app_id, api_key)?).build()
    }

    /// Start configuring a client.
    pub fn builder(credentials: Credentials) -> SoundChartsBuilder {
        SoundChartsBuilder::new(credentials)
    }

    pub fn transport(&self) -> &Transport {
        &self.transport
    }

    /// Fetch a single-resource endpoint and map its `object`.
    pub(crate) fn fetch_object<T, F>(&self, endpoint: Endpoint, parse: F) -> Result<T>
    where
        F: FnOnce(&Value) -> Result<T>,
    {
        let object = self.transport.object(&endpoint)?;
        parse(&object)
    }

    /// Fetch a list endpoint and map its `items`.
    pub(crate) fn fetch_items<T, F>(&self, endpoint: Endpoint, parse: F) -> Result<Vec<T>>
    where
        F: Fn(&Value) -> Result<T>,
    {
        let items = self.transport.items(&endpoint)?;
        let mapped = items.iter().map(parse).collect::<Result<Vec<_>>>()?;
        debug!("Mapped {} items from {}", mapped.len(), endpoint.path);
        Ok(mapped)
    }

    /// Fetch an endpoint whose body is handed back undecoded.
    pub(crate) fn fetch_raw(&self, endpoint: Endpoint) -> Result<Map<String, Value>> {
        self.transport.get(&endpoint)
    }
}

/// Builder for [`SoundCharts`].
pub struct SoundChartsBuilder {
    credentials: Credentials,
    base_url: String,
    user_agent: String,
    backend: Option<Arc<dyn HttpBackend>>,
}

impl SoundChartsBuilder {
    fn new(credentials: Credentials) -> Self {
        Self {
            credentials,
            base_url: API_BASE_URL.to_string(),
            user_agent: USER_AGENT.to_string(),
            backend: None,
        }
    }

    /// Override the API host, e.g. for a sandbox or a local stub.
    ///
    /// A path on the URL (`http://localhost:8080/soundcharts`) is kept in
    /// front of every endpoint path.
    pub fn base_url(mut self, base_url: &str) -> Self {
        self.base_url = base_url.to_string();
        self
    }

    /// User agent of the default HTTP backend.
    pub fn user_agent(mut self, user_agent: &str) -> Self {
        self.user_agent = user_agent.to_string();
        self
    }

    /// Use a custom HTTP backend instead of the default reqwest client.
    pub fn backend<B: HttpBackend + 'static>(mut self, backend: B) -> Self {
        self.backend = Some(Arc::new(backend));
        self
    }

    /// Build the client.
    ///
    /// # Errors
    ///
    /// Returns `InvalidUrl` for an unparsable base URL, or `Request` if the
    /// default HTTP client cannot be built.
    pub fn build(self) -> Result<SoundCharts> {
        let base_url = Url::parse(&self.base_url)?;

        let backend = match self.backend {
            Some(backend) => backend,
            None => Arc::new(Client::builder().user_agent(self.user_agent).build()?),
        };

        Ok(SoundCharts {
            transport: Transport::new(base_url, self.credentials, backend),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::testing::{mock_client, mock_client_status};
    use crate::error::SoundChartsError;
    use serde_json::json;

    #[test]
    fn test_builder_defaults() {
        let sc = SoundCharts::new("app", "key").unwrap();
        assert_eq!(
            sc.transport().base_url().as_str(),
            "https://customer.api.soundcharts.com/"
        );
    }

    #[test]
    fn test_builder_rejects_bad_base_url() {
        let err = SoundCharts::builder(Credentials::sandbox())
            .base_url("not a url")
            .build()
            .unwrap_err();
        assert!(matches!(err, SoundChartsError::InvalidUrl(_)));
    }

    #[test]
    fn test_builder_custom_base_url() {
        let sc = SoundCharts::builder(Credentials::sandbox())
            .base_url("https://sandbox.api.soundcharts.com")
            .build()
            .unwrap();
        let url = sc
            .transport()
            .url_for(&Endpoint::new("/api/v2.9/artist/abc"))
            .unwrap();
        assert_eq!(url.as_str(), "https://sandbox.api.soundcharts.com/api/v2.9/artist/abc");
    }

    #[test]
    fn test_builder_base_url_with_path() {
        let sc = SoundCharts::builder(Credentials::sandbox())
            .base_url("http://localhost:8080/soundcharts")
            .build()
            .unwrap();
        let url = sc
            .transport()
            .url_for(&Endpoint::new("/api/v2.8/playlist/abc"))
            .unwrap();
        assert_eq!(url.as_str(), "http://localhost:8080/soundcharts/api/v2.8/playlist/abc");
    }

    #[test]
    fn test_fetch_items_propagates_mapping_error() {
        let sc = mock_client(
            "/api/v2/song/abc/albums",
            json!({ "items": [{ "uuid": "a1", "name": "x", "releaseDate": "bad" }] }),
        );
        let err = sc
            .fetch_items(Endpoint::new("/api/v2/song/abc/albums"), crate::converters::parse_album)
            .unwrap_err();
        assert!(matches!(err, SoundChartsError::Mapping(_)));
    }

    #[test]
    fn test_fetch_raw_surfaces_api_error() {
        let sc = mock_client_status(
            "/api/v2/artist/abc/current/stats",
            403,
            json!({ "errors": [{ "code": 403, "message": "Forbidden" }] }),
        );
        let err = sc
            .fetch_raw(Endpoint::new("/api/v2/artist/abc/current/stats"))
            .unwrap_err();
        assert_eq!(err.http_status(), Some(403));
    }
}
