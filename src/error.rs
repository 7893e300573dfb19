//! Error types for the SoundCharts API.

use thiserror::Error;

/// Main error type for all SoundCharts operations.
#[derive(Debug, Error)]
pub enum SoundChartsError {
    /// The API answered with an `errors` envelope.
    #[error("http status: {http_status}, code: {code} - {message}")]
    Api {
        /// HTTP status of the response that carried the error.
        http_status: u16,
        /// API error code, as reported by the service.
        code: String,
        /// Human readable message from the service.
        message: String,
    },

    /// The response claimed success but did not have the expected shape.
    #[error("Mapping error: {0}")]
    Mapping(#[from] MappingError),

    /// HTTP request failed.
    #[error("Request error: {0}")]
    Request(#[from] reqwest::Error),

    /// Response body was not JSON.
    #[error("Decode error: {0}")]
    Decode(#[from] serde_json::Error),

    /// A configured URL could not be parsed.
    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    /// Client configuration was rejected.
    #[error("Configuration error: {0}")]
    Config(String),
}

impl SoundChartsError {
    /// HTTP status reported alongside an API error.
    pub fn http_status(&self) -> Option<u16> {
        match self {
            Self::Api { http_status, .. } => Some(*http_status),
            Self::Request(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }

    /// Whether the service reported the requested resource as missing.
    pub fn is_not_found(&self) -> bool {
        self.http_status() == Some(404)
    }
}

/// A success response that violated the API contract.
#[derive(Debug, Error)]
pub enum MappingError {
    /// A required field or sub-object was absent (or null).
    #[error("missing required field `{field}`")]
    MissingField { field: String },

    /// A field was present with the wrong JSON type.
    #[error("field `{field}` is not {expected}")]
    InvalidType {
        field: String,
        expected: &'static str,
    },

    /// A date-like field could not be parsed.
    #[error("field `{field}` has unparsable date `{value}`: {source}")]
    InvalidDate {
        field: String,
        value: String,
        #[source]
        source: chrono::ParseError,
    },

    /// Neither the expected success key nor an error envelope was present.
    #[error("response has no `{key}` key")]
    MissingEnvelope { key: &'static str },
}

/// Result type alias for SoundCharts operations.
pub type Result<T> = std::result::Result<T, SoundChartsError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_error_display() {
        let err = SoundChartsError::Api {
            http_status: 404,
            code: "404".to_string(),
            message: "Song not found".to_string(),
        };
        assert_eq!(err.to_string(), "http status: 404, code: 404 - Song not found");
        assert!(err.is_not_found());
    }

    #[test]
    fn test_mapping_error_is_distinct() {
        let err: SoundChartsError = MappingError::MissingField {
            field: "isrc".to_string(),
        }
        .into();
        assert!(matches!(err, SoundChartsError::Mapping(_)));
        assert_eq!(err.http_status(), None);
        assert!(!err.is_not_found());
    }
}
