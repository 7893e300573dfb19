//! Common types shared across all models.

use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};

/// Structured date carried by every date-like API field.
///
/// The offset of the wire value is kept; equality compares instants.
pub type Date = DateTime<FixedOffset>;

/// Genre taxonomy entry.
///
/// The sub-genre list may be empty but is always present.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Genre {
    /// Root category, e.g. "pop".
    pub root: String,

    /// Sub-categories under the root.
    pub sub: Vec<String>,
}

impl Genre {
    /// Create a genre from a root and its sub-categories.
    pub fn new<S: Into<String>>(root: S, sub: Vec<String>) -> Self {
        Self {
            root: root.into(),
            sub,
        }
    }
}

/// Record label credited on a song.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Label {
    /// Label name.
    pub name: String,

    /// Label category (e.g. "major", "indie").
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub label_type: Option<String>,
}

/// Identifier of a song or artist on an external platform.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct PlatformIdentifier {
    /// Display name of the platform (e.g. "Spotify").
    #[serde(skip_serializing_if = "Option::is_none")]
    pub platform_name: Option<String>,

    /// Short platform code (e.g. "spotify").
    pub platform_code: String,

    /// Identifier on the platform.
    pub identifier: String,

    /// Link to the resource on the platform.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,

    /// Whether this is the default identifier for the platform.
    #[serde(rename = "default", skip_serializing_if = "Option::is_none")]
    pub is_default: Option<bool>,
}
