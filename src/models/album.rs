//! Album-related models.

use serde::{Deserialize, Serialize};

use super::common::Date;

/// An album a song appears on, or an album of an artist.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Album {
    /// SoundCharts UUID.
    pub uuid: String,

    /// Album title.
    pub name: String,

    /// Credited artist name for the release.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub credit_name: Option<String>,

    /// Release date.
    pub release_date: Date,

    /// Album type: "album", "single" or "compil".
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub album_type: Option<String>,

    /// Whether this is the default release of the song.
    #[serde(rename = "default", skip_serializing_if = "Option::is_none")]
    pub is_default: Option<bool>,
}

impl Album {
    /// Whether the album type is "single".
    pub fn is_single(&self) -> bool {
        self.album_type.as_deref() == Some("single")
    }
}
