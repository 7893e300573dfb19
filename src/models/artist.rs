//! Artist-related models.

use serde::{Deserialize, Serialize};

use super::common::{Date, Genre};

/// An artist record.
///
/// Returned by the artist lookups and similar-artist listings, and nested
/// inside songs as the credited artists. Nested and listed artists usually
/// carry only the identifying fields; the optional profile fields are
/// populated by the full artist lookup.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Artist {
    /// SoundCharts UUID.
    pub uuid: String,

    /// URL-friendly artist handle.
    pub slug: String,

    /// Display name.
    pub name: String,

    /// Profile URL on the SoundCharts app.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub app_url: Option<String>,

    /// Artist image URL.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub country_code: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub biography: Option<String>,

    /// International Standard Name Identifier.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub isni: Option<String>,

    /// Interested Party Information number.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ipi: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub gender: Option<String>,

    /// Artist type, e.g. "person" or "group".
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub artist_type: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub birth_date: Option<Date>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub genres: Option<Vec<Genre>>,
}

impl Artist {
    /// Create an artist with only the identifying fields set.
    pub fn new<S1, S2, S3>(uuid: S1, slug: S2, name: S3) -> Self
    where
        S1: Into<String>,
        S2: Into<String>,
        S3: Into<String>,
    {
        Self {
            uuid: uuid.into(),
            slug: slug.into(),
            name: name.into(),
            app_url: None,
            image_url: None,
            country_code: None,
            biography: None,
            isni: None,
            ipi: None,
            gender: None,
            artist_type: None,
            birth_date: None,
            genres: None,
        }
    }

    /// Root genres of the artist, empty when none were returned.
    pub fn root_genres(&self) -> Vec<&str> {
        self.genres
            .iter()
            .flatten()
            .map(|g| g.root.as_str())
            .collect()
    }
}
