//! Playlist-related models.
//!
//! A song's playlist entries come back as one object per playlist, holding
//! the playlist itself plus the song's position in it. They are split into a
//! [`Playlist`] and a [`PlaylistPosition`] and handed out as a
//! [`PlaylistEntry`] pair.

use serde::{Deserialize, Serialize};

use super::common::Date;

/// Owner of a playlist.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct PlaylistOwner {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub identifier: Option<String>,
}

/// Playlist metadata.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Playlist {
    /// SoundCharts UUID.
    pub uuid: String,

    /// Playlist name.
    pub name: String,

    /// Identifier on the hosting platform.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub identifier: Option<String>,

    /// Hosting platform code.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub platform: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub country_code: Option<String>,

    /// When the playlist was last crawled.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub latest_crawl_date: Option<Date>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub latest_track_count: Option<i64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub latest_subscriber_count: Option<i64>,

    /// Playlist type, e.g. "editorial" or "algorithmic".
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub playlist_type: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub owner: Option<PlaylistOwner>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub app_url: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,

    /// Whether the platform refreshes the playlist on a schedule.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub refreshed: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub available_country_codes: Option<Vec<String>>,
}

/// Position of a song inside a playlist.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PlaylistPosition {
    /// Current position (1-based).
    pub position: i64,

    /// Best position reached.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub peak_position: Option<i64>,

    /// When the song entered the playlist.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub entry_date: Option<Date>,

    /// Date the current position was observed.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub position_date: Option<Date>,

    /// Date the peak position was reached.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub peak_position_date: Option<Date>,
}

/// A playlist together with the song's position in it.
pub type PlaylistEntry = (Playlist, PlaylistPosition);
