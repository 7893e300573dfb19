//! Audience and social metrics.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::common::Date;

/// Audience snapshot of an artist on a platform at a date.
///
/// The platform's primary fan metric (likes, subscribers, fans, ...) is
/// always reported as `follower_count`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct AudienceData {
    pub date: Date,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub like_count: Option<i64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub follower_count: Option<i64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub following_count: Option<i64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub post_count: Option<i64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub view_count: Option<i64>,
}

/// A single measured value in a song audience point.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct AudiencePlot {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub identifier: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<i64>,
}

/// Audience of a song on a platform at a date.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SongAudience {
    pub date: Date,

    /// Kind of audience measured, e.g. "streams".
    #[serde(skip_serializing_if = "Option::is_none")]
    pub audience: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub identifier: Option<String>,

    pub plots: Vec<AudiencePlot>,
}

impl SongAudience {
    /// Value of the first plot, the one the API treats as the headline value.
    pub fn value(&self) -> Option<i64> {
        self.plots.first().and_then(|p| p.value)
    }
}

/// A short-form video (YouTube short, Instagram reel) of an artist.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ShortVideo {
    pub identifier: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<Date>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub external_url: Option<String>,

    /// Latest comment/like/view counters, as returned.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub latest_audience: Option<Map<String, Value>>,
}
