//! Radio airplay models.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::common::Date;

/// A radio station.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct RadioStation {
    /// Station handle, e.g. "bbc-2".
    pub slug: String,

    pub name: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub city_name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub country_code: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub country_name: Option<String>,

    /// IANA time zone of the station.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub time_zone: Option<String>,
}

/// One airing of a song on a radio station.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct RadioSpin {
    /// Station that aired the song.
    pub radio: RadioStation,

    /// When the song aired.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub aired_at: Option<Date>,

    /// Airing duration in seconds.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration: Option<i64>,

    /// Remaining fields of the spin, as returned.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}
