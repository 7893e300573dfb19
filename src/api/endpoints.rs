//! Endpoint templates and query building.
//!
//! Each API operation targets its own frozen API version, so the version is
//! part of every template. Path placeholders are substituted verbatim; query
//! parameters are form-encoded.

use url::form_urlencoded;

use super::options::{DateRange, Page};

pub const SONG: &str = "/api/v2.25/song/{uuid}";
pub const SONG_BY_ISRC: &str = "/api/v2.25/song/by-isrc/{isrc}";
pub const SONG_BY_PLATFORM: &str = "/api/v2.25/song/by-platform/{platform}/{identifier}";
pub const SONG_IDENTIFIERS: &str = "/api/v2/song/{uuid}/identifiers";
pub const SONG_ALBUMS: &str = "/api/v2/song/{uuid}/albums";
pub const SONG_AUDIENCE: &str = "/api/v2/song/{uuid}/audience/{platform}";
pub const SONG_SPOTIFY_POPULARITY: &str = "/api/v2/song/{uuid}/spotify/identifier/popularity";
pub const SONG_CHART_ENTRIES: &str = "/api/v2/song/{uuid}/charts/ranks/{platform}";
pub const SONG_PLAYLIST_ENTRIES: &str = "/api/v2.20/song/{uuid}/playlist/current/{platform}";
pub const SONG_RADIO_SPINS: &str = "/api/v2/song/{uuid}/broadcasts";

pub const ARTIST: &str = "/api/v2.9/artist/{uuid}";
pub const ARTIST_BY_PLATFORM: &str = "/api/v2.9/artist/by-platform/{platform}/{identifier}";
pub const ARTIST_IDENTIFIERS: &str = "/api/v2/artist/{uuid}/identifiers";
pub const ARTIST_SONGS: &str = "/api/v2.21/artist/{uuid}/songs";
pub const ARTIST_ALBUMS: &str = "/api/v2.34/artist/{uuid}/albums";
pub const ARTIST_SIMILAR: &str = "/api/v2/artist/{uuid}/related";
pub const ARTIST_CURRENT_STATS: &str = "/api/v2/artist/{uuid}/current/stats";
pub const ARTIST_AUDIENCE: &str = "/api/v2/artist/{uuid}/audience/{platform}";
pub const ARTIST_LOCAL_AUDIENCE: &str = "/api/v2.37/artist/{uuid}/social/{platform}/followers/";
pub const ARTIST_LISTENING: &str = "/api/v2/artist/{uuid}/streaming/{platform}/listening";
pub const ARTIST_SPOTIFY_LISTENERS: &str = "/api/v2/artist/{uuid}/streaming/spotify/listeners";
pub const ARTIST_SPOTIFY_LISTENERS_BY_MONTH: &str =
    "/api/v2/artist/{uuid}/streaming/spotify/listeners/{year}/{month}";
pub const ARTIST_RETENTION: &str = "/api/v2/artist/{uuid}/{platform}/retention";
pub const ARTIST_POPULARITY: &str = "/api/v2/artist/{uuid}/popularity/{platform}";
pub const ARTIST_AUDIENCE_REPORT_LATEST: &str =
    "/api/v2/artist/{uuid}/audience/{platform}/report/latest";
pub const ARTIST_AUDIENCE_REPORT_DATES: &str =
    "/api/v2/artist/{uuid}/audience/{platform}/report/available-dates";
pub const ARTIST_AUDIENCE_REPORT_BY_DATE: &str =
    "/api/v2/artist/{uuid}/audience/{platform}/report/{date}";
pub const ARTIST_SHORT_VIDEOS: &str = "/api/v2/artist/{uuid}/shorts/{platform}/videos";
pub const ARTIST_SHORT_VIDEO_AUDIENCE: &str = "/api/v2/artist/shorts/{identifier}/audience";

pub const PLAYLIST: &str = "/api/v2.8/playlist/{uuid}";

/// A path plus ordered query parameters.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Endpoint {
    pub path: String,
    pub query: Vec<(String, String)>,
}

impl Endpoint {
    /// Start from a path template such as [`SONG`].
    pub fn new(template: &str) -> Self {
        Self {
            path: template.to_string(),
            query: Vec::new(),
        }
    }

    /// Substitute `{name}` in the path with `value`, unencoded.
    pub fn arg(mut self, name: &str, value: &str) -> Self {
        self.path = self.path.replace(&format!("{{{}}}", name), value);
        self
    }

    /// Append a query parameter.
    pub fn param(mut self, key: &str, value: impl ToString) -> Self {
        self.query.push((key.to_string(), value.to_string()));
        self
    }

    /// Append a query parameter only when a value is given.
    pub fn opt_param<V: ToString>(self, key: &str, value: Option<V>) -> Self {
        match value {
            Some(value) => self.param(key, value),
            None => self,
        }
    }

    /// Append `offset` and `limit`.
    pub fn page(self, page: Page) -> Self {
        self.param("offset", page.offset).param("limit", page.limit)
    }

    /// Append `startDate`/`endDate` for whichever ends of `period` are set.
    pub fn date_range(self, period: DateRange) -> Self {
        self.opt_param("startDate", period.start_param())
            .opt_param("endDate", period.end_param())
    }

    /// Encoded query string, without the leading `?`.
    pub fn query_string(&self) -> String {
        form_urlencoded::Serializer::new(String::new())
            .extend_pairs(&self.query)
            .finish()
    }

    /// Path followed by the encoded query, if any.
    pub fn path_and_query(&self) -> String {
        if self.query.is_empty() {
            self.path.clone()
        } else {
            format!("{}?{}", self.path, self.query_string())
        }
    }
}
