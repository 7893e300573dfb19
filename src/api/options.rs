//! Optional arguments of the list operations.
//!
//! The `Default` impls carry the values the API is queried with when the
//! caller does not care: first page of 100, ascending sort on the
//! operation's natural field, every type.

use chrono::{DateTime, NaiveDate, SecondsFormat, Utc};

/// Maximum page size accepted by the API.
pub const MAX_LIMIT: u32 = 100;

/// Pagination window.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Page {
    pub offset: u32,
    pub limit: u32,
}

impl Default for Page {
    fn default() -> Self {
        Self {
            offset: 0,
            limit: MAX_LIMIT,
        }
    }
}

impl Page {
    pub fn new(offset: u32, limit: u32) -> Self {
        Self { offset, limit }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SortOrder {
    #[default]
    Asc,
    Desc,
}

impl SortOrder {
    pub fn as_str(&self) -> &'static str {
        match self {
            SortOrder::Asc => "asc",
            SortOrder::Desc => "desc",
        }
    }
}

/// Sort field and direction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sort {
    pub by: String,
    pub order: SortOrder,
}

impl Sort {
    pub fn asc<S: Into<String>>(by: S) -> Self {
        Self {
            by: by.into(),
            order: SortOrder::Asc,
        }
    }

    pub fn desc<S: Into<String>>(by: S) -> Self {
        Self {
            by: by.into(),
            order: SortOrder::Desc,
        }
    }
}

/// Day-granularity period, both ends optional.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DateRange {
    pub start: Option<NaiveDate>,
    pub end: Option<NaiveDate>,
}

impl DateRange {
    pub fn new(start: Option<NaiveDate>, end: Option<NaiveDate>) -> Self {
        Self { start, end }
    }

    pub fn between(start: NaiveDate, end: NaiveDate) -> Self {
        Self::new(Some(start), Some(end))
    }

    pub(crate) fn start_param(&self) -> Option<String> {
        self.start.map(|d| d.format("%Y-%m-%d").to_string())
    }

    pub(crate) fn end_param(&self) -> Option<String> {
        self.end.map(|d| d.format("%Y-%m-%d").to_string())
    }
}

/// Instant-granularity period, both ends optional. Sent in ATOM format.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TimeRange {
    pub start: Option<DateTime<Utc>>,
    pub end: Option<DateTime<Utc>>,
}

impl TimeRange {
    pub fn new(start: Option<DateTime<Utc>>, end: Option<DateTime<Utc>>) -> Self {
        Self { start, end }
    }

    pub(crate) fn start_param(&self) -> Option<String> {
        self.start
            .map(|t| t.to_rfc3339_opts(SecondsFormat::Secs, true))
    }

    pub(crate) fn end_param(&self) -> Option<String> {
        self.end.map(|t| t.to_rfc3339_opts(SecondsFormat::Secs, true))
    }
}

/// Options for album listings of a song or an artist.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AlbumOptions {
    /// "all", "album", "single" or "compil".
    pub album_type: String,
    pub page: Page,
    /// "title" or "releaseDate".
    pub sort: Sort,
}

impl Default for AlbumOptions {
    fn default() -> Self {
        Self {
            album_type: "all".to_string(),
            page: Page::default(),
            sort: Sort::asc("title"),
        }
    }
}

/// Options for an artist's song listing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArtistSongOptions {
    pub page: Page,
    /// "name", "releaseDate", "spotifyStream", "shazamCount",
    /// "youtubeViews" or "spotifyPopularity".
    pub sort: Sort,
}

impl Default for ArtistSongOptions {
    fn default() -> Self {
        Self {
            page: Page::default(),
            sort: Sort::asc("name"),
        }
    }
}

/// Options for a song's chart entries.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChartEntryOptions {
    /// Only charts the song is currently on; `false` adds past entries.
    pub current_only: bool,
    pub page: Page,
    /// "position" or "rankdate".
    pub sort: Sort,
}

impl Default for ChartEntryOptions {
    fn default() -> Self {
        Self {
            current_only: true,
            page: Page::default(),
            sort: Sort::asc("position"),
        }
    }
}

/// Options for a song's playlist entries.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlaylistEntryOptions {
    /// "all" or one of editorial, algorithmic, algotorial, major, charts,
    /// curators_listeners, radios, this_is.
    pub playlist_type: String,
    pub page: Page,
    /// "position", "positionDate", "subscriberCount" or "entryDate".
    pub sort: Sort,
}

impl Default for PlaylistEntryOptions {
    fn default() -> Self {
        Self {
            playlist_type: "all".to_string(),
            page: Page::default(),
            sort: Sort::asc("position"),
        }
    }
}

/// Options for a song's radio spins.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RadioSpinOptions {
    pub country_code: Option<String>,
    pub period: TimeRange,
    pub page: Page,
}
