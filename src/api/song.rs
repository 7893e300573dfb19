//! Song operations.

use serde_json::{Map, Value};

use crate::converters;
use crate::error::Result;
use crate::models::{
    Album, ChartEntry, PlatformIdentifier, PlaylistEntry, RadioSpin, Song, SongAudience,
};

use super::client::SoundCharts;
use super::endpoints::{self, Endpoint};
use super::options::{
    AlbumOptions, ChartEntryOptions, DateRange, Page, PlaylistEntryOptions, RadioSpinOptions,
};

impl SoundCharts {
    /// Get a song by its SoundCharts UUID.
    pub fn song(&self, uuid: &str) -> Result<Song> {
        let endpoint = Endpoint::new(endpoints::SONG).arg("uuid", uuid);
        self.fetch_object(endpoint, converters::parse_song)
    }

    /// Get a song by its ISRC.
    pub fn song_by_isrc(&self, isrc: &str) -> Result<Song> {
        let endpoint = Endpoint::new(endpoints::SONG_BY_ISRC).arg("isrc", isrc);
        self.fetch_object(endpoint, converters::parse_song)
    }

    /// Get a song by its identifier on a platform (e.g. `"spotify"`).
    pub fn song_by_platform_id(&self, platform: &str, identifier: &str) -> Result<Song> {
        let endpoint = Endpoint::new(endpoints::SONG_BY_PLATFORM)
            .arg("platform", platform)
            .arg("identifier", identifier);
        self.fetch_object(endpoint, converters::parse_song)
    }

    /// Get the platform identifiers of a song, optionally for one platform.
    pub fn song_ids(
        &self,
        uuid: &str,
        platform: Option<&str>,
        page: Page,
    ) -> Result<Vec<PlatformIdentifier>> {
        let endpoint = Endpoint::new(endpoints::SONG_IDENTIFIERS)
            .arg("uuid", uuid)
            .opt_param("platform", platform)
            .page(page);
        self.fetch_items(endpoint, converters::parse_platform_identifier)
    }

    /// Get the albums a song appears on.
    pub fn song_albums(&self, uuid: &str, options: &AlbumOptions) -> Result<Vec<Album>> {
        let endpoint = Endpoint::new(endpoints::SONG_ALBUMS)
            .arg("uuid", uuid)
            .param("type", &options.album_type)
            .page(options.page)
            .param("sort_by", &options.sort.by)
            .param("sort_order", options.sort.order.as_str());
        self.fetch_items(endpoint, converters::parse_album)
    }

    /// Get the audience of a song on a platform.
    ///
    /// `identifier` narrows the result to one platform identifier of the
    /// song.
    pub fn song_audience(
        &self,
        uuid: &str,
        platform: &str,
        period: DateRange,
        identifier: Option<&str>,
    ) -> Result<Vec<SongAudience>> {
        let endpoint = Endpoint::new(endpoints::SONG_AUDIENCE)
            .arg("uuid", uuid)
            .arg("platform", platform)
            .opt_param("start_date", period.start_param())
            .opt_param("end_date", period.end_param())
            .opt_param("identifier", identifier);
        self.fetch_items(endpoint, converters::parse_song_audience)
    }

    /// Get the Spotify popularity history of a song, as returned.
    pub fn song_spotify_popularity(
        &self,
        uuid: &str,
        period: DateRange,
    ) -> Result<Vec<Map<String, Value>>> {
        let endpoint = Endpoint::new(endpoints::SONG_SPOTIFY_POPULARITY)
            .arg("uuid", uuid)
            .opt_param("start_date", period.start_param())
            .opt_param("end_date", period.end_param());
        self.fetch_items(endpoint, |item| {
            Ok(converters::as_object(item, "items")?.clone())
        })
    }

    /// Get the chart positions of a song on a platform.
    pub fn song_chart_entries(
        &self,
        uuid: &str,
        platform: &str,
        options: &ChartEntryOptions,
    ) -> Result<Vec<ChartEntry>> {
        let endpoint = Endpoint::new(endpoints::SONG_CHART_ENTRIES)
            .arg("uuid", uuid)
            .arg("platform", platform)
            .param("current_only", u8::from(options.current_only))
            .page(options.page)
            .param("sort_by", &options.sort.by)
            .param("sort_order", options.sort.order.as_str());
        self.fetch_items(endpoint, converters::parse_chart_entry)
    }

    /// Get the playlists currently holding a song on a platform.
    ///
    /// Each entry pairs the playlist with the song's position in it, in the
    /// order returned by the API.
    pub fn song_playlist_entries(
        &self,
        uuid: &str,
        platform: &str,
        options: &PlaylistEntryOptions,
    ) -> Result<Vec<PlaylistEntry>> {
        let endpoint = Endpoint::new(endpoints::SONG_PLAYLIST_ENTRIES)
            .arg("uuid", uuid)
            .arg("platform", platform)
            .param("type", &options.playlist_type)
            .page(options.page)
            .param("sort_by", &options.sort.by)
            .param("sort_order", options.sort.order.as_str());
        self.fetch_items(endpoint, converters::parse_playlist_entry)
    }

    /// Get the radio airings of a song on the given stations.
    pub fn song_radio_spins(
        &self,
        uuid: &str,
        radio_slugs: &[&str],
        options: &RadioSpinOptions,
    ) -> Result<Vec<RadioSpin>> {
        let endpoint = Endpoint::new(endpoints::SONG_RADIO_SPINS)
            .arg("uuid", uuid)
            .param("radio_slugs", radio_slugs.join(","))
            .opt_param("country_code", options.country_code.as_deref())
            .opt_param("start_date", options.period.start_param())
            .opt_param("end_date", options.period.end_param())
            .page(options.page);
        self.fetch_items(endpoint, converters::parse_radio_spin)
    }
}
