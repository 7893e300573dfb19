//! Artist operations.
//!
//! Lookups, catalogue listings and audience series map into typed records.
//! The statistics endpoints whose payload shape varies per platform return
//! the response mapping as-is.

use chrono::NaiveDate;
use serde_json::{Map, Value};

use crate::converters;
use crate::error::Result;
use crate::models::{Album, Artist, ArtistSong, AudienceData, PlatformIdentifier, ShortVideo};

use super::client::SoundCharts;
use super::endpoints::{self, Endpoint};
use super::options::{AlbumOptions, ArtistSongOptions, DateRange, Page};

/// Growth period, in days, used by [`SoundCharts::artist_current_stats`]
/// when the caller has no preference.
pub const DEFAULT_STATS_PERIOD: u32 = 7;

impl SoundCharts {
    /// Get an artist by its SoundCharts UUID.
    pub fn artist(&self, uuid: &str) -> Result<Artist> {
        let endpoint = Endpoint::new(endpoints::ARTIST).arg("uuid", uuid);
        self.fetch_object(endpoint, converters::parse_artist)
    }

    /// Get an artist by its identifier on a platform.
    pub fn artist_by_platform_id(&self, platform: &str, identifier: &str) -> Result<Artist> {
        let endpoint = Endpoint::new(endpoints::ARTIST_BY_PLATFORM)
            .arg("platform", platform)
            .arg("identifier", identifier);
        self.fetch_object(endpoint, converters::parse_artist)
    }

    /// Get the platform identifiers of an artist, optionally for one platform.
    pub fn artist_ids(
        &self,
        uuid: &str,
        platform: Option<&str>,
        page: Page,
    ) -> Result<Vec<PlatformIdentifier>> {
        let endpoint = Endpoint::new(endpoints::ARTIST_IDENTIFIERS)
            .arg("uuid", uuid)
            .opt_param("platform", platform)
            .page(page);
        self.fetch_items(endpoint, converters::parse_platform_identifier)
    }

    /// Get the songs of an artist.
    pub fn artist_songs(&self, uuid: &str, options: &ArtistSongOptions) -> Result<Vec<ArtistSong>> {
        let endpoint = Endpoint::new(endpoints::ARTIST_SONGS)
            .arg("uuid", uuid)
            .page(options.page)
            .param("sortBy", &options.sort.by)
            .param("sortOrder", options.sort.order.as_str());
        self.fetch_items(endpoint, converters::parse_artist_song)
    }

    /// Get the albums of an artist.
    pub fn artist_albums(&self, uuid: &str, options: &AlbumOptions) -> Result<Vec<Album>> {
        let endpoint = Endpoint::new(endpoints::ARTIST_ALBUMS)
            .arg("uuid", uuid)
            .param("type", &options.album_type)
            .page(options.page)
            .param("sortBy", &options.sort.by)
            .param("sortOrder", options.sort.order.as_str());
        self.fetch_items(endpoint, converters::parse_album)
    }

    /// Get the artists SoundCharts relates to this one.
    pub fn artist_similar(&self, uuid: &str, page: Page) -> Result<Vec<Artist>> {
        let endpoint = Endpoint::new(endpoints::ARTIST_SIMILAR)
            .arg("uuid", uuid)
            .page(page);
        self.fetch_items(endpoint, converters::parse_artist)
    }

    /// Get the current stats of an artist on every platform, with growth
    /// computed over `period` days.
    pub fn artist_current_stats(&self, uuid: &str, period: u32) -> Result<Map<String, Value>> {
        let endpoint = Endpoint::new(endpoints::ARTIST_CURRENT_STATS)
            .arg("uuid", uuid)
            .param("period", period);
        self.fetch_raw(endpoint)
    }

    /// Get the audience history of an artist on a platform.
    ///
    /// The platform's primary fan metric is always reported as
    /// `follower_count`. The API caps a period at 90 days.
    pub fn artist_audience(
        &self,
        uuid: &str,
        platform: &str,
        period: DateRange,
    ) -> Result<Vec<AudienceData>> {
        let endpoint = Endpoint::new(endpoints::ARTIST_AUDIENCE)
            .arg("uuid", uuid)
            .arg("platform", platform)
            .date_range(period);
        self.fetch_items(endpoint, converters::parse_audience_data)
    }

    /// Get follower values of an artist and their location breakdown.
    pub fn artist_local_audience(
        &self,
        uuid: &str,
        platform: &str,
        period: DateRange,
    ) -> Result<Map<String, Value>> {
        let endpoint = Endpoint::new(endpoints::ARTIST_LOCAL_AUDIENCE)
            .arg("uuid", uuid)
            .arg("platform", platform)
            .date_range(period);
        self.fetch_raw(endpoint)
    }

    /// Get listeners, streams and views of an artist on a streaming platform.
    pub fn artist_listening(
        &self,
        uuid: &str,
        platform: &str,
        period: DateRange,
    ) -> Result<Map<String, Value>> {
        let endpoint = Endpoint::new(endpoints::ARTIST_LISTENING)
            .arg("uuid", uuid)
            .arg("platform", platform)
            .date_range(period);
        self.fetch_raw(endpoint)
    }

    /// Get the latest Spotify monthly listeners (28 rolling days).
    pub fn artist_spotify_monthly_listeners_latest(&self, uuid: &str) -> Result<Map<String, Value>> {
        let endpoint = Endpoint::new(endpoints::ARTIST_SPOTIFY_LISTENERS).arg("uuid", uuid);
        self.fetch_raw(endpoint)
    }

    /// Get Spotify monthly listeners for a calendar month.
    pub fn artist_spotify_monthly_listeners_by_month(
        &self,
        uuid: &str,
        year: i32,
        month: u32,
    ) -> Result<Map<String, Value>> {
        let endpoint = Endpoint::new(endpoints::ARTIST_SPOTIFY_LISTENERS_BY_MONTH)
            .arg("uuid", uuid)
            .arg("year", &format!("{:04}", year))
            .arg("month", &format!("{:02}", month));
        self.fetch_raw(endpoint)
    }

    /// Get the follower to listener ratio of an artist on a platform.
    pub fn artist_retention(
        &self,
        uuid: &str,
        platform: &str,
        period: DateRange,
    ) -> Result<Map<String, Value>> {
        let endpoint = Endpoint::new(endpoints::ARTIST_RETENTION)
            .arg("uuid", uuid)
            .arg("platform", platform)
            .date_range(period);
        self.fetch_raw(endpoint)
    }

    /// Get the popularity score history of an artist on a platform.
    pub fn artist_popularity(
        &self,
        uuid: &str,
        platform: &str,
        period: DateRange,
    ) -> Result<Map<String, Value>> {
        let endpoint = Endpoint::new(endpoints::ARTIST_POPULARITY)
            .arg("uuid", uuid)
            .arg("platform", platform)
            .date_range(period);
        self.fetch_raw(endpoint)
    }

    /// Get the latest demographics report of an artist on a social platform.
    pub fn artist_audience_report_latest(
        &self,
        uuid: &str,
        platform: &str,
    ) -> Result<Map<String, Value>> {
        let endpoint = Endpoint::new(endpoints::ARTIST_AUDIENCE_REPORT_LATEST)
            .arg("uuid", uuid)
            .arg("platform", platform);
        self.fetch_raw(endpoint)
    }

    /// Get the dates for which a demographics report exists.
    pub fn artist_audience_report_dates(
        &self,
        uuid: &str,
        platform: &str,
        period: DateRange,
        page: Page,
    ) -> Result<Map<String, Value>> {
        let endpoint = Endpoint::new(endpoints::ARTIST_AUDIENCE_REPORT_DATES)
            .arg("uuid", uuid)
            .arg("platform", platform)
            .date_range(period)
            .page(page);
        self.fetch_raw(endpoint)
    }

    /// Get the demographics report of an artist for one date.
    pub fn artist_audience_report_by_date(
        &self,
        uuid: &str,
        platform: &str,
        date: NaiveDate,
    ) -> Result<Map<String, Value>> {
        let endpoint = Endpoint::new(endpoints::ARTIST_AUDIENCE_REPORT_BY_DATE)
            .arg("uuid", uuid)
            .arg("platform", platform)
            .arg("date", &date.format("%Y-%m-%d").to_string());
        self.fetch_raw(endpoint)
    }

    /// Get the short videos of an artist (YouTube shorts, Instagram reels)
    /// with their current audience.
    pub fn artist_short_videos(&self, uuid: &str, platform: &str) -> Result<Vec<ShortVideo>> {
        let endpoint = Endpoint::new(endpoints::ARTIST_SHORT_VIDEOS)
            .arg("uuid", uuid)
            .arg("platform", platform);
        self.fetch_items(endpoint, converters::parse_short_video)
    }

    /// Get the audience history of one short video.
    pub fn artist_short_video_audience(
        &self,
        identifier: &str,
        period: DateRange,
    ) -> Result<Map<String, Value>> {
        let endpoint = Endpoint::new(endpoints::ARTIST_SHORT_VIDEO_AUDIENCE)
            .arg("identifier", identifier)
            .date_range(period);
        self.fetch_raw(endpoint)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::options::Sort;
    use crate::api::testing::{mock_client, mock_client_status};
    use crate::error::{MappingError, SoundChartsError};
    use serde_json::json;

    const BILLIE: &str = "11e81bcc-9c1c-ce38-b96b-a0369fe50396";

    fn day(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_artist() {
        let sc = mock_client(
            "/api/v2.9/artist/11e81bcc-9c1c-ce38-b96b-a0369fe50396",
            json!({
                "type": "artist",
                "object": {
                    "uuid": BILLIE,
                    "slug": "billie-eilish",
                    "name": "Billie Eilish",
                    "countryCode": "US",
                    "gender": "female",
                    "type": "person",
                    "birthDate": "2001-12-18T00:00:00+00:00",
                    "genres": [{ "root": "pop", "sub": ["electro pop", "indie pop"] }]
                }
            }),
        );

        let artist = sc.artist(BILLIE).unwrap();
        assert_eq!(artist.slug, "billie-eilish");
        assert_eq!(artist.artist_type.as_deref(), Some("person"));
        assert_eq!(artist.root_genres(), vec!["pop"]);
        assert!(artist.birth_date.is_some());
        assert_eq!(artist.biography, None);
    }

    #[test]
    fn test_artist_by_platform_id() {
        let sc = mock_client(
            "/api/v2.9/artist/by-platform/spotify/6qqNVTkY8uBg9cP3Jd7DAH",
            json!({ "object": { "uuid": BILLIE, "slug": "billie-eilish", "name": "Billie Eilish" } }),
        );
        let artist = sc
            .artist_by_platform_id("spotify", "6qqNVTkY8uBg9cP3Jd7DAH")
            .unwrap();
        assert_eq!(artist.uuid, BILLIE);
    }

    #[test]
    fn test_artist_missing_object_envelope() {
        let sc = mock_client("/api/v2.9/artist/abc", json!({ "type": "artist" }));
        let err = sc.artist("abc").unwrap_err();
        assert!(matches!(
            err,
            SoundChartsError::Mapping(MappingError::MissingEnvelope { key: "object" })
        ));
    }

    #[test]
    fn test_artist_ids() {
        let sc = mock_client(
            "/api/v2/artist/abc/identifiers?offset=0&limit=100",
            json!({
                "items": [
                    { "platformCode": "spotify", "identifier": "6qqNVTkY8uBg9cP3Jd7DAH" },
                    { "platformCode": "deezer", "identifier": "9635624" }
                ]
            }),
        );
        let ids = sc.artist_ids("abc", None, Page::default()).unwrap();
        let codes: Vec<_> = ids.iter().map(|i| i.platform_code.as_str()).collect();
        assert_eq!(codes, vec!["spotify", "deezer"]);
    }

    #[test]
    fn test_artist_songs() {
        let sc = mock_client(
            "/api/v2.21/artist/abc/songs?offset=0&limit=2&sortBy=releaseDate&sortOrder=desc",
            json!({
                "items": [
                    { "uuid": "s1", "name": "bad guy", "releaseDate": "2019-03-29T00:00:00+00:00" },
                    { "uuid": "s2", "name": "ocean eyes", "creditName": "Billie Eilish" }
                ]
            }),
        );
        let options = ArtistSongOptions {
            page: Page::new(0, 2),
            sort: Sort::desc("releaseDate"),
        };
        let songs = sc.artist_songs("abc", &options).unwrap();
        assert_eq!(songs.len(), 2);
        assert!(songs[0].release_date.is_some());
        assert_eq!(songs[1].release_date, None);
    }

    #[test]
    fn test_artist_albums() {
        let sc = mock_client(
            "/api/v2.34/artist/abc/albums?type=single&offset=0&limit=100&sortBy=title&sortOrder=asc",
            json!({
                "items": [{
                    "uuid": "a1",
                    "name": "bad guy",
                    "releaseDate": "2019-03-29",
                    "type": "single"
                }]
            }),
        );
        let options = AlbumOptions {
            album_type: "single".to_string(),
            ..Default::default()
        };
        let albums = sc.artist_albums("abc", &options).unwrap();
        assert!(albums[0].is_single());
    }

    #[test]
    fn test_artist_similar_empty() {
        let sc = mock_client(
            "/api/v2/artist/abc/related?offset=0&limit=100",
            json!({ "items": [], "page": { "offset": 0, "total": 0 } }),
        );
        assert!(sc.artist_similar("abc", Page::default()).unwrap().is_empty());
    }

    #[test]
    fn test_artist_current_stats_is_raw() {
        let sc = mock_client(
            "/api/v2/artist/abc/current/stats?period=7",
            json!({
                "related": { "uuid": "abc" },
                "social": [{ "platform": "instagram", "value": 100 }],
                "streaming": []
            }),
        );
        let stats = sc.artist_current_stats("abc", DEFAULT_STATS_PERIOD).unwrap();
        let keys: Vec<_> = stats.keys().map(String::as_str).collect();
        assert_eq!(keys, vec!["related", "social", "streaming"]);
    }

    #[test]
    fn test_artist_audience() {
        let sc = mock_client(
            "/api/v2/artist/abc/audience/instagram?startDate=2023-01-01&endDate=2023-02-01",
            json!({
                "items": [
                    { "date": "2023-01-01T00:00:00+00:00", "followerCount": 1000, "likeCount": 50 },
                    { "date": "2023-01-02T00:00:00+00:00", "followerCount": 1010 }
                ]
            }),
        );
        let audience = sc
            .artist_audience("abc", "instagram", DateRange::between(day(2023, 1, 1), day(2023, 2, 1)))
            .unwrap();
        assert_eq!(audience.len(), 2);
        assert_eq!(audience[1].follower_count, Some(1010));
        assert_eq!(audience[1].like_count, None);
    }

    #[test]
    fn test_artist_audience_missing_date() {
        let sc = mock_client(
            "/api/v2/artist/abc/audience/spotify",
            json!({ "items": [{ "followerCount": 1000 }] }),
        );
        let err = sc
            .artist_audience("abc", "spotify", DateRange::default())
            .unwrap_err();
        assert!(matches!(
            err,
            SoundChartsError::Mapping(MappingError::MissingField { .. })
        ));
    }

    #[test]
    fn test_artist_local_audience_keeps_trailing_slash() {
        let sc = mock_client(
            "/api/v2.37/artist/abc/social/instagram/followers/?endDate=2023-03-01",
            json!({ "items": [] }),
        );
        let data = sc
            .artist_local_audience("abc", "instagram", DateRange::new(None, Some(day(2023, 3, 1))))
            .unwrap();
        assert!(data.contains_key("items"));
    }

    #[test]
    fn test_artist_listening_and_popularity() {
        let sc = mock_client(
            "/api/v2/artist/abc/streaming/spotify/listening",
            json!({ "items": [{ "value": 1 }] }),
        );
        assert!(sc
            .artist_listening("abc", "spotify", DateRange::default())
            .is_ok());

        let sc = mock_client(
            "/api/v2/artist/abc/popularity/spotify?startDate=2023-01-01",
            json!({ "items": [] }),
        );
        assert!(sc
            .artist_popularity("abc", "spotify", DateRange::new(Some(day(2023, 1, 1)), None))
            .is_ok());
    }

    #[test]
    fn test_artist_spotify_monthly_listeners() {
        let sc = mock_client(
            "/api/v2/artist/abc/streaming/spotify/listeners",
            json!({ "items": [{ "value": 70000000 }] }),
        );
        let data = sc.artist_spotify_monthly_listeners_latest("abc").unwrap();
        assert_eq!(data["items"][0]["value"], 70000000);

        let sc = mock_client(
            "/api/v2/artist/abc/streaming/spotify/listeners/2023/04",
            json!({ "items": [] }),
        );
        assert!(sc
            .artist_spotify_monthly_listeners_by_month("abc", 2023, 4)
            .is_ok());
    }

    #[test]
    fn test_artist_retention_api_error() {
        let sc = mock_client_status(
            "/api/v2/artist/abc/deezer/retention",
            400,
            json!({ "errors": [{ "code": 400, "message": "Platform not supported" }] }),
        );
        let err = sc
            .artist_retention("abc", "deezer", DateRange::default())
            .unwrap_err();
        assert_eq!(err.http_status(), Some(400));
        assert_eq!(
            err.to_string(),
            "http status: 400, code: 400 - Platform not supported"
        );
    }

    #[test]
    fn test_artist_audience_reports() {
        let sc = mock_client(
            "/api/v2/artist/abc/audience/instagram/report/latest",
            json!({ "object": { "date": "2023-04-01" } }),
        );
        assert!(sc
            .artist_audience_report_latest("abc", "instagram")
            .unwrap()
            .contains_key("object"));

        let sc = mock_client(
            "/api/v2/artist/abc/audience/tiktok/report/available-dates\
             ?startDate=2023-01-01&offset=0&limit=100",
            json!({ "items": ["2023-01-01T00:00:00+00:00"] }),
        );
        assert!(sc
            .artist_audience_report_dates(
                "abc",
                "tiktok",
                DateRange::new(Some(day(2023, 1, 1)), None),
                Page::default()
            )
            .is_ok());

        let sc = mock_client(
            "/api/v2/artist/abc/audience/youtube/report/2023-04-01",
            json!({ "object": {} }),
        );
        assert!(sc
            .artist_audience_report_by_date("abc", "youtube", day(2023, 4, 1))
            .is_ok());
    }

    #[test]
    fn test_artist_short_videos() {
        let sc = mock_client(
            "/api/v2/artist/abc/shorts/youtube/videos",
            json!({
                "items": [{
                    "identifier": "dQw4w9WgXcQ",
                    "title": "what was I made for?",
                    "createdAt": "2023-07-13T16:00:00+00:00",
                    "latestAudience": { "views": 1200000, "likes": 90000 }
                }]
            }),
        );
        let videos = sc.artist_short_videos("abc", "youtube").unwrap();
        assert_eq!(videos[0].identifier, "dQw4w9WgXcQ");
        let audience = videos[0].latest_audience.as_ref().unwrap();
        assert_eq!(audience["views"], 1200000);

        let sc = mock_client(
            "/api/v2/artist/shorts/dQw4w9WgXcQ/audience?startDate=2023-07-13&endDate=2023-07-20",
            json!({ "items": [] }),
        );
        assert!(sc
            .artist_short_video_audience(
                "dQw4w9WgXcQ",
                DateRange::between(day(2023, 7, 13), day(2023, 7, 20))
            )
            .is_ok());
    }
}
