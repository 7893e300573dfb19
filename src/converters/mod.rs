//! JSON to model converters.
//!
//! Each `parse_*` function takes one raw JSON object from a SoundCharts
//! response and builds the matching typed record, converting nested
//! sub-resources first with their own parser.
//!
//! Shared rules:
//! - a required field that is absent or `null` is a [`MappingError`];
//! - an optional field that is absent or `null` becomes `None`;
//! - a present field of the wrong JSON type is a [`MappingError`], there is
//!   no coercion between strings, numbers and booleans;
//! - date-like fields are parsed into [`Date`]; an unparsable date is an
//!   error, not `None`;
//! - lists map element-wise and an empty list stays empty.

use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime};
use serde_json::{Map, Value};

use crate::error::{MappingError, Result};
use crate::models::{
    Album, Artist, ArtistSong, AudienceData, AudioFeatures, AudiencePlot, Chart, ChartEntry, Date,
    Genre, Label, PlatformIdentifier, Playlist, PlaylistEntry, PlaylistOwner, PlaylistPosition,
    RadioSpin, RadioStation, RecordingCode, ShortVideo, Song, SongAudience,
};

type Object = Map<String, Value>;
type MapResult<T> = std::result::Result<T, MappingError>;

/// Parse a date-like API value.
///
/// Accepts RFC 3339 (`2019-03-29T00:00:00+00:00`), a date-time with a
/// compact offset (`+0000`), a date-time without offset (taken as UTC) and a
/// bare `YYYY-MM-DD` (midnight UTC).
pub fn parse_date(field: &str, value: &str) -> MapResult<Date> {
    let rfc3339_err = match DateTime::parse_from_rfc3339(value) {
        Ok(date) => return Ok(date),
        Err(e) => e,
    };

    if let Ok(date) = DateTime::parse_from_str(value, "%Y-%m-%dT%H:%M:%S%.f%z") {
        return Ok(date);
    }
    if let Ok(naive) = NaiveDateTime::parse_from_str(value, "%Y-%m-%dT%H:%M:%S%.f") {
        return Ok(naive.and_utc().fixed_offset());
    }
    if let Ok(day) = NaiveDate::parse_from_str(value, "%Y-%m-%d") {
        return Ok(day.and_time(NaiveTime::MIN).and_utc().fixed_offset());
    }

    Err(MappingError::InvalidDate {
        field: field.to_string(),
        value: value.to_string(),
        source: rfc3339_err,
    })
}

/// View a value as a JSON object.
pub(crate) fn as_object<'a>(json: &'a Value, field: &str) -> MapResult<&'a Object> {
    json.as_object().ok_or_else(|| MappingError::InvalidType {
        field: field.to_string(),
        expected: "an object",
    })
}

/// Get a field, treating `null` as absent.
fn get<'a>(obj: &'a Object, key: &str) -> Option<&'a Value> {
    obj.get(key).filter(|v| !v.is_null())
}

fn require<'a>(obj: &'a Object, key: &str) -> MapResult<&'a Value> {
    get(obj, key).ok_or_else(|| MappingError::MissingField {
        field: key.to_string(),
    })
}

fn invalid(key: &str, expected: &'static str) -> MappingError {
    MappingError::InvalidType {
        field: key.to_string(),
        expected,
    }
}

fn req_str(obj: &Object, key: &str) -> MapResult<String> {
    require(obj, key)?
        .as_str()
        .map(str::to_string)
        .ok_or_else(|| invalid(key, "a string"))
}

fn opt_str(obj: &Object, key: &str) -> MapResult<Option<String>> {
    get(obj, key)
        .map(|v| {
            v.as_str()
                .map(str::to_string)
                .ok_or_else(|| invalid(key, "a string"))
        })
        .transpose()
}

fn req_i64(obj: &Object, key: &str) -> MapResult<i64> {
    require(obj, key)?
        .as_i64()
        .ok_or_else(|| invalid(key, "an integer"))
}

fn opt_i64(obj: &Object, key: &str) -> MapResult<Option<i64>> {
    get(obj, key)
        .map(|v| v.as_i64().ok_or_else(|| invalid(key, "an integer")))
        .transpose()
}

fn opt_f64(obj: &Object, key: &str) -> MapResult<Option<f64>> {
    get(obj, key)
        .map(|v| v.as_f64().ok_or_else(|| invalid(key, "a number")))
        .transpose()
}

fn opt_bool(obj: &Object, key: &str) -> MapResult<Option<bool>> {
    get(obj, key)
        .map(|v| v.as_bool().ok_or_else(|| invalid(key, "a boolean")))
        .transpose()
}

fn req_date(obj: &Object, key: &str) -> MapResult<Date> {
    let raw = require(obj, key)?
        .as_str()
        .ok_or_else(|| invalid(key, "a date string"))?;
    parse_date(key, raw)
}

fn opt_date(obj: &Object, key: &str) -> MapResult<Option<Date>> {
    get(obj, key)
        .map(|v| {
            let raw = v.as_str().ok_or_else(|| invalid(key, "a date string"))?;
            parse_date(key, raw)
        })
        .transpose()
}

fn req_array<'a>(obj: &'a Object, key: &str) -> MapResult<&'a Vec<Value>> {
    require(obj, key)?
        .as_array()
        .ok_or_else(|| invalid(key, "a list"))
}

fn opt_array<'a>(obj: &'a Object, key: &str) -> MapResult<Option<&'a Vec<Value>>> {
    get(obj, key)
        .map(|v| v.as_array().ok_or_else(|| invalid(key, "a list")))
        .transpose()
}

fn string_list(items: &[Value], key: &str) -> MapResult<Vec<String>> {
    items
        .iter()
        .map(|v| {
            v.as_str()
                .map(str::to_string)
                .ok_or_else(|| invalid(key, "a list of strings"))
        })
        .collect()
}

fn opt_string_list(obj: &Object, key: &str) -> MapResult<Option<Vec<String>>> {
    opt_array(obj, key)?
        .map(|items| string_list(items, key))
        .transpose()
}

/// Render an identifier-like value as a string (handles both string and
/// numeric values).
pub(crate) fn value_to_string(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

/// Map every element of a list with the same parser.
pub fn parse_list<T, F>(items: &[Value], parse: F) -> Result<Vec<T>>
where
    F: Fn(&Value) -> Result<T>,
{
    items.iter().map(parse).collect()
}

/// Parse a recording code (`isrc`) object.
pub fn parse_recording_code(json: &Value) -> Result<RecordingCode> {
    let obj = as_object(json, "isrc")?;
    Ok(RecordingCode {
        value: req_str(obj, "value")?,
        country_code: opt_str(obj, "countryCode")?,
        country_name: opt_str(obj, "countryName")?,
    })
}

/// Parse an audio features (`audio`) object.
pub fn parse_audio_features(json: &Value) -> Result<AudioFeatures> {
    let obj = as_object(json, "audio")?;
    Ok(AudioFeatures {
        danceability: opt_f64(obj, "danceability")?,
        energy: opt_f64(obj, "energy")?,
        instrumentalness: opt_f64(obj, "instrumentalness")?,
        key: opt_i64(obj, "key")?,
        liveness: opt_f64(obj, "liveness")?,
        loudness: opt_f64(obj, "loudness")?,
        mode: opt_i64(obj, "mode")?,
        speechiness: opt_f64(obj, "speechiness")?,
        tempo: opt_f64(obj, "tempo")?,
        time_signature: opt_i64(obj, "timeSignature")?,
        valence: opt_f64(obj, "valence")?,
    })
}

/// Parse a genre object. `sub` must be present, possibly empty.
pub fn parse_genre(json: &Value) -> Result<Genre> {
    let obj = as_object(json, "genres")?;
    Ok(Genre {
        root: req_str(obj, "root")?,
        sub: string_list(req_array(obj, "sub")?, "sub")?,
    })
}

pub fn parse_label(json: &Value) -> Result<Label> {
    let obj = as_object(json, "labels")?;
    Ok(Label {
        name: req_str(obj, "name")?,
        label_type: opt_str(obj, "type")?,
    })
}

/// Parse an artist, either a full lookup result or a nested credit.
pub fn parse_artist(json: &Value) -> Result<Artist> {
    let obj = as_object(json, "artist")?;

    let genres = opt_array(obj, "genres")?
        .map(|items| parse_list(items, parse_genre))
        .transpose()?;

    Ok(Artist {
        uuid: req_str(obj, "uuid")?,
        slug: req_str(obj, "slug")?,
        name: req_str(obj, "name")?,
        app_url: opt_str(obj, "appUrl")?,
        image_url: opt_str(obj, "imageUrl")?,
        country_code: opt_str(obj, "countryCode")?,
        biography: opt_str(obj, "biography")?,
        isni: opt_str(obj, "isni")?,
        ipi: opt_str(obj, "ipi")?,
        gender: opt_str(obj, "gender")?,
        artist_type: opt_str(obj, "type")?,
        birth_date: opt_date(obj, "birthDate")?,
        genres,
    })
}

/// Parse a full song object.
///
/// The recording code, audio features, artists, genres and labels are
/// required: a full song lookup always returns them.
pub fn parse_song(json: &Value) -> Result<Song> {
    let obj = as_object(json, "song")?;

    let isrc = parse_recording_code(require(obj, "isrc")?)?;
    let audio = parse_audio_features(require(obj, "audio")?)?;
    let artists = parse_list(req_array(obj, "artists")?, parse_artist)?;
    let genres = parse_list(req_array(obj, "genres")?, parse_genre)?;
    let labels = parse_list(req_array(obj, "labels")?, parse_label)?;

    Ok(Song {
        uuid: req_str(obj, "uuid")?,
        name: req_str(obj, "name")?,
        isrc,
        credit_name: opt_str(obj, "creditName")?,
        artists,
        release_date: opt_date(obj, "releaseDate")?,
        copyright: opt_str(obj, "copyright")?,
        app_url: opt_str(obj, "appUrl")?,
        image_url: opt_str(obj, "imageUrl")?,
        duration: opt_i64(obj, "duration")?,
        genres,
        composers: opt_string_list(obj, "composers")?,
        producers: opt_string_list(obj, "producers")?,
        labels,
        audio,
        explicit: opt_bool(obj, "explicit")?,
        language_code: opt_str(obj, "languageCode")?,
    })
}

/// Parse a song summary from an artist's catalogue.
pub fn parse_artist_song(json: &Value) -> Result<ArtistSong> {
    let obj = as_object(json, "items")?;
    Ok(ArtistSong {
        uuid: req_str(obj, "uuid")?,
        name: req_str(obj, "name")?,
        credit_name: opt_str(obj, "creditName")?,
        release_date: opt_date(obj, "releaseDate")?,
    })
}

pub fn parse_album(json: &Value) -> Result<Album> {
    let obj = as_object(json, "items")?;
    Ok(Album {
        uuid: req_str(obj, "uuid")?,
        name: req_str(obj, "name")?,
        credit_name: opt_str(obj, "creditName")?,
        release_date: req_date(obj, "releaseDate")?,
        album_type: opt_str(obj, "type")?,
        is_default: opt_bool(obj, "default")?,
    })
}

pub fn parse_platform_identifier(json: &Value) -> Result<PlatformIdentifier> {
    let obj = as_object(json, "items")?;
    Ok(PlatformIdentifier {
        platform_name: opt_str(obj, "platformName")?,
        platform_code: req_str(obj, "platformCode")?,
        identifier: req_str(obj, "identifier")?,
        url: opt_str(obj, "url")?,
        is_default: opt_bool(obj, "default")?,
    })
}

fn parse_playlist_owner(json: &Value) -> Result<PlaylistOwner> {
    let obj = as_object(json, "owner")?;
    Ok(PlaylistOwner {
        name: opt_str(obj, "name")?,
        identifier: opt_str(obj, "identifier")?,
    })
}

/// Parse playlist metadata.
pub fn parse_playlist(json: &Value) -> Result<Playlist> {
    let obj = as_object(json, "playlist")?;

    let owner = get(obj, "owner").map(parse_playlist_owner).transpose()?;

    Ok(Playlist {
        uuid: req_str(obj, "uuid")?,
        name: req_str(obj, "name")?,
        identifier: opt_str(obj, "identifier")?,
        platform: opt_str(obj, "platform")?,
        country_code: opt_str(obj, "countryCode")?,
        latest_crawl_date: opt_date(obj, "latestCrawlDate")?,
        latest_track_count: opt_i64(obj, "latestTrackCount")?,
        latest_subscriber_count: opt_i64(obj, "latestSubscriberCount")?,
        playlist_type: opt_str(obj, "type")?,
        owner,
        app_url: opt_str(obj, "appUrl")?,
        image_url: opt_str(obj, "imageUrl")?,
        refreshed: opt_bool(obj, "refreshed")?,
        available_country_codes: opt_string_list(obj, "availableCountryCodes")?,
    })
}

/// Parse the position fields of a playlist entry.
pub fn parse_playlist_position(json: &Value) -> Result<PlaylistPosition> {
    let obj = as_object(json, "items")?;
    Ok(PlaylistPosition {
        position: req_i64(obj, "position")?,
        peak_position: opt_i64(obj, "peakPosition")?,
        entry_date: opt_date(obj, "entryDate")?,
        position_date: opt_date(obj, "positionDate")?,
        peak_position_date: opt_date(obj, "peakPositionDate")?,
    })
}

/// Split one playlist entry into its playlist and the song's position.
pub fn parse_playlist_entry(json: &Value) -> Result<PlaylistEntry> {
    let obj = as_object(json, "items")?;
    let playlist = parse_playlist(require(obj, "playlist")?)?;
    let position = parse_playlist_position(json)?;
    Ok((playlist, position))
}

/// Parse a list of playlist entries into pairs, in input order.
pub fn parse_playlist_entries(items: &[Value]) -> Result<Vec<PlaylistEntry>> {
    parse_list(items, parse_playlist_entry)
}

pub fn parse_radio_station(json: &Value) -> Result<RadioStation> {
    let obj = as_object(json, "radio")?;
    Ok(RadioStation {
        slug: req_str(obj, "slug")?,
        name: req_str(obj, "name")?,
        city_name: opt_str(obj, "cityName")?,
        country_code: opt_str(obj, "countryCode")?,
        country_name: opt_str(obj, "countryName")?,
        time_zone: opt_str(obj, "timeZone")?,
    })
}

/// Parse a radio spin. Fields other than the station, airing date and
/// duration are kept as-is in `extra`.
pub fn parse_radio_spin(json: &Value) -> Result<RadioSpin> {
    let obj = as_object(json, "items")?;

    let radio = parse_radio_station(require(obj, "radio")?)?;
    let aired_at = opt_date(obj, "airedAt")?;
    let duration = opt_i64(obj, "duration")?;

    let mut extra = obj.clone();
    for key in ["radio", "airedAt", "duration"] {
        extra.remove(key);
    }

    Ok(RadioSpin {
        radio,
        aired_at,
        duration,
        extra,
    })
}

pub fn parse_chart(json: &Value) -> Result<Chart> {
    let obj = as_object(json, "chart")?;
    Ok(Chart {
        slug: req_str(obj, "slug")?,
        name: opt_str(obj, "name")?,
        platform: opt_str(obj, "platform")?,
        country_code: opt_str(obj, "countryCode")?,
        chart_type: opt_str(obj, "type")?,
        frequency: opt_str(obj, "frequency")?,
    })
}

pub fn parse_chart_entry(json: &Value) -> Result<ChartEntry> {
    let obj = as_object(json, "items")?;
    Ok(ChartEntry {
        chart: parse_chart(require(obj, "chart")?)?,
        position: req_i64(obj, "position")?,
        old_position: opt_i64(obj, "oldPosition")?,
        position_evolution: opt_i64(obj, "positionEvolution")?,
        time_on_chart: opt_i64(obj, "timeOnChart")?,
        rank_date: opt_date(obj, "rankDate")?,
        entry_date: opt_date(obj, "entryDate")?,
    })
}

pub fn parse_audience_data(json: &Value) -> Result<AudienceData> {
    let obj = as_object(json, "items")?;
    Ok(AudienceData {
        date: req_date(obj, "date")?,
        like_count: opt_i64(obj, "likeCount")?,
        follower_count: opt_i64(obj, "followerCount")?,
        following_count: opt_i64(obj, "followingCount")?,
        post_count: opt_i64(obj, "postCount")?,
        view_count: opt_i64(obj, "viewCount")?,
    })
}

fn parse_audience_plot(json: &Value) -> Result<AudiencePlot> {
    let obj = as_object(json, "plots")?;
    Ok(AudiencePlot {
        identifier: opt_str(obj, "identifier")?,
        value: opt_i64(obj, "value")?,
    })
}

pub fn parse_song_audience(json: &Value) -> Result<SongAudience> {
    let obj = as_object(json, "items")?;

    let plots = opt_array(obj, "plots")?
        .map(|items| parse_list(items, parse_audience_plot))
        .transpose()?
        .unwrap_or_default();

    Ok(SongAudience {
        date: req_date(obj, "date")?,
        audience: opt_str(obj, "audience")?,
        identifier: opt_str(obj, "identifier")?,
        plots,
    })
}

pub fn parse_short_video(json: &Value) -> Result<ShortVideo> {
    let obj = as_object(json, "items")?;

    let latest_audience = get(obj, "latestAudience")
        .map(|v| as_object(v, "latestAudience").cloned())
        .transpose()?;

    Ok(ShortVideo {
        identifier: req_str(obj, "identifier")?,
        title: opt_str(obj, "title")?,
        description: opt_str(obj, "description")?,
        created_at: opt_date(obj, "createdAt")?,
        external_url: opt_str(obj, "externalUrl")?,
        latest_audience,
    })
}
