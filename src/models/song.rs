//! Song-related models.
//!
//! [`Song`] is the full record returned by the song lookups; [`ArtistSong`]
//! is the summary returned when listing an artist's catalogue, which carries
//! neither the recording code nor the audio features.

use serde::{Deserialize, Serialize};

use super::artist::Artist;
use super::common::{Date, Genre, Label};

/// Decomposed International Standard Recording Code.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct RecordingCode {
    /// The ISRC itself, e.g. "USUM71900764".
    pub value: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub country_code: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub country_name: Option<String>,
}

/// Derived acoustic measurements of a recording.
///
/// Every value is optional: the service returns `null` for measurements it
/// has not computed.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct AudioFeatures {
    pub danceability: Option<f64>,
    pub energy: Option<f64>,
    pub instrumentalness: Option<f64>,
    /// Pitch class of the track key (0 = C).
    pub key: Option<i64>,
    pub liveness: Option<f64>,
    /// Overall loudness in decibels.
    pub loudness: Option<f64>,
    /// 1 for major, 0 for minor.
    pub mode: Option<i64>,
    pub speechiness: Option<f64>,
    /// Tempo in beats per minute.
    pub tempo: Option<f64>,
    pub time_signature: Option<i64>,
    pub valence: Option<f64>,
}

/// A full song record.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Song {
    /// SoundCharts UUID.
    pub uuid: String,

    /// Song title.
    pub name: String,

    /// Recording code of the song.
    pub isrc: RecordingCode,

    /// Credited artist name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub credit_name: Option<String>,

    /// Credited artists, main artist first.
    pub artists: Vec<Artist>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub release_date: Option<Date>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub copyright: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub app_url: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,

    /// Duration in seconds.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration: Option<i64>,

    pub genres: Vec<Genre>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub composers: Option<Vec<String>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub producers: Option<Vec<String>>,

    pub labels: Vec<Label>,

    /// Acoustic features of the recording.
    pub audio: AudioFeatures,

    /// Whether the song is flagged explicit.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub explicit: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub language_code: Option<String>,
}

impl Song {
    /// First credited artist.
    pub fn main_artist(&self) -> Option<&Artist> {
        self.artists.first()
    }

    /// Root genres, in API order.
    pub fn root_genres(&self) -> Vec<&str> {
        self.genres.iter().map(|g| g.root.as_str()).collect()
    }

    /// All sub-genres across every root genre.
    pub fn sub_genres(&self) -> Vec<&str> {
        self.genres
            .iter()
            .flat_map(|g| g.sub.iter().map(String::as_str))
            .collect()
    }

    /// Join the credited artist names with a separator.
    pub fn artists_string(&self, separator: &str) -> String {
        self.artists
            .iter()
            .map(|a| a.name.as_str())
            .collect::<Vec<_>>()
            .join(separator)
    }
}

/// Song entry in an artist's catalogue listing.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ArtistSong {
    pub uuid: String,

    pub name: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub credit_name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub release_date: Option<Date>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn song_with(artists: Vec<Artist>, genres: Vec<Genre>) -> Song {
        Song {
            uuid: "7d534228-5165-11e9-9375-549f35161576".to_string(),
            name: "bad guy".to_string(),
            isrc: RecordingCode {
                value: "USUM71900764".to_string(),
                ..Default::default()
            },
            credit_name: None,
            artists,
            release_date: None,
            copyright: None,
            app_url: None,
            image_url: None,
            duration: Some(194),
            genres,
            composers: None,
            producers: None,
            labels: Vec::new(),
            audio: AudioFeatures::default(),
            explicit: None,
            language_code: None,
        }
    }

    #[test]
    fn test_main_artist_and_artists_string() {
        let song = song_with(
            vec![
                Artist::new("1", "billie-eilish", "Billie Eilish"),
                Artist::new("2", "justin-bieber", "Justin Bieber"),
            ],
            Vec::new(),
        );
        assert_eq!(song.main_artist().unwrap().name, "Billie Eilish");
        assert_eq!(song.artists_string(", "), "Billie Eilish, Justin Bieber");
    }

    #[test]
    fn test_genre_accessors() {
        let song = song_with(
            Vec::new(),
            vec![
                Genre::new("pop", vec!["electro pop".to_string(), "dark pop".to_string()]),
                Genre::new("alternative", vec![]),
            ],
        );
        assert_eq!(song.root_genres(), vec!["pop", "alternative"]);
        assert_eq!(song.sub_genres(), vec!["electro pop", "dark pop"]);
        assert!(song.main_artist().is_none());
    }
}
