//! # SoundCharts
//!
//! A Rust client for the SoundCharts music analytics API.
//!
//! ## Quick Start
//!
//! Everything goes through the [`SoundCharts`] client:
//!
//! ```rust,no_run
//! use soundcharts::{AlbumOptions, SoundCharts};
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     // Create a client with your application id and API key
//!     let sc = SoundCharts::new("your_app_id", "your_api_key")?;
//!
//!     // Look up a song by ISRC
//!     let song = sc.song_by_isrc("USUM71900764")?;
//!     println!("{} by {}", song.name, song.artists_string(", "));
//!
//!     // List the albums of its main artist
//!     if let Some(artist) = song.main_artist() {
//!         for album in sc.artist_albums(&artist.uuid, &AlbumOptions::default())? {
//!             println!("{} ({})", album.name, album.release_date.format("%Y"));
//!         }
//!     }
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Features
//!
//! - **Songs**: lookups by UUID, ISRC or platform id, albums, audience,
//!   chart and playlist positions, radio spins
//! - **Artists**: lookups, catalogue, similar artists, audience and
//!   streaming statistics, demographics reports, short videos
//! - **Playlists**: metadata
//!
//! Responses are mapped into typed records from [`models`]. API errors,
//! reported in an `errors` envelope, surface as [`SoundChartsError::Api`].
//!
//! The public sandbox credentials ([`Credentials::sandbox`]) give access to a
//! small demo catalogue.

pub mod api;
pub mod converters;
pub mod error;
pub mod models;

// Main interface
pub use api::{
    AlbumOptions, ArtistSongOptions, ChartEntryOptions, Credentials, DateRange, Page,
    PlaylistEntryOptions, RadioSpinOptions, SoundCharts, SoundChartsBuilder, Sort, SortOrder,
    TimeRange,
};

pub use error::{MappingError, Result, SoundChartsError};
pub use models::{Album, Artist, Playlist, PlaylistEntry, Song};
