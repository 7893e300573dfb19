//! Data models for SoundCharts API responses.
//!
//! Every record is an immutable value built once from a decoded response.
//! Optional fields the API did not return are `None`, never a zero value.

pub mod album;
pub mod artist;
pub mod audience;
pub mod chart;
pub mod common;
pub mod playlist;
pub mod radio;
pub mod song;

// Re-exports for convenience
pub use album::Album;
pub use artist::Artist;
pub use audience::{AudienceData, AudiencePlot, ShortVideo, SongAudience};
pub use chart::{Chart, ChartEntry};
pub use common::{Date, Genre, Label, PlatformIdentifier};
pub use playlist::{Playlist, PlaylistEntry, PlaylistOwner, PlaylistPosition};
pub use radio::{RadioSpin, RadioStation};
pub use song::{ArtistSong, AudioFeatures, RecordingCode, Song};
