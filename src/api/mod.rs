//! API client for SoundCharts.
//!
//! - [`SoundCharts`]: the call surface, one method per API operation
//! - [`Transport`]: authenticated GETs and error-envelope inspection
//! - [`endpoints`]: the versioned path templates

pub mod artist;
pub mod client;
pub mod endpoints;
pub mod options;
pub mod playlist;
pub mod song;
pub mod transport;

pub use client::{SoundCharts, SoundChartsBuilder, API_BASE_URL};
pub use endpoints::Endpoint;
pub use options::{
    AlbumOptions, ArtistSongOptions, ChartEntryOptions, DateRange, Page, PlaylistEntryOptions,
    RadioSpinOptions, Sort, SortOrder, TimeRange,
};
pub use transport::{Credentials, HttpBackend, RawResponse, Transport};
