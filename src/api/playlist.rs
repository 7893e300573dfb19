//! Playlist operations.

use crate::converters;
use crate::error::Result;
use crate::models::Playlist;

use super::client::SoundCharts;
use super::endpoints::{self, Endpoint};

impl SoundCharts {
    /// Get playlist metadata by its SoundCharts UUID.
    pub fn playlist(&self, uuid: &str) -> Result<Playlist> {
        let endpoint = Endpoint::new(endpoints::PLAYLIST).arg("uuid", uuid);
        self.fetch_object(endpoint, converters::parse_playlist)
    }
}
