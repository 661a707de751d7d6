//! The data source seam between the board and wherever time data comes from.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use timespot_tz::{SunSnapshot, TimeSnapshot};

use crate::error::ServiceResult;

/// One city search hit.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CitySearchResult {
    pub name: String,
    pub country: String,
    pub timezone: String,
    pub latitude: f64,
    pub longitude: f64,
}

/// Whether the data source answered its last health check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ConnectionState {
    #[default]
    Unknown,
    Connected,
    Disconnected,
}

impl ConnectionState {
    #[must_use]
    pub const fn is_connected(self) -> bool {
        matches!(self, Self::Connected)
    }
}

/// ## Summary
/// Source of time, sun and search data.
///
/// Implementations must be safe to share between tasks. Every operation is
/// fallible except [`TimeDataSource::health_check`], which reports failure as
/// `false`.
#[async_trait]
pub trait TimeDataSource: Send + Sync {
    /// ## Summary
    /// Time data for a `Region/City` id or a known city name.
    ///
    /// ## Errors
    /// `InvalidInput` when the id is not `Region/City` shaped, `NotFound` when
    /// nothing is stored for it.
    async fn get_time_data(&self, timezone: &str) -> ServiceResult<TimeSnapshot>;

    /// ## Summary
    /// Sun times for a zone, formatted as local `HH:MM`.
    ///
    /// ## Errors
    /// `NotFound` when nothing is stored for the zone.
    async fn get_sun_data(&self, timezone: &str) -> ServiceResult<SunSnapshot>;

    /// ## Summary
    /// Cities whose name, country or zone contains `query`, case-insensitively.
    ///
    /// ## Errors
    /// Implementations backed by I/O may fail; the local one never does.
    async fn search_cities(&self, query: &str) -> ServiceResult<Vec<CitySearchResult>>;

    async fn health_check(&self) -> bool;

    /// Runs a health check and maps it to a [`ConnectionState`].
    async fn connection_state(&self) -> ConnectionState {
        if self.health_check().await {
            ConnectionState::Connected
        } else {
            ConnectionState::Disconnected
        }
    }
}
