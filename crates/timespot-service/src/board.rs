//! The primary clock plus a grid of city tiles.
//!
//! ## Summary
//! Every tile is in exactly one of three states. Data-source answers and
//! derived snapshots both land as [`TileState::Ready`]; a tile only fails
//! when neither source can produce a snapshot. Tiles are independent: one
//! failing never blocks another.

use std::sync::Arc;

use futures::future::join_all;
use timespot_core::constants::LOADING_COUNTRY;
use timespot_tz::format::city_from_timezone;
use timespot_tz::{TimeDerivationService, TimeSnapshot};

use crate::source::{CitySearchResult, TimeDataSource};

const LOAD_FAILED: &str = "Failed to load";
const UNAVAILABLE: &str = "Unavailable";

/// Display state of one clock.
#[derive(Debug, Clone, PartialEq)]
pub enum TileState {
    Pending,
    Failed(String),
    Ready(TimeSnapshot),
}

impl TileState {
    #[must_use]
    pub const fn snapshot(&self) -> Option<&TimeSnapshot> {
        match self {
            Self::Ready(snapshot) => Some(snapshot),
            Self::Pending | Self::Failed(_) => None,
        }
    }

    #[must_use]
    pub const fn is_pending(&self) -> bool {
        matches!(self, Self::Pending)
    }
}

/// One city card.
#[derive(Debug, Clone, PartialEq)]
pub struct CityTile {
    pub city: String,
    pub country: String,
    pub timezone: String,
    pub state: TileState,
}

impl CityTile {
    fn apply(&mut self, state: TileState) {
        if let TileState::Ready(snapshot) = &state
            && self.country == LOADING_COUNTRY
        {
            self.country.clone_from(&snapshot.country);
        }
        self.state = state;
    }
}

/// Source answer first, derivation second, failure last.
async fn resolve_state(
    source: &dyn TimeDataSource,
    derivation: &TimeDerivationService,
    timezone: &str,
    country: &str,
) -> TileState {
    match source.get_time_data(timezone).await {
        Ok(snapshot) => TileState::Ready(snapshot),
        Err(e) => {
            tracing::warn!(timezone = %timezone, error = %e, "Data source failed; deriving locally");
            derivation
                .derive_current_snapshot(timezone, Some(country))
                .map_or_else(|| TileState::Failed(LOAD_FAILED.to_string()), TileState::Ready)
        }
    }
}

/// The primary clock and the city tiles.
pub struct CityBoard {
    derivation: Arc<TimeDerivationService>,
    source: Arc<dyn TimeDataSource>,
    tiles: Vec<CityTile>,
    primary_timezone: String,
    primary: TileState,
}

impl CityBoard {
    #[must_use]
    pub fn new(
        derivation: Arc<TimeDerivationService>,
        source: Arc<dyn TimeDataSource>,
        primary_timezone: impl Into<String>,
    ) -> Self {
        Self {
            derivation,
            source,
            tiles: Vec::new(),
            primary_timezone: primary_timezone.into(),
            primary: TileState::Pending,
        }
    }

    #[must_use]
    pub fn tiles(&self) -> &[CityTile] {
        &self.tiles
    }

    #[must_use]
    pub fn primary_timezone(&self) -> &str {
        &self.primary_timezone
    }

    #[must_use]
    pub const fn primary(&self) -> &TileState {
        &self.primary
    }

    fn initial_state(&self, timezone: &str, country: &str, connected: bool) -> TileState {
        match self.derivation.derive_current_snapshot(timezone, Some(country)) {
            Some(snapshot) => TileState::Ready(snapshot),
            None if connected => TileState::Pending,
            None => TileState::Failed(UNAVAILABLE.to_string()),
        }
    }

    fn new_tile(&self, timezone: &str, city: String, country: String, connected: bool) -> CityTile {
        let state = self.initial_state(timezone, &country, connected);
        let mut tile = CityTile {
            city,
            country,
            timezone: timezone.to_string(),
            state: TileState::Pending,
        };
        tile.apply(state);
        tile
    }

    /// ## Summary
    /// Replaces the tiles with `favorites`, or with the default cities when
    /// there are none, and derives every clock immediately.
    ///
    /// Favourites may be zone ids or known city names. A tile the derivation
    /// cannot fill stays pending while the data source is reachable and
    /// fails otherwise.
    pub fn initialize(&mut self, favorites: &[String], connected: bool) {
        let tables = self.derivation.tables();

        self.tiles = if favorites.is_empty() {
            tables
                .default_cities()
                .map(|default| {
                    self.new_tile(
                        default.timezone,
                        default.city.to_string(),
                        default.country.to_string(),
                        connected,
                    )
                })
                .collect()
        } else {
            favorites
                .iter()
                .map(|favorite| {
                    let timezone = tables.normalize_timezone(favorite);
                    let country = tables.country(timezone).unwrap_or(LOADING_COUNTRY);
                    self.new_tile(
                        timezone,
                        city_from_timezone(timezone),
                        country.to_string(),
                        connected,
                    )
                })
                .collect()
        };

        let primary = self.primary_timezone.clone();
        self.select_primary(&primary);
        tracing::info!(tiles = self.tiles.len(), primary = %primary, "Board initialised");
    }

    /// ## Summary
    /// Re-fetches one tile. Out of range indexes are ignored.
    pub async fn refresh_tile(&mut self, index: usize) {
        let Some(tile) = self.tiles.get(index) else {
            return;
        };
        let state = resolve_state(
            self.source.as_ref(),
            &self.derivation,
            &tile.timezone,
            &tile.country,
        )
        .await;
        if let Some(tile) = self.tiles.get_mut(index) {
            tile.apply(state);
        }
    }

    /// ## Summary
    /// Re-fetches the primary clock and every tile concurrently.
    pub async fn refresh_all(&mut self) {
        let source = self.source.as_ref();
        let derivation = self.derivation.as_ref();

        let tile_states = join_all(self.tiles.iter().map(|tile| {
            resolve_state(source, derivation, &tile.timezone, &tile.country)
        }));
        let primary_state = resolve_state(
            source,
            derivation,
            &self.primary_timezone,
            self.primary_country(),
        );
        let (tile_states, primary_state) = futures::join!(tile_states, primary_state);

        for (tile, state) in self.tiles.iter_mut().zip(tile_states) {
            tile.apply(state);
        }
        self.primary = primary_state;
        tracing::debug!(tiles = self.tiles.len(), "Board refreshed");
    }

    /// ## Summary
    /// Re-derives every non-pending clock from the current time.
    ///
    /// A tile whose derivation fails keeps its previous state.
    pub fn tick(&mut self) {
        for tile in &mut self.tiles {
            if tile.state.is_pending() {
                continue;
            }
            if let Some(snapshot) = self
                .derivation
                .derive_current_snapshot(&tile.timezone, Some(&tile.country))
            {
                tile.apply(TileState::Ready(snapshot));
            }
        }

        if let Some(snapshot) = self
            .derivation
            .derive_current_snapshot(&self.primary_timezone, Some(self.primary_country()))
        {
            self.primary = TileState::Ready(snapshot);
        }
    }

    /// ## Summary
    /// Adds a tile for a search result. Returns `false` if a tile for the
    /// same zone already exists.
    pub fn add_city(&mut self, city: &CitySearchResult) -> bool {
        if self.tiles.iter().any(|tile| tile.timezone == city.timezone) {
            return false;
        }
        let tile = self.new_tile(&city.timezone, city.name.clone(), city.country.clone(), true);
        self.tiles.push(tile);
        true
    }

    /// Makes `timezone` the primary clock and derives it immediately.
    pub fn select_primary(&mut self, timezone: &str) {
        self.primary_timezone = timezone.to_string();
        self.primary = self
            .derivation
            .derive_current_snapshot(timezone, Some(self.primary_country()))
            .map_or(TileState::Pending, TileState::Ready);
    }

    fn primary_country(&self) -> &str {
        self.tiles
            .iter()
            .find(|tile| tile.timezone == self.primary_timezone)
            .map_or(LOADING_COUNTRY, |tile| tile.country.as_str())
    }
}

#[cfg(test)]
mod tests {
    use chrono::{TimeZone, Utc};
    use timespot_tz::tables::FallbackTables;
    use timespot_tz::{FixedClock, Instant};

    use super::*;
    use crate::local::LocalTimeService;
    use crate::seed::SeedData;

    fn board(primary: &str) -> CityBoard {
        let clock = FixedClock::new(Instant::from_utc(
            Utc.with_ymd_and_hms(2025, 7, 15, 12, 0, 0).unwrap(),
        ));
        let derivation = Arc::new(TimeDerivationService::new(
            FallbackTables::reference(),
            Arc::new(clock),
        ));
        let source = Arc::new(LocalTimeService::new(
            derivation.clone(),
            Arc::new(SeedData::builtin()),
        ));
        CityBoard::new(derivation, source, primary)
    }

    fn favorites(zones: &[&str]) -> Vec<String> {
        zones.iter().map(ToString::to_string).collect()
    }

    #[test_log::test]
    fn test_empty_favorites_use_defaults() {
        let mut board = board("Europe/London");
        board.initialize(&[], true);

        let zones: Vec<_> = board.tiles().iter().map(|t| t.timezone.as_str()).collect();
        assert_eq!(
            zones,
            ["America/Los_Angeles", "America/New_York", "Europe/London", "Europe/Paris"]
        );
        assert!(board.tiles().iter().all(|t| t.state.snapshot().is_some()));
        assert_eq!(board.primary().snapshot().unwrap().abbreviation, "BST");
    }

    #[test_log::test]
    fn test_favorites_accept_city_names_and_unknown_zones() {
        let mut board = board("Asia/Tokyo");
        board.initialize(&favorites(&["Tokyo", "Foo/Bar"]), false);

        let tiles = board.tiles();
        assert_eq!(tiles[0].timezone, "Asia/Tokyo");
        assert_eq!(tiles[0].country, "Japan");
        assert_eq!(tiles[1].country, LOADING_COUNTRY);
        assert_eq!(tiles[1].state, TileState::Failed(UNAVAILABLE.to_string()));
    }

    #[test_log::test]
    fn test_unknown_zone_is_pending_while_connected() {
        let mut board = board("Europe/London");
        board.initialize(&favorites(&["Foo/Bar"]), true);
        assert!(board.tiles()[0].state.is_pending());
    }

    #[test_log::test(tokio::test)]
    async fn test_refresh_prefers_source_then_derivation() {
        let mut board = board("Europe/London");
        board.initialize(&favorites(&["Europe/London", "Asia/Tokyo", "Foo/Bar"]), true);
        board.refresh_all().await;

        let tiles = board.tiles();
        let london = tiles[0].state.snapshot().unwrap();
        assert_eq!(london.abbreviation, "GMT");
        assert_eq!(london.local.to_pseudo_utc_string(), "2024-01-15T15:30:00.000Z");

        let tokyo = tiles[1].state.snapshot().unwrap();
        assert_eq!(tokyo.abbreviation, "JST");
        assert_eq!(tiles[2].state, TileState::Failed(LOAD_FAILED.to_string()));

        assert_eq!(board.primary().snapshot().unwrap().abbreviation, "GMT");
    }

    #[test_log::test(tokio::test)]
    async fn test_tick_rederives_but_skips_pending() {
        let mut board = board("Europe/London");
        board.initialize(&favorites(&["Europe/London", "Foo/Bar"]), true);
        board.refresh_tile(0).await;
        assert_eq!(board.tiles()[0].state.snapshot().unwrap().abbreviation, "GMT");

        board.tick();
        let london = board.tiles()[0].state.snapshot().unwrap();
        assert_eq!(london.abbreviation, "BST");
        assert_eq!(london.utc.to_iso_string(), "2025-07-15T12:00:00.000Z");
        assert!(board.tiles()[1].state.is_pending());
    }

    #[test_log::test]
    fn test_add_city_rejects_duplicates() {
        let mut board = board("Europe/London");
        board.initialize(&[], true);

        let rome = CitySearchResult {
            name: "Rome".to_string(),
            country: "Italy".to_string(),
            timezone: "Europe/Rome".to_string(),
            latitude: 0.0,
            longitude: 0.0,
        };
        assert!(board.add_city(&rome));
        assert!(!board.add_city(&rome));
        assert_eq!(board.tiles().len(), 5);
        assert_eq!(board.tiles()[4].state.snapshot().unwrap().utc_offset, "+02:00");
    }

    #[test_log::test]
    fn test_select_primary_keeps_tile_country() {
        let mut board = board("Europe/London");
        board.initialize(&[], true);
        board.select_primary("America/New_York");

        assert_eq!(board.primary_timezone(), "America/New_York");
        let primary = board.primary().snapshot().unwrap();
        assert_eq!(primary.country, "United States");
        assert_eq!(primary.local.hour(), 8);
    }
}
