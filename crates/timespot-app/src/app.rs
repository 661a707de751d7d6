//! Wiring of the services into one running world clock.

use std::sync::Arc;
use std::time::Duration;

use timespot_core::config::Settings;
use timespot_core::types::TimeFormat;
use timespot_core::util::redact::redact_fields;
use timespot_service::board::CityBoard;
use timespot_service::local::LocalTimeService;
use timespot_service::preferences::{
    FileStore, KeyValueStore, MemoryStore, PreferencesService, PreferencesUpdate, UserPreferences,
};
use timespot_service::search::{SearchOutcome, SearchSession};
use timespot_service::seed::SeedData;
use timespot_service::sizer::{AdaptiveSizeState, SizeBounds};
use timespot_service::source::TimeDataSource;
use timespot_service::sun::SunTracker;
use timespot_service::ticker::{ClockTicker, TickEvent};
use timespot_tz::TimeDerivationService;
use timespot_tz::tables::FallbackTables;

use crate::error::AppResult;
use crate::render::{primary_clock_text, render_frame};

/// Everything one terminal session needs.
pub struct App {
    settings: Settings,
    source: Arc<dyn TimeDataSource>,
    preferences: PreferencesService,
    search: SearchSession,
    board: CityBoard,
    sun: SunTracker,
    sizer: AdaptiveSizeState,
    user_id: String,
    time_format: TimeFormat,
}

fn open_store(settings: &Settings) -> AppResult<Arc<dyn KeyValueStore>> {
    Ok(match settings.storage.path.as_deref() {
        Some(path) => Arc::new(FileStore::open(path)?),
        None => Arc::new(MemoryStore::new()),
    })
}

impl App {
    /// ## Summary
    /// Builds the services from `settings` and the system clock.
    ///
    /// ## Errors
    /// Returns an error if the configured preference file cannot be opened.
    pub fn build(settings: Settings) -> AppResult<Self> {
        let derivation = Arc::new(TimeDerivationService::new(
            FallbackTables::reference(),
            Arc::new(timespot_tz::SystemClock),
        ));
        Self::with_derivation(settings, derivation, Arc::new(SeedData::builtin()))
    }

    /// ## Summary
    /// Builds the services around an existing derivation service.
    ///
    /// ## Errors
    /// Returns an error if the configured preference file cannot be opened.
    pub fn with_derivation(
        settings: Settings,
        derivation: Arc<TimeDerivationService>,
        seed: Arc<SeedData>,
    ) -> AppResult<Self> {
        let source: Arc<dyn TimeDataSource> = Arc::new(
            LocalTimeService::new(derivation.clone(), seed.clone())
                .with_max_results(settings.search.max_results),
        );
        let preferences = PreferencesService::new(open_store(&settings)?, seed).with_defaults(
            UserPreferences {
                time_format: settings.display.time_format,
                ..UserPreferences::default()
            },
        );

        let user_id = settings
            .user
            .id
            .clone()
            .unwrap_or_else(|| preferences.user_id());
        let prefs = preferences.get(&user_id);
        if let Ok(logged) = serde_json::to_value(&prefs) {
            tracing::info!(user_id = %user_id, preferences = %redact_fields(&logged), "Loaded preferences");
        }

        let primary = derivation
            .tables()
            .normalize_timezone(&prefs.selected_city)
            .to_string();
        let bounds = SizeBounds {
            min: settings.display.min_font_size,
            max: settings.display.max_font_size,
        };
        let time_format = prefs.time_format;

        Ok(Self {
            board: CityBoard::new(derivation, source.clone(), primary),
            search: SearchSession::new(
                source.clone(),
                Duration::from_millis(settings.search.debounce_ms),
            ),
            sun: SunTracker::new(source.clone()),
            sizer: AdaptiveSizeState::new(bounds, time_format),
            source,
            settings,
            preferences,
            user_id,
            time_format,
        })
    }

    #[must_use]
    pub const fn board(&self) -> &CityBoard {
        &self.board
    }

    #[must_use]
    pub fn user_id(&self) -> &str {
        &self.user_id
    }

    #[must_use]
    pub const fn time_format(&self) -> TimeFormat {
        self.time_format
    }

    #[must_use]
    pub fn ticker(&self) -> ClockTicker {
        ClockTicker::new(
            Duration::from_millis(self.settings.clock.tick_ms),
            Duration::from_secs(self.settings.clock.refresh_secs),
        )
    }

    /// ## Summary
    /// Checks the data source, lays out the board from the stored
    /// favourites, fetches every clock and the primary city's sun data, then
    /// waits for the layout to settle.
    pub async fn start(&mut self) {
        let connection = self.source.connection_state().await;
        tracing::info!(connection = ?connection, "Data source checked");

        let favorites = self.preferences.get(&self.user_id).favorite_cities;
        self.board.initialize(&favorites, connection.is_connected());
        if connection.is_connected() {
            self.board.refresh_all().await;
        }
        let primary = self.board.primary_timezone().to_string();
        self.sun.track(&primary).await;

        tokio::time::sleep(Duration::from_millis(self.settings.display.settle_delay_ms)).await;
    }

    /// Applies one ticker event.
    pub async fn handle(&mut self, event: TickEvent) {
        match event {
            TickEvent::Tick => self.board.tick(),
            TickEvent::Refresh => {
                self.board.refresh_all().await;
                self.sun.refresh().await;
            }
        }
    }

    /// ## Summary
    /// Runs a city search and adds the best hit to the board and to the
    /// stored favourites. Returns whether a city was added.
    pub async fn add_from_search(&mut self, query: &str) -> bool {
        let results = match self.search.search(query).await {
            SearchOutcome::Fresh(results) => results,
            SearchOutcome::Superseded => return false,
            SearchOutcome::Failed(reason) => {
                tracing::warn!(query = %query, reason = %reason, "Search failed");
                return false;
            }
        };
        let Some(city) = results.first() else {
            tracing::info!(query = %query, "No city matched");
            return false;
        };

        if !self.board.add_city(city) {
            return false;
        }
        if !self.preferences.add_favorite_city(&self.user_id, &city.timezone) {
            tracing::warn!(timezone = %city.timezone, "City shown but not saved to favourites");
        }
        true
    }

    /// ## Summary
    /// Flips between 12h and 24h and stores the choice.
    pub fn toggle_time_format(&mut self) {
        self.time_format = self.time_format.toggled();
        self.sizer.set_format(self.time_format);
        self.preferences.update(
            &self.user_id,
            PreferencesUpdate {
                time_format: Some(self.time_format),
                ..PreferencesUpdate::default()
            },
        );
    }

    /// ## Summary
    /// Renders the current frame, resizing the primary clock first.
    pub fn frame(&mut self) -> String {
        let display = &self.settings.display;
        if let Some(text) = primary_clock_text(&self.board, self.time_format) {
            let size = self
                .sizer
                .update(&text, display.available_width(), display.viewport_width);
            tracing::debug!(font_size = size, "Primary clock sized");
        }
        render_frame(&self.board, self.sun.state(), self.time_format, self.sizer.font_size())
    }
}
