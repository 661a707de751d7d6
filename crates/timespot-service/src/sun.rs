//! Sun data for the primary city.

use std::sync::Arc;

use timespot_tz::SunSnapshot;

use crate::source::TimeDataSource;

/// What the sun panel shows.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum SunState {
    #[default]
    Idle,
    Ready(SunSnapshot),
    Failed(String),
}

/// ## Summary
/// Fetches sun data for one zone at a time.
///
/// Asking again for the zone already tracked is a no-op; only a change of
/// zone or an explicit [`SunTracker::refresh`] hits the source.
pub struct SunTracker {
    source: Arc<dyn TimeDataSource>,
    timezone: Option<String>,
    state: SunState,
}

impl SunTracker {
    #[must_use]
    pub fn new(source: Arc<dyn TimeDataSource>) -> Self {
        Self {
            source,
            timezone: None,
            state: SunState::Idle,
        }
    }

    #[must_use]
    pub const fn state(&self) -> &SunState {
        &self.state
    }

    /// Switches to `timezone`, fetching only if it differs from the last one.
    pub async fn track(&mut self, timezone: &str) -> &SunState {
        if self.timezone.as_deref() != Some(timezone) {
            self.timezone = Some(timezone.to_string());
            self.fetch(timezone).await;
        }
        &self.state
    }

    /// Fetches the tracked zone again.
    pub async fn refresh(&mut self) -> &SunState {
        if let Some(timezone) = self.timezone.clone() {
            self.fetch(&timezone).await;
        }
        &self.state
    }

    async fn fetch(&mut self, timezone: &str) {
        self.state = match self.source.get_sun_data(timezone).await {
            Ok(sun) if sun.is_usable() => SunState::Ready(sun),
            Ok(_) => {
                tracing::warn!(timezone = %timezone, "Sun data has no sunrise, sunset or day length");
                SunState::Failed("Invalid sun data received".to_string())
            }
            Err(e) => {
                tracing::error!(timezone = %timezone, error = %e, "Failed to fetch sun data");
                SunState::Failed(e.to_string())
            }
        };
    }
}
