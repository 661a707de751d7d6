//! Debounced city search that ignores superseded responses.

use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;

use tokio::sync::RwLock;

use crate::source::{CitySearchResult, TimeDataSource};

/// Result of one [`SearchSession::search`] call.
#[derive(Debug, Clone, PartialEq)]
pub enum SearchOutcome {
    /// The newest query's results, now visible.
    Fresh(Vec<CitySearchResult>),
    /// A later query was issued while this one waited or ran.
    Superseded,
    /// The source failed; visible results are unchanged.
    Failed(String),
}

/// ## Summary
/// One search box.
///
/// Every call takes a sequence number. After the debounce delay and again
/// after the source answers, a call whose number is no longer the newest
/// returns [`SearchOutcome::Superseded`] without touching the visible
/// results, so an older slow response can never overwrite a newer one.
pub struct SearchSession {
    source: Arc<dyn TimeDataSource>,
    debounce: Duration,
    latest: AtomicU64,
    visible: RwLock<Vec<CitySearchResult>>,
}

impl SearchSession {
    #[must_use]
    pub fn new(source: Arc<dyn TimeDataSource>, debounce: Duration) -> Self {
        Self {
            source,
            debounce,
            latest: AtomicU64::new(0),
            visible: RwLock::new(Vec::new()),
        }
    }

    fn is_current(&self, ticket: u64) -> bool {
        self.latest.load(Ordering::SeqCst) == ticket
    }

    pub async fn search(&self, query: &str) -> SearchOutcome {
        let ticket = self.latest.fetch_add(1, Ordering::SeqCst) + 1;

        tokio::time::sleep(self.debounce).await;
        if !self.is_current(ticket) {
            tracing::trace!(ticket, "Search superseded during debounce");
            return SearchOutcome::Superseded;
        }

        let results = match self.source.search_cities(query).await {
            Ok(results) => results,
            Err(e) => {
                tracing::error!(error = %e, "City search failed");
                return SearchOutcome::Failed(e.to_string());
            }
        };

        let mut visible = self.visible.write().await;
        if !self.is_current(ticket) {
            tracing::trace!(ticket, "Dropping stale search response");
            return SearchOutcome::Superseded;
        }
        visible.clone_from(&results);
        SearchOutcome::Fresh(results)
    }

    /// Results of the newest completed query.
    pub async fn visible(&self) -> Vec<CitySearchResult> {
        self.visible.read().await.clone()
    }

    /// Invalidates any in-flight query and empties the visible results.
    pub async fn clear(&self) {
        self.latest.fetch_add(1, Ordering::SeqCst);
        self.visible.write().await.clear();
    }
}

#[cfg(test)]
mod tests {
    use async_trait::async_trait;
    use timespot_tz::{SunSnapshot, TimeSnapshot};

    use super::*;
    use crate::error::{ServiceError, ServiceResult};

    /// Answers after a delay proportional to the query length.
    struct SlowSource;

    #[async_trait]
    impl TimeDataSource for SlowSource {
        async fn get_time_data(&self, timezone: &str) -> ServiceResult<TimeSnapshot> {
            Err(ServiceError::NotFound(timezone.to_string()))
        }

        async fn get_sun_data(&self, timezone: &str) -> ServiceResult<SunSnapshot> {
            Err(ServiceError::NotFound(timezone.to_string()))
        }

        async fn search_cities(&self, query: &str) -> ServiceResult<Vec<CitySearchResult>> {
            let delay = u64::try_from(query.len()).unwrap_or_default() * 100;
            tokio::time::sleep(Duration::from_millis(delay)).await;
            if query == "boom" {
                return Err(ServiceError::InvalidInput(query.to_string()));
            }
            Ok(vec![CitySearchResult {
                name: query.to_string(),
                country: "Nowhere".to_string(),
                timezone: "Etc/UTC".to_string(),
                latitude: 0.0,
                longitude: 0.0,
            }])
        }

        async fn health_check(&self) -> bool {
            true
        }
    }

    fn session() -> Arc<SearchSession> {
        Arc::new(SearchSession::new(Arc::new(SlowSource), Duration::from_millis(300)))
    }

    #[test_log::test(tokio::test(start_paused = true))]
    async fn test_single_query_becomes_visible() {
        let session = session();
        let outcome = session.search("lon").await;
        assert!(matches!(outcome, SearchOutcome::Fresh(ref r) if r[0].name == "lon"));
        assert_eq!(session.visible().await[0].name, "lon");
    }

    #[test_log::test(tokio::test(start_paused = true))]
    async fn test_typing_within_debounce_supersedes() {
        let session = session();
        let first = tokio::spawn({
            let session = session.clone();
            async move { session.search("l").await }
        });
        tokio::time::sleep(Duration::from_millis(100)).await;
        let second = session.search("lo").await;

        assert_eq!(first.await.unwrap(), SearchOutcome::Superseded);
        assert!(matches!(second, SearchOutcome::Fresh(_)));
    }

    #[test_log::test(tokio::test(start_paused = true))]
    async fn test_slow_older_response_is_dropped() {
        let session = session();
        // The long query is still waiting on the source when the short one
        // is issued and answered.
        let slow = tokio::spawn({
            let session = session.clone();
            async move { session.search("a very long query").await }
        });
        tokio::time::sleep(Duration::from_millis(400)).await;
        let fast = session.search("x").await;

        assert_eq!(slow.await.unwrap(), SearchOutcome::Superseded);
        assert!(matches!(fast, SearchOutcome::Fresh(_)));
        assert_eq!(session.visible().await[0].name, "x");
    }

    #[test_log::test(tokio::test(start_paused = true))]
    async fn test_failure_keeps_previous_results() {
        let session = session();
        session.search("lon").await;
        let outcome = session.search("boom").await;
        assert!(matches!(outcome, SearchOutcome::Failed(_)));
        assert_eq!(session.visible().await[0].name, "lon");
    }
}
