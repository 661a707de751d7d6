//! End-to-end checks of the local data source against the bundled seed data.

use std::sync::Arc;

use chrono::{TimeZone, Utc};
use timespot_service::error::ServiceError;
use timespot_service::local::LocalTimeService;
use timespot_service::seed::SeedData;
use timespot_service::source::{ConnectionState, TimeDataSource};
use timespot_tz::tables::FallbackTables;
use timespot_tz::{FixedClock, Instant, TimeDerivationService};

fn service() -> LocalTimeService {
    let clock = FixedClock::new(Instant::from_utc(
        Utc.with_ymd_and_hms(2025, 7, 15, 12, 0, 0).unwrap(),
    ));
    let derivation = Arc::new(TimeDerivationService::new(
        FallbackTables::reference(),
        Arc::new(clock),
    ));
    LocalTimeService::new(derivation, Arc::new(SeedData::builtin()))
}

#[test_log::test(tokio::test)]
async fn test_london_time_data() {
    let snapshot = service().get_time_data("Europe/London").await.unwrap();

    assert_eq!(snapshot.city, "London");
    assert_eq!(snapshot.country, "United Kingdom");
    assert_eq!(snapshot.timezone, "Europe/London");
    assert_eq!(snapshot.abbreviation, "GMT");
    assert_eq!(snapshot.utc_offset, "+00:00");
    assert!(!snapshot.is_daylight_saving);
}

#[test_log::test(tokio::test)]
async fn test_stored_wall_clock_keeps_local_digits() {
    let snapshot = service().get_time_data("America/New_York").await.unwrap();
    assert_eq!(snapshot.local.hour(), 10);
    assert_eq!(snapshot.utc.to_iso_string(), "2024-01-15T15:30:00.000Z");
}

#[test_log::test(tokio::test)]
async fn test_unknown_zone_is_not_found() {
    let err = service().get_time_data("Foo/Bar").await.unwrap_err();
    assert!(matches!(err, ServiceError::NotFound(_)), "{err}");
}

#[test_log::test(tokio::test)]
async fn test_malformed_zone_is_invalid_input() {
    let service = service();
    for bad in ["", "London", "Europe/London/Extra", "<script>x</script>"] {
        let err = service.get_time_data(bad).await.unwrap_err();
        assert!(matches!(err, ServiceError::InvalidInput(_)), "{bad}: {err}");
    }
}

#[test_log::test(tokio::test)]
async fn test_sun_data_is_formatted_in_zone() {
    let sun = service().get_sun_data("America/New_York").await.unwrap();

    assert_eq!(sun.sunrise, "07:15");
    assert_eq!(sun.sunset, "17:30");
    assert_eq!(sun.solar_noon, "12:22");
    assert_eq!(sun.day_length, "10:15:00");
    assert_eq!(sun.civil_twilight_begin, "06:45");
    assert_eq!(sun.nautical_twilight_begin, "N/A");
    assert!(sun.is_usable());
}

#[test_log::test(tokio::test)]
async fn test_sun_data_accepts_city_names() {
    let sun = service().get_sun_data("London").await.unwrap();
    assert_eq!(sun.sunrise, "08:00");

    let err = service().get_sun_data("Tokyo").await.unwrap_err();
    assert!(matches!(err, ServiceError::NotFound(_)));
}

#[test_log::test(tokio::test)]
async fn test_search_matches_any_field_case_insensitively() {
    let service = service();
    let results = service.search_cities("lon").await.unwrap();

    assert!(results.iter().any(|city| city.timezone == "Europe/London"));
    for city in &results {
        let haystack = format!("{} {} {}", city.name, city.country, city.timezone).to_lowercase();
        assert!(haystack.contains("lon"), "{haystack}");
    }

    let upper = service.search_cities("LON").await.unwrap();
    assert_eq!(upper, results);

    let by_country = service.search_cities("japan").await.unwrap();
    assert_eq!(by_country.len(), 1);
    assert_eq!(by_country[0].name, "Tokyo");
}

#[test_log::test(tokio::test)]
async fn test_search_caps_results() {
    let results = service().with_max_results(3).search_cities("a").await.unwrap();
    assert_eq!(results.len(), 3);
}

#[test_log::test(tokio::test)]
async fn test_empty_query_lists_first_twenty_zones_in_table_order() {
    let results = service().search_cities("").await.unwrap();
    assert_eq!(results.len(), 20);

    let expected: Vec<&str> = FallbackTables::reference()
        .zones()
        .take(20)
        .map(|(timezone, _)| timezone)
        .collect();
    let listed: Vec<&str> = results.iter().map(|city| city.timezone.as_str()).collect();
    assert_eq!(listed, expected);
    assert_eq!(listed[0], "America/New_York");
}

#[test_log::test(tokio::test)]
async fn test_search_without_match_is_empty() {
    let results = service().search_cities("zzzz").await.unwrap();
    assert!(results.is_empty());
}

#[test_log::test(tokio::test)]
async fn test_health_check_reports_connected() {
    let service = service();
    assert!(service.health_check().await);
    assert_eq!(service.connection_state().await, ConnectionState::Connected);
}
