use std::sync::Arc;

use chrono::{TimeZone, Utc};

use super::*;
use crate::time::FixedClock;

fn at(y: i32, mo: u32, d: u32, h: u32, mi: u32) -> Instant {
    Instant::from_utc(Utc.with_ymd_and_hms(y, mo, d, h, mi, 0).unwrap())
}

fn service_at(instant: Instant) -> TimeDerivationService {
    TimeDerivationService::new(FallbackTables::reference(), Arc::new(FixedClock::new(instant)))
}

/// Tables whose decimal table holds an id the zone database cannot parse.
fn tables_with_unparseable_fallback() -> &'static FallbackTables {
    let reference = FallbackTables::reference();
    Box::leak(Box::new(FallbackTables {
        version: "test",
        as_of: reference.as_of,
        countries: &[("Test/Halfhour", "Testland")],
        aliases: &[],
        fixed_offsets: &[],
        decimal_offsets: &[("Test/Halfhour", -3.5)],
        abbreviations: &[("Test/Halfhour", "TST")],
        city_zones: &[],
        default_cities: &[],
    }))
}

#[test_log::test]
fn test_snapshot_keeps_requested_timezone_for_every_table_zone() {
    let service = service_at(at(2025, 7, 15, 12, 0));
    for (zone, country) in service.tables().zones() {
        let snapshot = service
            .derive_current_snapshot(zone, None)
            .unwrap_or_else(|| panic!("{zone} should derive"));
        assert_eq!(snapshot.timezone, zone);
        assert_eq!(snapshot.country, country);
        assert!(!snapshot.is_daylight_saving);
    }
}

#[test_log::test]
fn test_paris_in_july() {
    let service = service_at(at(2025, 7, 15, 12, 0));
    let snapshot = service.derive_current_snapshot("Europe/Paris", None).unwrap();

    assert_eq!(snapshot.city, "Paris");
    assert_eq!(snapshot.country, "France");
    assert_eq!(snapshot.utc_offset, "+02:00");
    assert_eq!(snapshot.abbreviation, "CEST");
    assert_eq!(snapshot.local.hour(), 14);
    assert_eq!(snapshot.local.to_pseudo_utc_string(), "2025-07-15T14:00:00.000Z");
    assert_eq!(snapshot.utc.to_iso_string(), "2025-07-15T12:00:00.000Z");
}

#[test_log::test]
fn test_wall_clock_follows_zone_database_but_offset_follows_table() {
    // January: New York runs at -05:00 while the July table says -04:00.
    let service = service_at(at(2026, 1, 15, 15, 30));
    let snapshot = service.derive_current_snapshot("America/New_York", None).unwrap();

    assert_eq!(snapshot.local.hour(), 10);
    assert_eq!(snapshot.utc_offset, "-04:00");
    assert_eq!(snapshot.abbreviation, "EDT");
}

#[test_log::test]
fn test_alias_is_used_for_lookup_but_not_reported() {
    let service = service_at(at(2025, 7, 15, 12, 0));
    let snapshot = service.derive_current_snapshot("Asia/Mumbai", None).unwrap();

    assert_eq!(snapshot.timezone, "Asia/Mumbai");
    assert_eq!(snapshot.city, "Mumbai");
    assert_eq!(snapshot.country, "India");
    assert_eq!(snapshot.utc_offset, "+05:30");
    assert_eq!(snapshot.abbreviation, "IST");
    assert_eq!(snapshot.local.to_pseudo_utc_string(), "2025-07-15T17:30:00.000Z");
}

#[test_log::test]
fn test_preserved_country_wins() {
    let service = service_at(at(2025, 7, 15, 12, 0));
    let snapshot = service
        .derive_current_snapshot("Europe/London", Some("England"))
        .unwrap();
    assert_eq!(snapshot.country, "England");
}

#[test_log::test]
fn test_loading_placeholder_is_not_preserved() {
    let service = service_at(at(2025, 7, 15, 12, 0));
    let snapshot = service
        .derive_current_snapshot("Europe/London", Some("Loading..."))
        .unwrap();
    assert_eq!(snapshot.country, "United Kingdom");

    let snapshot = service.derive_current_snapshot("Europe/London", Some("")).unwrap();
    assert_eq!(snapshot.country, "United Kingdom");
}

#[test_log::test]
fn test_zone_outside_tables_gets_defaults() {
    let service = service_at(at(2025, 7, 15, 12, 0));
    let snapshot = service.derive_current_snapshot("Pacific/Fiji", None).unwrap();

    assert_eq!(snapshot.timezone, "Pacific/Fiji");
    assert_eq!(snapshot.country, "Unknown");
    assert_eq!(snapshot.utc_offset, "+00:00");
    assert_eq!(snapshot.abbreviation, "UTC");
    assert_eq!(snapshot.local.hour(), 0);
}

#[test_log::test]
fn test_unknown_timezone_is_absent() {
    let service = service_at(at(2025, 7, 15, 12, 0));
    assert!(service.derive_current_snapshot("Foo/Bar", None).is_none());
    assert!(service.derive_current_snapshot("", None).is_none());
    assert!(service.derive_current_snapshot("not a zone at all", None).is_none());
}

#[test_log::test]
fn test_decimal_offset_fallback() {
    let service = TimeDerivationService::new(
        tables_with_unparseable_fallback(),
        Arc::new(FixedClock::new(at(2025, 7, 15, 12, 0))),
    );
    let snapshot = service.derive_current_snapshot("Test/Halfhour", None).unwrap();

    assert_eq!(snapshot.timezone, "Test/Halfhour");
    assert_eq!(snapshot.country, "Testland");
    assert_eq!(snapshot.utc_offset, "-03:30");
    assert_eq!(snapshot.abbreviation, "TST");
    assert_eq!(snapshot.local.to_pseudo_utc_string(), "2025-07-15T08:30:00.000Z");
}

#[test_log::test]
fn test_stale_clock_still_derives() {
    let service = service_at(at(2030, 1, 1, 0, 0));
    assert!(service.derive_current_snapshot("Asia/Tokyo", None).is_some());
    assert!(service.staleness_reported.load(Ordering::Relaxed));
}

#[test_log::test]
fn test_snapshot_serializes_with_legacy_field_names() {
    let service = service_at(at(2025, 7, 15, 12, 0));
    let snapshot = service.derive_current_snapshot("Asia/Tokyo", None).unwrap();
    let json = serde_json::to_value(&snapshot).unwrap();

    assert_eq!(json["timezone"], "Asia/Tokyo");
    assert_eq!(json["datetime"], "2025-07-15T21:00:00.000Z");
    assert_eq!(json["utc_offset"], "+09:00");
    assert_eq!(json["dst"], false);
}
