//! Offsets and abbreviations as observed on the reference date (mid July,
//! northern summer). They are not evaluated from DST rules.

pub(super) const FIXED_OFFSETS: &[(&str, &str)] = &[
    // Americas
    ("America/New_York", "-04:00"),
    ("America/Los_Angeles", "-07:00"),
    ("America/Chicago", "-05:00"),
    ("America/Denver", "-06:00"),
    ("America/Phoenix", "-07:00"),
    ("America/Toronto", "-04:00"),
    ("America/Vancouver", "-07:00"),
    ("America/Mexico_City", "-05:00"),
    ("America/Sao_Paulo", "-03:00"),
    ("America/Argentina/Buenos_Aires", "-03:00"),
    ("America/Lima", "-05:00"),
    ("America/Bogota", "-05:00"),
    ("America/Santiago", "-04:00"),
    // Europe
    ("Europe/London", "+01:00"),
    ("Europe/Paris", "+02:00"),
    ("Europe/Berlin", "+02:00"),
    ("Europe/Rome", "+02:00"),
    ("Europe/Madrid", "+02:00"),
    ("Europe/Amsterdam", "+02:00"),
    ("Europe/Stockholm", "+02:00"),
    ("Europe/Zurich", "+02:00"),
    ("Europe/Vienna", "+02:00"),
    ("Europe/Brussels", "+02:00"),
    ("Europe/Copenhagen", "+02:00"),
    ("Europe/Helsinki", "+03:00"),
    ("Europe/Oslo", "+02:00"),
    ("Europe/Warsaw", "+02:00"),
    ("Europe/Prague", "+02:00"),
    ("Europe/Budapest", "+02:00"),
    ("Europe/Athens", "+03:00"),
    ("Europe/Istanbul", "+03:00"),
    ("Europe/Moscow", "+03:00"),
    ("Europe/Lisbon", "+01:00"),
    // Asia
    ("Asia/Tokyo", "+09:00"),
    ("Asia/Shanghai", "+08:00"),
    ("Asia/Hong_Kong", "+08:00"),
    ("Asia/Kolkata", "+05:30"),
    ("Asia/Mumbai", "+05:30"),
    ("Asia/Delhi", "+05:30"),
    ("Asia/Singapore", "+08:00"),
    ("Asia/Dubai", "+04:00"),
    ("Asia/Bangkok", "+07:00"),
    ("Asia/Jakarta", "+07:00"),
    ("Asia/Manila", "+08:00"),
    ("Asia/Seoul", "+09:00"),
    ("Asia/Kuala_Lumpur", "+08:00"),
    ("Asia/Jerusalem", "+03:00"),
    ("Asia/Riyadh", "+03:00"),
    ("Asia/Qatar", "+03:00"),
    // Oceania, southern winter
    ("Australia/Sydney", "+10:00"),
    ("Australia/Melbourne", "+10:00"),
    ("Australia/Brisbane", "+10:00"),
    ("Australia/Perth", "+08:00"),
    ("Pacific/Auckland", "+12:00"),
    // Africa
    ("Africa/Cairo", "+02:00"),
    ("Africa/Lagos", "+01:00"),
    ("Africa/Johannesburg", "+02:00"),
    ("Africa/Nairobi", "+03:00"),
    ("Africa/Casablanca", "+01:00"),
];

/// Last-resort offsets in hours, used when the zone database rejects an id.
pub(super) const DECIMAL_OFFSETS: &[(&str, f64)] = &[
    ("Asia/Mumbai", 5.5),
    ("Asia/Delhi", 5.5),
    ("Asia/Kolkata", 5.5),
    ("Asia/Calcutta", 5.5),
];

pub(super) const ABBREVIATIONS: &[(&str, &str)] = &[
    ("America/New_York", "EDT"),
    ("America/Los_Angeles", "PDT"),
    ("America/Chicago", "CDT"),
    ("America/Denver", "MDT"),
    ("America/Phoenix", "MST"),
    ("America/Toronto", "EDT"),
    ("America/Vancouver", "PDT"),
    ("America/Mexico_City", "CDT"),
    ("America/Sao_Paulo", "BRT"),
    ("America/Argentina/Buenos_Aires", "ART"),
    ("America/Lima", "PET"),
    ("America/Bogota", "COT"),
    ("America/Santiago", "CLT"),
    ("Europe/London", "BST"),
    ("Europe/Paris", "CEST"),
    ("Europe/Berlin", "CEST"),
    ("Europe/Rome", "CEST"),
    ("Europe/Madrid", "CEST"),
    ("Europe/Amsterdam", "CEST"),
    ("Europe/Stockholm", "CEST"),
    ("Europe/Zurich", "CEST"),
    ("Europe/Vienna", "CEST"),
    ("Europe/Brussels", "CEST"),
    ("Europe/Copenhagen", "CEST"),
    ("Europe/Helsinki", "EEST"),
    ("Europe/Oslo", "CEST"),
    ("Europe/Warsaw", "CEST"),
    ("Europe/Prague", "CEST"),
    ("Europe/Budapest", "CEST"),
    ("Europe/Athens", "EEST"),
    ("Europe/Istanbul", "TRT"),
    ("Europe/Moscow", "MSK"),
    ("Europe/Lisbon", "WEST"),
    ("Asia/Tokyo", "JST"),
    ("Asia/Shanghai", "CST"),
    ("Asia/Hong_Kong", "HKT"),
    ("Asia/Kolkata", "IST"),
    ("Asia/Singapore", "SGT"),
    ("Asia/Dubai", "GST"),
    ("Asia/Bangkok", "ICT"),
    ("Asia/Jakarta", "WIB"),
    ("Asia/Manila", "PHT"),
    ("Asia/Seoul", "KST"),
    ("Asia/Kuala_Lumpur", "MYT"),
    ("Asia/Jerusalem", "IDT"),
    ("Asia/Riyadh", "AST"),
    ("Asia/Qatar", "AST"),
    ("Africa/Cairo", "EET"),
    ("Africa/Lagos", "WAT"),
    ("Africa/Johannesburg", "SAST"),
    ("Africa/Nairobi", "EAT"),
    ("Africa/Casablanca", "WEST"),
    ("Australia/Sydney", "AEST"),
    ("Australia/Melbourne", "AEST"),
    ("Australia/Brisbane", "AEST"),
    ("Australia/Perth", "AWST"),
    ("Pacific/Auckland", "NZST"),
];
