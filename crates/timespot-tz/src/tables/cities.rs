//! Bare city names accepted in place of a timezone id.

pub(super) const CITY_ZONES: &[(&str, &str)] = &[
    ("Los Angeles", "America/Los_Angeles"),
    ("New York", "America/New_York"),
    ("Chicago", "America/Chicago"),
    ("Denver", "America/Denver"),
    ("London", "Europe/London"),
    ("Paris", "Europe/Paris"),
    ("Berlin", "Europe/Berlin"),
    ("Rome", "Europe/Rome"),
    ("Madrid", "Europe/Madrid"),
    ("Amsterdam", "Europe/Amsterdam"),
    ("Stockholm", "Europe/Stockholm"),
    ("Zurich", "Europe/Zurich"),
    ("Tokyo", "Asia/Tokyo"),
    ("Shanghai", "Asia/Shanghai"),
    ("Mumbai", "Asia/Kolkata"),
    ("Delhi", "Asia/Kolkata"),
    ("Singapore", "Asia/Singapore"),
    ("Sydney", "Australia/Sydney"),
    ("Dubai", "Asia/Dubai"),
    ("Cairo", "Africa/Cairo"),
    ("Toronto", "America/Toronto"),
    ("Vancouver", "America/Vancouver"),
    ("Mexico City", "America/Mexico_City"),
    ("São Paulo", "America/Sao_Paulo"),
    ("Auckland", "Pacific/Auckland"),
];

/// Cards shown when the user has no favorites: (city, country, timezone).
pub(super) const DEFAULT_CITIES: &[(&str, &str, &str)] = &[
    ("Los Angeles", "United States", "America/Los_Angeles"),
    ("New York", "United States", "America/New_York"),
    ("London", "United Kingdom", "Europe/London"),
    ("Paris", "France", "Europe/Paris"),
];
