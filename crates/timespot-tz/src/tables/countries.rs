//! Timezone -> country name. Order is the order search results are listed in.

pub(super) const COUNTRIES: &[(&str, &str)] = &[
    ("America/New_York", "United States"),
    ("America/Los_Angeles", "United States"),
    ("America/Chicago", "United States"),
    ("America/Denver", "United States"),
    ("America/Phoenix", "United States"),
    ("America/Toronto", "Canada"),
    ("America/Vancouver", "Canada"),
    ("America/Mexico_City", "Mexico"),
    ("America/Sao_Paulo", "Brazil"),
    ("America/Argentina/Buenos_Aires", "Argentina"),
    ("America/Lima", "Peru"),
    ("America/Bogota", "Colombia"),
    ("America/Santiago", "Chile"),
    ("Europe/London", "United Kingdom"),
    ("Europe/Paris", "France"),
    ("Europe/Berlin", "Germany"),
    ("Europe/Rome", "Italy"),
    ("Europe/Madrid", "Spain"),
    ("Europe/Amsterdam", "Netherlands"),
    ("Europe/Stockholm", "Sweden"),
    ("Europe/Zurich", "Switzerland"),
    ("Europe/Vienna", "Austria"),
    ("Europe/Brussels", "Belgium"),
    ("Europe/Copenhagen", "Denmark"),
    ("Europe/Helsinki", "Finland"),
    ("Europe/Oslo", "Norway"),
    ("Europe/Warsaw", "Poland"),
    ("Europe/Prague", "Czech Republic"),
    ("Europe/Budapest", "Hungary"),
    ("Europe/Athens", "Greece"),
    ("Europe/Istanbul", "Turkey"),
    ("Europe/Moscow", "Russia"),
    ("Europe/Lisbon", "Portugal"),
    ("Asia/Tokyo", "Japan"),
    ("Asia/Shanghai", "China"),
    ("Asia/Hong_Kong", "Hong Kong"),
    ("Asia/Kolkata", "India"),
    ("Asia/Singapore", "Singapore"),
    ("Asia/Dubai", "United Arab Emirates"),
    ("Asia/Bangkok", "Thailand"),
    ("Asia/Jakarta", "Indonesia"),
    ("Asia/Manila", "Philippines"),
    ("Asia/Seoul", "South Korea"),
    ("Asia/Kuala_Lumpur", "Malaysia"),
    ("Asia/Jerusalem", "Israel"),
    ("Asia/Riyadh", "Saudi Arabia"),
    ("Asia/Qatar", "Qatar"),
    ("Australia/Sydney", "Australia"),
    ("Australia/Melbourne", "Australia"),
    ("Australia/Brisbane", "Australia"),
    ("Australia/Perth", "Australia"),
    ("Africa/Cairo", "Egypt"),
    ("Africa/Lagos", "Nigeria"),
    ("Africa/Johannesburg", "South Africa"),
    ("Africa/Nairobi", "Kenya"),
    ("Africa/Casablanca", "Morocco"),
    ("Pacific/Auckland", "New Zealand"),
];

/// Deprecated or ambiguous identifiers and the zone used in their place.
pub(super) const ALIASES: &[(&str, &str)] = &[
    ("Asia/Mumbai", "Asia/Kolkata"),
    ("Asia/Delhi", "Asia/Kolkata"),
    ("Asia/Calcutta", "Asia/Kolkata"),
];
