/// Storage key constants shared across crates
pub const APP_KEY_COMPONENT: &str = "timespot";

/// Key under which the generated anonymous user id is stored.
pub const USER_ID_KEY: &str = const_str::concat!(APP_KEY_COMPONENT, "_user_id");

/// Prefix for per-user preference entries: `user_preferences_<userId>`.
pub const USER_PREFERENCES_PREFIX: &str = "user_preferences_";

/// Prefixes used by the seeded data dump.
pub const TIME_CACHE_PREFIX: &str = "time_cache_";
pub const SUN_CACHE_PREFIX: &str = "sun_cache_";

/// Placeholder for a country that has not been resolved yet.
pub const LOADING_COUNTRY: &str = "Loading...";

/// Placeholder for any missing or unformattable display field.
pub const NOT_AVAILABLE: &str = "N/A";

/// Longest input accepted by the sanitizer.
pub const MAX_INPUT_LEN: usize = 1000;
