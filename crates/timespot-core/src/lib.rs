//! Shared building blocks for TimeSpot: configuration, the core error type,
//! display enums and input hygiene.

pub mod config;
pub mod constants;
pub mod error;
pub mod types;
pub mod util;
