//! TimeSpot services: the seeded data source, preferences, search, the city
//! board, sun tracking, adaptive text sizing and the clock ticker.

pub mod board;
pub mod error;
pub mod local;
pub mod preferences;
pub mod search;
pub mod seed;
pub mod sizer;
pub mod source;
pub mod sun;
pub mod ticker;
