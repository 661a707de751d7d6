//! Local time derivation for TimeSpot.
//!
//! Turns a timezone identifier into a displayable wall-clock snapshot using
//! the zone database for the clock digits and frozen reference tables for
//! offsets, abbreviations and countries.

pub mod derive;
pub mod error;
pub mod format;
pub mod snapshot;
pub mod tables;
pub mod time;

pub use derive::TimeDerivationService;
pub use error::{TzError, TzResult};
pub use snapshot::{SunSnapshot, TimeSnapshot};
pub use time::{Clock, FixedClock, Instant, LocalNaive, SystemClock};
