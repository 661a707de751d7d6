//! The `timespot` terminal world clock.

pub mod app;
pub mod error;
pub mod render;
