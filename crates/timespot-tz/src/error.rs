use thiserror::Error;

/// Errors raised while resolving zones or formatting times.
#[derive(Debug, Error)]
pub enum TzError {
    /// Unknown or invalid timezone identifier.
    #[error("Unknown timezone: {0}")]
    UnknownTimezone(String),

    /// Timestamp that could not be parsed or represented.
    #[error("Invalid datetime: {0}")]
    InvalidDateTime(String),
}

pub type TzResult<T> = std::result::Result<T, TzError>;
