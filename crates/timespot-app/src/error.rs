use thiserror::Error;

/// Application-level errors
#[derive(Error, Debug)]
pub enum AppError {
    #[error(transparent)]
    StoreError(#[from] timespot_service::error::StoreError),
}

pub type AppResult<T> = std::result::Result<T, AppError>;
