use crate::input::LoadError;
use thiserror::Error;

/// Errors surfaced by textkit.
///
/// Expected negative answers ("not a number", "not found") are values, never
/// errors. This type only covers bad arguments and unavailable sources.
#[derive(Error, Debug)]
pub enum TextError {
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Resource unavailable: {0}")]
    ResourceUnavailable(#[from] LoadError),
}

impl TextError {
    pub fn invalid_argument(message: impl Into<String>) -> Self {
        TextError::InvalidArgument(message.into())
    }
}
