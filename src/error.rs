//! Error types for the FaceId client

use thiserror::Error;

/// Client error types
#[derive(Error, Debug)]
pub enum ApiError {
    #[error("unable to connect to the API, check the internet connection")]
    NoConnection,

    #[error("API error: {0}")]
    Api(String),

    #[error("unable to set person info: {0}")]
    SetPersonInfo(String),

    #[error("unable to add new person: {0}")]
    AddPerson(String),
}

pub type Result<T> = std::result::Result<T, ApiError>;
