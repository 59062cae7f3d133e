//! FaceId API Client
//!
//! A thin async client for a remote face-recognition HTTP API. It
//! authenticates with an OAuth2 password grant, then exposes person lookup
//! by face image, info retrieval and update, and registration of new people
//! over the API's JSON-over-POST surface.

pub mod client;
pub mod error;
pub mod media;
pub mod session;
pub mod types;

pub use client::{ApiClient, ClientConfig};
pub use error::{ApiError, Result};
pub use session::Session;
pub use types::{AddPersonRequest, ImageQuery, PersonInfo};
