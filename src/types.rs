//! Payload types for the FaceId API

use serde::Serialize;

/// Open string-keyed person attributes.
///
/// The server schema is open-ended (e.g. `"name"`, plus whatever the
/// deployment defines), so info payloads stay a dynamically-typed JSON map
/// rather than a fixed struct.
pub type PersonInfo = serde_json::Map<String, serde_json::Value>;

/// Body of `POST /api/getPersonId`
#[derive(Debug, Serialize)]
pub struct ImageQuery {
    /// Base64-encoded JPEG
    pub image: String,
}

/// Body of `POST /api/addPerson`
#[derive(Debug, Serialize)]
pub struct AddPersonRequest {
    /// Base64-encoded JPEGs of the same person
    pub images: Vec<String>,
}
