//! Base64 helpers for image payloads
//!
//! The API transports face images as base64-encoded JPEG strings inside JSON
//! bodies. These helpers convert between raw image bytes and that wire form;
//! producing the JPEG bytes themselves is the caller's concern.

use base64::engine::general_purpose::STANDARD;
use base64::Engine;

use crate::error::{ApiError, Result};

/// Encode raw image bytes into the base64 string form the API expects
pub fn encode_image(bytes: &[u8]) -> String {
    STANDARD.encode(bytes)
}

/// Decode a base64 image payload back into raw bytes
pub fn decode_image(payload: &str) -> Result<Vec<u8>> {
    STANDARD
        .decode(payload)
        .map_err(|e| ApiError::Api(format!("invalid base64 image payload: {e}")))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_image_round_trip() {
        let bytes: Vec<u8> = (0u16..=255).map(|b| b as u8).collect();
        let encoded = encode_image(&bytes);
        assert_eq!(decode_image(&encoded).unwrap(), bytes);
    }

    #[test]
    fn test_decode_rejects_invalid_payload() {
        let err = decode_image("not base64!!").unwrap_err();
        assert!(matches!(err, ApiError::Api(_)));
    }
}
