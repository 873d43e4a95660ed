use crate::asset::Asset;
use thiserror::Error;

/// Errors that can occur during encoding/decoding
#[derive(Error, Debug)]
pub enum CodecError {
    #[error("Failed to encode asset: {0}")]
    EncodeError(String),

    #[error("Failed to decode asset: {0}")]
    DecodeError(String),
}

/// Codec between assets and the bytes kept in the state store
///
/// Records are JSON objects so any client of the store can read them.
pub struct AssetCodec;

impl AssetCodec {
    /// Encode an asset to stored bytes
    pub fn encode(asset: &Asset) -> Result<Vec<u8>, CodecError> {
        serde_json::to_vec(asset).map_err(|e| CodecError::EncodeError(e.to_string()))
    }

    /// Decode an asset from stored bytes
    pub fn decode(bytes: &[u8]) -> Result<Asset, CodecError> {
        serde_json::from_slice(bytes).map_err(|e| CodecError::DecodeError(e.to_string()))
    }

    /// Encode to a JSON string
    pub fn encode_string(asset: &Asset) -> Result<String, CodecError> {
        serde_json::to_string(asset).map_err(|e| CodecError::EncodeError(e.to_string()))
    }
}
