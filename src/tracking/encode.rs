use crate::EncodeError;
use base64::{Engine as _, engine::general_purpose};
use serde::Serialize;

/// Serialize `value` to JSON and encode the bytes as standard padded base64
///
/// The JSON bytes match what the HTTP layer serves for the same value, so the
/// encoded form decodes back to the `/config` response body.
pub fn json_to_base64<T: Serialize>(value: &T) -> Result<String, EncodeError> {
    let bytes = serde_json::to_vec(value)?;

    Ok(general_purpose::STANDARD.encode(bytes))
}
