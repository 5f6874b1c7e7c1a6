//! Replaying adapters that serve recorded interactions from cassettes.

pub mod rasterizer;

use serde::de::DeserializeOwned;

use crate::error::{BannerError, RecordedError};

/// Decode a recorded `{"Ok": ..}` / `{"Err": {"kind": .., "message": ..}}` output.
///
/// A recorded failure comes back as the variant it was recorded from. A bare
/// string under `Err` is replayed as a render failure.
pub(crate) fn decode_output<T: DeserializeOwned>(
    output: serde_json::Value,
) -> Result<T, BannerError> {
    if let Some(err_val) = output.get("Err") {
        let recorded = match err_val {
            serde_json::Value::String(message) => {
                RecordedError { kind: "Render".into(), message: message.clone() }
            }
            other => serde_json::from_value(other.clone()).map_err(|e| {
                BannerError::Render(format!("Malformed cassette error: {e}"))
            })?,
        };
        return Err(recorded.into());
    }
    let value = output.get("Ok").cloned().unwrap_or(output);
    serde_json::from_value(value)
        .map_err(|e| BannerError::Render(format!("Malformed cassette output: {e}")))
}
