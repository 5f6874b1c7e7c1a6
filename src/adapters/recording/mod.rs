//! Recording adapters that capture interactions to cassettes.

pub mod rasterizer;

use std::sync::{Arc, Mutex};

use serde::Serialize;

use crate::cassette::recorder::CassetteRecorder;
use crate::error::{BannerError, RecordedError};

/// Append one interaction, storing the result as `{"Ok": ..}` or
/// `{"Err": {"kind": .., "message": ..}}`.
///
/// Serialization failures are recorded as `null` rather than aborting the batch.
pub(crate) fn record_result<T, I>(
    recorder: &Arc<Mutex<CassetteRecorder>>,
    port: &str,
    method: &str,
    input: &I,
    result: &Result<T, BannerError>,
) where
    T: Serialize,
    I: Serialize,
{
    let input_json = serde_json::to_value(input).unwrap_or_default();
    let output_json = match result {
        Ok(v) => serde_json::json!({ "Ok": serde_json::to_value(v).unwrap_or_default() }),
        Err(e) => serde_json::json!({
            "Err": serde_json::to_value(RecordedError::from(e)).unwrap_or_default()
        }),
    };

    // A poisoned lock still holds a usable recorder.
    let mut guard = recorder.lock().unwrap_or_else(std::sync::PoisonError::into_inner);
    guard.record(port, method, input_json, output_json);
}
