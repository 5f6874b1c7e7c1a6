//! On-disk cassette layout.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A recorded session of port interactions.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Cassette {
    /// Human-readable session name.
    pub name: String,
    /// When the session was recorded.
    pub recorded_at: DateTime<Utc>,
    /// Git commit the recording was made from.
    pub commit: String,
    /// Interactions in recording order.
    pub interactions: Vec<Interaction>,
}

/// One call across a port boundary.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Interaction {
    /// Position in the recording, starting at 0.
    pub seq: u64,
    /// Port name (e.g., `"rasterizer"`).
    pub port: String,
    /// Method name (e.g., `"rasterize"`).
    pub method: String,
    /// Serialized call input.
    pub input: serde_json::Value,
    /// Serialized `{"Ok": ..}` or `{"Err": ".."}` result.
    pub output: serde_json::Value,
}
