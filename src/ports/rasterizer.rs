//! Rasterizer port: turns a markup document into a bitmap.

use std::future::Future;
use std::pin::Pin;

use serde::{Deserialize, Serialize};

use crate::error::BannerError;

/// A request to rasterize one markup document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RasterRequest {
    /// Complete HTML document.
    pub markup: String,
    /// Target width in CSS pixels.
    pub width: u32,
    /// Target height in CSS pixels.
    pub height: u32,
}

/// A rasterized bitmap.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RasterizedImage {
    /// Encoded image bytes.
    #[serde(with = "base64_bytes")]
    pub data: Vec<u8>,
    /// MIME type of `data` (e.g., `"image/png"`).
    pub mime_type: String,
}

/// Boxed future type returned by [`Rasterizer::rasterize`].
pub type RasterFuture<'a> =
    Pin<Box<dyn Future<Output = Result<RasterizedImage, BannerError>> + Send + 'a>>;

/// Renders markup offscreen at a fixed pixel size.
pub trait Rasterizer: Send + Sync {
    /// Rasterize the given document.
    fn rasterize(&self, request: &RasterRequest) -> RasterFuture<'_>;
}

/// Serde helper for serializing `Vec<u8>` as base64 strings in cassettes.
mod base64_bytes {
    use base64::Engine;
    use serde::{Deserialize, Deserializer, Serializer};

    /// Serialize bytes as base64 string.
    pub fn serialize<S: Serializer>(data: &[u8], serializer: S) -> Result<S::Ok, S::Error> {
        let encoded = base64::engine::general_purpose::STANDARD.encode(data);
        serializer.serialize_str(&encoded)
    }

    /// Deserialize base64 string to bytes.
    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Vec<u8>, D::Error> {
        let s = String::deserialize(deserializer)?;
        base64::engine::general_purpose::STANDARD.decode(&s).map_err(serde::de::Error::custom)
    }
}
