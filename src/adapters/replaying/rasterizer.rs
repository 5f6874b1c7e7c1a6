//! Replaying adapter for the `Rasterizer` port.

use std::sync::{Arc, Mutex};

use super::decode_output;
use crate::cassette::replayer::CassetteReplayer;
use crate::error::BannerError;
use crate::ports::rasterizer::{RasterFuture, RasterRequest, RasterizedImage, Rasterizer};

/// Serves recorded rasterizer results from a cassette, in recording order.
pub struct ReplayingRasterizer {
    replayer: Arc<Mutex<CassetteReplayer>>,
}

impl ReplayingRasterizer {
    /// Create a replaying rasterizer backed by the given replayer.
    #[must_use]
    pub fn new(replayer: Arc<Mutex<CassetteReplayer>>) -> Self {
        Self { replayer }
    }

    fn next_image(&self) -> Result<RasterizedImage, BannerError> {
        let mut guard = self.replayer.lock().unwrap_or_else(std::sync::PoisonError::into_inner);
        let output = guard
            .next_interaction("rasterizer", "rasterize")
            .map_err(BannerError::Render)?
            .output
            .clone();
        decode_output(output)
    }
}

impl Rasterizer for ReplayingRasterizer {
    fn rasterize(&self, _request: &RasterRequest) -> RasterFuture<'_> {
        let result = self.next_image();
        Box::pin(async move { result })
    }
}
