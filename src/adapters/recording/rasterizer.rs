//! Recording adapter for the `Rasterizer` port.

use std::sync::{Arc, Mutex};

use super::record_result;
use crate::cassette::recorder::CassetteRecorder;
use crate::ports::rasterizer::{RasterFuture, RasterRequest, Rasterizer};

/// Records rasterizer interactions while delegating to an inner implementation.
pub struct RecordingRasterizer {
    inner: Box<dyn Rasterizer>,
    recorder: Arc<Mutex<CassetteRecorder>>,
}

impl RecordingRasterizer {
    /// Creates a new recording rasterizer wrapping the given implementation.
    pub fn new(inner: Box<dyn Rasterizer>, recorder: Arc<Mutex<CassetteRecorder>>) -> Self {
        Self { inner, recorder }
    }
}

impl Rasterizer for RecordingRasterizer {
    fn rasterize(&self, request: &RasterRequest) -> RasterFuture<'_> {
        let request_clone = request.clone();
        let recorder = Arc::clone(&self.recorder);

        Box::pin(async move {
            let result = self.inner.rasterize(&request_clone).await;
            record_result(&recorder, "rasterizer", "rasterize", &request_clone, &result);
            result
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ports::rasterizer::RasterizedImage;

    struct FixedRasterizer;

    impl Rasterizer for FixedRasterizer {
        fn rasterize(&self, _request: &RasterRequest) -> RasterFuture<'_> {
            Box::pin(async {
                Ok(RasterizedImage { data: vec![1, 2, 3], mime_type: "image/png".into() })
            })
        }
    }

    #[tokio::test]
    async fn records_request_and_result() {
        let path = std::env::temp_dir().join("bannergen_recording_adapter/test.cassette.yaml");
        let recorder = Arc::new(Mutex::new(CassetteRecorder::new(&path, "rec", "abc")));
        let rasterizer = RecordingRasterizer::new(Box::new(FixedRasterizer), Arc::clone(&recorder));

        let request = RasterRequest { markup: "<p>x</p>".into(), width: 10, height: 5 };
        let image = rasterizer.rasterize(&request).await.unwrap();
        assert_eq!(image.data, vec![1, 2, 3]);

        drop(rasterizer);
        let recorder = Arc::try_unwrap(recorder).unwrap().into_inner().unwrap();
        let written = recorder.finish().unwrap();
        let content = std::fs::read_to_string(&written).unwrap();
        assert!(content.contains("rasterizer"));
        assert!(content.contains("<p>x</p>"));
        assert!(content.contains("AQID"));

        let _ = std::fs::remove_dir_all(written.parent().unwrap());
    }
}
