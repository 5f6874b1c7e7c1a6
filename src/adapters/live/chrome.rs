//! Live rasterizer backed by headless Chrome over the DevTools protocol.

use std::sync::Arc;
use std::time::Duration;

use base64::Engine;
use headless_chrome::browser::tab::Tab;
use headless_chrome::protocol::cdp::Page;
use headless_chrome::{Browser, LaunchOptions};
use tracing::debug;

use crate::config::BrowserConfig;
use crate::error::BannerError;
use crate::ports::rasterizer::{RasterFuture, RasterRequest, RasterizedImage, Rasterizer};

/// Screenshots markup in a single reused Chrome tab.
///
/// The browser is launched once and kept alive for the whole batch; every
/// document is loaded into the same tab as a `data:` URL.
pub struct ChromeRasterizer {
    // Dropping the browser kills the Chrome process.
    _browser: Browser,
    tab: Arc<Tab>,
    settle: Duration,
}

impl ChromeRasterizer {
    /// Launch headless Chrome with the given settings.
    ///
    /// # Errors
    ///
    /// Returns an error if Chrome cannot be found or started.
    pub fn launch(settings: &BrowserConfig) -> Result<Self, BannerError> {
        let launch_options = LaunchOptions::default_builder()
            .headless(true)
            .sandbox(settings.sandbox)
            .window_size(Some((settings.window_width, settings.window_height)))
            .path(settings.chrome_path())
            .build()
            .map_err(|e| BannerError::Browser(format!("Failed to build launch options: {e}")))?;

        let browser = Browser::new(launch_options)
            .map_err(|e| BannerError::Browser(format!("Failed to launch browser: {e}")))?;
        let tab = browser
            .new_tab()
            .map_err(|e| BannerError::Browser(format!("Failed to create tab: {e}")))?;

        debug!(
            width = settings.window_width,
            height = settings.window_height,
            "launched headless chrome"
        );

        Ok(Self { _browser: browser, tab, settle: Duration::from_millis(settings.settle_ms) })
    }
}

impl Rasterizer for ChromeRasterizer {
    fn rasterize(&self, request: &RasterRequest) -> RasterFuture<'_> {
        let tab = Arc::clone(&self.tab);
        let settle = self.settle;
        let request = request.clone();

        Box::pin(async move {
            let (width, height) = (request.width, request.height);
            let data = tokio::task::spawn_blocking(move || screenshot(&tab, &request, settle))
                .await
                .map_err(|e| BannerError::Render(format!("Render task failed: {e}")))??;

            debug!(width, height, bytes = data.len(), "rasterized document");
            Ok(RasterizedImage { data, mime_type: "image/png".into() })
        })
    }
}

/// Load the document and capture the top-left `width x height` region.
fn screenshot(tab: &Tab, request: &RasterRequest, settle: Duration) -> Result<Vec<u8>, BannerError> {
    tab.navigate_to(&data_url(&request.markup))
        .map_err(|e| BannerError::Render(format!("Navigation failed: {e}")))?;
    tab.wait_until_navigated()
        .map_err(|e| BannerError::Render(format!("Wait for navigation failed: {e}")))?;

    // Web fonts swap in after the load event.
    std::thread::sleep(settle);

    let clip = Page::Viewport {
        x: 0.0,
        y: 0.0,
        width: f64::from(request.width),
        height: f64::from(request.height),
        scale: 1.0,
    };
    tab.capture_screenshot(Page::CaptureScreenshotFormatOption::Png, None, Some(clip), true)
        .map_err(|e| BannerError::Render(format!("Screenshot failed: {e}")))
}

/// Encode a document as a base64 `data:` URL.
fn data_url(markup: &str) -> String {
    let encoded = base64::engine::general_purpose::STANDARD.encode(markup.as_bytes());
    format!("data:text/html;charset=utf-8;base64,{encoded}")
}
