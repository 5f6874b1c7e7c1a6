//! Service context that bundles all port trait objects.

use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use tracing::debug;

use crate::adapters::live::chrome::ChromeRasterizer;
use crate::adapters::recording::rasterizer::RecordingRasterizer;
use crate::adapters::replaying::rasterizer::ReplayingRasterizer;
use crate::cassette::config::load_cassette;
use crate::cassette::recorder::CassetteRecorder;
use crate::config::Config;
use crate::error::BannerError;
use crate::ports::Rasterizer;

/// Directory that recorded cassettes are written under.
const CASSETTE_DIR: &str = ".bannergen/cassettes";

/// Bundles all port trait objects into a single context.
pub struct ServiceContext {
    /// Rasterizer port.
    pub rasterizer: Box<dyn Rasterizer>,
}

/// Handle to a recording session that must be finished after use.
pub struct RecordingSession {
    recorder: Arc<Mutex<CassetteRecorder>>,
}

impl RecordingSession {
    /// Finish the recording and write the cassette file to disk.
    ///
    /// The context holding the recording adapter must be dropped first.
    ///
    /// # Errors
    ///
    /// Returns an error if the cassette file cannot be written.
    pub fn finish(self) -> Result<PathBuf, String> {
        let recorder = Arc::try_unwrap(self.recorder)
            .map_err(|_| "Recording adapter still has references".to_string())?
            .into_inner()
            .map_err(|e| format!("Recorder lock poisoned: {e}"))?;
        debug!(interactions = recorder.interaction_count(), "writing cassette");
        recorder.finish().map_err(|e| format!("Failed to write cassette: {e}"))
    }
}

impl ServiceContext {
    /// Create a live context backed by headless Chrome.
    ///
    /// # Errors
    ///
    /// Returns an error if the browser cannot be launched.
    pub fn live(config: &Config) -> Result<Self, BannerError> {
        let rasterizer = ChromeRasterizer::launch(&config.browser)?;
        Ok(Self { rasterizer: Box::new(rasterizer) })
    }

    /// Create a recording context that wraps the live rasterizer with a recorder.
    ///
    /// # Errors
    ///
    /// Returns an error if the browser cannot be launched.
    pub fn recording(config: &Config) -> Result<(Self, RecordingSession), BannerError> {
        let live_ctx = Self::live(config)?;

        let timestamp = chrono::Utc::now().format("%Y-%m-%dT%H-%M-%S").to_string();
        let path = PathBuf::from(CASSETTE_DIR).join(&timestamp).join("rasterizer.cassette.yaml");

        let commit = get_commit_hash();
        let recorder = Arc::new(Mutex::new(CassetteRecorder::new(
            path,
            format!("{timestamp}-rasterizer"),
            &commit,
        )));

        let rasterizer = RecordingRasterizer::new(live_ctx.rasterizer, Arc::clone(&recorder));

        Ok((Self { rasterizer: Box::new(rasterizer) }, RecordingSession { recorder }))
    }

    /// Create a replaying context from a cassette file. No browser is started.
    ///
    /// # Errors
    ///
    /// Returns an error if the cassette file cannot be loaded.
    pub fn replaying(path: &Path) -> Result<Self, BannerError> {
        let replayer = load_cassette(path)
            .map_err(|e| BannerError::Config(format!("Failed to load cassette: {e}")))?;
        let rasterizer = ReplayingRasterizer::new(Arc::new(Mutex::new(replayer)));
        Ok(Self { rasterizer: Box::new(rasterizer) })
    }
}

/// Get the current git commit hash, or "unknown" if unavailable.
fn get_commit_hash() -> String {
    std::process::Command::new("git")
        .args(["rev-parse", "HEAD"])
        .output()
        .ok()
        .filter(|o| o.status.success())
        .and_then(|o| String::from_utf8(o.stdout).ok())
        .map_or_else(|| "unknown".to_string(), |s| s.trim().to_string())
}
