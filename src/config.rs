//! Configuration file loading with environment variable overrides.

use std::path::{Path, PathBuf};

use serde::Deserialize;

/// Top-level configuration.
#[derive(Debug, Default, Deserialize)]
pub struct Config {
    /// Where and how banners are written.
    #[serde(default)]
    pub output: OutputConfig,

    /// Headless browser settings.
    #[serde(default)]
    pub browser: BrowserConfig,
}

/// Output settings.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Output directory, created if absent.
    pub dir: PathBuf,
    /// Output format: png, jpeg, webp.
    pub format: String,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self { dir: PathBuf::from("output"), format: "png".to_string() }
    }
}

/// Headless Chrome settings.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct BrowserConfig {
    /// Explicit Chrome/Chromium binary; auto-detected when unset.
    pub chrome_path: Option<PathBuf>,
    /// Run Chrome with its sandbox enabled.
    pub sandbox: bool,
    /// Delay after page load before the screenshot, in milliseconds.
    pub settle_ms: u64,
    /// Browser window width; must cover the widest banner.
    pub window_width: u32,
    /// Browser window height; must cover the tallest banner.
    pub window_height: u32,
}

impl Default for BrowserConfig {
    fn default() -> Self {
        Self {
            chrome_path: None,
            sandbox: true,
            settle_ms: 300,
            window_width: 1280,
            window_height: 720,
        }
    }
}

impl BrowserConfig {
    /// Get the Chrome binary path, preferring the `BANNERGEN_CHROME` environment variable.
    #[must_use]
    pub fn chrome_path(&self) -> Option<PathBuf> {
        std::env::var_os("BANNERGEN_CHROME").map(PathBuf::from).or_else(|| self.chrome_path.clone())
    }
}

impl Config {
    /// Load configuration from the given path, or return defaults.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be parsed.
    pub fn load(path: &Path) -> Result<Self, String> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let contents = std::fs::read_to_string(path)
            .map_err(|e| format!("Failed to read config {}: {e}", path.display()))?;
        toml::from_str(&contents)
            .map_err(|e| format!("Failed to parse config {}: {e}", path.display()))
    }
}

/// Discover the config file path using the resolution order:
/// 1. Explicit path (from `--config` flag)
/// 2. `BANNERGEN_CONFIG` environment variable
/// 3. `bannergen.toml` in the working directory
#[must_use]
pub fn discover_config_path(explicit: Option<&str>) -> PathBuf {
    if let Some(p) = explicit {
        return PathBuf::from(p);
    }

    if let Ok(p) = std::env::var("BANNERGEN_CONFIG") {
        return PathBuf::from(p);
    }

    PathBuf::from("bannergen.toml")
}
