//! Unified error type for bannergen.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors that can abort a banner batch.
#[derive(Debug, Error)]
pub enum BannerError {
    /// The headless browser could not be launched or prepared.
    #[error("Browser error: {0}")]
    Browser(String),

    /// The browser failed to load or screenshot a document.
    #[error("Render error: {0}")]
    Render(String),

    /// An I/O error occurred.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration error.
    #[error("Config error: {0}")]
    Config(String),

    /// Invalid argument.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// Image format conversion error.
    #[error("Image conversion error: {0}")]
    ImageConversion(String),
}

impl BannerError {
    /// Variant name, as stored in cassettes.
    #[must_use]
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Browser(_) => "Browser",
            Self::Render(_) => "Render",
            Self::Io(_) => "Io",
            Self::Config(_) => "Config",
            Self::InvalidArgument(_) => "InvalidArgument",
            Self::ImageConversion(_) => "ImageConversion",
        }
    }

    /// The message without the variant prefix added by `Display`.
    #[must_use]
    pub fn message(&self) -> String {
        match self {
            Self::Browser(m)
            | Self::Render(m)
            | Self::Config(m)
            | Self::InvalidArgument(m)
            | Self::ImageConversion(m) => m.clone(),
            Self::Io(e) => e.to_string(),
        }
    }
}

/// A [`BannerError`] as written to a cassette: variant name plus inner message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecordedError {
    /// Variant name (e.g., `"Render"`).
    pub kind: String,
    /// Inner message, without the `Display` prefix.
    pub message: String,
}

impl From<&BannerError> for RecordedError {
    fn from(err: &BannerError) -> Self {
        Self { kind: err.kind().to_string(), message: err.message() }
    }
}

impl From<RecordedError> for BannerError {
    fn from(recorded: RecordedError) -> Self {
        let RecordedError { kind, message } = recorded;
        match kind.as_str() {
            "Browser" => Self::Browser(message),
            "Io" => Self::Io(std::io::Error::other(message)),
            "Config" => Self::Config(message),
            "InvalidArgument" => Self::InvalidArgument(message),
            "ImageConversion" => Self::ImageConversion(message),
            _ => Self::Render(message),
        }
    }
}
