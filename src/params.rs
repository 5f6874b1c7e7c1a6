//! Output format parameters.

/// Output formats the batch can write.
pub const FORMATS: &[&str] = &["png", "jpeg", "webp"];

/// Validate the output format parameter.
///
/// # Errors
///
/// Returns an error if the format is not recognized.
pub fn validate_format(format: &str) -> Result<(), String> {
    if FORMATS.contains(&format) {
        Ok(())
    } else {
        Err(format!("Unsupported format '{format}'. Valid: png, jpeg, webp"))
    }
}

/// Get the file extension for an output format.
#[must_use]
pub fn format_extension(format: &str) -> &'static str {
    match format {
        "jpeg" => "jpg",
        "webp" => "webp",
        // png and any unknown format default to png
        _ => "png",
    }
}

/// Get the MIME type for an output format.
#[must_use]
pub fn format_mime(format: &str) -> &'static str {
    match format {
        "jpeg" => "image/jpeg",
        "webp" => "image/webp",
        _ => "image/png",
    }
}
