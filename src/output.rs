//! File naming, image saving, and format conversion.

use std::path::{Path, PathBuf};

use crate::error::BannerError;
use crate::params::{format_extension, format_mime};

/// Derive a file stem from a display name.
///
/// Lowercases the name and replaces spaces with underscores, so
/// `"Le Lis"` becomes `"le_lis"`. Non-ASCII letters are kept.
#[must_use]
pub fn file_stem(name: &str) -> String {
    let stem: String = name.trim().to_lowercase().replace(' ', "_");
    if stem.is_empty() {
        "banner".to_string()
    } else {
        stem
    }
}

/// Resolve the output path for a stem inside the output directory.
#[must_use]
pub fn resolve_output_path(dir: &Path, stem: &str, format: &str) -> PathBuf {
    dir.join(format!("{stem}.{}", format_extension(format)))
}

/// Create the output directory if it does not exist yet.
///
/// # Errors
///
/// Returns an error if the directory cannot be created.
pub fn ensure_output_dir(dir: &Path) -> Result<(), BannerError> {
    std::fs::create_dir_all(dir).map_err(BannerError::Io)
}

/// Save raw image bytes to a file, converting format if necessary.
///
/// # Errors
///
/// Returns an error if the file cannot be written or format conversion fails.
pub fn save_image(
    data: &[u8],
    source_mime: &str,
    target_format: &str,
    output_path: &Path,
) -> Result<(), BannerError> {
    if source_mime == format_mime(target_format) {
        std::fs::write(output_path, data).map_err(BannerError::Io)
    } else {
        convert_and_save(data, target_format, output_path)
    }
}

/// Convert image bytes to the target format and save.
fn convert_and_save(
    data: &[u8],
    target_format: &str,
    output_path: &Path,
) -> Result<(), BannerError> {
    let img = image::load_from_memory(data)
        .map_err(|e| BannerError::ImageConversion(format!("Failed to decode image: {e}")))?;

    let image_format = match target_format {
        "jpeg" => image::ImageFormat::Jpeg,
        "png" => image::ImageFormat::Png,
        "webp" => image::ImageFormat::WebP,
        other => {
            return Err(BannerError::ImageConversion(format!("Unsupported format: {other}")));
        }
    };

    // JPEG has no alpha channel.
    let img = if image_format == image::ImageFormat::Jpeg {
        image::DynamicImage::ImageRgb8(img.to_rgb8())
    } else {
        img
    };

    img.save_with_format(output_path, image_format).map_err(|e| {
        BannerError::ImageConversion(format!("Failed to save as {target_format}: {e}"))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn png_bytes() -> Vec<u8> {
        let img = image::DynamicImage::new_rgba8(2, 2);
        let mut buf = std::io::Cursor::new(Vec::<u8>::new());
        img.write_to(&mut buf, image::ImageFormat::Png).unwrap();
        buf.into_inner()
    }

    #[test]
    fn stem_lowercases_and_joins_words() {
        assert_eq!(file_stem("Le Lis"), "le_lis");
        assert_eq!(file_stem("Inverno 2024"), "inverno_2024");
        assert_eq!(file_stem("Vestidos"), "vestidos");
    }

    #[test]
    fn stem_keeps_accents() {
        assert_eq!(file_stem("Calças"), "calças");
        assert_eq!(file_stem("Acessórios"), "acessórios");
    }

    #[test]
    fn stem_empty_falls_back() {
        assert_eq!(file_stem(""), "banner");
        assert_eq!(file_stem("   "), "banner");
    }

    #[test]
    fn resolve_uses_format_extension() {
        let dir = Path::new("output");
        assert_eq!(resolve_output_path(dir, "hero", "png"), PathBuf::from("output/hero.png"));
        assert_eq!(resolve_output_path(dir, "hero", "jpeg"), PathBuf::from("output/hero.jpg"));
        assert_eq!(resolve_output_path(dir, "hero", "webp"), PathBuf::from("output/hero.webp"));
    }

    #[test]
    fn save_png_writes_bytes_unchanged() {
        let dir = std::env::temp_dir().join("bannergen_output_png_test");
        ensure_output_dir(&dir).unwrap();
        let path = dir.join("same.png");
        let data = png_bytes();

        save_image(&data, "image/png", "png", &path).unwrap();
        assert_eq!(std::fs::read(&path).unwrap(), data);

        let _ = std::fs::remove_dir_all(&dir);
    }

    #[test]
    fn save_converts_png_to_jpeg() {
        let dir = std::env::temp_dir().join("bannergen_output_jpeg_test");
        ensure_output_dir(&dir).unwrap();
        let path = dir.join("converted.jpg");

        save_image(&png_bytes(), "image/png", "jpeg", &path).unwrap();
        let written = std::fs::read(&path).unwrap();
        assert_eq!(&written[..3], &[0xFF, 0xD8, 0xFF]);

        let _ = std::fs::remove_dir_all(&dir);
    }

    #[test]
    fn save_rejects_undecodable_bytes() {
        let path = std::env::temp_dir().join("bannergen_output_garbage.webp");
        let err = save_image(b"not an image", "image/png", "webp", &path).unwrap_err();
        assert!(matches!(err, BannerError::ImageConversion(_)));
    }

    #[test]
    fn ensure_dir_creates_nested() {
        let dir = std::env::temp_dir().join("bannergen_output_nested/a/b");
        ensure_output_dir(&dir).unwrap();
        assert!(dir.is_dir());
        let _ = std::fs::remove_dir_all(std::env::temp_dir().join("bannergen_output_nested"));
    }
}
