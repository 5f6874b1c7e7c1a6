//! Batch driver: renders catalog sections one banner at a time.

use std::path::PathBuf;

use tracing::debug;

use crate::catalog::{BannerJob, Section};
use crate::error::BannerError;
use crate::output::{ensure_output_dir, resolve_output_path, save_image};
use crate::ports::{RasterRequest, Rasterizer};

const RULE: &str = "==================================================";

/// Where and how the batch writes its files.
#[derive(Debug, Clone)]
pub struct BatchSettings {
    /// Output directory, created if absent.
    pub output_dir: PathBuf,
    /// Output format: png, jpeg, webp.
    pub format: String,
    /// Also write each document as `<stem>.html`.
    pub emit_html: bool,
}

/// Renders banner jobs through a rasterizer and writes them to disk.
///
/// Stops at the first failure; files already written are left in place.
pub struct Batch<'a> {
    rasterizer: &'a dyn Rasterizer,
    settings: &'a BatchSettings,
}

impl<'a> Batch<'a> {
    /// Create a batch over the given rasterizer.
    #[must_use]
    pub fn new(rasterizer: &'a dyn Rasterizer, settings: &'a BatchSettings) -> Self {
        Self { rasterizer, settings }
    }

    /// Render every job of every section, printing progress to stderr.
    ///
    /// Returns the written image paths in render order.
    ///
    /// # Errors
    ///
    /// Returns the first rasterization or I/O error.
    pub async fn run(&self, sections: &[Section]) -> Result<Vec<PathBuf>, BannerError> {
        ensure_output_dir(&self.settings.output_dir)?;

        let mut written = Vec::new();
        for section in sections {
            eprintln!("{RULE}");
            eprintln!("[*] {}", section.title);
            eprintln!("{RULE}");

            let mut current_group = None;
            for job in &section.jobs {
                if current_group != Some(job.group) {
                    eprintln!("\n[+] {}", job.group.heading());
                    current_group = Some(job.group);
                }
                let path = self.render(job).await?;
                eprintln!("Generated: {}", path.display());
                written.push(path);
            }
            eprintln!();
        }

        eprintln!("{RULE}");
        eprintln!("[OK] All banners generated successfully!");
        eprintln!("[>] Output folder: {}", self.settings.output_dir.display());
        eprintln!("{RULE}");
        Ok(written)
    }

    /// Build, rasterize and save one banner.
    ///
    /// # Errors
    ///
    /// Returns an error if rasterization or writing fails.
    pub async fn render(&self, job: &BannerJob) -> Result<PathBuf, BannerError> {
        let canvas = job.banner.canvas();
        let request = RasterRequest {
            markup: job.banner.markup(),
            width: canvas.width,
            height: canvas.height,
        };

        if self.settings.emit_html {
            let html_path = self.settings.output_dir.join(format!("{}.html", job.stem));
            std::fs::write(&html_path, &request.markup)?;
        }

        let image = self.rasterizer.rasterize(&request).await?;
        let path = resolve_output_path(&self.settings.output_dir, &job.stem, &self.settings.format);
        save_image(&image.data, &image.mime_type, &self.settings.format, &path)?;

        debug!(stem = %job.stem, %canvas, bytes = image.data.len(), "saved banner");
        Ok(path)
    }
}
