//! Bannergen - renders the Apega Desapega promotional banner set.

mod adapters;
mod banner;
mod batch;
mod cassette;
mod catalog;
mod cli;
mod config;
mod context;
mod error;
mod output;
mod palette;
mod params;
mod ports;

use std::path::{Path, PathBuf};
use std::process;

use clap::Parser;
use tracing::warn;
use tracing_subscriber::EnvFilter;

use crate::batch::{Batch, BatchSettings};
use crate::catalog::{filter_sections, sections, Group, Section};
use crate::cli::Cli;
use crate::config::Config;
use crate::context::ServiceContext;
use crate::error::BannerError;
use crate::params::{format_extension, validate_format};

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    if let Err(e) = run(cli).await {
        eprintln!("Error: {e}");
        process::exit(1);
    }
}

/// Install the stderr subscriber; `RUST_LOG` wins over the `-v` default.
fn init_tracing(verbose: bool) {
    let default = if verbose { "bannergen=debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt().with_env_filter(filter).with_writer(std::io::stderr).init();
}

async fn run(cli: Cli) -> Result<(), BannerError> {
    // Load config, then let flags override it
    let config_path = config::discover_config_path(cli.config.as_deref());
    let config = Config::load(&config_path).map_err(BannerError::Config)?;

    let settings = BatchSettings {
        output_dir: cli.output_dir.as_ref().map_or_else(|| config.output.dir.clone(), PathBuf::from),
        format: cli.format.clone().unwrap_or_else(|| config.output.format.clone()),
        emit_html: cli.emit_html,
    };
    validate_format(&settings.format).map_err(BannerError::InvalidArgument)?;

    let groups = cli
        .only
        .iter()
        .map(|name| Group::parse(name))
        .collect::<Result<Vec<_>, _>>()
        .map_err(BannerError::InvalidArgument)?;
    let sections = filter_sections(sections(), &groups);

    if cli.list {
        print_listing(&sections, &settings.format);
        return Ok(());
    }

    if cli.verbose {
        eprintln!("Config: {}", config_path.display());
        eprintln!("Output: {} ({})", settings.output_dir.display(), settings.format);
    }
    check_window(&config, &sections);

    // Create context based on mode (live / recording / replaying)
    let replay_path = std::env::var("BANNERGEN_REPLAY").ok();
    let is_recording = std::env::var("BANNERGEN_REC").is_ok_and(|v| v == "true" || v == "1");

    let (ctx, recording_session) = if let Some(ref cassette_path) = replay_path {
        if cli.verbose {
            eprintln!("Replaying from: {cassette_path}");
        }
        (ServiceContext::replaying(Path::new(cassette_path))?, None)
    } else if is_recording {
        if cli.verbose {
            eprintln!("Recording mode enabled");
        }
        let (ctx, session) = ServiceContext::recording(&config)?;
        (ctx, Some(session))
    } else {
        (ServiceContext::live(&config)?, None)
    };

    let result = Batch::new(ctx.rasterizer.as_ref(), &settings).run(&sections).await;

    // The recorder is shared with the adapter, so release the context first
    drop(ctx);
    if let Some(session) = recording_session {
        match session.finish() {
            Ok(path) => eprintln!("Cassette saved: {}", path.display()),
            Err(e) => eprintln!("Warning: failed to save cassette: {e}"),
        }
    }

    result.map(|_| ())
}

/// Print one `<group>\t<file name>\t<W>x<H>` line per selected job.
fn print_listing(sections: &[Section], format: &str) {
    let ext = format_extension(format);
    for job in sections.iter().flat_map(|s| &s.jobs) {
        println!("{}\t{}.{ext}\t{}", job.group.name(), job.stem, job.banner.canvas());
    }
}

/// Screenshots are clipped from the viewport, so a window smaller than a
/// canvas would cut the banner off.
fn check_window(config: &Config, sections: &[Section]) {
    let browser = &config.browser;
    for job in sections.iter().flat_map(|s| &s.jobs) {
        let canvas = job.banner.canvas();
        if canvas.width > browser.window_width || canvas.height > browser.window_height {
            warn!(
                stem = %job.stem,
                %canvas,
                window_width = browser.window_width,
                window_height = browser.window_height,
                "browser window is smaller than the banner canvas"
            );
        }
    }
}
