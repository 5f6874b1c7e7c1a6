//! CLI argument parsing with clap.

use clap::Parser;

/// Apega Desapega banner generator - renders the promotional banner set.
#[derive(Parser, Debug)]
#[command(name = "bannergen", version, about)]
pub struct Cli {
    /// Output directory (default from config, else `output`).
    #[arg(short, long)]
    pub output_dir: Option<String>,

    /// Output format: png, jpeg, webp.
    #[arg(short, long)]
    pub format: Option<String>,

    /// Only render these banner groups (repeatable, e.g. `--only hero --only promo`).
    #[arg(long, value_name = "GROUP")]
    pub only: Vec<String>,

    /// Print the banners that would be rendered, without starting a browser.
    #[arg(long)]
    pub list: bool,

    /// Also write each banner's HTML document next to the image.
    #[arg(long)]
    pub emit_html: bool,

    /// Config file path override.
    #[arg(long)]
    pub config: Option<String>,

    /// Verbose output.
    #[arg(short, long)]
    pub verbose: bool,
}
