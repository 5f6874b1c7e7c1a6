//! Record/replay infrastructure for rendering without a browser.

pub mod config;
pub mod format;
pub mod recorder;
pub mod replayer;
