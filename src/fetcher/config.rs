//! Configuration structure and defaults for the fetcher.
//!
//! Everything a transfer depends on is captured here and injected at
//! construction time: destination, rate ceiling, rendering mode. Nothing in
//! the transfer path reads ambient process state.

use crate::progress::{ProgressBarOpts, BACKGROUND_LOG_FILE};
use crate::rate::RateLimit;

use reqwest::header::HeaderMap;
use std::path::PathBuf;

/// Configuration structure for the fetcher.
#[derive(Debug, Clone)]
pub struct FetcherConfig {
    /// Directory where to store the downloaded files.
    ///
    /// An empty path keeps destinations relative to the working directory,
    /// matching what a user typing bare filenames expects.
    pub directory: PathBuf,
    /// Explicit output file name, overriding the name derived from the URL.
    pub output: Option<PathBuf>,
    /// Maximum average transfer rate. `None` means unthrottled.
    pub rate_limit: Option<RateLimit>,
    /// Write a log record instead of rendering terminal progress.
    pub background: bool,
    /// Where the background log record is written.
    pub log_path: PathBuf,
    /// Style options for the interactive progress bar.
    pub progress: ProgressBarOpts,
    /// Custom HTTP headers.
    pub headers: Option<HeaderMap>,
}

impl Default for FetcherConfig {
    fn default() -> Self {
        Self {
            directory: PathBuf::new(),
            output: None,
            rate_limit: None,
            background: false,
            log_path: PathBuf::from(BACKGROUND_LOG_FILE),
            progress: ProgressBarOpts::default(),
            headers: None,
        }
    }
}
