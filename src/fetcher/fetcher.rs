//! Core transfer engine.
//!
//! This module contains the main [`Fetcher`] struct that performs a single
//! download attempt: one GET per call, strict content-length validation, and
//! a streaming copy into the destination file paced by the rate limiter and
//! tapped by the progress reporter.
//!
//! # Examples
//!
//! ```rust,no_run
//! use sget::download::Download;
//! use sget::fetcher::FetcherBuilder;
//! use std::convert::TryFrom;
//!
//! # async fn example() -> Result<(), sget::Error> {
//! let fetcher = FetcherBuilder::new().build();
//! let download = Download::try_from("https://example.com/file.zip")?;
//! let summary = fetcher.fetch(&download).await?;
//! # Ok(())
//! # }
//! ```

use super::config::FetcherConfig;
use crate::download::{Download, Summary};
use crate::http::{create_http_client, HttpClientConfig};
use crate::progress::{BackgroundLog, ProgressReporter};
use crate::rate::{RateLimit, RateLimiter};
use crate::{Error, Result};

use futures::StreamExt;
use reqwest::header::CONTENT_LENGTH;
use std::fmt;
use std::fmt::Debug;
use std::path::PathBuf;
use std::time::Instant;
use tokio::{fs, fs::OpenOptions, io::AsyncWriteExt};
use tracing::debug;

/// Represents the transfer engine.
///
/// A fetcher can be created via its builder:
///
/// ```rust
/// # fn main()  {
/// use sget::fetcher::FetcherBuilder;
///
/// let f = FetcherBuilder::new().build();
/// # }
/// ```
#[derive(Clone)]
pub struct Fetcher {
    config: FetcherConfig,
}

impl Debug for Fetcher {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Fetcher")
            .field("config", &self.config)
            .finish()
    }
}

impl Fetcher {
    /// Creates a new Fetcher with the given configuration.
    pub(crate) fn new(config: FetcherConfig) -> Self {
        Self { config }
    }

    /// Gets the directory where files will be downloaded.
    pub fn directory(&self) -> &PathBuf {
        &self.config.directory
    }

    /// Gets the explicit output file name, if one was configured.
    pub fn output(&self) -> Option<&PathBuf> {
        self.config.output.as_ref()
    }

    /// Gets the configured rate ceiling.
    pub fn rate_limit(&self) -> Option<RateLimit> {
        self.config.rate_limit
    }

    /// Gets whether progress goes to the background log.
    pub fn background(&self) -> bool {
        self.config.background
    }

    /// Gets the background log path.
    pub fn log_path(&self) -> &PathBuf {
        &self.config.log_path
    }

    /// Drops the explicit output name so batch entries keep their derived
    /// filenames.
    pub(crate) fn clear_output(&mut self) {
        self.config.output = None;
    }

    /// Resolves the destination path for a download.
    ///
    /// An explicit output name wins over the filename derived from the URL;
    /// either is joined onto the configured directory.
    pub fn output_path(&self, download: &Download) -> PathBuf {
        match &self.config.output {
            Some(name) => self.config.directory.join(name),
            None => self.config.directory.join(&download.filename),
        }
    }

    /// Performs exactly one download attempt and writes the result to disk.
    ///
    /// The declared Content-Length is required: without it the transfer fails
    /// before the destination file is created. A mid-stream read or write
    /// error aborts the transfer and leaves the partially-written file in
    /// place; there is no cleanup or retry.
    pub async fn fetch(&self, download: &Download) -> Result<Summary> {
        let output = self.output_path(download);
        let client = create_http_client(HttpClientConfig {
            headers: self.config.headers.clone(),
        })?;

        debug!("Fetching {}", &download.url);
        let started = Instant::now();
        let res = client.get(download.url.as_str()).send().await?;

        // The original tool never looked at the status code and would happily
        // save an HTML error page; failing on non-2xx keeps the destination
        // file honest.
        let res = res.error_for_status()?;

        let total = res
            .headers()
            .get(CONTENT_LENGTH)
            .and_then(|v| v.to_str().ok())
            .and_then(|v| v.trim().parse::<u64>().ok())
            .ok_or_else(|| Error::MissingContentLength(download.url.to_string()))?;

        // Prepare the destination directory/file.
        if let Some(parent) = output.parent() {
            if !parent.as_os_str().is_empty() {
                debug!("Creating destination directory {:?}", parent);
                fs::create_dir_all(parent).await?;
            }
        }

        debug!("Creating destination file {:?}", &output);
        let mut file = OpenOptions::new()
            .create(true)
            .write(true)
            .truncate(true)
            .open(&output)
            .await?;

        let mut reporter = if self.config.background {
            ProgressReporter::detached(BackgroundLog::new(
                &self.config.log_path,
                download.url.as_str(),
                &output,
                total,
            ))
        } else {
            ProgressReporter::interactive(total, self.config.progress.clone())
        };
        let mut limiter = RateLimiter::new(self.config.rate_limit);
        let mut written: u64 = 0;

        // Download the file chunk by chunk.
        debug!("Retrieving chunks...");
        let mut stream = res.bytes_stream();
        while let Some(item) = stream.next().await {
            let mut chunk = item.map_err(Error::from)?;
            let chunk_size = chunk.len() as u64;

            // The limiter sleeps off whatever time this chunk saved over the
            // ceiling before the next one is pulled.
            limiter.pace(chunk_size).await;

            file.write_all_buf(&mut chunk).await?;
            written += chunk_size;
            reporter.observe(chunk_size);
        }
        file.flush().await?;

        // Interactive mode finishes the bar; background mode writes the log
        // record. Either failure is surfaced rather than swallowed.
        reporter.finish()?;

        Ok(Summary::new(
            download.clone(),
            output,
            written,
            started.elapsed(),
        ))
    }
}
