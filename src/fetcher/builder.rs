//! Builder pattern implementation for creating Fetcher instances.
//!
//! This module provides the [`FetcherBuilder`] struct for configuring and
//! creating [`Fetcher`] instances: destination directory and filename, rate
//! ceiling, background mode, progress styling, and HTTP headers.
//!
//! # Examples
//!
//! ## Basic Builder Usage
//!
//! ```rust
//! use sget::fetcher::FetcherBuilder;
//! use std::path::PathBuf;
//!
//! let fetcher = FetcherBuilder::new()
//!     .directory(PathBuf::from("downloads"))
//!     .build();
//! ```
//!
//! ## Throttled Download with Explicit Output Name
//!
//! ```rust
//! use sget::fetcher::FetcherBuilder;
//! use sget::rate::RateLimit;
//! use std::path::PathBuf;
//!
//! # fn example() -> Result<(), sget::Error> {
//! let fetcher = FetcherBuilder::new()
//!     .output(PathBuf::from("custom.bin"))
//!     .rate_limit("40M".parse::<RateLimit>()?)
//!     .build();
//! # Ok(())
//! # }
//! ```

use super::{config::FetcherConfig, fetcher::Fetcher};
use crate::progress::ProgressBarOpts;
use crate::rate::RateLimit;

use reqwest::header::{HeaderMap, HeaderValue, IntoHeaderName};
use std::path::PathBuf;

/// A builder used to create a [`Fetcher`].
///
/// ```rust
/// # fn main()  {
/// use sget::fetcher::FetcherBuilder;
///
/// let f = FetcherBuilder::new().background(true).directory("downloads".into()).build();
/// # }
/// ```
#[derive(Default)]
pub struct FetcherBuilder {
    config: FetcherConfig,
}

impl FetcherBuilder {
    /// Creates a builder with the default options.
    pub fn new() -> Self {
        FetcherBuilder::default()
    }

    /// Convenience function to hide the progress bar.
    pub fn hidden() -> Self {
        let mut builder = FetcherBuilder::default();
        builder.config.progress = ProgressBarOpts::hidden();
        builder
    }

    /// Sets the directory where to store the downloads.
    pub fn directory(mut self, directory: PathBuf) -> Self {
        self.config.directory = directory;
        self
    }

    /// Sets an explicit output file name, overriding the name derived from
    /// the URL.
    pub fn output(mut self, output: PathBuf) -> Self {
        self.config.output = Some(output);
        self
    }

    /// Sets the maximum average transfer rate.
    pub fn rate_limit(mut self, limit: RateLimit) -> Self {
        self.config.rate_limit = Some(limit);
        self
    }

    /// Selects background mode: progress is persisted to a log file instead
    /// of being rendered on the terminal.
    pub fn background(mut self, background: bool) -> Self {
        self.config.background = background;
        self
    }

    /// Sets the path of the background log file.
    pub fn log_path(mut self, log_path: PathBuf) -> Self {
        self.config.log_path = log_path;
        self
    }

    /// Sets the progress bar style options.
    pub fn progress(mut self, progress: ProgressBarOpts) -> Self {
        self.config.progress = progress;
        self
    }

    /// Helper method to get or create a new HeaderMap.
    fn new_header(&self) -> HeaderMap {
        match self.config.headers {
            Some(ref h) => h.to_owned(),
            _ => HeaderMap::new(),
        }
    }

    /// Add the http headers.
    ///
    /// You need to pass in a `HeaderMap`, not a `HeaderName`.
    ///
    /// You can call `.headers()` multiple times and all `HeaderMap` will be
    /// merged into a single one.
    ///
    /// # Example
    ///
    /// ```
    /// use reqwest::header::{self, HeaderValue, HeaderMap};
    /// use sget::fetcher::FetcherBuilder;
    ///
    /// let ua = HeaderValue::from_str("curl/7.87").expect("Invalid UA");
    ///
    /// let builder = FetcherBuilder::new()
    ///     .headers(HeaderMap::from_iter([(header::USER_AGENT, ua)]))
    ///     .build();
    /// ```
    ///
    /// See also [`header()`].
    ///
    /// [`header()`]: FetcherBuilder::header
    pub fn headers(mut self, headers: HeaderMap) -> Self {
        let mut new = self.new_header();
        new.extend(headers);

        self.config.headers = Some(new);
        self
    }

    /// Add a single http header.
    ///
    /// Can be chained to add multiple headers. If you already hold a
    /// `HeaderMap`, see also [`headers()`].
    ///
    /// [`headers()`]: FetcherBuilder::headers
    pub fn header<K: IntoHeaderName>(mut self, name: K, value: HeaderValue) -> Self {
        let mut new = self.new_header();

        new.insert(name, value);

        self.config.headers = Some(new);
        self
    }

    /// Create the [`Fetcher`] with the specified options.
    pub fn build(self) -> Fetcher {
        Fetcher::new(self.config)
    }
}
