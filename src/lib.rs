//! sget is a small wget-style downloader: it fetches files over HTTP(S),
//! writes them to disk, reports progress, and can throttle the transfer or
//! log progress to a file instead of the terminal.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use sget::{download::Download, fetcher::FetcherBuilder, Error};
//! use std::path::PathBuf;
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), Error> {
//! let download = Download::try_from("https://example.com/file-0.1.2.zip")?;
//! let fetcher = FetcherBuilder::new()
//!     .directory(PathBuf::from("output"))
//!     .build();
//! fetcher.fetch(&download).await?;
//! # Ok(())
//! # }
//! ```
//!
//! # Module Organization
//!
//! - [`download`] - The `Download` descriptor and per-transfer `Summary`
//! - [`fetcher`] - The `Fetcher` transfer engine and its builder
//! - [`batch`] - Sequential driver over a newline-separated URL list
//! - [`rate`] - Rate-limit parsing and the per-read throttle
//! - [`progress`] - Interactive and detached progress reporting
//! - [`http`] - HTTP client construction
//! - [`error`] - Centralized error handling with the `Error` enum

pub mod batch;
pub mod download;
pub mod error;
pub mod fetcher;
pub mod http;
pub mod progress;
pub mod rate;

pub use batch::{fetch_list, BatchReport};
pub use download::{Download, Summary};
pub use error::{Error, Result};
pub use fetcher::{Fetcher, FetcherBuilder};
pub use http::{create_http_client, HttpClientConfig};
pub use progress::{BackgroundLog, ProgressBarOpts, ProgressReporter, BACKGROUND_LOG_FILE};
pub use rate::{RateLimit, RateLimiter};
