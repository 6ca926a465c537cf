//! Fetcher module containing the transfer engine, builder pattern, and
//! configuration.
//!
//! This module provides the main [`Fetcher`] struct and its associated
//! builder for configuring and executing downloads. One call to
//! [`Fetcher::fetch`] performs exactly one download attempt: it issues a GET,
//! validates the declared content length, and streams the body through the
//! rate limiter and progress reporter into the destination file.
//!
//! # Overview
//!
//! The fetcher module is organized into three components:
//!
//! - `fetcher` - Core Fetcher struct with the streaming copy loop
//! - `builder` - FetcherBuilder for flexible configuration
//! - `config` - The configuration structure and its defaults
//!
//! # Examples
//!
//! ## Basic Usage
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
//! println!("wrote {} bytes to {}", summary.size(), summary.path().display());
//! # Ok(())
//! # }
//! ```
//!
//! ## Throttled Background Download
//!
//! ```rust,no_run
//! use sget::fetcher::FetcherBuilder;
//! use sget::rate::RateLimit;
//! use std::path::PathBuf;
//!
//! let fetcher = FetcherBuilder::new()
//!     .directory(PathBuf::from("downloads"))
//!     .rate_limit("500k".parse::<RateLimit>().unwrap())
//!     .background(true)
//!     .build();
//! ```

pub mod builder;
pub mod config;
pub mod fetcher;

pub use builder::FetcherBuilder;
pub use config::FetcherConfig;
pub use fetcher::Fetcher;
