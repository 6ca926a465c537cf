//! HTTP module containing client construction.
//!
//! This module builds the HTTP client used by the fetcher. The client is a
//! `reqwest` client wrapped with tracing middleware so every request shows up
//! in the `tracing` output.

pub mod client;

pub use client::{create_http_client, HttpClientConfig};
