//! Per-transfer progress reporting.
//!
//! A [`ProgressReporter`] observes every chunk that passes through a transfer
//! and renders the current state. Two variants implement the same capability:
//!
//! - [`ProgressReporter::Interactive`] draws a single continuously-overwritten
//!   terminal line through indicatif.
//! - [`ProgressReporter::Detached`] accumulates a textual record and persists
//!   it to a log file once the transfer completes. This is what backs the
//!   `-B` background mode; the transfer itself still runs to completion in
//!   the foreground of the process.
//!
//! The variant is chosen once at transfer start and stays fixed for its
//! duration.

use crate::progress::style::ProgressBarOpts;
use chrono::{DateTime, Local};
use indicatif::ProgressBar;
use std::io;
use std::path::{Path, PathBuf};

/// Well-known name of the background log file, relative to the working
/// directory.
pub const BACKGROUND_LOG_FILE: &str = "wget-log";

/// Timestamp format used in terminal output and the background log.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Observes the chunks of one transfer and renders progress.
#[derive(Debug)]
pub enum ProgressReporter {
    /// Render an in-place updating line on the terminal.
    Interactive {
        bar: ProgressBar,
        /// Clear the line instead of keeping it once the transfer completes.
        clear: bool,
    },
    /// Accumulate a record and write it to a log file at completion.
    Detached(BackgroundLog),
}

impl ProgressReporter {
    /// Creates an interactive reporter for a transfer of `total` bytes.
    pub fn interactive(total: u64, opts: ProgressBarOpts) -> Self {
        let clear = opts.clear;
        let bar = opts.to_progress_bar(total);
        // A hidden bar is created without a length; the clamp in observe()
        // needs one either way.
        bar.set_length(total);
        Self::Interactive { bar, clear }
    }

    /// Creates a detached reporter backed by the given log record.
    pub fn detached(log: BackgroundLog) -> Self {
        Self::Detached(log)
    }

    /// Records that `n` more bytes were transferred and re-renders.
    ///
    /// The cumulative count is monotonically non-decreasing and never exceeds
    /// the known total.
    pub fn observe(&mut self, n: u64) {
        match self {
            Self::Interactive { bar, .. } => {
                let total = bar.length().unwrap_or(u64::MAX);
                bar.set_position(bar.position().saturating_add(n).min(total));
            }
            Self::Detached(log) => log.observe(n),
        }
    }

    /// Cumulative bytes observed so far.
    pub fn downloaded(&self) -> u64 {
        match self {
            Self::Interactive { bar, .. } => bar.position(),
            Self::Detached(log) => log.downloaded(),
        }
    }

    /// Completes the report: finishes the terminal line, or writes the
    /// background log record.
    pub fn finish(&mut self) -> io::Result<()> {
        match self {
            Self::Interactive { bar, clear } => {
                if *clear {
                    bar.finish_and_clear();
                } else {
                    bar.finish();
                }
                Ok(())
            }
            Self::Detached(log) => log.write(),
        }
    }
}

/// The record persisted by the detached reporter.
///
/// Owned exclusively by one transfer; mutated on every observed chunk; the
/// final cumulative totals and both timestamps are written once at
/// completion, overwriting any previous log.
#[derive(Debug, Clone)]
pub struct BackgroundLog {
    path: PathBuf,
    url: String,
    destination: PathBuf,
    total: u64,
    downloaded: u64,
    started: DateTime<Local>,
}

impl BackgroundLog {
    /// Creates a record for a transfer starting now.
    pub fn new(path: &Path, url: &str, destination: &Path, total: u64) -> Self {
        Self {
            path: path.to_path_buf(),
            url: url.to_string(),
            destination: destination.to_path_buf(),
            total,
            downloaded: 0,
            started: Local::now(),
        }
    }

    /// Records `n` more transferred bytes, clamped to the total.
    pub fn observe(&mut self, n: u64) {
        self.downloaded = self.downloaded.saturating_add(n).min(self.total);
    }

    /// Cumulative bytes observed so far.
    pub fn downloaded(&self) -> u64 {
        self.downloaded
    }

    /// Renders the multi-line log record.
    fn render(&self, finished: DateTime<Local>) -> String {
        let megabytes = self.total as f64 / 1_000_000.0;
        format!(
            "start at {}\n\
             sending request, awaiting response... status 200 OK\n\
             content size: {} [~{:.2}MB]\n\
             saving file to: ./{}\n\
             Downloaded [{}]\n\
             finished at {}",
            self.started.format(TIMESTAMP_FORMAT),
            self.total,
            megabytes,
            self.destination.display(),
            self.url,
            finished.format(TIMESTAMP_FORMAT),
        )
    }

    /// Writes the record to the log file, replacing any previous content.
    pub fn write(&self) -> io::Result<()> {
        std::fs::write(&self.path, self.render(Local::now()))
    }
}
