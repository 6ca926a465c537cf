//! Batch driver: download every URL listed in a text file.
//!
//! The list is newline-separated; blank lines are skipped. Each entry keeps
//! the filename derived from its URL, so an explicit output name configured
//! on the fetcher is ignored here. A failing entry is recorded and the batch
//! moves on; only a list file that cannot be read aborts the whole run.

use crate::download::{Download, Summary};
use crate::fetcher::Fetcher;
use crate::{Error, Result};

use std::convert::TryFrom;
use std::path::Path;
use tracing::debug;

/// Outcome of one batch run.
#[derive(Debug, Default)]
pub struct BatchReport {
    /// Summaries of the entries that completed.
    pub completed: Vec<Summary>,
    /// The entries that failed, paired with their error.
    pub failed: Vec<(String, Error)>,
}

impl BatchReport {
    /// Whether every entry completed.
    pub fn is_success(&self) -> bool {
        self.failed.is_empty()
    }
}

/// Downloads every URL listed in `list`, one after the other.
///
/// Returns an error only if the list file itself cannot be read. Individual
/// download failures are reported per entry in the returned [`BatchReport`].
pub async fn fetch_list(fetcher: &Fetcher, list: &Path) -> Result<BatchReport> {
    let text = tokio::fs::read_to_string(list)
        .await
        .map_err(|source| Error::BatchList {
            path: list.to_path_buf(),
            source,
        })?;

    // -O must not apply here: every entry keeps its derived filename.
    let fetcher = match fetcher.output() {
        Some(_) => {
            let mut per_entry = fetcher.clone();
            per_entry.clear_output();
            per_entry
        }
        None => fetcher.clone(),
    };

    let mut report = BatchReport::default();
    for line in text.lines() {
        let url = line.trim();
        if url.is_empty() {
            continue;
        }
        debug!("Batch entry: {}", url);
        let outcome = match Download::try_from(url) {
            Ok(download) => fetcher.fetch(&download).await,
            Err(e) => Err(e),
        };
        match outcome {
            Ok(summary) => report.completed.push(summary),
            Err(e) => {
                eprintln!("error downloading {}: {}", url, e);
                report.failed.push((url.to_string(), e));
            }
        }
    }
    Ok(report)
}
