//! Progress module containing progress rendering for transfers.
//!
//! This module is organized into two components:
//!
//! - `style` - Progress bar styling options and templates
//! - `reporter` - The per-transfer progress reporter, with an interactive
//!   (in-place terminal line) and a detached (background log file) variant
//!
//! The reporter variant is selected once at transfer start and injected into
//! the fetcher; nothing in the rendering path reaches into ambient process
//! state.

pub(crate) mod reporter;
pub(crate) mod style;

pub use reporter::{BackgroundLog, ProgressReporter, BACKGROUND_LOG_FILE, TIMESTAMP_FORMAT};
pub use style::ProgressBarOpts;
