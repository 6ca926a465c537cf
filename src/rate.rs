//! Transfer speed parsing and throttling.
//!
//! This module provides [`RateLimit`], the parsed form of a `--rate-limit`
//! string such as `500k` or `40M`, and [`RateLimiter`], which paces a
//! chunked byte stream so it never moves faster, on average, than the
//! configured ceiling.
//!
//! # Examples
//!
//! ```rust
//! use sget::rate::RateLimit;
//!
//! let limit: RateLimit = "40M".parse().unwrap();
//! assert_eq!(limit.bytes_per_sec(), 40_000_000);
//! ```

use crate::Error;
use std::str::FromStr;
use std::time::{Duration, Instant};

/// Ceiling used when no rate limit is configured.
///
/// Large enough that the expected duration of any realistic chunk rounds to
/// zero, turning the limiter into a pass-through.
pub const UNLIMITED_BYTES_PER_SEC: u64 = 100_000_000_000;

/// A maximum average transfer rate, in bytes per second.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RateLimit(u64);

impl RateLimit {
    /// Creates a rate limit from a raw bytes-per-second value.
    pub fn new(bytes_per_sec: u64) -> Self {
        Self(bytes_per_sec)
    }

    /// The ceiling in bytes per second.
    pub fn bytes_per_sec(&self) -> u64 {
        self.0
    }
}

impl FromStr for RateLimit {
    type Err = Error;

    /// Parses strings of the form `<number><unit>` where the unit is `k`/`K`
    /// for kilobytes per second (x1000) or `m`/`M` for megabytes per second
    /// (x1,000,000). Any other unit, or a missing one, is an error.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (value, unit) = s
            .char_indices()
            .next_back()
            .map(|(i, c)| (&s[..i], c))
            .ok_or_else(|| Error::InvalidRateLimit(s.to_string()))?;
        let multiplier: u64 = match unit.to_ascii_lowercase() {
            'k' => 1_000,
            'm' => 1_000_000,
            _ => return Err(Error::InvalidRateLimit(s.to_string())),
        };
        let speed = value
            .parse::<f64>()
            .ok()
            .filter(|speed| speed.is_finite() && *speed > 0.0)
            .ok_or_else(|| Error::InvalidRateLimit(s.to_string()))?;
        Ok(RateLimit((speed * multiplier as f64) as u64))
    }
}

/// Paces a chunked byte stream to a configured ceiling.
///
/// The limiter does not own the stream; the transfer loop calls
/// [`RateLimiter::pace`] once per received chunk. For a chunk of `n` bytes
/// obtained in wall-clock duration `elapsed`, the expected duration at the
/// ceiling is `n / ceiling` seconds; when the chunk arrived faster than that,
/// the limiter suspends the current task for the difference.
///
/// There is no token bucket and bursts within a single chunk are not
/// sub-divided, so throttling accuracy is bounded by the chunk sizes the
/// underlying stream naturally produces.
#[derive(Debug)]
pub struct RateLimiter {
    bytes_per_sec: u64,
    last: Instant,
}

impl RateLimiter {
    /// Creates a limiter for the given ceiling, or a pass-through when no
    /// ceiling is configured.
    pub fn new(limit: Option<RateLimit>) -> Self {
        Self {
            bytes_per_sec: limit
                .map(|l| l.bytes_per_sec())
                .unwrap_or(UNLIMITED_BYTES_PER_SEC),
            last: Instant::now(),
        }
    }

    /// Creates a pass-through limiter.
    pub fn unlimited() -> Self {
        Self::new(None)
    }

    /// Whether this limiter actually throttles.
    pub fn is_limited(&self) -> bool {
        self.bytes_per_sec < UNLIMITED_BYTES_PER_SEC
    }

    /// Records that `n` bytes were just received and sleeps off any time the
    /// chunk saved over the configured ceiling.
    ///
    /// The elapsed duration is measured since the previous call returned, so
    /// it covers the cost of obtaining and writing the chunk. Zero-byte
    /// chunks return immediately.
    pub async fn pace(&mut self, n: u64) {
        if n == 0 || !self.is_limited() {
            self.last = Instant::now();
            return;
        }
        let elapsed = self.last.elapsed();
        let expected = Duration::from_secs_f64(n as f64 / self.bytes_per_sec as f64);
        if expected > elapsed {
            tokio::time::sleep(expected - elapsed).await;
        }
        self.last = Instant::now();
    }
}
