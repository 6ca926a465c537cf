//! Represents a file to be downloaded and the outcome of a transfer.

use crate::Error;
use reqwest::Url;
use std::convert::TryFrom;
use std::path::PathBuf;
use std::time::Duration;

/// Represents a file to be downloaded.
///
/// A `Download` pairs the source URL with the filename used to save the file
/// on disk. It is immutable once the transfer starts.
#[derive(Debug, Clone)]
pub struct Download {
    /// URL of the file to download.
    pub url: Url,
    /// File name used to save the file on disk.
    pub filename: String,
}

impl Download {
    /// Creates a new [`Download`].
    ///
    /// When using the [`Download::try_from`] method, the file name is
    /// automatically extracted from the URL.
    ///
    /// ## Example
    ///
    /// The following calls are equivalent, minus some extra URL validations
    /// performed by `try_from`:
    ///
    /// ```no_run
    /// use sget::download::Download;
    /// use reqwest::Url;
    ///
    /// # fn main() -> Result<(), sget::Error> {
    /// Download::try_from("https://example.com/file-0.1.2.zip")?;
    /// Download::new(
    ///     &Url::parse("https://example.com/file-0.1.2.zip").unwrap(),
    ///     "file-0.1.2.zip",
    /// );
    /// # Ok(())
    /// # }
    /// ```
    pub fn new(url: &Url, filename: &str) -> Self {
        Self {
            url: url.clone(),
            filename: String::from(filename),
        }
    }
}

impl TryFrom<&Url> for Download {
    type Error = crate::Error;

    fn try_from(value: &Url) -> Result<Self, Self::Error> {
        value
            .path_segments()
            .ok_or_else(|| {
                Error::InvalidUrl(format!(
                    "the url \"{}\" does not contain a valid path",
                    value
                ))
            })?
            .next_back()
            .filter(|filename| !filename.is_empty())
            .map(String::from)
            .map(|filename| Download {
                url: value.clone(),
                filename: form_urlencoded::parse(filename.as_bytes())
                    .map(|(key, val)| [key, val].concat())
                    .collect(),
            })
            .ok_or_else(|| {
                Error::InvalidUrl(format!("the url \"{}\" does not contain a filename", value))
            })
    }
}

impl TryFrom<&str> for Download {
    type Error = crate::Error;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Url::parse(value)
            .map_err(|e| {
                Error::InvalidUrl(format!("the url \"{}\" cannot be parsed: {}", value, e))
            })
            .and_then(|u| Download::try_from(&u))
    }
}

/// Represents the outcome of a single completed transfer.
#[derive(Debug, Clone)]
pub struct Summary {
    /// The download descriptor.
    download: Download,
    /// Path the file was written to.
    path: PathBuf,
    /// Number of bytes written to disk.
    size: u64,
    /// Wall-clock duration of the transfer.
    elapsed: Duration,
}

impl Summary {
    /// Create a new [`Summary`].
    pub fn new(download: Download, path: PathBuf, size: u64, elapsed: Duration) -> Self {
        Self {
            download,
            path,
            size,
            elapsed,
        }
    }

    /// Get a reference to the summary's download.
    pub fn download(&self) -> &Download {
        &self.download
    }

    /// Get the path the file was written to.
    pub fn path(&self) -> &PathBuf {
        &self.path
    }

    /// Get the number of bytes written.
    pub fn size(&self) -> u64 {
        self.size
    }

    /// Get the wall-clock duration of the transfer.
    pub fn elapsed(&self) -> Duration {
        self.elapsed
    }
}

#[cfg(test)]
mod test {
    use super::*;

    const DOMAIN: &str = "http://domain.com/file.zip";

    #[test]
    fn test_try_from_url() {
        let u = Url::parse(DOMAIN).unwrap();
        let d = Download::try_from(&u).unwrap();
        assert_eq!(d.filename, "file.zip")
    }

    #[test]
    fn test_try_from_string() {
        let d = Download::try_from(DOMAIN).unwrap();
        assert_eq!(d.filename, "file.zip")
    }

    #[test]
    fn test_try_from_nested_path() {
        let d = Download::try_from("https://example.com/a/b/file.tar.gz").unwrap();
        assert_eq!(d.filename, "file.tar.gz")
    }

    #[test]
    fn test_try_from_url_encoded_filename() {
        let d = Download::try_from("http://domain.com/some%20file.zip").unwrap();
        assert_eq!(d.filename, "some file.zip")
    }

    #[test]
    fn test_try_from_without_filename() {
        assert!(Download::try_from("http://domain.com/").is_err());
        assert!(Download::try_from("not-a-valid-url").is_err());
    }
}
