//! Tests for the download descriptor and transfer summary.

use sget::download::{Download, Summary};
use sget::error::Error;
use std::path::PathBuf;
use std::time::Duration;

#[test]
fn test_filename_derived_from_last_path_segment() {
    let d = Download::try_from("https://example.com/a/b/file.tar.gz").unwrap();
    assert_eq!(d.filename, "file.tar.gz");
}

#[test]
fn test_filename_decodes_url_encoding() {
    let d = Download::try_from("https://example.com/some%20archive.zip").unwrap();
    assert_eq!(d.filename, "some archive.zip");
}

#[test]
fn test_invalid_url_is_rejected() {
    assert!(matches!(
        Download::try_from("not-a-valid-url"),
        Err(Error::InvalidUrl(_))
    ));
    assert!(matches!(
        Download::try_from("https://example.com/"),
        Err(Error::InvalidUrl(_))
    ));
}

#[test]
fn test_summary_getters() {
    let download = Download::try_from("https://example.com/file.bin").unwrap();
    let summary = Summary::new(
        download,
        PathBuf::from("file.bin"),
        2048,
        Duration::from_secs(3),
    );

    assert_eq!(summary.download().filename, "file.bin");
    assert_eq!(summary.path(), &PathBuf::from("file.bin"));
    assert_eq!(summary.size(), 2048);
    assert_eq!(summary.elapsed(), Duration::from_secs(3));
}
