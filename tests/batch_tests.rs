//! Tests for the batch driver.

use sget::error::Error;
use sget::fetch_list;
use std::path::PathBuf;

mod common;
use common::helpers::*;

#[tokio::test]
async fn test_batch_downloads_every_entry() {
    let temp_dir = create_temp_dir();
    let server_a = spawn_file_server("/a.bin", create_test_content(256)).await;
    let server_b = spawn_file_server("/b.bin", create_test_content(512)).await;

    let list = create_temp_file(
        temp_dir.path(),
        "urls.txt",
        format!(
            "{}/a.bin\n\n   \n{}/b.bin\n",
            server_a.uri(),
            server_b.uri()
        )
        .as_bytes(),
    );

    let fetcher = create_test_fetcher_builder(temp_dir.path()).build();
    let report = fetch_list(&fetcher, &list).await.expect("batch failed");

    assert!(report.is_success());
    assert_eq!(report.completed.len(), 2);
    assert_file_size(&temp_dir.path().join("a.bin"), 256);
    assert_file_size(&temp_dir.path().join("b.bin"), 512);
}

/// A failing entry is recorded and the batch continues to the next URL.
#[tokio::test]
async fn test_batch_continues_past_failure() {
    let temp_dir = create_temp_dir();
    let server_a = spawn_file_server("/a.bin", create_test_content(256)).await;
    let server_c = spawn_file_server("/c.bin", create_test_content(128)).await;

    let list = create_temp_file(
        temp_dir.path(),
        "urls.txt",
        format!(
            "{}/a.bin\n{}\n{}/c.bin\n",
            server_a.uri(),
            UNREACHABLE_URL,
            server_c.uri()
        )
        .as_bytes(),
    );

    let fetcher = create_test_fetcher_builder(temp_dir.path()).build();
    let report = fetch_list(&fetcher, &list).await.expect("batch failed");

    assert!(!report.is_success());
    assert_eq!(report.completed.len(), 2);
    assert_eq!(report.failed.len(), 1);
    assert_eq!(report.failed[0].0, UNREACHABLE_URL);
    assert_file_size(&temp_dir.path().join("a.bin"), 256);
    assert_file_size(&temp_dir.path().join("c.bin"), 128);
    assert!(!temp_dir.path().join("missing.bin").exists());
}

/// A malformed line fails that entry only, not the whole batch.
#[tokio::test]
async fn test_batch_records_invalid_url() {
    let temp_dir = create_temp_dir();
    let server = spawn_file_server("/a.bin", create_test_content(64)).await;

    let list = create_temp_file(
        temp_dir.path(),
        "urls.txt",
        format!("not a url\n{}/a.bin\n", server.uri()).as_bytes(),
    );

    let fetcher = create_test_fetcher_builder(temp_dir.path()).build();
    let report = fetch_list(&fetcher, &list).await.expect("batch failed");

    assert_eq!(report.completed.len(), 1);
    assert_eq!(report.failed.len(), 1);
    assert!(matches!(report.failed[0].1, Error::InvalidUrl(_)));
}

/// An unreadable list file aborts the whole batch.
#[tokio::test]
async fn test_batch_unreadable_list_aborts() {
    let temp_dir = create_temp_dir();
    let fetcher = create_test_fetcher_builder(temp_dir.path()).build();

    let result = fetch_list(&fetcher, &PathBuf::from("/nonexistent/urls.txt")).await;
    assert!(matches!(result, Err(Error::BatchList { .. })));
}

/// An explicit output name applies to single downloads only; batch entries
/// keep their derived filenames.
#[tokio::test]
async fn test_batch_ignores_explicit_output_name() {
    let temp_dir = create_temp_dir();
    let server_a = spawn_file_server("/a.bin", create_test_content(256)).await;
    let server_b = spawn_file_server("/b.bin", create_test_content(512)).await;

    let list = create_temp_file(
        temp_dir.path(),
        "urls.txt",
        format!("{}/a.bin\n{}/b.bin\n", server_a.uri(), server_b.uri()).as_bytes(),
    );

    let fetcher = create_test_fetcher_builder(temp_dir.path())
        .output(PathBuf::from("custom.bin"))
        .build();
    let report = fetch_list(&fetcher, &list).await.expect("batch failed");

    assert_eq!(report.completed.len(), 2);
    assert_file_exists(&temp_dir.path().join("a.bin"));
    assert_file_exists(&temp_dir.path().join("b.bin"));
    assert!(!temp_dir.path().join("custom.bin").exists());
}
