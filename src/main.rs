//! sget - a small wget-style downloader.

use chrono::Local;
use clap::Parser;
use sget::download::Download;
use sget::fetcher::FetcherBuilder;
use sget::progress::TIMESTAMP_FORMAT;
use sget::rate::RateLimit;
use sget::{fetch_list, Result};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

/// Download files over HTTP(S).
#[derive(Parser)]
#[command(name = "sget", version, about)]
struct Cli {
    /// URL to download (required unless -i is given)
    url: Option<String>,

    /// Output file name
    #[arg(short = 'O', value_name = "FILE")]
    output: Option<PathBuf>,

    /// Directory to save the file into
    #[arg(short = 'P', value_name = "DIR")]
    directory: Option<PathBuf>,

    /// Download speed limit, e.g. 500k or 40M
    #[arg(long = "rate-limit", value_name = "LIMIT")]
    rate_limit: Option<RateLimit>,

    /// Download every URL listed in the given file
    #[arg(short = 'i', value_name = "FILE")]
    input: Option<PathBuf>,

    /// Run detached: write progress to the "wget-log" file
    #[arg(short = 'B')]
    background: bool,
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();
    if cli.url.is_none() && cli.input.is_none() {
        eprintln!("Usage: sget [OPTIONS] <URL>");
        std::process::exit(2);
    }

    if let Err(e) = run(cli).await {
        eprintln!("error: {}", e);
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<()> {
    let mut builder = FetcherBuilder::new().background(cli.background);
    if let Some(directory) = cli.directory {
        builder = builder.directory(directory);
    }
    if let Some(output) = cli.output {
        builder = builder.output(output);
    }
    if let Some(limit) = cli.rate_limit {
        builder = builder.rate_limit(limit);
    }
    let fetcher = builder.build();

    // Batch mode: the URL list wins over any positional URL.
    if let Some(list) = cli.input {
        let report = fetch_list(&fetcher, &list).await?;
        println!(
            "{} downloaded, {} failed",
            report.completed.len(),
            report.failed.len()
        );
        return Ok(());
    }

    // Presence checked in main before any network I/O.
    let url = cli.url.unwrap_or_default();
    let download = Download::try_from(url.as_str())?;

    if cli.background {
        println!(
            "Output will be written to \"{}\".",
            fetcher.log_path().display()
        );
        fetcher.fetch(&download).await?;
        return Ok(());
    }

    println!("start at {}", Local::now().format(TIMESTAMP_FORMAT));
    println!(
        "downloading {} to {}",
        download.url,
        fetcher.output_path(&download).display()
    );
    fetcher.fetch(&download).await?;
    println!("finished at {}", Local::now().format(TIMESTAMP_FORMAT));
    Ok(())
}
