//! Downloads the scope background photograph into `assets/`.
//!
//! The image is decoded once after download so a broken file never ends up
//! embedded in the app.

use clap::Parser;
use indicatif::{ProgressBar, ProgressStyle};
use std::path::{Path, PathBuf};
use thiserror::Error;
use tokio::fs as tokio_fs;
use tokio::io::AsyncWriteExt;

/// Landscape photo used by the original web version of the simulator.
const BACKGROUND_URL: &str = "https://images.unsplash.com/photo-1506744038136-46273834b3fb?auto=format&fit=crop&w=1600&q=80&fm=jpg";

const USER_AGENT: &str = "scope-sim";

const BACKGROUND_PATH: &str = "assets/background.jpg";

/// Fetch the background image bundled with scope-sim.
#[derive(Parser, Debug)]
#[command(version, about)]
struct Args {
    /// Image URL (PNG or JPEG)
    #[arg(long, default_value = BACKGROUND_URL)]
    url: String,
    /// Output path, relative to the crate root unless absolute
    #[arg(long, default_value = BACKGROUND_PATH)]
    output: PathBuf,
    /// Download even if the output file already exists
    #[arg(long)]
    force: bool,
}

#[derive(Error, Debug)]
enum FetchError {
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("failed to fetch {url}: {status}")]
    Status {
        url: String,
        status: reqwest::StatusCode,
    },
    #[error("failed to write '{path}': {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("downloaded file is not a valid image: {0}")]
    Decode(#[from] image::ImageError),
}

fn repo_path(path: &Path) -> PathBuf {
    if path.is_absolute() {
        path.to_path_buf()
    } else {
        PathBuf::from(env!("CARGO_MANIFEST_DIR")).join(path)
    }
}

fn progress_bar(total: Option<u64>) -> ProgressBar {
    match total {
        Some(len) => {
            let bar = ProgressBar::new(len);
            if let Ok(style) = ProgressStyle::with_template(
                "{msg} [{bar:40.cyan/blue}] {bytes}/{total_bytes} ({eta})",
            ) {
                bar.set_style(style.progress_chars("=> "));
            }
            bar
        }
        None => ProgressBar::new_spinner(),
    }
}

async fn download(client: &reqwest::Client, url: &str) -> Result<Vec<u8>, FetchError> {
    let mut response = client
        .get(url)
        .header(reqwest::header::USER_AGENT, USER_AGENT)
        .send()
        .await?;

    if !response.status().is_success() {
        return Err(FetchError::Status {
            url: url.to_owned(),
            status: response.status(),
        });
    }

    let bar = progress_bar(response.content_length());
    bar.set_message("Downloading");

    let mut bytes = Vec::new();
    while let Some(chunk) = response.chunk().await? {
        bytes.extend_from_slice(&chunk);
        bar.inc(chunk.len() as u64);
    }
    bar.finish_and_clear();

    Ok(bytes)
}

async fn write_file(path: &Path, bytes: &[u8]) -> Result<(), FetchError> {
    let io_err = |source| FetchError::Io {
        path: path.to_path_buf(),
        source,
    };

    if let Some(parent) = path.parent() {
        tokio_fs::create_dir_all(parent).await.map_err(io_err)?;
    }
    let mut file = tokio_fs::File::create(path).await.map_err(io_err)?;
    file.write_all(bytes).await.map_err(io_err)?;
    file.flush().await.map_err(io_err)?;
    Ok(())
}

#[tokio::main]
async fn main() -> Result<(), FetchError> {
    env_logger::init();
    let args = Args::parse();

    let output = repo_path(&args.output);
    if !args.force && tokio_fs::try_exists(&output).await.unwrap_or(false) {
        println!(
            "{} already exists (use --force to download again)",
            output.display()
        );
        return Ok(());
    }

    let client = reqwest::Client::new();

    println!("Fetching {}", args.url);
    let bytes = download(&client, &args.url).await?;
    println!("Fetched {} bytes", bytes.len());

    let image = image::load_from_memory(&bytes)?;
    log::info!("Decoded {}x{} image", image.width(), image.height());

    write_file(&output, &bytes).await?;
    println!("Wrote background to {}", output.display());

    Ok(())
}
