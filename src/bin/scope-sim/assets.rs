//! Asset embedding and loading utilities.

use rust_embed::RustEmbed;
use scope_sim::{ConfigError, ReticleSpec};
use std::path::Path;
use std::sync::mpsc;
use thiserror::Error;

/// Embeds all assets from the assets/ directory into the binary.
/// In debug mode, assets are loaded from the filesystem for faster iteration.
/// In release mode, assets are compressed and embedded in the binary.
#[derive(RustEmbed)]
#[folder = "assets/"]
pub struct Assets;

/// Errors that can occur when loading and decoding images.
#[derive(Error, Debug)]
pub enum ImageLoadError {
    #[error("asset not found: {0}")]
    AssetNotFound(String),
    #[error("failed to read '{path}': {source}")]
    ReadError {
        path: String,
        source: std::io::Error,
    },
    #[error("failed to decode image '{path}': {source}")]
    DecodeError {
        path: String,
        source: image::ImageError,
    },
}

/// Errors that can occur when loading the bundled reticle config.
#[derive(Error, Debug)]
pub enum ReticleAssetError {
    #[error("{0} not found in embedded assets")]
    NotFound(&'static str),
    #[error("invalid UTF-8 in {0}: {1}")]
    InvalidUtf8(&'static str, std::str::Utf8Error),
    #[error(transparent)]
    Config(#[from] ConfigError),
}

/// Decoded image data ready for texture creation.
pub struct DecodedImage {
    pub pixels: Vec<u8>,
    pub width: u32,
    pub height: u32,
}

/// State of the background image being loaded asynchronously.
pub enum AssetLoadState {
    /// Image is being decoded in a background thread.
    Loading(mpsc::Receiver<Result<DecodedImage, ImageLoadError>>),
    /// Image has been decoded and is ready for texture creation.
    Ready(DecodedImage),
    /// Texture has been created; the pixel data is no longer kept.
    Uploaded,
    /// No image available; the procedural backdrop is drawn instead.
    Unavailable,
}

fn decode(path: &str, bytes: &[u8]) -> Result<DecodedImage, ImageLoadError> {
    let img = image::load_from_memory(bytes).map_err(|source| ImageLoadError::DecodeError {
        path: path.to_string(),
        source,
    })?;
    let rgba = img.to_rgba8();
    let (width, height) = rgba.dimensions();

    Ok(DecodedImage {
        pixels: rgba.into_raw(),
        width,
        height,
    })
}

/// Loads and decodes an image from embedded assets.
pub fn load_embedded_image(name: &str) -> Result<DecodedImage, ImageLoadError> {
    let file = Assets::get(name).ok_or_else(|| ImageLoadError::AssetNotFound(name.to_string()))?;
    decode(name, &file.data)
}

/// Loads and decodes an image file from disk.
pub fn load_image_file(path: &Path) -> Result<DecodedImage, ImageLoadError> {
    let display = path.display().to_string();
    let bytes = std::fs::read(path).map_err(|source| ImageLoadError::ReadError {
        path: display.clone(),
        source,
    })?;
    decode(&display, &bytes)
}

/// Loads the reticle dimensions bundled with the binary.
pub fn load_embedded_reticle(name: &'static str) -> Result<ReticleSpec, ReticleAssetError> {
    let file = Assets::get(name).ok_or(ReticleAssetError::NotFound(name))?;
    let text =
        std::str::from_utf8(&file.data).map_err(|err| ReticleAssetError::InvalidUtf8(name, err))?;
    Ok(ReticleSpec::from_ron_str(text)?)
}
