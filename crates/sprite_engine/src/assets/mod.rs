//! Asset loading
//!
//! Images and sounds are loaded by name relative to the configured asset
//! directory. Load failures are fatal at startup: callers propagate
//! [`AssetError`] out of scene construction rather than attempting recovery
//! mid-loop.

pub mod audio;
pub mod image_loader;

pub use audio::{SoundData, SoundFormat};
pub use image_loader::ImageData;

use thiserror::Error;

/// Asset loading errors
#[derive(Error, Debug)]
pub enum AssetError {
    /// Asset not found
    #[error("asset not found: {0}")]
    NotFound(String),

    /// Failed to load asset
    #[error("failed to load asset: {0}")]
    LoadFailed(String),

    /// Invalid asset data
    #[error("invalid data: {0}")]
    InvalidData(String),

    /// Unsupported asset format
    #[error("unsupported format: {0}")]
    UnsupportedFormat(String),

    /// IO error during asset loading
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
