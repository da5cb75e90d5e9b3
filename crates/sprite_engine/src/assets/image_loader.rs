//! Image loading utilities for sprite data
//!
//! Decodes image files into RGBA pixel data and provides the sub-rectangle
//! extraction used to strip individual frames out of a sprite sheet.

use crate::assets::AssetError;
use crate::foundation::math::Extent;
use std::path::Path;

/// Decoded image data
#[derive(Debug, Clone)]
pub struct ImageData {
    /// Raw RGBA pixel data, row-major
    pub data: Vec<u8>,
    /// Image width in pixels
    pub width: u32,
    /// Image height in pixels
    pub height: u32,
}

impl ImageData {
    /// Load an image from a file path
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, AssetError> {
        let path_ref = path.as_ref();

        log::debug!("loading image from {:?}", path_ref);

        let img = image::open(path_ref)
            .map_err(|e| AssetError::LoadFailed(format!("{:?}: {}", path_ref, e)))?;

        let rgba = img.to_rgba8();
        let (width, height) = rgba.dimensions();

        log::info!("loaded image {}x{} from {:?}", width, height, path_ref);

        Ok(Self {
            data: rgba.into_raw(),
            width,
            height,
        })
    }

    /// Load an image from memory (useful for embedded resources)
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, AssetError> {
        let img = image::load_from_memory(bytes)
            .map_err(|e| AssetError::LoadFailed(format!("in-memory image: {}", e)))?;

        let rgba = img.to_rgba8();
        let (width, height) = rgba.dimensions();

        Ok(Self {
            data: rgba.into_raw(),
            width,
            height,
        })
    }

    /// Create a solid color image (bullet discs, placeholders, tests)
    pub fn solid_color(width: u32, height: u32, color: [u8; 4]) -> Self {
        let pixel_count = (width * height) as usize;
        let mut data = Vec::with_capacity(pixel_count * 4);
        for _ in 0..pixel_count {
            data.extend_from_slice(&color);
        }
        Self {
            data,
            width,
            height,
        }
    }

    /// The zero-size image used when a sprite must stop rendering entirely
    pub fn empty() -> Self {
        Self {
            data: Vec::new(),
            width: 0,
            height: 0,
        }
    }

    /// Copy a sub-rectangle out of this image, as when stripping one frame
    /// from a sprite sheet by offset and size.
    pub fn sub_image(&self, offset: (u32, u32), size: (u32, u32)) -> Result<Self, AssetError> {
        let (ox, oy) = offset;
        let (w, h) = size;

        if ox + w > self.width || oy + h > self.height {
            return Err(AssetError::InvalidData(format!(
                "sub-image {}x{} at ({}, {}) exceeds sheet bounds {}x{}",
                w, h, ox, oy, self.width, self.height
            )));
        }

        let mut data = Vec::with_capacity((w * h * 4) as usize);
        for row in oy..oy + h {
            let start = ((row * self.width + ox) * 4) as usize;
            let end = start + (w * 4) as usize;
            data.extend_from_slice(&self.data[start..end]);
        }

        Ok(Self {
            data,
            width: w,
            height: h,
        })
    }

    /// Image extent
    pub fn extent(&self) -> Extent {
        Extent::new(self.width, self.height)
    }

    /// Size of the pixel data in bytes
    pub fn size_bytes(&self) -> usize {
        self.data.len()
    }
}
