//! Sound asset types
//!
//! Stores the raw encoded bytes of a sound effect; decoding happens in the
//! platform backend at playback time. The format is sniffed from magic bytes
//! so a corrupt or truncated file fails at load rather than mid-session.

use crate::assets::AssetError;
use std::path::Path;

/// Supported sound formats
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SoundFormat {
    /// WAV uncompressed
    Wav,
    /// OGG Vorbis compressed
    Ogg,
    /// MP3 compressed
    Mp3,
    /// FLAC lossless
    Flac,
    /// Unknown format
    Unknown,
}

/// Sound asset containing encoded audio bytes
#[derive(Clone)]
pub struct SoundData {
    data: Vec<u8>,
    format: SoundFormat,
}

impl SoundData {
    /// Load a sound from a file path
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, AssetError> {
        let bytes = std::fs::read(path.as_ref())?;
        Self::from_bytes(&bytes)
    }

    /// Build a sound from raw file bytes, validating the format
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, AssetError> {
        if bytes.is_empty() {
            return Err(AssetError::InvalidData("empty sound file".to_string()));
        }

        let format = Self::detect_format(bytes);
        if format == SoundFormat::Unknown {
            return Err(AssetError::UnsupportedFormat(
                "unrecognized sound data".to_string(),
            ));
        }

        Ok(Self {
            data: bytes.to_vec(),
            format,
        })
    }

    /// Raw encoded bytes
    pub fn data(&self) -> &[u8] {
        &self.data
    }

    /// Detected format
    pub fn format(&self) -> SoundFormat {
        self.format
    }

    fn detect_format(bytes: &[u8]) -> SoundFormat {
        if bytes.len() < 4 {
            return SoundFormat::Unknown;
        }
        match &bytes[0..4] {
            b"RIFF" => SoundFormat::Wav,
            b"OggS" => SoundFormat::Ogg,
            b"fLaC" => SoundFormat::Flac,
            [0xFF, 0xFB, _, _] | [0xFF, 0xFA, _, _] => SoundFormat::Mp3,
            [b'I', b'D', b'3', _] => SoundFormat::Mp3,
            _ => SoundFormat::Unknown,
        }
    }
}
