//! Core input types for image editing.

use crate::error::{EditVizError, Result};
use serde::{Deserialize, Serialize};

/// Image formats understood by the editor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ImageFormat {
    /// PNG format (lossless).
    #[default]
    Png,
    /// JPEG format (lossy).
    Jpeg,
    /// WebP format. Only ever produced by the service, never accepted as upload.
    WebP,
}

impl ImageFormat {
    /// Returns the file extension for this format.
    pub fn extension(&self) -> &'static str {
        match self {
            Self::Png => "png",
            Self::Jpeg => "jpg",
            Self::WebP => "webp",
        }
    }

    /// Returns the MIME type for this format.
    pub fn mime_type(&self) -> &'static str {
        match self {
            Self::Png => "image/png",
            Self::Jpeg => "image/jpeg",
            Self::WebP => "image/webp",
        }
    }

    /// Maps a MIME type to a format.
    pub fn from_mime_type(mime: &str) -> Option<Self> {
        match mime.to_ascii_lowercase().as_str() {
            "image/png" => Some(Self::Png),
            "image/jpeg" | "image/jpg" => Some(Self::Jpeg),
            "image/webp" => Some(Self::WebP),
            _ => None,
        }
    }

    /// Detects image format from magic bytes.
    pub fn from_magic_bytes(data: &[u8]) -> Option<Self> {
        if data.starts_with(&[0x89, 0x50, 0x4E, 0x47, 0x0D, 0x0A, 0x1A, 0x0A]) {
            return Some(Self::Png);
        }
        if data.starts_with(&[0xFF, 0xD8, 0xFF]) {
            return Some(Self::Jpeg);
        }
        if data.len() >= 12 && data.starts_with(b"RIFF") && &data[8..12] == b"WEBP" {
            return Some(Self::WebP);
        }
        None
    }

    /// Returns true if uploads in this format are accepted.
    pub fn is_uploadable(&self) -> bool {
        matches!(self, Self::Png | Self::Jpeg)
    }
}

/// Image editing backend kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EditorKind {
    /// Google Gemini image models.
    Gemini,
}

impl std::fmt::Display for EditorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Gemini => write!(f, "gemini"),
        }
    }
}

/// API key authorizing calls to the editing service.
///
/// Never printed: `Debug` is redacted.
#[derive(Clone, PartialEq, Eq)]
pub struct Credential(String);

impl Credential {
    /// Builds a credential from user or environment input.
    ///
    /// Returns `None` for blank input, which counts as "no credential".
    pub fn new(key: impl AsRef<str>) -> Option<Self> {
        let key = key.as_ref().trim();
        if key.is_empty() {
            None
        } else {
            Some(Self(key.to_string()))
        }
    }

    /// Returns the raw key for use in request headers.
    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Debug for Credential {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("Credential(***)")
    }
}

/// An uploaded JPEG or PNG image.
#[derive(Debug, Clone)]
pub struct SourceImage {
    data: Vec<u8>,
    format: ImageFormat,
}

impl SourceImage {
    /// Validates uploaded bytes.
    ///
    /// Empty data is reported as [`EditVizError::MissingImage`]; anything that
    /// is not JPEG or PNG is an invalid request.
    pub fn from_bytes(data: Vec<u8>) -> Result<Self> {
        if data.is_empty() {
            return Err(EditVizError::MissingImage);
        }
        match ImageFormat::from_magic_bytes(&data) {
            Some(format) if format.is_uploadable() => Ok(Self { data, format }),
            _ => Err(EditVizError::InvalidRequest(
                "unsupported image format, upload a JPEG or PNG".into(),
            )),
        }
    }

    /// Returns the raw image bytes.
    pub fn data(&self) -> &[u8] {
        &self.data
    }

    /// Returns the detected format.
    pub fn format(&self) -> ImageFormat {
        self.format
    }

    /// Returns the size of the image in bytes.
    pub fn size(&self) -> usize {
        self.data.len()
    }

    /// Encodes the image data as base64.
    pub fn to_base64(&self) -> String {
        use base64::Engine;
        base64::engine::general_purpose::STANDARD.encode(&self.data)
    }

    /// Returns the image as a data URL.
    pub fn to_data_url(&self) -> String {
        format!("data:{};base64,{}", self.format.mime_type(), self.to_base64())
    }
}

/// A validated request to edit one image.
#[derive(Debug, Clone)]
pub struct EditRequest {
    /// Free-text description of the desired edit. May be empty.
    pub instruction: String,
    /// The image to edit.
    pub image: SourceImage,
}

impl EditRequest {
    /// Creates a new edit request.
    pub fn new(instruction: impl Into<String>, image: SourceImage) -> Self {
        Self {
            instruction: instruction.into(),
            image,
        }
    }
}
