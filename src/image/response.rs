//! Response parts returned by an editor and the result shown to the user.

use crate::error::Result;
use crate::image::types::ImageFormat;
use std::path::Path;

/// An edited image returned inline by the service.
#[derive(Debug, Clone, PartialEq, Eq)]
#[must_use = "edited image should be saved or rendered"]
pub struct EditedImage {
    /// Raw image bytes.
    pub data: Vec<u8>,
    /// Image format.
    pub format: ImageFormat,
    /// Model that produced the image.
    pub model: Option<String>,
}

impl EditedImage {
    /// Creates a new edited image.
    pub fn new(data: Vec<u8>, format: ImageFormat) -> Self {
        Self {
            data,
            format,
            model: None,
        }
    }

    /// Records the model that produced this image.
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = Some(model.into());
        self
    }

    /// Returns the size of the image data in bytes.
    pub fn size(&self) -> usize {
        self.data.len()
    }

    /// Saves the image to the specified path.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        std::fs::write(path, &self.data)?;
        Ok(())
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

/// One unit of a multi-part model response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResponsePart {
    /// A span of text.
    Text(String),
    /// Inline binary image data.
    Image(EditedImage),
}

/// The text and image extracted from a response.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RenderedResult {
    /// Description of the modification, if the service sent one.
    pub text: Option<String>,
    /// The edited image, if the service sent one.
    pub image: Option<EditedImage>,
}

impl RenderedResult {
    /// Folds response parts in service order.
    ///
    /// A later part of the same kind replaces an earlier one: only the last
    /// text and the last image survive. Parts are never concatenated.
    pub fn from_parts(parts: impl IntoIterator<Item = ResponsePart>) -> Self {
        let mut result = Self::default();
        for part in parts {
            match part {
                ResponsePart::Text(text) => result.text = Some(text),
                ResponsePart::Image(image) => result.image = Some(image),
            }
        }
        result
    }

    /// Returns true if neither text nor image was returned.
    pub fn is_empty(&self) -> bool {
        self.text.is_none() && self.image.is_none()
    }
}
