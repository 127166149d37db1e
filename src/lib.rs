#![warn(missing_docs)]
//! EditViz - edit images with a natural-language instruction.
//!
//! Upload a JPEG or PNG, describe the change, and the image and instruction
//! are forwarded to a hosted image model. The reply may carry a description,
//! an edited image, both, or neither.
//!
//! # Quick Start
//!
//! ```no_run
//! use editviz::{Credential, GeminiEditor, RequestHandler, Submission};
//! use std::sync::Arc;
//!
//! #[tokio::main]
//! async fn main() -> editviz::Result<()> {
//!     let editor = GeminiEditor::builder().build()?;
//!     let handler = RequestHandler::new(Arc::new(editor))
//!         .with_fallback_credential(Credential::new("my-api-key"));
//!
//!     let result = handler
//!         .handle(Submission {
//!             api_key: None,
//!             image: Some(std::fs::read("photo.png")?),
//!             instruction: "Add a blur effect to the background".into(),
//!         })
//!         .await?;
//!
//!     if let Some(text) = &result.text {
//!         println!("{text}");
//!     }
//!     if let Some(image) = &result.image {
//!         image.save("edited.png")?;
//!     }
//!     Ok(())
//! }
//! ```
//!
//! # Features
//!
//! - `gemini`: Gemini (Google) editing backend
//! - `web`: single-page web UI served by axum
//! - `cli`: the `editviz` command-line interface

pub mod config;
mod error;
pub mod handler;
pub mod image;

#[cfg(feature = "web")]
pub mod web;

// Re-export error types at crate root
pub use error::{EditVizError, Result};

pub use config::Settings;
pub use handler::{Handled, RequestHandler, Submission};
pub use image::{
    Credential, EditRequest, EditedImage, EditorKind, ImageEditor, ImageFormat, RenderedResult,
    ResponsePart, SourceImage,
};

#[cfg(feature = "gemini")]
pub use image::providers::{GeminiEditor, GeminiEditorBuilder, GeminiModel};

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::error::{EditVizError, Result};
    pub use crate::handler::{RequestHandler, Submission};
    pub use crate::image::{Credential, ImageEditor, RenderedResult, ResponsePart};

    #[cfg(feature = "gemini")]
    pub use crate::image::providers::GeminiEditor;
}
