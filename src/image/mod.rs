//! Image editing module.

mod editor;
pub mod providers;
mod response;
pub(crate) mod types;

pub use editor::ImageEditor;
pub use response::{EditedImage, RenderedResult, ResponsePart};
pub use types::{Credential, EditRequest, EditorKind, ImageFormat, SourceImage};
