//! Image editor trait.

use crate::error::Result;
use crate::image::response::ResponsePart;
use crate::image::types::{Credential, EditRequest, EditorKind};
use async_trait::async_trait;

/// Trait for image editing backends.
///
/// The credential is passed per call so one editor can serve many users.
#[async_trait]
pub trait ImageEditor: Send + Sync {
    /// Sends one edit request and returns the response parts in service order.
    async fn edit(
        &self,
        credential: &Credential,
        request: &EditRequest,
    ) -> Result<Vec<ResponsePart>>;

    /// Returns the kind of this editor.
    fn kind(&self) -> EditorKind;

    /// Returns the name of this editor for display.
    fn name(&self) -> &str {
        match self.kind() {
            EditorKind::Gemini => "Gemini (Google)",
        }
    }

    /// Checks if the service is reachable and the credential is accepted.
    async fn health_check(&self, credential: &Credential) -> Result<()>;
}
