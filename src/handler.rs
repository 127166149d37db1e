//! Submit handling: precondition checks, one editor call, result folding.

use crate::error::{EditVizError, Result};
use crate::image::{Credential, EditRequest, ImageEditor, RenderedResult, SourceImage};
use std::sync::Arc;

/// Raw inputs collected from one submit action.
#[derive(Debug, Clone, Default)]
pub struct Submission {
    /// Credential typed by the user. Blank means "not provided".
    pub api_key: Option<String>,
    /// Uploaded image bytes. Empty means "not provided".
    pub image: Option<Vec<u8>>,
    /// Edit instruction.
    pub instruction: String,
}

/// What one submit produced.
#[derive(Debug)]
pub struct Handled {
    /// The uploaded image, if it was a valid JPEG or PNG.
    pub source: Option<SourceImage>,
    /// The rendered result, or the single error to show.
    pub outcome: Result<RenderedResult>,
}

impl Handled {
    fn failed(err: EditVizError) -> Self {
        Self {
            source: None,
            outcome: Err(err),
        }
    }
}

/// Stateless handler run in full on every submit.
#[derive(Clone)]
pub struct RequestHandler {
    editor: Arc<dyn ImageEditor>,
    fallback_credential: Option<Credential>,
}

impl RequestHandler {
    /// Creates a handler around an editor.
    pub fn new(editor: Arc<dyn ImageEditor>) -> Self {
        Self {
            editor,
            fallback_credential: None,
        }
    }

    /// Sets the credential used when the submitted one is blank.
    pub fn with_fallback_credential(mut self, credential: Option<Credential>) -> Self {
        self.fallback_credential = credential;
        self
    }

    /// Returns true if submissions may omit the credential.
    pub fn has_fallback_credential(&self) -> bool {
        self.fallback_credential.is_some()
    }

    /// Validates a submission and runs the edit.
    ///
    /// The credential is checked before the image. Both checks happen before
    /// any network call. Service failures are returned as-is, never retried.
    pub async fn handle(&self, submission: Submission) -> Result<RenderedResult> {
        self.submit(submission).await.outcome
    }

    /// Like [`handle`](Self::handle), but also hands back the validated upload
    /// so a page can show it next to the outcome.
    pub async fn submit(&self, submission: Submission) -> Handled {
        let upload = submission.image.map(SourceImage::from_bytes);

        let credential = match self.resolve_credential(submission.api_key.as_deref()) {
            Ok(credential) => credential,
            Err(e) => {
                return Handled {
                    source: upload.and_then(|r| r.ok()),
                    outcome: Err(e),
                }
            }
        };

        let image = match upload {
            Some(Ok(image)) => image,
            Some(Err(e)) => return Handled::failed(e),
            None => return Handled::failed(EditVizError::MissingImage),
        };

        let request = EditRequest::new(submission.instruction, image);
        let outcome = self.run(&credential, &request).await;
        Handled {
            source: Some(request.image),
            outcome,
        }
    }

    /// Runs an already validated edit request.
    pub async fn run(
        &self,
        credential: &Credential,
        request: &EditRequest,
    ) -> Result<RenderedResult> {
        tracing::info!(
            editor = %self.editor.kind(),
            instruction_len = request.instruction.len(),
            image_bytes = request.image.size(),
            "submitting edit"
        );

        let parts = match self.editor.edit(credential, request).await {
            Ok(parts) => parts,
            Err(e) => {
                tracing::warn!("edit failed: {e}");
                return Err(e);
            }
        };

        tracing::debug!(parts = parts.len(), "received response parts");
        Ok(RenderedResult::from_parts(parts))
    }

    /// Picks the submitted credential, falling back to the configured one.
    pub fn resolve_credential(&self, submitted: Option<&str>) -> Result<Credential> {
        submitted
            .and_then(Credential::new)
            .or_else(|| self.fallback_credential.clone())
            .ok_or(EditVizError::MissingCredential)
    }
}
