//! Gemini (Google) image editing backend.

use crate::error::{parse_retry_after, sanitize_error_message, EditVizError, Result};
use crate::image::editor::ImageEditor;
use crate::image::response::{EditedImage, ResponsePart};
use crate::image::types::{Credential, EditRequest, EditorKind, ImageFormat};
use async_trait::async_trait;
use base64::Engine;
use serde::{Deserialize, Serialize};
use std::time::Instant;

/// Public Gemini API endpoint.
pub const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com";

/// Gemini image model variants.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum GeminiModel {
    /// Gemini 2.0 Flash experimental image generation.
    #[default]
    FlashExp,
    /// Nano Banana - Gemini 2.5 Flash Image (fast, economical).
    NanoBanana,
    /// Nano Banana Pro - Gemini 3 Pro Image (highest quality).
    NanoBananaPro,
    /// Any other model id, passed through verbatim.
    Custom(String),
}

impl GeminiModel {
    /// Returns the API model identifier.
    pub fn as_str(&self) -> &str {
        match self {
            Self::FlashExp => "gemini-2.0-flash-exp-image-generation",
            Self::NanoBanana => "gemini-2.5-flash-image",
            Self::NanoBananaPro => "nano-banana-pro-preview",
            Self::Custom(id) => id,
        }
    }
}

impl std::str::FromStr for GeminiModel {
    type Err = EditVizError;

    fn from_str(s: &str) -> Result<Self> {
        let s = s.trim();
        match s {
            "" => Err(EditVizError::InvalidRequest("model id is empty".into())),
            "gemini-2.0-flash-exp-image-generation" | "flash-exp" => Ok(Self::FlashExp),
            "gemini-2.5-flash-image" | "nano-banana" => Ok(Self::NanoBanana),
            "nano-banana-pro-preview" | "nano-banana-pro" => Ok(Self::NanoBananaPro),
            other => Ok(Self::Custom(other.to_string())),
        }
    }
}

impl std::fmt::Display for GeminiModel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Builder for GeminiEditor.
#[derive(Debug, Clone, Default)]
pub struct GeminiEditorBuilder {
    model: GeminiModel,
    base_url: Option<String>,
}

impl GeminiEditorBuilder {
    /// Creates a new builder with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the Gemini model variant.
    pub fn model(mut self, model: GeminiModel) -> Self {
        self.model = model;
        self
    }

    /// Overrides the API base URL (defaults to [`DEFAULT_BASE_URL`]).
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = Some(url.into());
        self
    }

    /// Builds the editor.
    pub fn build(self) -> Result<GeminiEditor> {
        let base_url = self
            .base_url
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string())
            .trim_end_matches('/')
            .to_string();

        Ok(GeminiEditor {
            client: reqwest::Client::builder().build()?,
            base_url,
            model: self.model,
        })
    }
}

/// Gemini image editing backend.
pub struct GeminiEditor {
    client: reqwest::Client,
    base_url: String,
    model: GeminiModel,
}

impl GeminiEditor {
    /// Creates a new `GeminiEditorBuilder`.
    pub fn builder() -> GeminiEditorBuilder {
        GeminiEditorBuilder::new()
    }

    /// Returns the configured model.
    pub fn model(&self) -> &GeminiModel {
        &self.model
    }

    async fn edit_impl(
        &self,
        credential: &Credential,
        request: &EditRequest,
    ) -> Result<Vec<ResponsePart>> {
        let start = Instant::now();

        let url = format!(
            "{}/v1beta/models/{}:generateContent",
            self.base_url,
            self.model.as_str(),
        );

        let body = GeminiRequest::from_edit_request(request);

        let response = self
            .client
            .post(&url)
            .header("x-goog-api-key", credential.expose())
            .header("Content-Type", "application/json")
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let headers = response.headers().clone();
            let text = response.text().await.unwrap_or_default();
            return Err(self.parse_error(status.as_u16(), &text, &headers));
        }

        let gemini_response: GeminiResponse = response.json().await?;
        let parts = self.extract_parts(gemini_response)?;

        tracing::debug!(
            model = self.model.as_str(),
            parts = parts.len(),
            duration_ms = start.elapsed().as_millis() as u64,
            "gemini edit completed"
        );

        Ok(parts)
    }

    fn extract_parts(&self, response: GeminiResponse) -> Result<Vec<ResponsePart>> {
        // Prompt blocks arrive as HTTP 200 with no candidates.
        if let Some(ref feedback) = response.prompt_feedback {
            if let Some(ref reason) = feedback.block_reason {
                let msg = feedback
                    .block_reason_message
                    .clone()
                    .unwrap_or_else(|| format!("Prompt blocked: {}", reason));
                return Err(EditVizError::ContentBlocked(msg));
            }
        }

        let candidate = response.candidates.into_iter().next().ok_or_else(|| {
            EditVizError::UnexpectedResponse("No candidates in Gemini response".into())
        })?;

        if let Some(ref finish_reason) = candidate.finish_reason {
            match finish_reason.as_str() {
                "SAFETY"
                | "IMAGE_SAFETY"
                | "IMAGE_PROHIBITED_CONTENT"
                | "IMAGE_RECITATION"
                | "RECITATION"
                | "PROHIBITED_CONTENT"
                | "BLOCKLIST" => {
                    return Err(EditVizError::ContentBlocked(format!(
                        "Content blocked by Gemini safety filter: {}",
                        finish_reason
                    )));
                }
                "IMAGE_OTHER" | "NO_IMAGE" => {
                    return Err(EditVizError::UnexpectedResponse(format!(
                        "Generation failed: {}. Try a different prompt.",
                        finish_reason
                    )));
                }
                _ => {}
            }
        }

        // Only an explicit empty `parts` list is a valid empty reply.
        let content = candidate.content.ok_or_else(|| {
            EditVizError::UnexpectedResponse("No content in Gemini candidate".into())
        })?;
        let response_parts = content.parts.ok_or_else(|| {
            EditVizError::UnexpectedResponse("No parts in Gemini content".into())
        })?;

        let mut parts = Vec::with_capacity(response_parts.len());
        for part in response_parts {
            if part.thought {
                continue;
            }
            // Text wins over inline data within one part.
            if let Some(text) = part.text.filter(|t| !t.is_empty()) {
                parts.push(ResponsePart::Text(text));
            } else if let Some(inline) = part.inline_data {
                parts.push(ResponsePart::Image(self.decode_inline(inline)?));
            }
        }
        Ok(parts)
    }

    fn decode_inline(&self, inline: InlineData) -> Result<EditedImage> {
        let data = base64::engine::general_purpose::STANDARD
            .decode(inline.data.trim())
            .map_err(|e| EditVizError::Decode(e.to_string()))?;

        // The bytes decide the format; the declared MIME type is not trusted.
        let format = ImageFormat::from_magic_bytes(&data)
            .ok_or_else(|| EditVizError::Decode("inline data is not an image".into()))?;
        if ImageFormat::from_mime_type(&inline.mime_type) != Some(format) {
            tracing::debug!(
                declared = %inline.mime_type,
                detected = format.mime_type(),
                "inline image MIME type does not match its bytes"
            );
        }

        Ok(EditedImage::new(data, format).with_model(self.model.as_str()))
    }

    fn parse_error(
        &self,
        status: u16,
        text: &str,
        headers: &reqwest::header::HeaderMap,
    ) -> EditVizError {
        let text = sanitize_error_message(text);
        if status == 402 {
            return EditVizError::Billing(
                "Gemini billing issue: enable billing at https://aistudio.google.com".into(),
            );
        }
        if status == 404 {
            return EditVizError::InvalidRequest(format!(
                "Model '{}' not found. Verify the model name is correct.",
                self.model
            ));
        }
        if status == 429 {
            let retry_after = parse_retry_after(headers).map(std::time::Duration::from_secs);
            return EditVizError::RateLimited { retry_after };
        }
        if status == 401 || status == 403 {
            return EditVizError::Auth(text);
        }
        let lower = text.to_lowercase();
        if lower.contains("safety")
            || lower.contains("blocked")
            || lower.contains("prohibited")
        {
            return EditVizError::ContentBlocked(text);
        }
        EditVizError::Api {
            status,
            message: text,
        }
    }
}

#[async_trait]
impl ImageEditor for GeminiEditor {
    async fn edit(
        &self,
        credential: &Credential,
        request: &EditRequest,
    ) -> Result<Vec<ResponsePart>> {
        self.edit_impl(credential, request).await
    }

    fn kind(&self) -> EditorKind {
        EditorKind::Gemini
    }

    async fn health_check(&self, credential: &Credential) -> Result<()> {
        let url = format!("{}/v1beta/models/{}", self.base_url, self.model.as_str());

        let response = self
            .client
            .get(&url)
            .header("x-goog-api-key", credential.expose())
            .send()
            .await?;

        match response.status().as_u16() {
            401 | 403 => Err(EditVizError::Auth("Invalid API key".into())),
            404 => Err(EditVizError::InvalidRequest(format!(
                "Model '{}' not found. Verify the model name is correct.",
                self.model
            ))),
            s if !(200..300).contains(&s) => Err(EditVizError::Api {
                status: s,
                message: "Health check failed".into(),
            }),
            _ => Ok(()),
        }
    }
}

// Request/Response types
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GeminiRequest {
    contents: Vec<GeminiContent>,
    generation_config: GeminiConfig,
}

#[derive(Debug, Serialize)]
struct GeminiContent {
    parts: Vec<GeminiRequestPart>,
}

#[derive(Debug, Serialize)]
#[serde(untagged)]
enum GeminiRequestPart {
    Text {
        text: String,
    },
    InlineData {
        #[serde(rename = "inlineData")]
        inline_data: GeminiInlineData,
    },
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GeminiInlineData {
    mime_type: String,
    data: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GeminiConfig {
    response_modalities: Vec<String>,
}

impl GeminiRequest {
    fn from_edit_request(req: &EditRequest) -> Self {
        // Instruction first, then the image.
        let parts = vec![
            GeminiRequestPart::Text {
                text: req.instruction.clone(),
            },
            GeminiRequestPart::InlineData {
                inline_data: GeminiInlineData {
                    mime_type: req.image.format().mime_type().to_string(),
                    data: req.image.to_base64(),
                },
            },
        ];

        Self {
            contents: vec![GeminiContent { parts }],
            generation_config: GeminiConfig {
                response_modalities: vec!["TEXT".to_string(), "IMAGE".to_string()],
            },
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct GeminiResponse {
    #[serde(default)]
    candidates: Vec<GeminiCandidate>,
    #[serde(default)]
    prompt_feedback: Option<PromptFeedback>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct GeminiCandidate {
    #[serde(default)]
    content: Option<GeminiContentResponse>,
    #[serde(default)]
    finish_reason: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct PromptFeedback {
    #[serde(default)]
    block_reason: Option<String>,
    #[serde(default)]
    block_reason_message: Option<String>,
}

#[derive(Debug, Deserialize)]
struct GeminiContentResponse {
    #[serde(default)]
    parts: Option<Vec<GeminiPartResponse>>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct GeminiPartResponse {
    #[serde(default)]
    text: Option<String>,
    #[serde(default)]
    inline_data: Option<InlineData>,
    #[serde(default)]
    thought: bool,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct InlineData {
    #[serde(default)]
    mime_type: String,
    data: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::image::types::tests::{JPEG_BYTES, PNG_BYTES};
    use httpmock::prelude::*;
    use serde_json::json;

    const EDIT_PATH: &str = "/v1beta/models/gemini-2.0-flash-exp-image-generation:generateContent";

    fn credential() -> Credential {
        Credential::new("test-key").unwrap()
    }

    fn request() -> EditRequest {
        let image = crate::image::SourceImage::from_bytes(PNG_BYTES.to_vec()).unwrap();
        EditRequest::new("Make it red", image)
    }

    fn editor(server: &MockServer) -> GeminiEditor {
        GeminiEditor::builder()
            .base_url(server.base_url())
            .build()
            .unwrap()
    }

    fn b64(data: &[u8]) -> String {
        base64::engine::general_purpose::STANDARD.encode(data)
    }

    #[test]
    fn test_gemini_model_as_str() {
        assert_eq!(
            GeminiModel::FlashExp.as_str(),
            "gemini-2.0-flash-exp-image-generation"
        );
        assert_eq!(GeminiModel::NanoBanana.as_str(), "gemini-2.5-flash-image");
        assert_eq!(
            GeminiModel::NanoBananaPro.as_str(),
            "nano-banana-pro-preview"
        );
        assert_eq!(GeminiModel::default(), GeminiModel::FlashExp);
    }

    #[test]
    fn test_gemini_model_from_str() {
        assert_eq!(
            "nano-banana".parse::<GeminiModel>().unwrap(),
            GeminiModel::NanoBanana
        );
        assert_eq!(
            "gemini-2.0-flash-exp-image-generation"
                .parse::<GeminiModel>()
                .unwrap(),
            GeminiModel::FlashExp
        );
        assert_eq!(
            "my-model".parse::<GeminiModel>().unwrap(),
            GeminiModel::Custom("my-model".into())
        );
        assert!("  ".parse::<GeminiModel>().is_err());
    }

    #[test]
    fn test_request_puts_instruction_before_image() {
        let gemini_req = GeminiRequest::from_edit_request(&request());
        let json = serde_json::to_value(&gemini_req).unwrap();

        let parts = &json["contents"][0]["parts"];
        assert_eq!(parts[0]["text"], "Make it red");
        assert_eq!(parts[1]["inlineData"]["mimeType"], "image/png");
        assert_eq!(parts[1]["inlineData"]["data"], b64(&PNG_BYTES));
        assert_eq!(
            json["generationConfig"]["responseModalities"],
            json!(["TEXT", "IMAGE"])
        );
        assert!(json.get("generation_config").is_none());
    }

    #[test]
    fn test_request_uses_jpeg_mime_type() {
        let image = crate::image::SourceImage::from_bytes(JPEG_BYTES.to_vec()).unwrap();
        let gemini_req = GeminiRequest::from_edit_request(&EditRequest::new("", image));
        let json = serde_json::to_value(&gemini_req).unwrap();
        assert_eq!(
            json["contents"][0]["parts"][1]["inlineData"]["mimeType"],
            "image/jpeg"
        );
    }

    #[tokio::test]
    async fn test_edit_returns_parts_in_order() {
        let server = MockServer::start_async().await;
        let mock = server
            .mock_async(|when, then| {
                when.method(POST)
                    .path(EDIT_PATH)
                    .header("x-goog-api-key", "test-key")
                    .body_includes("\"responseModalities\":[\"TEXT\",\"IMAGE\"]");
                then.status(200)
                    .header("content-type", "application/json")
                    .json_body(json!({
                        "candidates": [{
                            "content": {
                                "parts": [
                                    { "text": "Changed the shirt to red." },
                                    { "inlineData": { "mimeType": "image/png", "data": b64(&PNG_BYTES) } }
                                ]
                            },
                            "finishReason": "STOP"
                        }]
                    }));
            })
            .await;

        let parts = editor(&server).edit(&credential(), &request()).await.unwrap();
        mock.assert_async().await;

        assert_eq!(parts.len(), 2);
        assert_eq!(parts[0], ResponsePart::Text("Changed the shirt to red.".into()));
        match &parts[1] {
            ResponsePart::Image(image) => {
                assert_eq!(image.data, PNG_BYTES.to_vec());
                assert_eq!(image.format, ImageFormat::Png);
                assert_eq!(
                    image.model.as_deref(),
                    Some("gemini-2.0-flash-exp-image-generation")
                );
            }
            other => panic!("expected image part, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_edit_skips_empty_and_thought_parts() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(POST).path(EDIT_PATH);
                then.status(200).json_body(json!({
                    "candidates": [{
                        "content": {
                            "parts": [
                                {},
                                { "text": "" },
                                { "text": "thinking...", "thought": true },
                                { "text": "final" }
                            ]
                        }
                    }]
                }));
            })
            .await;

        let parts = editor(&server).edit(&credential(), &request()).await.unwrap();
        assert_eq!(parts, vec![ResponsePart::Text("final".into())]);
    }

    #[tokio::test]
    async fn test_edit_with_empty_parts_returns_no_parts() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(POST).path(EDIT_PATH);
                then.status(200).json_body(json!({
                    "candidates": [{ "content": { "parts": [] }, "finishReason": "STOP" }]
                }));
            })
            .await;

        let parts = editor(&server).edit(&credential(), &request()).await.unwrap();
        assert!(parts.is_empty());
    }

    #[tokio::test]
    async fn test_edit_candidate_without_content_is_unexpected() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(POST).path(EDIT_PATH);
                then.status(200)
                    .json_body(json!({ "candidates": [{ "finishReason": "STOP" }] }));
            })
            .await;

        let err = editor(&server)
            .edit(&credential(), &request())
            .await
            .unwrap_err();
        assert_eq!(
            err.to_string(),
            "unexpected response: No content in Gemini candidate"
        );
    }

    #[tokio::test]
    async fn test_edit_content_without_parts_is_unexpected() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(POST).path(EDIT_PATH);
                then.status(200).json_body(json!({
                    "candidates": [{ "content": {}, "finishReason": "STOP" }]
                }));
            })
            .await;

        let err = editor(&server)
            .edit(&credential(), &request())
            .await
            .unwrap_err();
        assert_eq!(
            err.to_string(),
            "unexpected response: No parts in Gemini content"
        );
    }

    #[tokio::test]
    async fn test_edit_no_image_finish_reasons_are_unexpected() {
        for reason in ["NO_IMAGE", "IMAGE_OTHER"] {
            let server = MockServer::start_async().await;
            server
                .mock_async(|when, then| {
                    when.method(POST).path(EDIT_PATH);
                    then.status(200).json_body(json!({
                        "candidates": [{ "content": { "parts": [] }, "finishReason": reason }]
                    }));
                })
                .await;

            let err = editor(&server)
                .edit(&credential(), &request())
                .await
                .unwrap_err();
            assert!(matches!(err, EditVizError::UnexpectedResponse(_)), "{reason}");
            assert!(err.to_string().contains(reason));
        }
    }

    #[tokio::test]
    async fn test_edit_without_candidates_is_unexpected() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(POST).path(EDIT_PATH);
                then.status(200).json_body(json!({ "candidates": [] }));
            })
            .await;

        let err = editor(&server)
            .edit(&credential(), &request())
            .await
            .unwrap_err();
        assert!(matches!(err, EditVizError::UnexpectedResponse(_)));
    }

    #[tokio::test]
    async fn test_edit_prompt_feedback_block() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(POST).path(EDIT_PATH);
                then.status(200).json_body(json!({
                    "candidates": [],
                    "promptFeedback": {
                        "blockReason": "SAFETY",
                        "blockReasonMessage": "Prompt was blocked due to safety"
                    }
                }));
            })
            .await;

        let err = editor(&server)
            .edit(&credential(), &request())
            .await
            .unwrap_err();
        assert_eq!(
            err.to_string(),
            "content blocked: Prompt was blocked due to safety"
        );
    }

    #[tokio::test]
    async fn test_edit_safety_finish_reason() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(POST).path(EDIT_PATH);
                then.status(200)
                    .json_body(json!({ "candidates": [{ "finishReason": "IMAGE_SAFETY" }] }));
            })
            .await;

        let err = editor(&server)
            .edit(&credential(), &request())
            .await
            .unwrap_err();
        assert!(matches!(err, EditVizError::ContentBlocked(_)));
    }

    #[tokio::test]
    async fn test_edit_bad_base64_is_decode_error() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(POST).path(EDIT_PATH);
                then.status(200).json_body(json!({
                    "candidates": [{
                        "content": {
                            "parts": [{ "inlineData": { "mimeType": "image/png", "data": "!!not base64!!" } }]
                        }
                    }]
                }));
            })
            .await;

        let err = editor(&server)
            .edit(&credential(), &request())
            .await
            .unwrap_err();
        assert!(matches!(err, EditVizError::Decode(_)));
    }

    #[tokio::test]
    async fn test_edit_non_image_inline_data_is_decode_error() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(POST).path(EDIT_PATH);
                then.status(200).json_body(json!({
                    "candidates": [{
                        "content": {
                            "parts": [{
                                "inlineData": {
                                    "mimeType": "application/octet-stream",
                                    "data": b64(b"hello, not an image")
                                }
                            }]
                        }
                    }]
                }));
            })
            .await;

        let err = editor(&server)
            .edit(&credential(), &request())
            .await
            .unwrap_err();
        assert!(matches!(err, EditVizError::Decode(_)));
        assert_eq!(err.to_string(), "failed to decode: inline data is not an image");
    }

    #[tokio::test]
    async fn test_edit_maps_http_errors() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(POST).path(EDIT_PATH).header("x-goog-api-key", "bad");
                then.status(403).body("API key AIzaSyBADKEY123 not valid");
            })
            .await;
        server
            .mock_async(|when, then| {
                when.method(POST).path(EDIT_PATH).header("x-goog-api-key", "busy");
                then.status(429).header("retry-after", "12").body("slow down");
            })
            .await;
        server
            .mock_async(|when, then| {
                when.method(POST).path(EDIT_PATH).header("x-goog-api-key", "test-key");
                then.status(500).body("internal");
            })
            .await;

        let editor = editor(&server);

        let err = editor
            .edit(&Credential::new("bad").unwrap(), &request())
            .await
            .unwrap_err();
        match err {
            EditVizError::Auth(msg) => {
                assert!(!msg.contains("AIzaSyBADKEY123"));
                assert!(msg.contains("[REDACTED]"));
            }
            other => panic!("expected auth error, got {other:?}"),
        }

        let err = editor
            .edit(&Credential::new("busy").unwrap(), &request())
            .await
            .unwrap_err();
        assert_eq!(
            err.retry_after(),
            Some(std::time::Duration::from_secs(12))
        );

        let err = editor.edit(&credential(), &request()).await.unwrap_err();
        assert_eq!(err.to_string(), "API error: 500 - internal");
    }

    #[tokio::test]
    async fn test_health_check() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(GET)
                    .path("/v1beta/models/gemini-2.5-flash-image")
                    .header("x-goog-api-key", "test-key");
                then.status(200).json_body(json!({ "name": "models/gemini-2.5-flash-image" }));
            })
            .await;
        server
            .mock_async(|when, then| {
                when.method(GET)
                    .path("/v1beta/models/gemini-2.5-flash-image")
                    .header("x-goog-api-key", "wrong");
                then.status(401);
            })
            .await;

        let editor = GeminiEditor::builder()
            .base_url(format!("{}/", server.base_url()))
            .model(GeminiModel::NanoBanana)
            .build()
            .unwrap();

        assert!(editor.health_check(&credential()).await.is_ok());
        let err = editor
            .health_check(&Credential::new("wrong").unwrap())
            .await
            .unwrap_err();
        assert!(matches!(err, EditVizError::Auth(_)));
    }
}
