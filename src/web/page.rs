//! Server-rendered HTML for the single editor page.

use crate::error::EditVizError;
use crate::image::{RenderedResult, SourceImage};

const PROMPT_IDEAS: &str = "Try: Change the color of clothes to red.
Try: Remove background from image.
Try: Add a blur effect to the background.
Try: Make the image look vintage or black & white.";

const STYLE: &str = r#"
body { font-family: sans-serif; margin: 0; display: flex; }
aside { width: 260px; min-height: 100vh; padding: 1.5rem; background: #f0f2f6; box-sizing: border-box; }
main { flex: 1; max-width: 800px; margin: auto; padding: 1.5rem; }
header, footer { text-align: center; }
h1 { color: #FF4B4B; }
.columns { display: flex; gap: 1rem; }
.columns figure { flex: 1; margin: 0; }
.columns img { width: 100%; }
.warning { background: #fffbe6; padding: .5rem; border-radius: 4px; }
.error { background: #ffe6e6; color: #a00; padding: .75rem; border-radius: 4px; }
pre.ideas { background: #f6f8fa; padding: 1rem; }
textarea { width: 100%; min-height: 6rem; }
button { width: 100%; padding: .75rem; font-size: 1rem; }
#result-text { white-space: pre-wrap; }
"#;

/// Everything the page shows for one render.
#[derive(Debug, Default)]
pub struct PageView<'a> {
    /// Whether a credential is configured server-side.
    pub has_fallback_credential: bool,
    /// Instruction to pre-fill the textarea with.
    pub instruction: &'a str,
    /// The uploaded image, shown in the left column.
    pub uploaded: Option<&'a SourceImage>,
    /// Result of a successful edit.
    pub result: Option<&'a RenderedResult>,
    /// Failure of the last submit. Suppresses any result.
    pub error: Option<&'a EditVizError>,
}

/// Escapes text for use in HTML content and attribute values.
pub fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

/// The message shown for a failed submit.
pub fn error_message(err: &EditVizError) -> String {
    if err.is_precondition() {
        format!("❌ {err}")
    } else {
        format!("❌ Error: {err}")
    }
}

/// Renders the full page.
pub fn render(view: &PageView<'_>) -> String {
    let mut html = String::with_capacity(8 * 1024);
    html.push_str(&format!(
        "<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n<meta charset=\"utf-8\">\n\
         <title>AI Image Editor</title>\n<style>{STYLE}</style>\n</head>\n<body>\n\
         <form method=\"post\" action=\"/edit\" enctype=\"multipart/form-data\" style=\"display:contents\">\n"
    ));

    render_sidebar(&mut html, view.has_fallback_credential);

    html.push_str("<main>\n<header>\n<h1>🎨 AI-Powered Image Editor</h1>\n");
    html.push_str(
        "<p>Upload an image and describe how you want it modified!</p>\n<hr>\n</header>\n",
    );

    html.push_str("<h3>📤 Upload an Image</h3>\n");
    html.push_str(
        "<label>Choose an image (JPG/PNG) \
         <input type=\"file\" name=\"image\" accept=\"image/jpeg,image/png,.jpg,.jpeg,.png\"></label>\n",
    );

    // A failed edit shows no result, only the message.
    let result = if view.error.is_some() { None } else { view.result };
    render_columns(&mut html, view.uploaded, result);

    html.push_str(&format!(
        "<h3>💡 Prompt Ideas</h3>\n<pre class=\"ideas\">{}</pre>\n",
        html_escape(PROMPT_IDEAS)
    ));
    html.push_str(&format!(
        "<h3>📝 Describe the Modification</h3>\n\
         <label for=\"instruction\">Enter your prompt:</label>\n\
         <textarea id=\"instruction\" name=\"instruction\" \
         placeholder=\"E.g., Change background to white or Add a blur effect to the background...\">{}</textarea>\n\
         <br>\n<button type=\"submit\">✨ Generate Image</button>\n",
        html_escape(view.instruction)
    ));

    if let Some(err) = view.error {
        html.push_str(&format!(
            "<div class=\"error\" role=\"alert\">{}</div>\n",
            html_escape(&error_message(err))
        ));
    }

    if let Some(text) = result.and_then(|r| r.text.as_deref()) {
        html.push_str(&format!(
            "<hr>\n<h3>📝 Description of Modification</h3>\n<div id=\"result-text\">{}</div>\n",
            html_escape(text)
        ));
    }

    html.push_str(
        "<footer>\n<hr>\n<p style=\"font-size: 14px;\">Developed with ❤️</p>\n</footer>\n</main>\n</form>\n</body>\n</html>\n",
    );
    html
}

fn render_sidebar(html: &mut String, has_fallback_credential: bool) {
    html.push_str(
        "<aside>\n<h2>🔑 Settings</h2>\n<p>Enter your API key to use the service.</p>\n",
    );
    html.push_str(
        "<label>Gemini API Key <input type=\"password\" name=\"api_key\" autocomplete=\"off\"></label>\n",
    );
    if !has_fallback_credential {
        html.push_str("<p class=\"warning\">⚠️ Please enter a valid API key to proceed.</p>\n");
    }
    html.push_str("</aside>\n");
}

fn render_columns(
    html: &mut String,
    uploaded: Option<&SourceImage>,
    result: Option<&RenderedResult>,
) {
    let edited = result.and_then(|r| r.image.as_ref());
    if uploaded.is_none() && edited.is_none() {
        return;
    }

    html.push_str("<div class=\"columns\">\n");
    match uploaded {
        Some(image) => {
            html.push_str(&format!(
                "<figure><img id=\"uploaded-image\" src=\"{}\" alt=\"Uploaded image\">\
                 <figcaption>📸 Uploaded Image</figcaption></figure>\n",
                image.to_data_url()
            ));
        }
        None => html.push_str("<figure></figure>\n"),
    }
    if let Some(image) = edited {
        html.push_str(&format!(
            "<figure><img id=\"result-image\" src=\"{}\" alt=\"Modified image\">\
             <figcaption>🎨 Modified Image</figcaption></figure>\n",
            image.to_data_url()
        ));
    }
    html.push_str("</div>\n");
}
