//! Web UI: one page, one submit route.

pub mod page;

use crate::error::{EditVizError, Result};
use crate::handler::{RequestHandler, Submission};
use axum::extract::{DefaultBodyLimit, Multipart, State};
use axum::http::StatusCode;
use axum::response::Html;
use axum::routing::{get, post};
use axum::Router;
use page::PageView;
use std::net::SocketAddr;
use tower_http::trace::TraceLayer;

#[derive(Clone)]
struct AppState {
    handler: RequestHandler,
}

/// Builds the router for the editor page.
pub fn router(handler: RequestHandler, max_upload_bytes: usize) -> Router {
    Router::new()
        .route("/", get(index))
        .route("/edit", post(edit))
        .route("/health", get(health))
        .layer(DefaultBodyLimit::max(max_upload_bytes))
        .layer(TraceLayer::new_for_http())
        .with_state(AppState { handler })
}

/// Serves the editor page until the process is stopped.
pub async fn serve(
    addr: SocketAddr,
    handler: RequestHandler,
    max_upload_bytes: usize,
) -> Result<()> {
    let app = router(handler, max_upload_bytes);
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!(%addr, "editviz listening");
    axum::serve(listener, app).await?;
    Ok(())
}

async fn health() -> &'static str {
    "ok"
}

async fn index(State(state): State<AppState>) -> Html<String> {
    Html(page::render(&PageView {
        has_fallback_credential: state.handler.has_fallback_credential(),
        ..Default::default()
    }))
}

async fn edit(State(state): State<AppState>, multipart: Multipart) -> (StatusCode, Html<String>) {
    let has_fallback_credential = state.handler.has_fallback_credential();

    let submission = match read_submission(multipart).await {
        Ok(s) => s,
        Err(e) => {
            let html = page::render(&PageView {
                has_fallback_credential,
                error: Some(&e),
                ..Default::default()
            });
            return (status_for(&e), Html(html));
        }
    };

    let instruction = submission.instruction.clone();

    let handled = state.handler.submit(submission).await;
    let (status, result, error) = match &handled.outcome {
        Ok(result) => (StatusCode::OK, Some(result), None),
        Err(e) => (status_for(e), None, Some(e)),
    };

    let html = page::render(&PageView {
        has_fallback_credential,
        instruction: &instruction,
        uploaded: handled.source.as_ref(),
        result,
        error,
    });
    (status, Html(html))
}

/// Collects the three form fields. Unknown fields are ignored.
async fn read_submission(mut multipart: Multipart) -> Result<Submission> {
    let mut submission = Submission::default();

    while let Some(field) = multipart.next_field().await.map_err(bad_form)? {
        let name = field.name().unwrap_or_default().to_string();
        match name.as_str() {
            "api_key" => {
                submission.api_key = Some(field.text().await.map_err(bad_form)?);
            }
            "instruction" => {
                submission.instruction = field.text().await.map_err(bad_form)?;
            }
            "image" => {
                let bytes = field.bytes().await.map_err(bad_form)?;
                // Browsers send an empty part when no file was chosen.
                submission.image = (!bytes.is_empty()).then(|| bytes.to_vec());
            }
            _ => {}
        }
    }

    Ok(submission)
}

fn bad_form(e: axum::extract::multipart::MultipartError) -> EditVizError {
    EditVizError::InvalidRequest(e.body_text())
}

fn status_for(err: &EditVizError) -> StatusCode {
    match err {
        EditVizError::MissingCredential
        | EditVizError::MissingImage
        | EditVizError::InvalidRequest(_) => StatusCode::BAD_REQUEST,
        _ => StatusCode::BAD_GATEWAY,
    }
}
