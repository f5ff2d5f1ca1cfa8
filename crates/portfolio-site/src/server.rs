/// HTTP surface of the portfolio.
///
/// - every GET path goes through the portfolio router: `/`, `/case/{slug}`, anything else
///   falls back to the landing page; files under the assets directory win over routes
/// - `POST /messages`: contact form submission, proxied to the contact backend
/// - `GET /api/projects`, `GET /api/case-studies/{slug}`: the static content as JSON
use std::path::{Component, Path as FsPath, PathBuf};
use std::sync::Arc;

use axum::extract::{Path, State};
use axum::http::{header, HeaderMap, Method, StatusCode, Uri};
use axum::response::{Html, IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Form, Json, Router};
use serde_json::json;
use sha2::{Digest, Sha256};
use tokio_util::sync::CancellationToken;
use tracing::{info, warn};

use portfolio_common::contact::ContactClient;
use portfolio_common::contact_form::{ContactFields, ContactForm, SubmitOutcome};
use portfolio_common::content::{self, ProjectSummary};
use portfolio_common::error::CommonError;
use portfolio_common::router::{self, Route};

use crate::error::AppError;
use crate::render::{self, FormView};

/// Section highlighted when the landing page is first shown.
const LANDING_SECTION: &str = "home";
/// Section highlighted after a form post, which lands on `#contact`.
const CONTACT_SECTION: &str = "contact";

#[derive(Clone)]
pub struct AppState {
    contact: Arc<ContactClient>,
    /// Cancelled on shutdown; bounds every in-flight contact submission
    shutdown: CancellationToken,
    assets_dir: Option<Arc<PathBuf>>,
}

impl AppState {
    pub fn new(
        contact: Arc<ContactClient>,
        shutdown: CancellationToken,
        assets_dir: Option<PathBuf>,
    ) -> Self {
        Self {
            contact,
            shutdown,
            assets_dir: assets_dir.map(Arc::new),
        }
    }
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/messages", post(submit_contact))
        .route("/api/projects", get(list_projects))
        .route("/api/case-studies/{slug}", get(get_case_study))
        .fallback(page)
        .with_state(state)
}

async fn page(
    State(state): State<AppState>,
    method: Method,
    uri: Uri,
    headers: HeaderMap,
) -> Result<Response, AppError> {
    if method != Method::GET && method != Method::HEAD {
        return Ok(StatusCode::METHOD_NOT_ALLOWED.into_response());
    }

    if let Some(dir) = &state.assets_dir {
        if let Some(asset) = serve_asset(dir, uri.path()).await? {
            return Ok(asset);
        }
    }

    let (status, body) = match router::resolve(uri.path()) {
        Route::Landing => (
            StatusCode::OK,
            render::landing(LANDING_SECTION, FormView::new(&ContactForm::new(), None))?,
        ),
        Route::CaseStudy { slug } => match content::case_study(&slug) {
            Some(case_study) => (StatusCode::OK, render::case_study(case_study)?),
            None => {
                info!(slug, "case study not found");
                (StatusCode::NOT_FOUND, render::not_found()?)
            }
        },
    };

    Ok(html_page(status, body, &headers))
}

async fn submit_contact(
    State(state): State<AppState>,
    Form(fields): Form<ContactFields>,
) -> Result<Response, AppError> {
    let mut form = ContactForm::with_fields(fields);

    let (status, rejected) = match form.submit(state.contact.as_ref(), &state.shutdown).await {
        Ok(SubmitOutcome::Sent) => (StatusCode::OK, None),
        Ok(SubmitOutcome::Failed) => (StatusCode::BAD_GATEWAY, None),
        Ok(SubmitOutcome::Cancelled) => (
            StatusCode::SERVICE_UNAVAILABLE,
            Some("The site is restarting. Try again shortly.".to_string()),
        ),
        Err(e @ (CommonError::MissingField(_) | CommonError::InvalidEmail(_))) => {
            warn!(error = %e, "contact submission rejected");
            (StatusCode::UNPROCESSABLE_ENTITY, Some(e.to_string()))
        }
        Err(e) => return Err(e.into()),
    };

    let body = render::landing(CONTACT_SECTION, FormView::new(&form, rejected))?;
    Ok((status, Html(body)).into_response())
}

async fn list_projects() -> Json<&'static [ProjectSummary]> {
    Json(content::PROJECTS)
}

async fn get_case_study(Path(slug): Path<String>) -> Response {
    match content::case_study(&slug) {
        Some(case_study) => Json(case_study).into_response(),
        None => (
            StatusCode::NOT_FOUND,
            Json(json!({ "error": "case study not found", "slug": slug })),
        )
            .into_response(),
    }
}

/// Wrap a rendered page with a content hash `ETag`, answering 304 when the client has it.
fn html_page(status: StatusCode, body: String, headers: &HeaderMap) -> Response {
    let etag = format!("\"{:x}\"", Sha256::digest(body.as_bytes()));
    let cached = headers
        .get(header::IF_NONE_MATCH)
        .and_then(|v| v.to_str().ok())
        .is_some_and(|v| v.split(',').any(|tag| tag.trim() == etag));

    if cached && status == StatusCode::OK {
        return (StatusCode::NOT_MODIFIED, [(header::ETAG, etag)]).into_response();
    }
    (status, [(header::ETAG, etag)], Html(body)).into_response()
}

/// Serve `path` from `dir` if it names a regular file beneath it.
async fn serve_asset(dir: &FsPath, path: &str) -> Result<Option<Response>, AppError> {
    let Ok(decoded) = urlencoding::decode(path) else {
        return Ok(None);
    };
    let relative = FsPath::new(decoded.trim_start_matches('/'));
    let safe = relative
        .components()
        .all(|c| matches!(c, Component::Normal(_)));
    if relative.as_os_str().is_empty() || !safe {
        return Ok(None);
    }

    let full = dir.join(relative);
    match tokio::fs::metadata(&full).await {
        Ok(meta) if meta.is_file() => {}
        _ => return Ok(None),
    }
    let bytes = tokio::fs::read(&full).await?;
    let mime = mime_guess::from_path(relative).first_or_octet_stream();
    let response = ([(header::CONTENT_TYPE, mime.to_string())], bytes).into_response();
    Ok(Some(response))
}
