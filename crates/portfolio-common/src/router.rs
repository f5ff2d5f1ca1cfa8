/// Path-to-page resolution.
///
/// Two routes exist: the landing page at `/` and the case-study page at `/case/{slug}`.
/// Every other path falls back to the landing page; there is no dedicated 404 route.
/// Unknown slugs still resolve to `CaseStudy` and are handled by the content lookup.
use std::borrow::Cow;

use serde::Serialize;

const CASE_SEGMENT: &str = "case";

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(tag = "page", rename_all = "snake_case")]
pub enum Route {
    Landing,
    CaseStudy { slug: String },
}

impl Route {
    /// Canonical href for this route.
    pub fn path(&self) -> String {
        match self {
            Route::Landing => "/".to_string(),
            Route::CaseStudy { slug } => case_study_path(slug),
        }
    }

    pub fn slug(&self) -> Option<&str> {
        match self {
            Route::Landing => None,
            Route::CaseStudy { slug } => Some(slug),
        }
    }
}

/// Resolve a path (query string and fragment allowed) to a route.
pub fn resolve(path: &str) -> Route {
    let segments: Vec<&str> = pathname(path)
        .split('/')
        .filter(|s| !s.is_empty())
        .collect();

    match segments.as_slice() {
        [prefix, slug] if prefix.eq_ignore_ascii_case(CASE_SEGMENT) => Route::CaseStudy {
            slug: decode_segment(slug),
        },
        _ => Route::Landing,
    }
}

/// Strip the query string and fragment from a path.
pub fn pathname(path: &str) -> &str {
    let end = path.find(['?', '#']).unwrap_or(path.len());
    &path[..end]
}

pub fn case_study_path(slug: &str) -> String {
    format!("/{CASE_SEGMENT}/{}", urlencoding::encode(slug))
}

/// Percent-decode a path segment, keeping it raw if it does not decode to UTF-8.
fn decode_segment(segment: &str) -> String {
    urlencoding::decode(segment)
        .map(Cow::into_owned)
        .unwrap_or_else(|_| segment.to_string())
}
