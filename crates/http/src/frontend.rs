//! Embedded frontend page.
//!
//! Serves a single-page app at `/` with a query box, the answer, and the
//! query history, all backed by the JSON endpoints.

use axum::{
    http::{header, StatusCode},
    response::{Html, IntoResponse, Response},
};

/// Embedded HTML for the frontend.
pub const INDEX_HTML: &str = include_str!("frontend.html");

/// Serve the frontend HTML page.
pub async fn serve_frontend() -> Response {
    (StatusCode::OK, [(header::CONTENT_TYPE, "text/html; charset=utf-8")], Html(INDEX_HTML))
        .into_response()
}
