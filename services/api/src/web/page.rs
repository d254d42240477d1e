//! services/api/src/web/page.rs
//!
//! Serves the single-page flashcard form.

use axum::response::Html;

const INDEX_HTML: &str = include_str!("../../static/index.html");

pub async fn index_handler() -> Html<&'static str> {
    Html(INDEX_HTML)
}
