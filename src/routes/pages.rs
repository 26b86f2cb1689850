//! Static page serving
//!
//! The upload form is embedded at compile time so the binary is
//! self-contained and needs no asset directory at runtime.

use axum::{response::Html, routing::get, Router};

use crate::state::AppState;

const INDEX_HTML: &str = include_str!("../../assets/index.html");

pub async fn index() -> Html<&'static str> {
    Html(INDEX_HTML)
}

pub fn router() -> Router<AppState> {
    Router::new().route("/", get(index))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn embedded_page_posts_to_upload_endpoint() {
        assert!(INDEX_HTML.contains("fetch('/upload'"));
        assert!(INDEX_HTML.contains("form.append('file'"));
    }
}
