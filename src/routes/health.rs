//! Health check endpoint

use axum::{routing::get, Json, Router};
use serde::Serialize;

use crate::state::AppState;

#[derive(Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub version: &'static str,
    pub service: &'static str,
}

pub async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy",
        version: env!("CARGO_PKG_VERSION"),
        service: "ezhuthu-server",
    })
}

pub fn router() -> Router<AppState> {
    Router::new().route("/", get(health_check))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    use axum_test::TestServer;
    use serde_json::Value;
    use tempfile::TempDir;

    use crate::ocr::MockRecognizer;
    use crate::upload::UploadStore;

    #[tokio::test]
    async fn health_reports_service_and_version() {
        let dir = TempDir::new().unwrap();
        let uploads = UploadStore::new(dir.path()).unwrap();
        let state = AppState::new(uploads, Arc::new(MockRecognizer::text("unused")));
        let app = Router::new().nest("/health", router()).with_state(state);
        let server = TestServer::new(app).unwrap();

        let response = server.get("/health").await;
        response.assert_status_ok();

        let json: Value = response.json();
        assert_eq!(json["status"], "healthy");
        assert_eq!(json["service"], "ezhuthu-server");
        assert_eq!(json["version"], env!("CARGO_PKG_VERSION"));
    }
}
