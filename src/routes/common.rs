//! Common routes: health and service info.

use axum::{routing::get, Json, Router};
use serde::Serialize;

#[derive(Serialize)]
struct HealthBody {
    status: &'static str,
}

#[derive(Serialize)]
struct InfoBody {
    name: &'static str,
    version: &'static str,
}

async fn health() -> Json<HealthBody> {
    Json(HealthBody { status: "OK" })
}

async fn index() -> Json<InfoBody> {
    Json(InfoBody {
        name: "Account REST API Service",
        version: "1.0",
    })
}

/// Common routes (no state): GET /health, GET /.
pub fn common_routes() -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/", get(index))
}
