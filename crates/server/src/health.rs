use axum::{extract::State, http::StatusCode, routing::get, Json, Router};
use chrono::Utc;
use fragrance_core::catalog::Catalog;
use serde::Serialize;

use crate::bootstrap::SharedState;

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct HealthCheck {
    pub status: &'static str,
    pub detail: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub service: HealthCheck,
    pub catalog: HealthCheck,
    pub checked_at: String,
}

pub fn router(state: SharedState) -> Router {
    Router::new().route("/health", get(health)).with_state(state)
}

pub async fn health(State(state): State<SharedState>) -> (StatusCode, Json<HealthResponse>) {
    let catalog = catalog_check(state.catalog);
    let ready = catalog.status == "ready";

    let payload = HealthResponse {
        status: if ready { "ready" } else { "degraded" },
        service: HealthCheck {
            status: "ready",
            detail: "fragrance-server runtime initialized".to_string(),
        },
        catalog,
        checked_at: Utc::now().to_rfc3339(),
    };

    let status_code = if ready { StatusCode::OK } else { StatusCode::SERVICE_UNAVAILABLE };
    (status_code, Json(payload))
}

fn catalog_check(catalog: &Catalog) -> HealthCheck {
    if catalog.is_empty() {
        return HealthCheck { status: "degraded", detail: "catalog has no products".to_string() };
    }

    match catalog.validate() {
        Ok(()) => HealthCheck {
            status: "ready",
            detail: format!(
                "{} products, {} collections",
                catalog.len(),
                catalog.collections().len()
            ),
        },
        Err(error) => HealthCheck { status: "degraded", detail: error.to_string() },
    }
}
