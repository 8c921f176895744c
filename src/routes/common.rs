//! Operational routes: liveness, schema-aware readiness, build info.

use crate::state::AppState;
use axum::{extract::State, http::StatusCode, routing::get, Json, Router};
use serde::Serialize;

/// Tables the API reads and writes; readiness requires all of them.
const REQUIRED_TABLES: &[&str] = &["pizzas", "restaurant_pizzas", "restaurants"];

#[derive(Serialize)]
struct Readiness {
    status: &'static str,
    database: &'static str,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    missing_tables: Vec<&'static str>,
}

impl Readiness {
    fn degraded(database: &'static str, missing_tables: Vec<&'static str>) -> (StatusCode, Json<Self>) {
        (
            StatusCode::SERVICE_UNAVAILABLE,
            Json(Self { status: "degraded", database, missing_tables }),
        )
    }
}

async fn live() -> Json<serde_json::Value> {
    Json(serde_json::json!({ "status": "ok" }))
}

/// Ready once the store answers and the migrations have created every table.
async fn ready(State(state): State<AppState>) -> (StatusCode, Json<Readiness>) {
    let present: Vec<(String,)> = match sqlx::query_as(
        "SELECT name FROM sqlite_master WHERE type = 'table'",
    )
    .fetch_all(&state.pool)
    .await
    {
        Ok(rows) => rows,
        Err(e) => {
            tracing::warn!(error = %e, "readiness probe failed");
            return Readiness::degraded("unavailable", Vec::new());
        }
    };

    let missing: Vec<&'static str> = REQUIRED_TABLES
        .iter()
        .copied()
        .filter(|table| !present.iter().any(|(name,)| name == table))
        .collect();
    if !missing.is_empty() {
        tracing::warn!(missing = ?missing, "schema not migrated");
        return Readiness::degraded("unmigrated", missing);
    }

    (
        StatusCode::OK,
        Json(Readiness { status: "ok", database: "ok", missing_tables: Vec::new() }),
    )
}

async fn version() -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "name": env!("CARGO_PKG_NAME"),
        "version": env!("CARGO_PKG_VERSION"),
        "storage": "sqlite",
    }))
}

/// GET /health, GET /ready, GET /version.
pub fn common_routes(state: AppState) -> Router {
    Router::new()
        .route("/health", get(live))
        .route("/ready", get(ready))
        .route("/version", get(version))
        .with_state(state)
}
