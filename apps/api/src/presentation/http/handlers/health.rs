use crate::presentation::http::{errors::AppError, state::AppState};
use axum::{Json, extract::State, http::StatusCode, response::IntoResponse};
use serde::Serialize;
use sqlx::PgPool;

#[derive(Serialize)]
struct HealthResponse {
    status: &'static str,
    database: &'static str,
    version: &'static str,
}

async fn ping(db: &PgPool) -> Result<(), AppError> {
    sqlx::query("SELECT 1").execute(db).await?;
    Ok(())
}

pub async fn health_check(State(state): State<AppState>) -> impl IntoResponse {
    let (code, status, database) = match ping(&state.db).await {
        Ok(()) => (StatusCode::OK, "healthy", "up"),
        Err(e) => {
            tracing::error!("Health check failed: {}", e);
            (StatusCode::SERVICE_UNAVAILABLE, "unhealthy", "down")
        }
    };

    (
        code,
        Json(HealthResponse {
            status,
            database,
            version: env!("CARGO_PKG_VERSION"),
        }),
    )
}
