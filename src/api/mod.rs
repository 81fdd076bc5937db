use axum::Json;
use axum::extract::{Path, Query, State};
use axum::http::Uri;
use axum::response::Html;
use axum::routing::{get, post};
use axum::{Router, http::StatusCode};
use chrono::{NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Value, json};
use tower_http::cors::{Any, CorsLayer};
use tracing::error;

use crate::clubs::ClubConfig;
use crate::error::AppError;
use crate::models::{AvailabilityResult, DayAvailability, FilterRequest, FilteredAvailabilityResult};
use crate::services::AvailabilityService;
use crate::state::AppState;

#[derive(Deserialize)]
struct ClubQueryParams {
    club: Option<String>,
}

#[derive(Serialize)]
struct ClubEntry {
    #[serde(flatten)]
    config: ClubConfig,
    key: &'static str,
}

#[derive(Serialize)]
struct ClubsResponse {
    clubs: Vec<ClubEntry>,
    total: usize,
}

pub fn router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let api = Router::new()
        .route("/health", get(health))
        .route("/clubs", get(clubs))
        .route("/check-availability", get(check_next_days))
        .route("/check-availability/{date}", get(check_date))
        .route("/check-availability/filtered", post(check_filtered))
        .route("/cron/start", post(cron_start))
        .route("/cron/stop", post(cron_stop))
        .route("/cron/manual", post(cron_manual));

    Router::new()
        .route("/", get(frontend))
        .route("/health", get(health))
        .nest("/api", api)
        .fallback(not_found)
        .with_state(state)
        .layer(cors)
}

async fn health() -> Json<Value> {
    Json(json!({
        "status": "ok",
        "service": "padel-checker",
        "timestamp": Utc::now().to_rfc3339(),
    }))
}

async fn clubs(State(state): State<AppState>) -> Json<ClubsResponse> {
    let clubs: Vec<ClubEntry> = state
        .clubs
        .iter()
        .map(|config| ClubEntry {
            key: config.id,
            config: config.clone(),
        })
        .collect();
    let total = clubs.len();

    Json(ClubsResponse { clubs, total })
}

fn resolve_club<'a>(state: &'a AppState, key: Option<&str>) -> Result<&'a ClubConfig, AppError> {
    let club = match key {
        Some(key) => state.clubs.get(key),
        None => state.clubs.default_club(),
    };

    club.ok_or_else(|| {
        AppError::BadRequest(format!(
            "Invalid club. Available clubs: {}",
            state.clubs.keys().join(", ")
        ))
    })
}

async fn check_date(
    State(state): State<AppState>,
    Path(date): Path<String>,
    Query(params): Query<ClubQueryParams>,
) -> Result<Json<AvailabilityResult>, AppError> {
    let date: NaiveDate = date
        .parse()
        .map_err(|_| AppError::BadRequest("Invalid date format. Use YYYY-MM-DD".to_string()))?;
    let club = resolve_club(&state, params.club.as_deref())?;

    let service = AvailabilityService::new(state.provider.clone(), state.clubs.clone());
    Ok(Json(service.check_availability(date, club).await))
}

async fn check_next_days(
    State(state): State<AppState>,
    Query(params): Query<ClubQueryParams>,
) -> Result<Json<Vec<DayAvailability>>, AppError> {
    let club = resolve_club(&state, params.club.as_deref())?;

    let service = AvailabilityService::new(state.provider.clone(), state.clubs.clone());
    Ok(Json(service.check_multiple_days(club).await))
}

async fn check_filtered(
    State(state): State<AppState>,
    Json(request): Json<FilterRequest>,
) -> Result<Json<FilteredAvailabilityResult>, AppError> {
    request.validate().map_err(AppError::BadRequest)?;

    let service = AvailabilityService::new(state.provider.clone(), state.clubs.clone());
    Ok(Json(service.check_filtered_availability(&request).await))
}

async fn cron_start(State(state): State<AppState>) -> Json<Value> {
    state.scheduler.start().await;
    Json(json!({ "message": "Automatic checks started" }))
}

async fn cron_stop(State(state): State<AppState>) -> Json<Value> {
    state.scheduler.stop().await;
    Json(json!({ "message": "Automatic checks stopped" }))
}

async fn cron_manual(State(state): State<AppState>) -> Json<Value> {
    state.scheduler.run_manual().await;
    Json(json!({ "message": "Manual check completed" }))
}

async fn frontend() -> Result<Html<String>, AppError> {
    match tokio::fs::read_to_string("static/index.html").await {
        Ok(contents) => Ok(Html(contents)),
        Err(err) => {
            error!("failed to read frontend page: {}", err);
            Err(AppError::InternalServerError)
        }
    }
}

async fn not_found(uri: Uri) -> (StatusCode, Json<Value>) {
    (
        StatusCode::NOT_FOUND,
        Json(json!({
            "error": "Resource not found",
            "statusCode": 404,
            "path": uri.path(),
        })),
    )
}
