//! Progress, daily reset and backup endpoints

use axum::{
    extract::State,
    http::{header, StatusCode},
    response::IntoResponse,
    Json,
};

use crate::error::Result;
use crate::models::*;
use crate::AppState;

/// GET /api/progress
pub async fn progress(State(state): State<AppState>) -> Json<LearnerProgress> {
    Json(state.store.load_data())
}

/// POST /api/daily-reset
pub async fn daily_reset(State(state): State<AppState>) -> Result<Json<DailyResetResponse>> {
    let _guard = state.write_lock.lock().await;
    let reset = state.store.check_daily_reset()?;
    Ok(Json(DailyResetResponse { reset }))
}

/// GET /api/data/export
///
/// Serves the progress document as a download.
pub async fn export(State(state): State<AppState>) -> Result<impl IntoResponse> {
    let body = state.store.export_json()?;
    let disposition = format!(
        "attachment; filename=\"{}\"",
        state.store.export_file_name()
    );

    Ok((
        [
            (header::CONTENT_TYPE, "application/json".to_string()),
            (header::CONTENT_DISPOSITION, disposition),
        ],
        body,
    ))
}

/// POST /api/data/backup
pub async fn backup(State(state): State<AppState>) -> Result<Json<BackupResponse>> {
    let path = state.store.export_data(&state.backup_dir)?;
    Ok(Json(BackupResponse {
        path: path.display().to_string(),
    }))
}

/// POST /api/data/import
///
/// Body is the raw content of a backup file.
pub async fn import(
    State(state): State<AppState>,
    body: String,
) -> Result<Json<LearnerProgress>> {
    let _guard = state.write_lock.lock().await;
    let data = state.store.import_str(&body)?;
    Ok(Json(data))
}

/// DELETE /api/data
pub async fn clear(State(state): State<AppState>) -> Result<StatusCode> {
    let _guard = state.write_lock.lock().await;
    state.store.clear_all()?;
    Ok(StatusCode::NO_CONTENT)
}
