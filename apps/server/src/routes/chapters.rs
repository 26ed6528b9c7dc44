//! Chapter endpoints

use axum::{
    extract::{Path, State},
    Json,
};

use crate::error::{ApiError, Result};
use crate::models::*;
use crate::AppState;

/// GET /api/chapters
pub async fn list(State(state): State<AppState>) -> Json<Vec<ChapterStatus>> {
    let data = state.store.load_data();
    let chapters = state
        .dictionary
        .meta()
        .chapters
        .iter()
        .map(|chapter| ChapterStatus {
            completed: state.review.is_chapter_completed(&chapter.id, &data),
            chapter: chapter.clone(),
        })
        .collect();

    Json(chapters)
}

/// GET /api/chapters/:id/completed
pub async fn completed(
    State(state): State<AppState>,
    Path(chapter_id): Path<String>,
) -> Json<ChapterCompletionResponse> {
    let data = state.store.load_data();
    let completed = state.review.is_chapter_completed(&chapter_id, &data);

    Json(ChapterCompletionResponse {
        chapter_id,
        completed,
    })
}

/// POST /api/chapters/advance
///
/// Moves the learner past the current chapter once every word in it has
/// been graded.
pub async fn advance(State(state): State<AppState>) -> Result<Json<Progress>> {
    let _guard = state.write_lock.lock().await;
    let mut data = state.store.try_load_data()?;

    let current = data
        .progress
        .current_chapter_index()
        .and_then(|index| state.dictionary.chapter(index))
        .ok_or_else(|| {
            ApiError::Conflict(format!(
                "No chapter at position {}",
                data.progress.current_chapter
            ))
        })?;

    if !state.review.is_chapter_completed(&current.id, &data) {
        return Err(ApiError::Conflict(format!(
            "Chapter {} is not completed",
            current.id
        )));
    }

    data.progress.current_chapter += 1;
    data.progress.completed_chapters += 1;
    state.store.save_data(&data)?;

    tracing::info!(
        "Completed chapter {}, moving to position {}",
        current.id,
        data.progress.current_chapter
    );

    Ok(Json(data.progress))
}
