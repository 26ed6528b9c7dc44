//! Study endpoints

use axum::{extract::State, Json};

use words_core::MasteryLevel;

use crate::error::{ApiError, Result};
use crate::models::*;
use crate::AppState;

/// GET /api/tasks/today
pub async fn today_tasks(State(state): State<AppState>) -> Json<TodayTasks> {
    let data = state.store.load_data();
    Json(state.review.get_today_tasks(state.dictionary.meta(), &data))
}

/// GET /api/review/due
pub async fn due_words(State(state): State<AppState>) -> Json<Vec<WordRecord>> {
    let data = state.store.load_data();
    Json(state.review.get_today_review_words(&data.words))
}

/// POST /api/review
pub async fn review(
    State(state): State<AppState>,
    Json(payload): Json<MarkWordRequest>,
) -> Result<Json<WordRecord>> {
    let entry = state
        .dictionary
        .word(&payload.word_id)
        .ok_or_else(|| ApiError::NotFound(format!("Word {}", payload.word_id)))?;

    let _guard = state.write_lock.lock().await;
    let mut data = state.store.try_load_data()?;

    // First review starts from the dictionary's identity fields
    let current = data
        .find_word(&entry.id)
        .cloned()
        .unwrap_or_else(|| entry.to_record());

    let updated = state
        .review
        .mark_word_level(&current, payload.level, &entry.details);

    data.upsert_word(updated.clone());
    data.progress.total_words_learned = data.learned_count();
    state.store.save_data(&data)?;

    tracing::debug!(
        "Reviewed {} as {} (review #{})",
        updated.word,
        payload
            .level
            .and_then(MasteryLevel::from_value)
            .map_or("ungraded", MasteryLevel::label),
        updated.reviews()
    );

    Ok(Json(updated))
}
