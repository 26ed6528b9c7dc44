//! Study API tests.

mod common;

use axum::http::StatusCode;
use chrono::Duration;
use pretty_assertions::assert_eq;
use serde_json::{json, Value};

use common::{fixtures, start_time, TestContext};
use words_core::storage::progress::STORAGE_KEY;
use words_core::{KeyValueStore, LearnerProgress, TodayTasks, WordRecord};

/// Health check responds without state.
#[tokio::test]
async fn test_health() {
    let ctx = TestContext::new();
    let server = ctx.server();

    let response = server.get("/health").await;
    response.assert_status_ok();
    assert_eq!(response.text(), "OK");
}

/// First review creates a record from the dictionary entry.
#[tokio::test]
async fn test_review_fresh_word() {
    let ctx = TestContext::new();
    let server = ctx.server();

    let response = server
        .post("/api/review")
        .json(&fixtures::mark_request("w00001", 1))
        .await;

    response.assert_status_ok();
    let record: WordRecord = response.json();
    assert_eq!(record.id, "w00001");
    assert_eq!(record.chapter, "ch001");
    assert_eq!(record.level, Some(1));
    assert_eq!(record.review_count, Some(1));
    assert_eq!(record.history.as_ref().map(Vec::len), Some(1));
    assert_eq!(record.next_review_at, Some(start_time() + Duration::hours(12)));
    assert!(record.details.contains_key("meanings"));

    let data = ctx.state.store.load_data();
    assert_eq!(data.words.len(), 1);
    assert_eq!(data.progress.total_words_learned, 1);
}

/// Repeated reviews accumulate on the stored record.
#[tokio::test]
async fn test_review_accumulates() {
    let ctx = TestContext::new();
    let server = ctx.server();

    for _ in 0..3 {
        server
            .post("/api/review")
            .json(&fixtures::mark_request("w00002", 2))
            .await
            .assert_status_ok();
        ctx.clock.advance(Duration::hours(1));
    }

    let data: LearnerProgress = server.get("/api/progress").await.json();
    assert_eq!(data.words.len(), 1);
    let record = &data.words[0];
    assert_eq!(record.review_count, Some(3));
    assert_eq!(record.history.as_ref().map(Vec::len), Some(3));
    // third review: familiar table index 2
    assert_eq!(
        record.next_review_at.unwrap() - record.last_reviewed_at.unwrap(),
        Duration::days(7)
    );
}

/// A null level is an ungraded review on the fair schedule.
#[tokio::test]
async fn test_review_null_level() {
    let ctx = TestContext::new();
    let server = ctx.server();

    let response = server
        .post("/api/review")
        .json(&json!({ "wordId": "w00001", "level": null }))
        .await;

    response.assert_status_ok();
    let record: WordRecord = response.json();
    assert_eq!(record.level, None);
    assert_eq!(record.review_count, Some(1));
    assert_eq!(record.next_review_at, Some(start_time() + Duration::hours(12)));
    assert_eq!(record.history.as_ref().unwrap()[0].level, None);
    assert_eq!(ctx.state.store.load_data().progress.total_words_learned, 0);
}

/// Reviewing on top of browser data keeps every stored word.
#[tokio::test]
async fn test_review_keeps_browser_progress() {
    let ctx = TestContext::new();
    let server = ctx.server();
    ctx.kv.set(STORAGE_KEY, &fixtures::browser_document()).unwrap();

    let due: Vec<WordRecord> = server.get("/api/review/due").await.json();
    assert_eq!(due.len(), 2);

    server
        .post("/api/review")
        .json(&fixtures::mark_request("w00003", 3))
        .await
        .assert_status_ok();

    let data = ctx.state.store.try_load_data().unwrap();
    let ids: Vec<_> = data.words.iter().map(|w| w.id.as_str()).collect();
    assert_eq!(ids, vec!["w00001", "w00002", "w00003"]);
    assert_eq!(data.words[1].level, None);
    assert_eq!(data.words[1].history.as_ref().unwrap()[0].level, None);
    assert_eq!(data.progress.total_words_learned, 2);
}

/// A review never saves over a document it could not read.
#[tokio::test]
async fn test_review_refuses_unreadable_store() {
    let ctx = TestContext::new();
    let server = ctx.server();
    ctx.kv.set(STORAGE_KEY, "{oops").unwrap();

    let response = server
        .post("/api/review")
        .json(&fixtures::mark_request("w00001", 1))
        .await;

    response.assert_status(StatusCode::INTERNAL_SERVER_ERROR);
    let body: Value = response.json();
    assert_eq!(body["error"], "storage_error");
    assert_eq!(ctx.kv.get(STORAGE_KEY).unwrap().as_deref(), Some("{oops"));
}

/// Unknown word ids are rejected.
#[tokio::test]
async fn test_review_unknown_word() {
    let ctx = TestContext::new();
    let server = ctx.server();

    let response = server
        .post("/api/review")
        .json(&fixtures::mark_request("w99999", 1))
        .await;

    response.assert_status(StatusCode::NOT_FOUND);
    let body: Value = response.json();
    assert_eq!(body["error"], "not_found");
    assert!(ctx.state.store.load_data().words.is_empty());
}

/// Due words appear once their review time arrives.
#[tokio::test]
async fn test_due_words_follow_clock() {
    let ctx = TestContext::new();
    let server = ctx.server();

    server
        .post("/api/review")
        .json(&fixtures::mark_request("w00001", 1))
        .await
        .assert_status_ok();
    server
        .post("/api/review")
        .json(&fixtures::mark_request("w00003", 3))
        .await
        .assert_status_ok();

    let due: Vec<WordRecord> = server.get("/api/review/due").await.json();
    assert!(due.is_empty());

    ctx.clock.advance(Duration::hours(12));
    let due: Vec<WordRecord> = server.get("/api/review/due").await.json();
    let ids: Vec<_> = due.iter().map(|w| w.id.as_str()).collect();
    assert_eq!(ids, vec!["w00001"]);

    ctx.clock.advance(Duration::days(3));
    let due: Vec<WordRecord> = server.get("/api/review/due").await.json();
    assert_eq!(due.len(), 2);
}

/// Today's tasks carry the current chapter and due words.
#[tokio::test]
async fn test_today_tasks() {
    let ctx = TestContext::new();
    let server = ctx.server();

    let response = server.get("/api/tasks/today").await;
    response.assert_status_ok();
    let body: Value = response.json();
    assert_eq!(body["newChapter"]["id"], "ch001");
    assert_eq!(body["newChapter"]["wordCount"], 2);
    assert_eq!(body["reviewWords"].as_array().map(Vec::len), Some(0));
}

/// A current chapter past the end yields no new chapter.
#[tokio::test]
async fn test_today_tasks_out_of_range() {
    let ctx = TestContext::new();
    let server = ctx.server();

    let mut data = LearnerProgress::default();
    data.progress.current_chapter = 5;
    ctx.state.store.save_data(&data).unwrap();

    let body: Value = server.get("/api/tasks/today").await.json();
    assert!(body["newChapter"].is_null());

    // same check against the core type
    let tasks: TodayTasks = ctx
        .state
        .review
        .get_today_tasks(ctx.state.dictionary.meta(), &data);
    assert!(tasks.new_chapter.is_none());
}
