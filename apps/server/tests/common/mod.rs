//! Common test utilities and fixtures for integration tests.
//!
//! This module provides shared test infrastructure including:
//! - TestContext wiring an in-memory store, a fixed clock and a small
//!   dictionary into the real router
//! - Helper functions for creating test data

pub mod fixtures;

use std::sync::Arc;

use axum::Router;
use axum_test::TestServer;
use chrono::{DateTime, TimeZone, Utc};
use tempfile::TempDir;

use words_core::{FixedClock, MemoryStore};
use words_daily_server::{router, AppState};

/// Test context containing the store, clock and router.
pub struct TestContext {
    pub clock: Arc<FixedClock>,
    pub kv: Arc<MemoryStore>,
    pub state: AppState,
    pub backup_dir: TempDir,
    app: Router,
}

impl TestContext {
    /// Create a new test context starting at [`start_time`].
    pub fn new() -> Self {
        let clock = Arc::new(FixedClock::new(start_time()));
        let kv = Arc::new(MemoryStore::new());
        let backup_dir = tempfile::tempdir().expect("Failed to create backup dir");

        let state = AppState::new(
            kv.clone(),
            clock.clone(),
            fixtures::sample_dictionary(),
            backup_dir.path().to_path_buf(),
        );
        let app = router(state.clone());

        Self {
            clock,
            kv,
            state,
            backup_dir,
            app,
        }
    }

    /// Get the router for use with axum-test.
    pub fn router(&self) -> Router {
        self.app.clone()
    }

    /// Start a test server over the router.
    pub fn server(&self) -> TestServer {
        TestServer::new(self.router()).expect("Failed to start test server")
    }
}

/// Fixed instant every context starts at.
pub fn start_time() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2026, 10, 19, 12, 0, 0).unwrap()
}
