//! Common test utilities and fixtures for integration tests.
//!
//! This module provides shared test infrastructure including:
//! - TestContext wiring a game service to the router
//! - Small catalogs with known contents

pub mod fixtures;

use std::num::NonZeroU32;
use std::sync::Arc;

use axum::Router;
use axum_test::TestServer;

use geoquiz_backend::services::game::GameService;
use geoquiz_backend::AppState;
use geoquiz_core::Catalog;

/// Test context holding the shared state and router.
pub struct TestContext {
    pub state: AppState,
    app: Router,
}

impl TestContext {
    /// Context over the four-country fixture catalog with a 900 s countdown.
    pub fn new() -> Self {
        Self::with_catalog(fixtures::four_countries(), 900)
    }

    /// Context over a given catalog and countdown length.
    pub fn with_catalog(catalog: Catalog, duration_secs: u32) -> Self {
        let duration = NonZeroU32::new(duration_secs).expect("duration must be positive");
        let state = AppState::new(GameService::new(Arc::new(catalog), duration));
        let app = geoquiz_backend::router(state.clone());
        Self { state, app }
    }

    /// Get the router for use with axum-test.
    pub fn router(&self) -> Router {
        self.app.clone()
    }

    /// Build a test server over the router.
    pub fn server(&self) -> TestServer {
        TestServer::new(self.router()).expect("failed to build test server")
    }
}
