use std::sync::Arc;

use anyhow::{Result, anyhow};
use axum_test::TestServer;
use marquee_core::{Catalog, loader};
use marquee_server::{AppState, create_app, infra::config::Config};

// Code is used by test modules, but not in this scope
#[allow(unused, missing_debug_implementations)]
pub struct TestApp {
    pub server: TestServer,
    pub state: AppState,
}

#[allow(unused)]
pub fn build_test_app_with_catalog(catalog: Catalog) -> Result<TestApp> {
    let state = AppState::new(Arc::new(catalog), Arc::new(Config::default()));
    let server = TestServer::new(create_app(state.clone()))
        .map_err(|err| anyhow!(err.to_string()))?;
    Ok(TestApp { server, state })
}

/// Test app serving the catalog shipped with the binary.
#[allow(unused)]
pub fn build_test_app() -> Result<TestApp> {
    build_test_app_with_catalog(loader::bundled()?)
}
