//! Common utilities for live tests
//!
//! These helpers build runners and clients from the layered harness
//! configuration, so environment overrides such as
//! `RESTFUL_OBJECTS__BASE_URL` apply to the live suite as well.

use std::sync::Once;

use restful_objects_client::ObjectsClient;
use restful_objects_harness::{HarnessConfig, ScenarioRunner};

static LOGGING: Once = Once::new();

/// Install a test-friendly tracing subscriber once per test binary
pub fn init_logging() {
    LOGGING.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(
                tracing_subscriber::EnvFilter::try_from_default_env()
                    .unwrap_or_else(|_| "restful_objects_harness=info".into()),
            )
            .with_test_writer()
            .try_init();
    });
}

/// Load the harness configuration for a live run
pub fn live_config() -> anyhow::Result<HarnessConfig> {
    init_logging();
    Ok(HarnessConfig::load(None)?)
}

/// Create a scenario runner for the live service
pub fn live_runner() -> anyhow::Result<ScenarioRunner> {
    Ok(ScenarioRunner::new(&live_config()?))
}

/// Create a bare client for the live service
pub fn live_client() -> anyhow::Result<ObjectsClient> {
    let config = live_config()?;
    Ok(ObjectsClient::builder()
        .config(config.client_config())
        .build()?)
}
