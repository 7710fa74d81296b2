//! Harness configuration.
//!
//! Sources, applied in order (later sources override earlier ones):
//!  1. `config/harness.{yaml,toml,json}` in the working directory (optional)
//!  2. An explicit file path, when one is given (required)
//!  3. Environment variables prefixed `RESTFUL_OBJECTS__`, double-underscore
//!     separated, e.g. `RESTFUL_OBJECTS__EXPECTATIONS__LIST_COUNT=14`
//!
//! Every field has a default, so an unconfigured environment runs against the
//! public service with the stock expectations.

use std::path::Path;
use std::time::Duration;

use restful_objects_client::{ClientConfig, UpdateBodyEncoding, DEFAULT_BASE_URL};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::error::HarnessError;

/// Prefix for environment variable overrides.
pub const ENV_PREFIX: &str = "RESTFUL_OBJECTS";

const DEFAULT_CONFIG_FILE: &str = "config/harness";

/// User agent sent by clients the harness builds.
pub const HARNESS_USER_AGENT: &str = concat!("restful-objects-harness/", env!("CARGO_PKG_VERSION"));

/// Top-level harness configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HarnessConfig {
    /// Base URL of the object API
    pub base_url: String,

    /// Per-request timeout; unset means the transport default
    pub timeout_seconds: Option<u64>,

    /// Body encoding for the update scenario
    pub update_encoding: UpdateBodyEncoding,

    /// Literal values the scenarios assert against
    pub expectations: Expectations,
}

impl Default for HarnessConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout_seconds: None,
            update_encoding: UpdateBodyEncoding::default(),
            expectations: Expectations::default(),
        }
    }
}

impl HarnessConfig {
    /// Load configuration from the default file, an optional explicit file,
    /// and the environment.
    ///
    /// # Errors
    ///
    /// Returns `HarnessError::Configuration` if a file is malformed, the
    /// explicit file is missing, a value cannot be coerced to its field type,
    /// or the result fails [`HarnessConfig::validate`].
    pub fn load(explicit_path: Option<&Path>) -> Result<Self, HarnessError> {
        let mut builder = ::config::Config::builder()
            .add_source(::config::File::with_name(DEFAULT_CONFIG_FILE).required(false));

        if let Some(path) = explicit_path {
            info!(path = %path.display(), "Loading configuration from explicit path");
            builder = builder.add_source(::config::File::from(path).required(true));
        }

        let config: HarnessConfig = builder
            .add_source(
                ::config::Environment::with_prefix(ENV_PREFIX)
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?
            .try_deserialize()?;

        config.validate()?;
        Ok(config)
    }

    /// Check values that deserialize fine but cannot drive a run.
    pub fn validate(&self) -> Result<(), HarnessError> {
        let url = url::Url::parse(&self.base_url).map_err(|e| HarnessError::Configuration {
            message: format!("base_url '{}' is not a valid URL: {}", self.base_url, e),
        })?;

        if url.cannot_be_a_base() {
            return Err(HarnessError::Configuration {
                message: format!("base_url '{}' cannot be used as a base URL", self.base_url),
            });
        }

        if self.timeout_seconds == Some(0) {
            return Err(HarnessError::Configuration {
                message: "timeout_seconds must be greater than zero when set".to_string(),
            });
        }

        // The list scenario requires more than one item before checking the exact count.
        if self.expectations.list_count < 2 {
            return Err(HarnessError::Configuration {
                message: format!(
                    "expectations.list_count must be at least 2, got {}",
                    self.expectations.list_count
                ),
            });
        }

        Ok(())
    }

    /// Build the client configuration for one scenario session.
    pub fn client_config(&self) -> ClientConfig {
        let config = ClientConfig::default()
            .with_base_url(self.base_url.clone())
            .with_user_agent(HARNESS_USER_AGENT)
            .with_update_encoding(self.update_encoding);

        match self.timeout_seconds {
            Some(seconds) => config.with_timeout(Duration::from_secs(seconds)),
            None => config,
        }
    }
}

/// Literal values asserted by the scenarios.
///
/// The defaults describe the public service's seeded data set. A run against
/// a drifted or private deployment can override them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Expectations {
    /// Exact number of objects returned by the list endpoint
    pub list_count: usize,

    pub single_item_id: String,
    pub single_item_name: String,

    /// Name sent and expected back by the create scenario
    pub created_name: String,

    pub updated_item_id: String,
    pub updated_name: String,

    pub deleted_item_id: String,
}

impl Default for Expectations {
    fn default() -> Self {
        Self {
            list_count: 13,
            single_item_id: "1".to_string(),
            single_item_name: "Google Pixel 6 Pro".to_string(),
            created_name: "Test Name".to_string(),
            updated_item_id: "1".to_string(),
            updated_name: "Updated Name".to_string(),
            deleted_item_id: "6".to_string(),
        }
    }
}

impl Expectations {
    /// Confirmation message the service returns after deleting `deleted_item_id`.
    pub fn delete_message(&self) -> String {
        format!("Object with id = {}, has been deleted.", self.deleted_item_id)
    }
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
