//! Scenario runner and run reports.

use std::sync::Arc;
use std::time::{Duration, Instant};

use restful_objects_client::ClientConfig;
use serde::Serialize;
use tracing::{info, warn};

use crate::config::{Expectations, HarnessConfig};
use crate::error::HarnessError;
use crate::scenario::Scenario;
use crate::session::{ClientSession, SessionTracker};

/// Runs scenarios, each in its own client session.
#[derive(Debug, Clone)]
pub struct ScenarioRunner {
    client_config: ClientConfig,
    expectations: Expectations,
    tracker: Arc<SessionTracker>,
}

impl ScenarioRunner {
    pub fn new(config: &HarnessConfig) -> Self {
        Self::from_parts(config.client_config(), config.expectations.clone())
    }

    pub fn from_parts(client_config: ClientConfig, expectations: Expectations) -> Self {
        Self {
            client_config,
            expectations,
            tracker: Arc::new(SessionTracker::new()),
        }
    }

    pub fn expectations(&self) -> &Expectations {
        &self.expectations
    }

    /// Session counters for every run made through this runner.
    pub fn tracker(&self) -> &SessionTracker {
        &self.tracker
    }

    /// Run one scenario in a fresh session.
    ///
    /// The session is released before this returns, whatever the outcome.
    pub async fn run(&self, scenario: Scenario) -> ScenarioReport {
        info!(scenario = %scenario, "Running scenario");
        let started = Instant::now();

        let result = self.execute(scenario).await;
        let elapsed = started.elapsed();

        match &result {
            Ok(()) => info!(scenario = %scenario, elapsed_ms = elapsed.as_millis() as u64, "Scenario passed"),
            Err(e) if e.is_transport() => {
                warn!(scenario = %scenario, error = %e, "Scenario could not reach the object API")
            }
            Err(e) => warn!(scenario = %scenario, error = %e, "Scenario failed"),
        }

        ScenarioReport {
            scenario,
            result,
            elapsed,
        }
    }

    /// Run each scenario independently; a failure never stops the rest.
    pub async fn run_all(&self, scenarios: &[Scenario]) -> RunSummary {
        let mut reports = Vec::with_capacity(scenarios.len());
        for scenario in scenarios {
            reports.push(self.run(*scenario).await);
        }

        let summary = RunSummary { reports };
        info!(
            passed = summary.passed(),
            failed = summary.failed(),
            "Scenario run complete"
        );
        summary
    }

    async fn execute(&self, scenario: Scenario) -> Result<(), HarnessError> {
        let session = ClientSession::open(&self.client_config, self.tracker.clone())?;
        scenario
            .execute(session.client(), &self.expectations)
            .await
    }
}

/// Result of a single scenario run.
#[derive(Debug)]
pub struct ScenarioReport {
    scenario: Scenario,
    result: Result<(), HarnessError>,
    elapsed: Duration,
}

impl ScenarioReport {
    pub fn scenario(&self) -> Scenario {
        self.scenario
    }

    pub fn elapsed(&self) -> Duration {
        self.elapsed
    }

    pub fn is_passed(&self) -> bool {
        self.result.is_ok()
    }

    pub fn error(&self) -> Option<&HarnessError> {
        self.result.as_ref().err()
    }

    pub fn outcome(&self) -> Outcome {
        match &self.result {
            Ok(()) => Outcome::Passed,
            Err(e) => Outcome::Failed {
                reason: e.to_string(),
            },
        }
    }

    /// Serializable view of this report.
    pub fn record(&self) -> ReportRecord {
        ReportRecord {
            scenario: self.scenario,
            outcome: self.outcome(),
            elapsed_ms: self.elapsed.as_millis() as u64,
        }
    }

    /// Convert into a `Result`, for use inside a `#[tokio::test]`.
    pub fn into_result(self) -> Result<(), HarnessError> {
        self.result
    }
}

/// Pass/fail outcome of a scenario.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum Outcome {
    Passed,
    Failed { reason: String },
}

/// Serializable form of a [`ScenarioReport`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReportRecord {
    pub scenario: Scenario,
    #[serde(flatten)]
    pub outcome: Outcome,
    pub elapsed_ms: u64,
}

/// Reports from a [`ScenarioRunner::run_all`] call, in run order.
#[derive(Debug, Default)]
pub struct RunSummary {
    reports: Vec<ScenarioReport>,
}

impl RunSummary {
    pub fn reports(&self) -> &[ScenarioReport] {
        &self.reports
    }

    pub fn passed(&self) -> usize {
        self.reports.iter().filter(|r| r.is_passed()).count()
    }

    pub fn failed(&self) -> usize {
        self.reports.len() - self.passed()
    }

    pub fn all_passed(&self) -> bool {
        self.failed() == 0
    }

    pub fn report(&self, scenario: Scenario) -> Option<&ScenarioReport> {
        self.reports.iter().find(|r| r.scenario == scenario)
    }
}

#[cfg(test)]
#[path = "runner_tests.rs"]
mod tests;
