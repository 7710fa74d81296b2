//! # restful-objects harness
//!
//! Scenario harness that exercises the public object API over HTTP and
//! asserts on the decoded responses.
//!
//! Each scenario:
//! - opens its own scoped client session
//! - sends one or two requests through [`restful_objects_client::ObjectsClient`]
//! - checks specific fields or counts against [`Expectations`]
//! - releases the session on every exit path
//!
//! Scenarios are independent. [`ScenarioRunner::run_all`] keeps going after a
//! failure and reports every outcome.
//!
//! # Examples
//!
//! ```rust,no_run
//! use restful_objects_harness::{HarnessConfig, Scenario, ScenarioRunner};
//!
//! # async fn example() -> Result<(), restful_objects_harness::HarnessError> {
//! let runner = ScenarioRunner::new(&HarnessConfig::default());
//! runner.run(Scenario::GetSingle).await.into_result()?;
//! # Ok(())
//! # }
//! ```

pub mod cli;
pub mod config;
pub mod error;
pub mod runner;
pub mod scenario;
pub mod session;

pub use config::{Expectations, HarnessConfig, HARNESS_USER_AGENT};
pub use error::{AssertionFailure, HarnessError};
pub use runner::{Outcome, ReportRecord, RunSummary, ScenarioReport, ScenarioRunner};
pub use scenario::Scenario;
pub use session::{ClientSession, SessionTracker};
