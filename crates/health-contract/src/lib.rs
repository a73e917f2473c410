//! Health Contract Check
//!
//! Probes `GET /api/health`, asserts the payload contract and, over a short
//! load stage, evaluates request latency and failure-rate thresholds.
//!
//! - checks: named contract checks over one response
//! - probe: a single timed request
//! - runner: virtual users, aggregation and thresholds

pub mod checks;
pub mod probe;
pub mod runner;

pub use checks::{evaluate, CheckOutcome, CheckResult, ContractReport, HealthResponse};
pub use probe::{build_client, probe, ProbeError, Sample};
pub use runner::{run, LoadConfig, RunSummary, Thresholds, DEFAULT_URL};
