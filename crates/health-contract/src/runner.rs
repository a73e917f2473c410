//! Load stage: repeat the contract probe and evaluate thresholds.

use std::time::{Duration, Instant};

use reqwest::Client;
use serde::Serialize;
use tracing::{info, warn};

use crate::checks::{evaluate, CheckOutcome, ContractReport, HealthResponse, ALL_CHECKS};
use crate::probe::{build_client, probe, ProbeError};

pub const DEFAULT_URL: &str = "http://localhost:8000/api/health";

/// Pass/fail limits for the whole run
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Thresholds {
    /// p(95) of request duration must stay below this
    pub p95_ms: f64,
    /// Share of failed requests must stay below this
    pub max_failure_rate: f64,
}

impl Default for Thresholds {
    fn default() -> Self {
        Self {
            p95_ms: 500.0,
            max_failure_rate: 0.1,
        }
    }
}

#[derive(Debug, Clone)]
pub struct LoadConfig {
    pub url: String,
    /// Concurrent virtual users
    pub vus: u32,
    pub duration: Duration,
    pub timeout: Duration,
    pub thresholds: Thresholds,
}

impl Default for LoadConfig {
    fn default() -> Self {
        Self {
            url: DEFAULT_URL.to_string(),
            vus: 1,
            duration: Duration::from_secs(2),
            timeout: Duration::from_secs(10),
            thresholds: Thresholds::default(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CheckTally {
    pub name: &'static str,
    pub passes: u64,
    pub fails: u64,
    pub skips: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ThresholdResult {
    pub metric: &'static str,
    pub expression: String,
    pub actual: f64,
    pub passed: bool,
}

#[derive(Debug, Clone, Serialize)]
pub struct RunSummary {
    pub group: &'static str,
    pub url: String,
    pub started_at: String,
    pub iterations: u64,
    pub failed_requests: u64,
    pub failure_rate: f64,
    pub avg_ms: f64,
    pub p95_ms: f64,
    pub max_ms: f64,
    pub checks: Vec<CheckTally>,
    pub thresholds: Vec<ThresholdResult>,
}

impl RunSummary {
    pub fn thresholds_ok(&self) -> bool {
        self.thresholds.iter().all(|t| t.passed)
    }

    pub fn checks_ok(&self) -> bool {
        self.checks.iter().all(|c| c.fails == 0)
    }
}

/// Per-VU accumulator, merged once all VUs finish
#[derive(Debug, Default)]
struct Stats {
    durations_ms: Vec<f64>,
    failed_requests: u64,
    reports: Vec<ContractReport>,
}

impl Stats {
    fn record(&mut self, elapsed: Duration, failed: bool, report: ContractReport) {
        self.durations_ms.push(elapsed.as_secs_f64() * 1000.0);
        if failed {
            self.failed_requests += 1;
        }
        self.reports.push(report);
    }

    fn merge(&mut self, other: Stats) {
        self.durations_ms.extend(other.durations_ms);
        self.failed_requests += other.failed_requests;
        self.reports.extend(other.reports);
    }
}

/// Percentile with linear interpolation between closest ranks
pub fn percentile(sorted: &[f64], p: f64) -> f64 {
    if sorted.is_empty() {
        return 0.0;
    }
    let rank = p.clamp(0.0, 1.0) * (sorted.len() - 1) as f64;
    let lo = rank.floor() as usize;
    let hi = rank.ceil() as usize;
    sorted[lo] + (sorted[hi] - sorted[lo]) * (rank - lo as f64)
}

fn tally(reports: &[ContractReport]) -> Vec<CheckTally> {
    ALL_CHECKS
        .iter()
        .map(|&name| {
            let mut t = CheckTally { name, passes: 0, fails: 0, skips: 0 };
            for outcome in reports.iter().filter_map(|r| r.outcome(name)) {
                match outcome {
                    CheckOutcome::Passed => t.passes += 1,
                    CheckOutcome::Failed => t.fails += 1,
                    CheckOutcome::Skipped => t.skips += 1,
                }
            }
            t
        })
        .collect()
}

async fn iteration(client: &Client, url: &str, stats: &mut Stats) {
    let start = Instant::now();
    match probe(client, url).await {
        Ok(sample) => {
            let failed = sample.is_failed();
            let report = evaluate(&sample.response);
            if !report.is_ok() {
                warn!("contract checks failed: {:?}", report.failed());
            }
            stats.record(sample.elapsed, failed, report);
        }
        Err(e) => {
            warn!("{}", e);
            stats.record(start.elapsed(), true, evaluate(&HealthResponse::unreachable()));
        }
    }
}

/// Run one VU until the deadline; always completes at least one iteration
async fn virtual_user(client: Client, url: String, deadline: Instant) -> Stats {
    let mut stats = Stats::default();
    loop {
        iteration(&client, &url, &mut stats).await;
        if Instant::now() >= deadline {
            break;
        }
    }
    stats
}

pub async fn run(config: &LoadConfig) -> Result<RunSummary, ProbeError> {
    let client = build_client(config.timeout)?;
    let started_at = chrono::Local::now();
    let deadline = Instant::now()
        .checked_add(config.duration)
        .ok_or(ProbeError::DurationOutOfRange(config.duration))?;
    let vus = config.vus.max(1);

    info!(
        "Starting {} VU(s) against {} for {:?}",
        vus, config.url, config.duration
    );

    let tasks: Vec<_> = (0..vus)
        .map(|_| tokio::spawn(virtual_user(client.clone(), config.url.clone(), deadline)))
        .collect();

    let mut stats = Stats::default();
    for result in futures::future::join_all(tasks).await {
        match result {
            Ok(vu_stats) => stats.merge(vu_stats),
            Err(e) => warn!("VU task join error: {}", e),
        }
    }

    Ok(summarize(config, started_at.to_rfc3339(), stats))
}

fn summarize(config: &LoadConfig, started_at: String, mut stats: Stats) -> RunSummary {
    stats.durations_ms.sort_by(|a, b| a.total_cmp(b));
    let iterations = stats.reports.len() as u64;
    let failure_rate = if iterations == 0 {
        0.0
    } else {
        stats.failed_requests as f64 / iterations as f64
    };
    let avg_ms = if stats.durations_ms.is_empty() {
        0.0
    } else {
        stats.durations_ms.iter().sum::<f64>() / stats.durations_ms.len() as f64
    };
    let p95_ms = percentile(&stats.durations_ms, 0.95);
    let max_ms = stats.durations_ms.last().copied().unwrap_or(0.0);

    let limits = config.thresholds;
    let thresholds = vec![
        ThresholdResult {
            metric: "http_req_duration",
            expression: format!("p(95)<{}", limits.p95_ms),
            actual: p95_ms,
            passed: p95_ms < limits.p95_ms,
        },
        ThresholdResult {
            metric: "http_req_failed",
            expression: format!("rate<{}", limits.max_failure_rate),
            actual: failure_rate,
            passed: failure_rate < limits.max_failure_rate,
        },
    ];

    let summary = RunSummary {
        group: crate::checks::GROUP,
        url: config.url.clone(),
        started_at,
        iterations,
        failed_requests: stats.failed_requests,
        failure_rate,
        avg_ms,
        p95_ms,
        max_ms,
        checks: tally(&stats.reports),
        thresholds,
    };

    info!(
        "Finished {} iteration(s): p95={:.1}ms, failed={:.1}%",
        summary.iterations,
        summary.p95_ms,
        summary.failure_rate * 100.0
    );
    summary
}
