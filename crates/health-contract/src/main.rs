use std::process::ExitCode;
use std::time::Duration;

use clap::Parser;
use health_contract::runner::{CheckTally, DEFAULT_URL};
use health_contract::{run, LoadConfig, RunSummary, Thresholds};
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(
    name = "health-contract",
    about = "Load-checks GET /api/health and asserts its response contract"
)]
struct Args {
    /// Health endpoint to probe
    #[arg(long, env = "HEALTH_CONTRACT_URL", default_value = DEFAULT_URL)]
    url: String,

    /// Length of the load stage
    #[arg(long, default_value_t = 2)]
    duration_secs: u64,

    /// Concurrent virtual users
    #[arg(long, default_value_t = 1)]
    vus: u32,

    /// Per-request timeout
    #[arg(long, default_value_t = 10)]
    timeout_secs: u64,

    /// Threshold: p(95) request duration in milliseconds
    #[arg(long, default_value_t = 500.0)]
    p95_ms: f64,

    /// Threshold: share of failed requests
    #[arg(long, default_value_t = 0.1)]
    max_failure_rate: f64,

    /// Also exit non-zero when any contract check failed
    #[arg(long)]
    strict: bool,

    /// Print the summary as JSON
    #[arg(long)]
    json: bool,
}

impl Args {
    fn load_config(&self) -> LoadConfig {
        LoadConfig {
            url: self.url.clone(),
            vus: self.vus,
            duration: Duration::from_secs(self.duration_secs),
            timeout: Duration::from_secs(self.timeout_secs),
            thresholds: Thresholds {
                p95_ms: self.p95_ms,
                max_failure_rate: self.max_failure_rate,
            },
        }
    }
}

fn mark(ok: bool) -> &'static str {
    if ok {
        "✓"
    } else {
        "✗"
    }
}

fn print_check(check: &CheckTally) {
    let ok = check.fails == 0;
    let mut line = format!("    {} {}", mark(ok), check.name);
    if !ok {
        line.push_str(&format!(" ({} passed, {} failed)", check.passes, check.fails));
    }
    if check.skips > 0 {
        line.push_str(&format!(" [skipped {}]", check.skips));
    }
    println!("{}", line);
}

fn print_summary(summary: &RunSummary) {
    println!("█ {}  ({})", summary.group, summary.url);
    println!();
    for check in &summary.checks {
        print_check(check);
    }
    println!();
    println!(
        "  iterations: {}  avg={:.2}ms  p(95)={:.2}ms  max={:.2}ms  failed={:.2}%",
        summary.iterations,
        summary.avg_ms,
        summary.p95_ms,
        summary.max_ms,
        summary.failure_rate * 100.0
    );
    for t in &summary.thresholds {
        println!("  {} {}: {} (actual {:.3})", mark(t.passed), t.metric, t.expression, t.actual);
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<ExitCode> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("health_contract=info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();
    let summary = run(&args.load_config()).await?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&summary)?);
    } else {
        print_summary(&summary);
    }

    let failed = !summary.thresholds_ok() || (args.strict && !summary.checks_ok());
    Ok(if failed { ExitCode::FAILURE } else { ExitCode::SUCCESS })
}
