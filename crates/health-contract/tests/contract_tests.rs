use std::time::Duration;

use health_contract::checks::{HAS_AUTH_FIELD, STATUS_CODE_IS_200};
use health_contract::{run, LoadConfig, Thresholds};

const HEALTHY: &str = r#"{"status":"ok","auth":"enabled","auth_type":"header","header_name":"X-API-Key"}"#;

fn config(url: String) -> LoadConfig {
    LoadConfig {
        url,
        vus: 2,
        duration: Duration::from_millis(200),
        timeout: Duration::from_secs(5),
        thresholds: Thresholds::default(),
    }
}

#[tokio::test]
async fn healthy_endpoint_passes_checks_and_thresholds() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("GET", "/api/health")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(HEALTHY)
        .expect_at_least(2)
        .create_async()
        .await;

    let summary = run(&config(format!("{}/api/health", server.url()))).await.unwrap();

    mock.assert_async().await;
    assert!(summary.iterations >= 2);
    assert_eq!(summary.failed_requests, 0);
    assert!(summary.checks_ok());
    assert!(summary.thresholds_ok());
}

#[tokio::test]
async fn missing_auth_fails_only_auth_presence() {
    let mut server = mockito::Server::new_async().await;
    server
        .mock("GET", "/api/health")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"{"status":"ok","auth_type":"header","header_name":"X-API-Key"}"#)
        .expect_at_least(1)
        .create_async()
        .await;

    let summary = run(&config(format!("{}/api/health", server.url()))).await.unwrap();

    let failing: Vec<_> = summary.checks.iter().filter(|c| c.fails > 0).map(|c| c.name).collect();
    assert_eq!(failing, vec![HAS_AUTH_FIELD]);
    // The request itself succeeded
    assert!(summary.thresholds_ok());
}

#[tokio::test]
async fn server_errors_cross_failure_threshold() {
    let mut server = mockito::Server::new_async().await;
    server
        .mock("GET", "/api/health")
        .with_status(500)
        .with_body("boom")
        .expect_at_least(1)
        .create_async()
        .await;

    let summary = run(&config(format!("{}/api/health", server.url()))).await.unwrap();

    assert_eq!(summary.failure_rate, 1.0);
    assert!(!summary.thresholds_ok());
    let code = summary.checks.iter().find(|c| c.name == STATUS_CODE_IS_200).unwrap();
    assert_eq!(code.passes, 0);
}
