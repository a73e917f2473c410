//! Health payload contract.
//!
//! Each named check inspects one aspect of a `GET /api/health` response.
//! Shape checks on a field only run when the field is present, so a missing
//! field fails exactly its presence check.

use serde::Serialize;
use serde_json::{Map, Value};

pub const GROUP: &str = "Health Endpoint Contract Tests";

pub const STATUS_CODE_IS_200: &str = "Status code is 200";
pub const HAS_STATUS_FIELD: &str = "Response has status field";
pub const STATUS_FIELD_IS_OK: &str = "Status field is \"ok\"";
pub const HAS_AUTH_FIELD: &str = "Response has auth field";
pub const AUTH_FIELD_IS_STRING: &str = "Auth field is string";
pub const AUTH_FIELD_IS_KNOWN: &str = "Auth field is enabled or disabled";
pub const HAS_AUTH_TYPE_FIELD: &str = "Response has auth_type field";
pub const HAS_HEADER_NAME_FIELD: &str = "Response has header_name field";
pub const CONTENT_TYPE_IS_JSON: &str = "Content-Type is application/json";

/// Every check, in evaluation order
pub const ALL_CHECKS: [&str; 9] = [
    STATUS_CODE_IS_200,
    HAS_STATUS_FIELD,
    STATUS_FIELD_IS_OK,
    HAS_AUTH_FIELD,
    AUTH_FIELD_IS_STRING,
    AUTH_FIELD_IS_KNOWN,
    HAS_AUTH_TYPE_FIELD,
    HAS_HEADER_NAME_FIELD,
    CONTENT_TYPE_IS_JSON,
];

const AUTH_MODES: [&str; 2] = ["enabled", "disabled"];

/// The parts of an HTTP response the contract looks at
#[derive(Debug, Clone, PartialEq)]
pub struct HealthResponse {
    pub status: u16,
    pub content_type: Option<String>,
    pub body: String,
}

impl HealthResponse {
    /// Stand-in for a request that never got a response
    pub fn unreachable() -> Self {
        Self {
            status: 0,
            content_type: None,
            body: String::new(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum CheckOutcome {
    Passed,
    Failed,
    /// Prerequisite check failed; counts as neither pass nor fail
    Skipped,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CheckResult {
    pub name: &'static str,
    pub outcome: CheckOutcome,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub detail: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct ContractReport {
    pub checks: Vec<CheckResult>,
}

impl ContractReport {
    pub fn outcome(&self, name: &str) -> Option<CheckOutcome> {
        self.checks.iter().find(|c| c.name == name).map(|c| c.outcome)
    }

    pub fn failed(&self) -> Vec<&'static str> {
        self.checks
            .iter()
            .filter(|c| c.outcome == CheckOutcome::Failed)
            .map(|c| c.name)
            .collect()
    }

    pub fn is_ok(&self) -> bool {
        self.checks.iter().all(|c| c.outcome != CheckOutcome::Failed)
    }
}

#[derive(Default)]
struct Checks {
    results: Vec<CheckResult>,
}

impl Checks {
    fn check(&mut self, name: &'static str, passed: bool, detail: impl FnOnce() -> String) -> bool {
        let (outcome, detail) = if passed {
            (CheckOutcome::Passed, None)
        } else {
            (CheckOutcome::Failed, Some(detail()))
        };
        self.results.push(CheckResult { name, outcome, detail });
        passed
    }

    fn skip(&mut self, name: &'static str) {
        self.results.push(CheckResult {
            name,
            outcome: CheckOutcome::Skipped,
            detail: None,
        });
    }

    fn presence(&mut self, name: &'static str, body: Option<&Map<String, Value>>, field: &str) -> bool {
        match body {
            Some(obj) => self.check(name, obj.contains_key(field), || format!("missing `{}`", field)),
            None => self.check(name, false, || "body is not a JSON object".to_string()),
        }
    }
}

fn parse_object(body: &str) -> Option<Map<String, Value>> {
    match serde_json::from_str(body) {
        Ok(Value::Object(map)) => Some(map),
        _ => None,
    }
}

/// Run every contract check against one response
pub fn evaluate(response: &HealthResponse) -> ContractReport {
    let body = parse_object(&response.body);
    let obj = body.as_ref();
    let mut checks = Checks::default();

    checks.check(STATUS_CODE_IS_200, response.status == 200, || format!("got {}", response.status));

    if checks.presence(HAS_STATUS_FIELD, obj, "status") {
        let status = obj.and_then(|o| o.get("status"));
        checks.check(STATUS_FIELD_IS_OK, status == Some(&Value::from("ok")), || {
            format!("status is {}", status.map(Value::to_string).unwrap_or_default())
        });
    } else {
        checks.skip(STATUS_FIELD_IS_OK);
    }

    if checks.presence(HAS_AUTH_FIELD, obj, "auth") {
        let auth = obj.and_then(|o| o.get("auth"));
        let auth_str = auth.and_then(Value::as_str);
        checks.check(AUTH_FIELD_IS_STRING, auth_str.is_some(), || {
            format!("auth is {}", auth.map(Value::to_string).unwrap_or_default())
        });
        checks.check(
            AUTH_FIELD_IS_KNOWN,
            auth_str.is_some_and(|a| AUTH_MODES.contains(&a)),
            || format!("auth is {}", auth.map(Value::to_string).unwrap_or_default()),
        );
    } else {
        checks.skip(AUTH_FIELD_IS_STRING);
        checks.skip(AUTH_FIELD_IS_KNOWN);
    }

    checks.presence(HAS_AUTH_TYPE_FIELD, obj, "auth_type");
    checks.presence(HAS_HEADER_NAME_FIELD, obj, "header_name");

    let content_type = response.content_type.as_deref().unwrap_or("");
    checks.check(
        CONTENT_TYPE_IS_JSON,
        content_type.to_ascii_lowercase().contains("application/json"),
        || format!("content-type is {:?}", content_type),
    );

    ContractReport { checks: checks.results }
}
