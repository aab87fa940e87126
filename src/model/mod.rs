//! Wire types for test run data.
//!
//! These structs define the JSON shape served by the API and consumed by the
//! dashboard page, so every field keeps its camelCase name on the wire.

use serde::{Deserialize, Serialize};

/// Outcome of a test, a step, or a suite-level count bucket
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TestStatus {
    Passed,
    Failed,
    Skipped,
}

impl TestStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            TestStatus::Passed => "passed",
            TestStatus::Failed => "failed",
            TestStatus::Skipped => "skipped",
        }
    }
}

impl std::str::FromStr for TestStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "passed" => Ok(TestStatus::Passed),
            "failed" => Ok(TestStatus::Failed),
            "skipped" => Ok(TestStatus::Skipped),
            other => Err(format!("Unknown status: {}", other)),
        }
    }
}

/// Kind of artifact attached to a test result
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AttachmentKind {
    Image,
    Video,
    Text,
}

/// One step executed inside a test
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TestStep {
    pub description: String,
    pub status: TestStatus,
}

/// Named artifact produced by a test run
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TestAttachment {
    pub name: String,
    #[serde(rename = "type")]
    pub kind: AttachmentKind,
    pub path: String,
}

/// Setup/execution split of a test's duration, in milliseconds
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TestPerformance {
    pub setup: u64,
    pub execution: u64,
}

/// Aggregate summary record for one test run
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TestSuite {
    pub id: String,
    pub name: String,
    pub total_tests: u64,
    pub passed_tests: u64,
    pub failed_tests: u64,
    pub skipped_tests: u64,
    /// Total run duration in milliseconds
    pub duration: u64,
    pub timestamp: String,
}

impl TestSuite {
    /// Whether the per-status counts add up to the total.
    /// Consumers assume this holds; the store does not enforce it.
    pub fn counts_consistent(&self) -> bool {
        self.passed_tests + self.failed_tests + self.skipped_tests == self.total_tests
    }
}

/// One individual test case's outcome record
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TestResult {
    pub id: String,
    pub title: String,
    pub description: String,
    pub status: TestStatus,
    /// Duration in milliseconds
    pub duration: u64,
    pub browser: String,
    pub viewport: String,
    pub error_message: Option<String>,
    pub error_stack: Option<String>,
    pub steps: Vec<TestStep>,
    pub attachments: Vec<TestAttachment>,
    pub performance: TestPerformance,
}

/// Input for creating a suite; the store assigns the identifier
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewTestSuite {
    pub name: String,
    pub total_tests: u64,
    pub passed_tests: u64,
    pub failed_tests: u64,
    pub skipped_tests: u64,
    pub duration: u64,
    pub timestamp: String,
}

/// Input for creating a result; optional fields default to absent/empty
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewTestResult {
    pub title: String,
    pub description: String,
    pub status: TestStatus,
    pub duration: u64,
    pub browser: String,
    pub viewport: String,
    #[serde(default)]
    pub error_message: Option<String>,
    #[serde(default)]
    pub error_stack: Option<String>,
    #[serde(default)]
    pub steps: Vec<TestStep>,
    #[serde(default)]
    pub attachments: Vec<TestAttachment>,
    #[serde(default)]
    pub performance: TestPerformance,
}
