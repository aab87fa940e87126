//! In-memory result store.
//!
//! Sole owner of the test suite record and the result collection. The store
//! is constructed explicitly and handed to the server and CLI through
//! dependency injection; nothing reads it through a global. Durability is
//! process lifetime only.

pub mod seed;

use std::sync::RwLock;

use chrono::Utc;
use uuid::Uuid;

use crate::model::{NewTestResult, NewTestSuite, TestResult, TestSuite};

/// Process-lifetime storage for one suite summary and its results.
///
/// Readers get snapshot clones, so handlers never observe mid-mutation
/// state. Mutation happens at seed time and through the create operations.
#[derive(Debug, Default)]
pub struct ResultStore {
    suite: RwLock<Option<TestSuite>>,
    results: RwLock<Vec<TestResult>>,
}

impl ResultStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current suite snapshot, `None` before initialization
    pub fn test_suite(&self) -> Option<TestSuite> {
        self.suite.read().expect("suite lock poisoned").clone()
    }

    /// Full result collection in insertion order
    pub fn test_results(&self) -> Vec<TestResult> {
        self.results.read().expect("results lock poisoned").clone()
    }

    /// Replace the suite wholesale and assign a fresh identifier
    pub fn create_test_suite(&self, input: NewTestSuite) -> TestSuite {
        let suite = TestSuite {
            id: Uuid::new_v4().to_string(),
            name: input.name,
            total_tests: input.total_tests,
            passed_tests: input.passed_tests,
            failed_tests: input.failed_tests,
            skipped_tests: input.skipped_tests,
            duration: input.duration,
            timestamp: input.timestamp,
        };
        *self.suite.write().expect("suite lock poisoned") = Some(suite.clone());
        suite
    }

    /// Append one result with a fresh identifier
    pub fn create_test_result(&self, input: NewTestResult) -> TestResult {
        let result = TestResult {
            id: Uuid::new_v4().to_string(),
            title: input.title,
            description: input.description,
            status: input.status,
            duration: input.duration,
            browser: input.browser,
            viewport: input.viewport,
            error_message: input.error_message,
            error_stack: input.error_stack,
            steps: input.steps,
            attachments: input.attachments,
            performance: input.performance,
        };
        self.results
            .write()
            .expect("results lock poisoned")
            .push(result.clone());
        result
    }
}

/// Timestamp format used for seeded suites
pub fn now_timestamp() -> String {
    Utc::now().to_rfc3339()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::TestStatus;

    fn new_result(title: &str, status: TestStatus, browser: &str) -> NewTestResult {
        NewTestResult {
            title: title.to_string(),
            description: String::new(),
            status,
            duration: 1000,
            browser: browser.to_string(),
            viewport: "Desktop (1920x1080)".to_string(),
            error_message: None,
            error_stack: None,
            steps: vec![],
            attachments: vec![],
            performance: Default::default(),
        }
    }

    #[test]
    fn test_suite_absent_before_initialization() {
        let store = ResultStore::new();
        assert!(store.test_suite().is_none());
        assert!(store.test_results().is_empty());
    }

    #[test]
    fn test_create_suite_replaces_wholesale() {
        let store = ResultStore::new();
        let first = store.create_test_suite(NewTestSuite {
            name: "Run 1".to_string(),
            total_tests: 7,
            passed_tests: 5,
            failed_tests: 1,
            skipped_tests: 1,
            duration: 89000,
            timestamp: now_timestamp(),
        });
        assert!(first.counts_consistent());

        let second = store.create_test_suite(NewTestSuite {
            name: "Run 2".to_string(),
            total_tests: 1,
            passed_tests: 1,
            failed_tests: 0,
            skipped_tests: 0,
            duration: 1000,
            timestamp: now_timestamp(),
        });

        let current = store.test_suite().unwrap();
        assert_eq!(current.id, second.id);
        assert_ne!(first.id, second.id);
        assert_eq!(current.name, "Run 2");
    }

    #[test]
    fn test_results_keep_insertion_order() {
        let store = ResultStore::new();
        store.create_test_result(new_result("first", TestStatus::Passed, "Chromium"));
        store.create_test_result(new_result("second", TestStatus::Failed, "Firefox"));
        store.create_test_result(new_result("third", TestStatus::Skipped, "WebKit"));

        let titles: Vec<String> = store
            .test_results()
            .into_iter()
            .map(|r| r.title)
            .collect();
        assert_eq!(titles, vec!["first", "second", "third"]);
    }

    #[test]
    fn test_result_ids_are_unique() {
        let store = ResultStore::new();
        let a = store.create_test_result(new_result("a", TestStatus::Passed, "Chromium"));
        let b = store.create_test_result(new_result("b", TestStatus::Passed, "Chromium"));
        assert_ne!(a.id, b.id);
    }

    #[test]
    fn test_reads_are_restartable() {
        let store = ResultStore::new();
        store.create_test_result(new_result("only", TestStatus::Passed, "Chromium"));
        assert_eq!(store.test_results().len(), 1);
        assert_eq!(store.test_results().len(), 1);
    }
}
