//! Filter and derivation engine.
//!
//! Pure functions over result collections and suite snapshots. Nothing here
//! holds state between calls, and nothing mutates its input, so handlers can
//! call these concurrently without coordination. Degenerate inputs (empty
//! collections, zero totals) produce defined zeros, never NaN.

use std::collections::HashMap;

use serde::Serialize;

use crate::model::{TestResult, TestStatus, TestSuite};

/// Status predicate; the wire value "all" maps to `All`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StatusFilter {
    #[default]
    All,
    Only(TestStatus),
}

impl StatusFilter {
    /// Parse the wire value: "all" (or empty) matches everything, anything
    /// else must be a known status.
    pub fn parse(value: &str) -> Result<Self, String> {
        if value.is_empty() || value.eq_ignore_ascii_case("all") {
            Ok(StatusFilter::All)
        } else {
            value.parse().map(StatusFilter::Only)
        }
    }

    fn matches(&self, status: TestStatus) -> bool {
        match self {
            StatusFilter::All => true,
            StatusFilter::Only(only) => *only == status,
        }
    }
}

/// Browser predicate; "all" matches everything, labels compare
/// case-insensitively
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum BrowserFilter {
    #[default]
    All,
    Only(String),
}

impl BrowserFilter {
    pub fn parse(value: &str) -> Self {
        if value.is_empty() || value.eq_ignore_ascii_case("all") {
            BrowserFilter::All
        } else {
            BrowserFilter::Only(value.to_string())
        }
    }

    fn matches(&self, browser: &str) -> bool {
        match self {
            BrowserFilter::All => true,
            BrowserFilter::Only(label) => label.eq_ignore_ascii_case(browser),
        }
    }
}

/// Combined search/status/browser predicate
#[derive(Debug, Clone, Default)]
pub struct ResultFilter {
    pub search: String,
    pub status: StatusFilter,
    pub browser: BrowserFilter,
}

impl ResultFilter {
    fn matches(&self, result: &TestResult) -> bool {
        let matches_search = self.search.is_empty() || {
            let needle = self.search.to_lowercase();
            result.title.to_lowercase().contains(&needle)
                || result.description.to_lowercase().contains(&needle)
        };

        matches_search
            && self.status.matches(result.status)
            && self.browser.matches(&result.browser)
    }
}

/// Apply the predicate, preserving input order.
pub fn filter_results(results: &[TestResult], filter: &ResultFilter) -> Vec<TestResult> {
    results
        .iter()
        .filter(|r| filter.matches(r))
        .cloned()
        .collect()
}

/// Clamped window over the collection. The dashboard grows the window
/// monotonically for "load more"; there is no cursor state.
pub fn paginate(results: &[TestResult], offset: usize, page_size: usize) -> &[TestResult] {
    let start = offset.min(results.len());
    let end = start.saturating_add(page_size).min(results.len());
    &results[start..end]
}

/// Per-status percentages derived from suite counts
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SuiteMetrics {
    pub passed_pct: f64,
    pub failed_pct: f64,
    pub skipped_pct: f64,
}

/// Percentages from suite counts; all zero when the suite is empty.
pub fn derive_metrics(suite: &TestSuite) -> SuiteMetrics {
    if suite.total_tests == 0 {
        return SuiteMetrics {
            passed_pct: 0.0,
            failed_pct: 0.0,
            skipped_pct: 0.0,
        };
    }
    let total = suite.total_tests as f64;
    SuiteMetrics {
        passed_pct: suite.passed_tests as f64 / total * 100.0,
        failed_pct: suite.failed_tests as f64 / total * 100.0,
        skipped_pct: suite.skipped_tests as f64 / total * 100.0,
    }
}

/// Result counts grouped by browser label.
pub fn browser_distribution(results: &[TestResult]) -> HashMap<String, usize> {
    let mut counts = HashMap::new();
    for result in results {
        *counts.entry(result.browser.clone()).or_insert(0) += 1;
    }
    counts
}

/// Arithmetic mean of result durations in milliseconds; 0 for an empty
/// collection.
pub fn average_duration(results: &[TestResult]) -> u64 {
    if results.is_empty() {
        return 0;
    }
    let total: u64 = results.iter().map(|r| r.duration).sum();
    total / results.len() as u64
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::TestPerformance;

    fn result(title: &str, description: &str, status: TestStatus, browser: &str) -> TestResult {
        TestResult {
            id: format!("id-{}", title),
            title: title.to_string(),
            description: description.to_string(),
            status,
            duration: 1000,
            browser: browser.to_string(),
            viewport: "Desktop (1920x1080)".to_string(),
            error_message: None,
            error_stack: None,
            steps: vec![],
            attachments: vec![],
            performance: TestPerformance::default(),
        }
    }

    fn sample_results() -> Vec<TestResult> {
        vec![
            result(
                "Customer Login Journey",
                "Sign in and reach the dashboard",
                TestStatus::Passed,
                "Chromium",
            ),
            result(
                "Product Purchase Flow",
                "Cart and checkout",
                TestStatus::Failed,
                "Firefox",
            ),
            result(
                "Support Chat",
                "Live chat widget",
                TestStatus::Skipped,
                "Chromium",
            ),
        ]
    }

    #[test]
    fn test_empty_filter_is_identity() {
        let results = sample_results();
        let filtered = filter_results(&results, &ResultFilter::default());
        assert_eq!(filtered.len(), results.len());
        let titles: Vec<&str> = filtered.iter().map(|r| r.title.as_str()).collect();
        assert_eq!(
            titles,
            vec!["Customer Login Journey", "Product Purchase Flow", "Support Chat"]
        );
    }

    #[test]
    fn test_search_is_case_insensitive() {
        let results = sample_results();
        let filter = ResultFilter {
            search: "login".to_string(),
            ..Default::default()
        };
        let filtered = filter_results(&results, &filter);
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].title, "Customer Login Journey");
    }

    #[test]
    fn test_search_matches_description() {
        let results = sample_results();
        let filter = ResultFilter {
            search: "CHECKOUT".to_string(),
            ..Default::default()
        };
        let filtered = filter_results(&results, &filter);
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].title, "Product Purchase Flow");
    }

    #[test]
    fn test_status_and_browser_filters_combine() {
        let results = sample_results();
        let filter = ResultFilter {
            search: String::new(),
            status: StatusFilter::Only(TestStatus::Passed),
            browser: BrowserFilter::parse("chromium"),
        };
        let filtered = filter_results(&results, &filter);
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].title, "Customer Login Journey");
    }

    #[test]
    fn test_filter_parsing() {
        assert_eq!(StatusFilter::parse("all").unwrap(), StatusFilter::All);
        assert_eq!(StatusFilter::parse("").unwrap(), StatusFilter::All);
        assert_eq!(
            StatusFilter::parse("failed").unwrap(),
            StatusFilter::Only(TestStatus::Failed)
        );
        assert!(StatusFilter::parse("bogus").is_err());
        assert_eq!(BrowserFilter::parse("All"), BrowserFilter::All);
        assert!(BrowserFilter::parse("Firefox").matches("firefox"));
    }

    #[test]
    fn test_paginate_window() {
        let results = sample_results();
        assert_eq!(paginate(&results, 0, 2).len(), 2);
        assert_eq!(paginate(&results, 0, 10).len(), 3);
        assert_eq!(paginate(&results, 2, 10).len(), 1);
        assert!(paginate(&results, 5, 10).is_empty());
        assert!(paginate(&results, 0, 0).is_empty());
    }

    #[test]
    fn test_derive_metrics() {
        let suite = TestSuite {
            id: "s".to_string(),
            name: "Suite".to_string(),
            total_tests: 7,
            passed_tests: 5,
            failed_tests: 1,
            skipped_tests: 1,
            duration: 89000,
            timestamp: String::new(),
        };
        let metrics = derive_metrics(&suite);
        assert!((metrics.passed_pct - 500.0 / 7.0).abs() < 1e-9);
        assert!((metrics.failed_pct - 100.0 / 7.0).abs() < 1e-9);
        assert!((metrics.skipped_pct - 100.0 / 7.0).abs() < 1e-9);
    }

    #[test]
    fn test_derive_metrics_zero_total_is_zero_not_nan() {
        let suite = TestSuite {
            id: "s".to_string(),
            name: "Empty".to_string(),
            total_tests: 0,
            passed_tests: 0,
            failed_tests: 0,
            skipped_tests: 0,
            duration: 0,
            timestamp: String::new(),
        };
        let metrics = derive_metrics(&suite);
        assert_eq!(metrics.passed_pct, 0.0);
        assert_eq!(metrics.failed_pct, 0.0);
        assert_eq!(metrics.skipped_pct, 0.0);
    }

    #[test]
    fn test_browser_distribution() {
        let results = vec![
            result("a", "", TestStatus::Passed, "Chromium"),
            result("b", "", TestStatus::Passed, "Chromium"),
            result("c", "", TestStatus::Passed, "Firefox"),
        ];
        let counts = browser_distribution(&results);
        assert_eq!(counts.get("Chromium"), Some(&2));
        assert_eq!(counts.get("Firefox"), Some(&1));
        assert_eq!(counts.len(), 2);
    }

    #[test]
    fn test_average_duration() {
        assert_eq!(average_duration(&[]), 0);

        let mut a = result("a", "", TestStatus::Passed, "Chromium");
        let mut b = result("b", "", TestStatus::Passed, "Chromium");
        a.duration = 1000;
        b.duration = 3000;
        assert_eq!(average_duration(&[a, b]), 2000);
    }
}
