//! Printable HTML document builder.
//!
//! Translates a suite snapshot and a result collection into a
//! self-contained A4 document for the PDF renderer. Output is deterministic
//! for a fixed `generated_at`, every free-text field is escaped before
//! interpolation, and no external resource is referenced.

use crate::model::{TestResult, TestStatus, TestSuite};

/// @page size handed to the print engine
pub const PAGE_SIZE: &str = "A4";
/// Vertical / horizontal page margins
pub const PAGE_MARGIN: &str = "24mm 16mm";

const DEFAULT_TITLE: &str = "Playwright Test Report";

/// Optional overrides for the document header
#[derive(Debug, Clone, Default)]
pub struct ReportOptions {
    pub title: Option<String>,
    /// Fixed generation timestamp; defaults to the current local time
    pub generated_at: Option<String>,
}

/// Build the complete report document.
pub fn build_report_html(
    suite: &TestSuite,
    results: &[TestResult],
    opts: &ReportOptions,
) -> String {
    let title = opts.title.as_deref().unwrap_or(DEFAULT_TITLE);
    let generated_at = opts
        .generated_at
        .clone()
        .unwrap_or_else(|| chrono::Local::now().format("%Y-%m-%d %H:%M:%S").to_string());

    let mut rows = String::new();
    for result in results {
        let error_cell = result
            .error_message
            .as_deref()
            .map(html_escape)
            .unwrap_or_default();

        rows.push_str(&format!(
            r#"
      <tr>
        <td>{title}</td>
        <td><span style="{badge}">{status}</span></td>
        <td>{duration:.1}s</td>
        <td>{browser}</td>
        <td>{viewport}</td>
        <td>{error}</td>
      </tr>
"#,
            title = html_escape(&result.title),
            badge = status_badge(result.status),
            status = result.status.as_str().to_uppercase(),
            duration = result.duration as f64 / 1000.0,
            browser = html_escape(&result.browser),
            viewport = html_escape(&result.viewport),
            error = error_cell,
        ));
    }

    format!(
        r#"<!DOCTYPE html>
<html lang="en">
  <head>
    <meta charset="utf-8" />
    <meta name="viewport" content="width=device-width, initial-scale=1" />
    <title>{title}</title>
    <style>
      @page {{ size: {page_size}; margin: {page_margin}; }}
      body {{ font-family: -apple-system, BlinkMacSystemFont, "Inter", Segoe UI, Roboto, Helvetica, Arial, sans-serif; color: #111827; }}
      .muted {{ color: #6B7280; }}
      .h1 {{ font-size: 20px; font-weight: 700; margin: 0; }}
      .h2 {{ font-size: 14px; font-weight: 600; margin: 0 0 8px; }}
      .section {{ margin: 18px 0; }}
      .card {{ border: 1px solid #E5E7EB; border-radius: 8px; padding: 12px; }}
      .grid {{ display: grid; grid-template-columns: repeat(4, 1fr); gap: 12px; }}
      .kpi .label {{ font-size: 11px; color: #6B7280; }}
      .kpi .value {{ font-size: 18px; font-weight: 700; }}
      table {{ width: 100%; border-collapse: collapse; }}
      th, td {{ text-align: left; padding: 8px 10px; border-bottom: 1px solid #E5E7EB; font-size: 12px; vertical-align: top; }}
      th {{ font-size: 11px; color: #374151; letter-spacing: .01em; }}
      .header {{ display: flex; justify-content: space-between; align-items: baseline; margin-bottom: 12px; }}
      .small {{ font-size: 11px; }}
    </style>
  </head>
  <body>
    <div class="header">
      <div>
        <div class="h1">{title}</div>
        <div class="small muted">Generated: {generated_at}</div>
      </div>
      <div class="small muted">Duration: {suite_duration}</div>
    </div>

    <div class="section">
      <div class="grid">
        <div class="card kpi">
          <div class="label">Total</div>
          <div class="value">{total}</div>
        </div>
        <div class="card kpi">
          <div class="label">Passed</div>
          <div class="value" style="color:#16A34A">{passed}</div>
        </div>
        <div class="card kpi">
          <div class="label">Failed</div>
          <div class="value" style="color:#DC2626">{failed}</div>
        </div>
        <div class="card kpi">
          <div class="label">Skipped</div>
          <div class="value" style="color:#CA8A04">{skipped}</div>
        </div>
      </div>
    </div>

    <div class="section">
      <div class="h2">Test Results</div>
      <table>
        <thead>
          <tr>
            <th style="width:30%">Title</th>
            <th>Status</th>
            <th>Duration</th>
            <th>Browser</th>
            <th>Viewport</th>
            <th style="width:35%">Error</th>
          </tr>
        </thead>
        <tbody>
{rows}
        </tbody>
      </table>
    </div>
  </body>
</html>"#,
        title = html_escape(title),
        generated_at = html_escape(&generated_at),
        suite_duration = format_duration(suite.duration),
        page_size = PAGE_SIZE,
        page_margin = PAGE_MARGIN,
        total = suite.total_tests,
        passed = suite.passed_tests,
        failed = suite.failed_tests,
        skipped = suite.skipped_tests,
        rows = rows,
    )
}

const BADGE_BASE: &str =
    "display:inline-block;padding:2px 8px;border-radius:9999px;font-size:11px;font-weight:600;line-height:1;";

fn status_badge(status: TestStatus) -> String {
    let colors = match status {
        TestStatus::Passed => "background:#E7F6EC;color:#166534;border:1px solid #BBE5C7",
        TestStatus::Failed => "background:#FDE8E8;color:#991B1B;border:1px solid #F5C2C2",
        TestStatus::Skipped => "background:#FEF7CD;color:#854D0E;border:1px solid #F5E6A7",
    };
    format!("{}{}", BADGE_BASE, colors)
}

/// Escape the five HTML-significant characters; applied to every free-text
/// field before interpolation.
pub fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#039;")
}

/// Suite duration shown in the header, e.g. "1m 29s"
fn format_duration(ms: u64) -> String {
    let minutes = ms / 60000;
    let seconds = (ms % 60000) / 1000;
    format!("{}m {}s", minutes, seconds)
}
