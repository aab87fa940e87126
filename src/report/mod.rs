pub mod html;

use anyhow::{Context, Result};
use std::path::Path;

use crate::metrics::{filter_results, ResultFilter};
use crate::render::{ensure_plausible, ChromiumRenderer, DocumentRenderer};
use crate::report::html::{build_report_html, ReportOptions};
use crate::store::ResultStore;

/// Generate a report from the store's current snapshot
pub async fn generate_report(
    store: &ResultStore,
    filter: &ResultFilter,
    format: &str,
    output: Option<&Path>,
) -> Result<()> {
    let suite = store
        .test_suite()
        .context("No test suite has been seeded")?;
    let results = filter_results(&store.test_results(), filter);
    let html = build_report_html(&suite, &results, &ReportOptions::default());

    match format {
        "html" => {
            if let Some(path) = output {
                std::fs::write(path, html)?;
                println!("HTML report saved to: {}", path.display());
            } else {
                println!("{}", html);
            }
            Ok(())
        }
        "pdf" => {
            let path = output.context("PDF output requires --output <path>")?;
            let renderer = ChromiumRenderer::new();
            let pdf = ensure_plausible(renderer.render_pdf(&html).await?)?;
            std::fs::write(path, pdf)?;
            println!("PDF report saved to: {}", path.display());
            Ok(())
        }
        _ => anyhow::bail!("Unknown format: {}", format),
    }
}
