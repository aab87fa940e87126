//! Document renderer boundary.
//!
//! The dashboard does not render PDFs itself. It hands a complete HTML
//! document to an external rendering collaborator and gets a byte stream
//! back. `DocumentRenderer` is that seam; `ChromiumRenderer` is the
//! production implementation driving a headless Chromium binary.

use std::path::PathBuf;
use std::process::Stdio;
use std::time::Duration;

use async_trait::async_trait;
use thiserror::Error;
use uuid::Uuid;

/// Byte streams smaller than this are treated as a generation failure
pub const MIN_PDF_BYTES: usize = 1000;

/// Upper bound on one render round trip; the request fails rather than hang
pub const RENDER_TIMEOUT: Duration = Duration::from_secs(30);

#[derive(Debug, Error)]
pub enum RenderError {
    #[error("No headless browser available: {0}")]
    BrowserUnavailable(String),
    #[error("PDF rendering timed out after {0:?}")]
    Timeout(Duration),
    #[error("Renderer exited with failure: {0}")]
    Failed(String),
    #[error("Renderer produced an implausibly small output ({0} bytes)")]
    TruncatedOutput(usize),
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// External collaborator that turns an HTML document into a PDF byte stream
#[async_trait]
pub trait DocumentRenderer: Send + Sync {
    async fn render_pdf(&self, html: &str) -> Result<Vec<u8>, RenderError>;
}

/// Reject implausibly small renderer output. Callers run every byte stream
/// through this before treating it as a finished document.
pub fn ensure_plausible(bytes: Vec<u8>) -> Result<Vec<u8>, RenderError> {
    if bytes.len() < MIN_PDF_BYTES {
        return Err(RenderError::TruncatedOutput(bytes.len()));
    }
    Ok(bytes)
}

/// Temp directory holding the input page and output PDF for one render.
/// Removal happens on drop, so success, failure, and timeout paths all
/// release it.
struct RenderWorkspace {
    dir: PathBuf,
}

impl RenderWorkspace {
    fn create() -> Result<Self, RenderError> {
        let dir = std::env::temp_dir().join(format!("lumi_dashboard_render_{}", Uuid::new_v4()));
        std::fs::create_dir_all(&dir)?;
        Ok(Self { dir })
    }

    fn page_path(&self) -> PathBuf {
        self.dir.join("report.html")
    }

    fn pdf_path(&self) -> PathBuf {
        self.dir.join("report.pdf")
    }
}

impl Drop for RenderWorkspace {
    fn drop(&mut self) {
        let _ = std::fs::remove_dir_all(&self.dir);
    }
}

/// Headless Chromium invocation via `--print-to-pdf`
pub struct ChromiumRenderer {
    timeout: Duration,
}

impl ChromiumRenderer {
    pub fn new() -> Self {
        Self {
            timeout: RENDER_TIMEOUT,
        }
    }

    pub fn with_timeout(timeout: Duration) -> Self {
        Self { timeout }
    }
}

impl Default for ChromiumRenderer {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl DocumentRenderer for ChromiumRenderer {
    async fn render_pdf(&self, html: &str) -> Result<Vec<u8>, RenderError> {
        let browser = crate::utils::binary_resolver::find_browser()
            .map_err(|e| RenderError::BrowserUnavailable(e.to_string()))?;

        let workspace = RenderWorkspace::create()?;
        std::fs::write(workspace.page_path(), html)?;

        log::debug!("Rendering PDF via {}", browser.display());

        let child = tokio::process::Command::new(&browser)
            .arg("--headless")
            .arg("--disable-gpu")
            .arg("--no-sandbox")
            .arg("--no-pdf-header-footer")
            .arg(format!(
                "--print-to-pdf={}",
                workspace.pdf_path().display()
            ))
            .arg(format!("file://{}", workspace.page_path().display()))
            .stdout(Stdio::null())
            .stderr(Stdio::piped())
            // Dropping the handle on timeout must take the browser with it
            .kill_on_drop(true)
            .spawn()?;

        let output = match tokio::time::timeout(self.timeout, child.wait_with_output()).await {
            Ok(result) => result?,
            Err(_) => return Err(RenderError::Timeout(self.timeout)),
        };

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(RenderError::Failed(stderr.trim().to_string()));
        }

        let bytes = std::fs::read(workspace.pdf_path())?;
        log::info!("PDF generated, size: {} bytes", bytes.len());
        Ok(bytes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ensure_plausible_rejects_small_streams() {
        let err = ensure_plausible(vec![0u8; 10]).unwrap_err();
        match err {
            RenderError::TruncatedOutput(len) => assert_eq!(len, 10),
            other => panic!("unexpected error: {}", other),
        }
    }

    #[test]
    fn test_ensure_plausible_passes_complete_streams() {
        let bytes = vec![0u8; MIN_PDF_BYTES];
        assert_eq!(ensure_plausible(bytes).unwrap().len(), MIN_PDF_BYTES);
    }

    #[test]
    fn test_workspace_released_on_drop() {
        let dir = {
            let workspace = RenderWorkspace::create().unwrap();
            std::fs::write(workspace.page_path(), "<html></html>").unwrap();
            assert!(workspace.page_path().exists());
            workspace.dir.clone()
        };
        assert!(!dir.exists());
    }
}
