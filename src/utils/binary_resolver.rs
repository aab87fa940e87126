use anyhow::Result;
use std::path::PathBuf;

/// Env var overriding browser discovery
pub const BROWSER_ENV: &str = "LUMI_DASHBOARD_BROWSER";

/// Binary names probed on PATH, most specific first
const BROWSER_CANDIDATES: [&str; 6] = [
    "chromium",
    "chromium-browser",
    "google-chrome-stable",
    "google-chrome",
    "chrome",
    "headless_shell",
];

/// Locate a headless-capable Chromium binary.
///
/// The env override wins so deployments can pin an exact binary; otherwise
/// the candidate list is probed through the system PATH.
pub fn find_browser() -> Result<PathBuf> {
    if let Ok(configured) = std::env::var(BROWSER_ENV) {
        let path = PathBuf::from(&configured);
        if path.exists() {
            return Ok(path);
        }
        anyhow::bail!(
            "{} points to a missing binary: {}",
            BROWSER_ENV,
            path.display()
        );
    }

    for name in BROWSER_CANDIDATES {
        if let Ok(path) = which::which(name) {
            return Ok(path);
        }
    }

    Err(anyhow::anyhow!(
        "Could not find a Chromium-based browser on PATH. Install chromium or set {}.",
        BROWSER_ENV
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    // One test so the process-global env var is not mutated concurrently
    #[test]
    fn test_env_override() {
        let file = tempfile::NamedTempFile::new().unwrap();
        std::env::set_var(BROWSER_ENV, file.path());
        assert_eq!(find_browser().unwrap(), file.path());

        std::env::set_var(BROWSER_ENV, "/nonexistent/browser-binary");
        let err = find_browser().unwrap_err();
        assert!(err.to_string().contains("missing binary"));

        std::env::remove_var(BROWSER_ENV);
    }
}
