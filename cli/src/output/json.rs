//! JSON output.
//!
//! `JsonRenderer` prints pretty JSON documents to stdout; `format_error` is
//! the error-object formatter used by every `--json` code path on failure.

use anyhow::{Context, Result};
use serde::Serialize;
use serde_json::json;

use crate::output::{PlatformReport, VersionReport};

/// Format a JSON error object.
///
/// Output (pretty-printed):
/// ```json
/// {
///   "error": true,
///   "message": "...",
///   "code": "..."
/// }
/// ```
///
/// # Errors
///
/// Returns an error if JSON serialization fails.
pub fn format_error(message: &str, code: &str) -> Result<String> {
    let obj = json!({
        "error": true,
        "message": message,
        "code": code,
    });
    serde_json::to_string_pretty(&obj).context("JSON serialization failed")
}

/// Renders command results as JSON documents.
pub struct JsonRenderer;

impl JsonRenderer {
    fn print(value: &impl Serialize) -> Result<()> {
        let out = serde_json::to_string_pretty(value).context("JSON serialization failed")?;
        println!("{out}");
        Ok(())
    }

    /// # Errors
    ///
    /// Returns an error if JSON serialization fails.
    pub fn render_cluster_list(&self, clusters: &[String]) -> Result<()> {
        Self::print(&json!({ "clusters": clusters }))
    }

    /// # Errors
    ///
    /// Returns an error if JSON serialization fails.
    pub fn render_exists(&self, name: &str, exists: bool) -> Result<()> {
        Self::print(&json!({ "cluster": name, "exists": exists }))
    }

    /// # Errors
    ///
    /// Returns an error if JSON serialization fails.
    pub fn render_kubeconfig(&self, name: &str, kubeconfig: &str) -> Result<()> {
        Self::print(&json!({ "cluster": name, "kubeconfig": kubeconfig }))
    }

    /// # Errors
    ///
    /// Returns an error if JSON serialization fails.
    pub fn render_done(&self, action: &str, cluster: &str) -> Result<()> {
        Self::print(&json!({ "cluster": cluster, "action": action, "success": true }))
    }

    /// # Errors
    ///
    /// Returns an error if JSON serialization fails.
    pub fn render_platform(&self, report: &PlatformReport) -> Result<()> {
        Self::print(report)
    }

    /// # Errors
    ///
    /// Returns an error if JSON serialization fails.
    pub fn render_version(&self, report: &VersionReport) -> Result<()> {
        Self::print(report)
    }
}
