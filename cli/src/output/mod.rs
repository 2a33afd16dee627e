//! Output formatting module

pub mod human;
pub mod json;
pub mod progress;
pub mod styles;

use anyhow::Result;
use console::Term;
use owo_colors::OwoColorize as _;
use serde::Serialize;

use crate::domain::PlatformKey;

pub use human::HumanRenderer;
pub use json::JsonRenderer;
pub use styles::Styles;

/// Output context carrying styling and terminal state.
pub struct OutputContext {
    /// Stylesheet for colored output.
    pub styles: Styles,
    /// Whether stdout is a TTY.
    pub is_tty: bool,
    /// Whether to suppress non-error output.
    pub quiet: bool,
}

impl OutputContext {
    /// Create output context based on CLI flags and environment.
    #[must_use]
    pub fn new(no_color: bool, quiet: bool) -> Self {
        let is_tty = Term::stdout().is_term();
        let use_colors = !no_color && is_tty && std::env::var("NO_COLOR").is_err();

        let mut styles = Styles::default();
        if use_colors {
            styles.colorize();
        }

        Self {
            styles,
            is_tty,
            quiet,
        }
    }

    /// Check if progress indicators should be shown.
    #[must_use]
    pub fn show_progress(&self) -> bool {
        self.is_tty && !self.quiet
    }

    /// Print a success message prefixed with `✓`. Suppressed when `quiet`.
    pub fn success(&self, msg: &str) {
        if !self.quiet {
            println!("  {} {msg}", "✓".style(self.styles.success));
        }
    }

    /// Print a warning message prefixed with `⚠`. Suppressed when `quiet`.
    pub fn warn(&self, msg: &str) {
        if !self.quiet {
            println!("  {} {msg}", "⚠".style(self.styles.warning));
        }
    }

    /// Print an error message prefixed with `✗` to stderr. Never suppressed.
    pub fn error(&self, msg: &str) {
        eprintln!("  {} {msg}", "✗".style(self.styles.error));
    }

    /// Print an info message prefixed with `ℹ`. Suppressed when `quiet`.
    pub fn info(&self, msg: &str) {
        if !self.quiet {
            println!("  {} {msg}", "ℹ".style(self.styles.info));
        }
    }

    /// Print a section header. Suppressed when `quiet`.
    pub fn header(&self, msg: &str) {
        if !self.quiet {
            println!("  {}", msg.style(self.styles.header));
        }
    }

    /// Print a key-value pair with the key dimmed. Suppressed when `quiet`.
    pub fn kv(&self, key: &str, value: &str) {
        if !self.quiet {
            println!("  {}  {value}", key.style(self.styles.dim));
        }
    }
}

// ── Reports ──────────────────────────────────────────────────────────────────

/// Result of `kind-dispatch platform`.
#[derive(Debug, Serialize)]
pub struct PlatformReport {
    pub platform: PlatformKey,
    /// Bundled binary file name, `None` on unsupported platforms.
    pub binary: Option<String>,
    /// Expected binary path, `None` on unsupported platforms.
    pub path: Option<String>,
    pub present: bool,
}

/// Result of `kind-dispatch version`.
#[derive(Debug, Serialize)]
pub struct VersionReport {
    pub version: &'static str,
    /// Output of `kind version`, when the binary could be run.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
}

// ── Renderer ─────────────────────────────────────────────────────────────────

/// Output-mode dispatch so command handlers never branch on `--json` inline.
pub enum Renderer<'a> {
    Human(HumanRenderer<'a>),
    Json(JsonRenderer),
}

impl Renderer<'_> {
    /// # Errors
    ///
    /// Returns an error if JSON serialization fails.
    pub fn cluster_list(&self, clusters: &[String]) -> Result<()> {
        match self {
            Self::Human(r) => {
                r.render_cluster_list(clusters);
                Ok(())
            }
            Self::Json(r) => r.render_cluster_list(clusters),
        }
    }

    /// # Errors
    ///
    /// Returns an error if JSON serialization fails.
    pub fn exists(&self, name: &str, exists: bool) -> Result<()> {
        match self {
            Self::Human(r) => {
                r.render_exists(name, exists);
                Ok(())
            }
            Self::Json(r) => r.render_exists(name, exists),
        }
    }

    /// # Errors
    ///
    /// Returns an error if JSON serialization fails.
    pub fn kubeconfig(&self, name: &str, kubeconfig: &str) -> Result<()> {
        match self {
            Self::Human(r) => {
                r.render_kubeconfig(kubeconfig);
                Ok(())
            }
            Self::Json(r) => r.render_kubeconfig(name, kubeconfig),
        }
    }

    /// Report a completed lifecycle action (`created`, `deleted`, ...).
    ///
    /// # Errors
    ///
    /// Returns an error if JSON serialization fails.
    pub fn done(&self, action: &str, cluster: &str, message: &str) -> Result<()> {
        match self {
            Self::Human(r) => {
                r.render_done(message);
                Ok(())
            }
            Self::Json(r) => r.render_done(action, cluster),
        }
    }

    /// # Errors
    ///
    /// Returns an error if JSON serialization fails.
    pub fn platform(&self, report: &PlatformReport) -> Result<()> {
        match self {
            Self::Human(r) => {
                r.render_platform(report);
                Ok(())
            }
            Self::Json(r) => r.render_platform(report),
        }
    }

    /// # Errors
    ///
    /// Returns an error if JSON serialization fails.
    pub fn version(&self, report: &VersionReport) -> Result<()> {
        match self {
            Self::Human(r) => {
                r.render_version(report);
                Ok(())
            }
            Self::Json(r) => r.render_version(report),
        }
    }
}
