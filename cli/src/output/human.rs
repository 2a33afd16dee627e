//! Human-readable terminal renderer.

use owo_colors::OwoColorize as _;

use crate::output::{OutputContext, PlatformReport, VersionReport};

/// Renders command results as human-readable terminal output using `OutputContext`.
///
/// Primary data (cluster names, kubeconfig) is printed even in quiet mode so
/// it can be piped; status lines follow the context's quiet flag.
pub struct HumanRenderer<'a> {
    ctx: &'a OutputContext,
}

impl<'a> HumanRenderer<'a> {
    /// Create a new `HumanRenderer` wrapping the given output context.
    #[must_use]
    pub fn new(ctx: &'a OutputContext) -> Self {
        Self { ctx }
    }

    /// One cluster name per line, bare, in the order kind reported them.
    pub fn render_cluster_list(&self, clusters: &[String]) {
        if clusters.is_empty() {
            self.ctx.info("No kind clusters found.");
            return;
        }
        for name in clusters {
            println!("{name}");
        }
    }

    pub fn render_exists(&self, name: &str, exists: bool) {
        let name = name.style(self.ctx.styles.cluster).to_string();
        if exists {
            self.ctx.success(&format!("Cluster {name} exists."));
        } else {
            self.ctx.warn(&format!("Cluster {name} does not exist."));
        }
    }

    pub fn render_kubeconfig(&self, kubeconfig: &str) {
        print!("{kubeconfig}");
        if !kubeconfig.ends_with('\n') {
            println!();
        }
    }

    pub fn render_done(&self, message: &str) {
        self.ctx.success(message);
    }

    /// Render the detected platform and binary location.
    pub fn render_platform(&self, report: &PlatformReport) {
        if self.ctx.quiet {
            return;
        }
        self.ctx.header("Platform:");
        self.ctx.kv("OS:          ", &report.platform.os);
        self.ctx.kv("Architecture:", &report.platform.arch);
        self.ctx.kv("Runtime ID:  ", &report.platform.runtime_id);
        println!();
        self.ctx.header("kind binary:");
        match (&report.binary, &report.path) {
            (Some(binary), Some(path)) => {
                self.ctx.kv("Name:        ", binary);
                self.ctx.kv("Path:        ", path);
                if report.present {
                    self.ctx.success("Binary present");
                } else {
                    self.ctx.warn("Binary missing");
                }
            }
            _ => self.ctx.warn("No bundled binary for this platform"),
        }
    }

    /// Render the CLI version and, when available, the wrapped kind version.
    pub fn render_version(&self, report: &VersionReport) {
        println!("kind-dispatch {}", report.version);
        if let Some(kind) = &report.kind {
            self.ctx.kv("kind:", kind);
        }
    }
}
