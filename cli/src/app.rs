//! Application context: unified state passed to every command handler.
//!
//! `AppContext` carries the output context, the dispatcher wired to its
//! production collaborators, and the process-wide cancellation token.

use std::path::PathBuf;

use tokio_util::sync::CancellationToken;

use crate::application::services::binary::default_binary_dir;
use crate::application::{BinaryLocator, ClusterToolDispatcher};
use crate::domain::PlatformKey;
use crate::infra::{DockerRuntime, TokioCommandRunner};
use crate::output::{HumanRenderer, JsonRenderer, OutputContext, Renderer};

/// Output rendering mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputMode {
    /// Human-readable terminal output (default).
    Human,
    /// Machine-readable JSON output.
    Json,
}

/// Output rendering flags.
pub struct OutputFlags {
    /// Disable ANSI color output.
    pub no_color: bool,
    /// Suppress non-error output.
    pub quiet: bool,
    /// Enable JSON output mode.
    pub json: bool,
}

/// Where to find the kind binary.
#[derive(Default)]
pub struct BinaryFlags {
    /// Directory override; defaults to `kind/` next to the running program.
    pub bin_dir: Option<PathBuf>,
    /// Runtime identifier override; defaults to the detected one.
    pub runtime_id: Option<String>,
}

/// Flags passed from the top-level CLI to `AppContext::new`.
pub struct AppFlags {
    /// Output rendering options.
    pub output: OutputFlags,
    /// Binary location options.
    pub binary: BinaryFlags,
}

/// Production dispatcher type.
pub type Dispatcher = ClusterToolDispatcher<TokioCommandRunner, DockerRuntime>;

/// Unified application context passed to every command handler.
pub struct AppContext {
    /// Terminal output context (colors, quiet mode).
    pub output: OutputContext,
    /// Output rendering mode (human vs JSON).
    pub mode: OutputMode,
    /// Dispatcher for kind and the control-plane container.
    pub dispatcher: Dispatcher,
    /// Cancelled on Ctrl-C.
    pub cancel: CancellationToken,
}

impl AppContext {
    /// Construct an `AppContext` from top-level CLI flags.
    #[must_use]
    pub fn new(flags: &AppFlags, cancel: CancellationToken) -> Self {
        let mode = if flags.output.json {
            OutputMode::Json
        } else {
            OutputMode::Human
        };

        Self {
            output: OutputContext::new(flags.output.no_color, flags.output.quiet),
            mode,
            dispatcher: ClusterToolDispatcher::new(
                TokioCommandRunner,
                DockerRuntime,
                locator(&flags.binary),
            ),
            cancel,
        }
    }

    /// Returns `true` when JSON output mode is active.
    #[must_use]
    pub fn is_json(&self) -> bool {
        self.mode == OutputMode::Json
    }

    /// Returns the appropriate `Renderer` variant for the current output mode.
    #[must_use]
    pub fn renderer(&self) -> Renderer<'_> {
        match self.mode {
            OutputMode::Human => Renderer::Human(HumanRenderer::new(&self.output)),
            OutputMode::Json => Renderer::Json(JsonRenderer),
        }
    }

    /// Whether long-running commands should show a spinner.
    #[must_use]
    pub fn show_progress(&self) -> bool {
        self.output.show_progress() && !self.is_json()
    }
}

fn locator(flags: &BinaryFlags) -> BinaryLocator {
    let current = PlatformKey::current();
    let platform = match &flags.runtime_id {
        Some(rid) => current.with_runtime_id(rid.as_str()),
        None => current.clone(),
    };
    let dir = flags.bin_dir.clone().unwrap_or_else(default_binary_dir);
    BinaryLocator::new(platform, dir)
}
