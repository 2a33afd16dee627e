//! Port trait definitions for the Application layer.
//!
//! Ports are the interfaces (contracts) that infrastructure must fulfill.
//! This file imports only from `crate::domain`, never from `crate::infra`,
//! `crate::commands`, or `crate::output`.

use std::path::Path;

use tokio_util::sync::CancellationToken;

use crate::domain::ExecutionResult;

// ── Command Runner Port ───────────────────────────────────────────────────────

/// Abstracts process execution so tests can substitute deterministic stubs.
#[allow(async_fn_in_trait)]
pub trait CommandRunner {
    /// Run `program` to completion and capture its exit code and output.
    ///
    /// Dropping the returned future abandons the process; what happens to the
    /// child at that point is up to the implementation.
    ///
    /// # Errors
    ///
    /// Returns an error if the process cannot be spawned, or if it terminates
    /// without an exit code.
    async fn run(&self, program: &Path, args: &[&str]) -> std::io::Result<ExecutionResult>;
}

// ── Container Runtime Port ────────────────────────────────────────────────────

/// Start/stop of a single named container.
///
/// Errors are the client's own type; the dispatcher passes them through
/// without translation.
#[allow(async_fn_in_trait)]
pub trait ContainerRuntime {
    /// Native error type of the runtime client.
    type Error: std::error::Error + Send + Sync + 'static;

    /// Ask the runtime to start `name`. Returns once the request is accepted.
    async fn start_container(
        &self,
        name: &str,
        cancel: &CancellationToken,
    ) -> Result<(), Self::Error>;

    /// Ask the runtime to stop `name`. Returns once the request is accepted.
    async fn stop_container(
        &self,
        name: &str,
        cancel: &CancellationToken,
    ) -> Result<(), Self::Error>;
}
