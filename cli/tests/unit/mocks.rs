//! Shared mock infrastructure for unit tests.
//!
//! Provides a recording [`CommandRunner`], a runner that never finishes, and a
//! recording [`ContainerRuntime`], so each test file doesn't have to re-define
//! the same boilerplate.

#![allow(clippy::expect_used, dead_code)]

use std::io;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use kind_dispatch::application::{
    BinaryLocator, ClusterToolDispatcher, CommandRunner, ContainerRuntime,
};
use kind_dispatch::domain::{ExecutionResult, PlatformKey};
use tempfile::TempDir;
use tokio::sync::Notify;
use tokio_util::sync::CancellationToken;

pub const LINUX_X64_BINARY: &str = "kind-linux-x64";

pub fn linux_x64() -> PlatformKey {
    PlatformKey::new("linux", "x86_64", "linux-x64")
}

// ── Result helpers ───────────────────────────────────────────────────────────

pub fn exit_with(code: i32, stdout: &str) -> ExecutionResult {
    ExecutionResult {
        exit_code: code,
        stdout: stdout.to_string(),
        stderr: String::new(),
    }
}

// ── MockCommandRunner ────────────────────────────────────────────────────────

type Call = (PathBuf, Vec<String>);

/// A `CommandRunner` that records every `(program, args)` call and returns a
/// canned result.
#[derive(Clone)]
pub struct MockCommandRunner {
    calls: Arc<Mutex<Vec<Call>>>,
    result: Arc<dyn Fn() -> io::Result<ExecutionResult> + Send + Sync>,
}

impl MockCommandRunner {
    /// Always exit with `code` and print `stdout`.
    pub fn exiting(code: i32, stdout: &'static str) -> Self {
        Self {
            calls: Arc::default(),
            result: Arc::new(move || Ok(exit_with(code, stdout))),
        }
    }

    /// Always fail to launch with the given error kind.
    pub fn failing_spawn(kind: io::ErrorKind) -> Self {
        Self {
            calls: Arc::default(),
            result: Arc::new(move || Err(io::Error::from(kind))),
        }
    }

    /// Snapshot of all recorded calls.
    pub fn recorded_calls(&self) -> Vec<Call> {
        self.calls.lock().expect("mutex poisoned").clone()
    }

    /// Arguments of the single recorded call.
    pub fn only_args(&self) -> Vec<String> {
        let calls = self.recorded_calls();
        assert_eq!(calls.len(), 1, "expected exactly one call, got {calls:?}");
        calls[0].1.clone()
    }
}

impl CommandRunner for MockCommandRunner {
    async fn run(&self, program: &Path, args: &[&str]) -> io::Result<ExecutionResult> {
        self.calls.lock().expect("mutex poisoned").push((
            program.to_path_buf(),
            args.iter().map(|s| (*s).to_string()).collect(),
        ));
        (self.result)()
    }
}

// ── HangingRunner ────────────────────────────────────────────────────────────

/// A `CommandRunner` whose process never exits. Signals `started` once the
/// dispatcher has handed it a command.
#[derive(Clone, Default)]
pub struct HangingRunner {
    pub started: Arc<Notify>,
}

impl CommandRunner for HangingRunner {
    async fn run(&self, _: &Path, _: &[&str]) -> io::Result<ExecutionResult> {
        self.started.notify_one();
        std::future::pending().await
    }
}

// ── MockRuntime ──────────────────────────────────────────────────────────────

/// Native error type of the mock runtime client.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
#[error("no such container: {0}")]
pub struct NoSuchContainer(pub String);

/// A `ContainerRuntime` that records `(action, container)` pairs and fails
/// for containers not in `known`.
#[derive(Clone, Default)]
pub struct MockRuntime {
    pub known: Vec<String>,
    calls: Arc<Mutex<Vec<(&'static str, String)>>>,
}

impl MockRuntime {
    pub fn with_containers(names: &[&str]) -> Self {
        Self {
            known: names.iter().map(|s| (*s).to_string()).collect(),
            calls: Arc::default(),
        }
    }

    pub fn recorded_calls(&self) -> Vec<(&'static str, String)> {
        self.calls.lock().expect("mutex poisoned").clone()
    }

    fn record(&self, action: &'static str, name: &str) -> Result<(), NoSuchContainer> {
        self.calls
            .lock()
            .expect("mutex poisoned")
            .push((action, name.to_string()));
        if self.known.iter().any(|k| k == name) {
            Ok(())
        } else {
            Err(NoSuchContainer(name.to_string()))
        }
    }
}

impl ContainerRuntime for MockRuntime {
    type Error = NoSuchContainer;

    async fn start_container(
        &self,
        name: &str,
        _: &CancellationToken,
    ) -> Result<(), NoSuchContainer> {
        self.record("start", name)
    }

    async fn stop_container(
        &self,
        name: &str,
        _: &CancellationToken,
    ) -> Result<(), NoSuchContainer> {
        self.record("stop", name)
    }
}

// ── Dispatcher builders ──────────────────────────────────────────────────────

/// A temp directory containing an (empty) `kind-linux-x64` file.
pub fn bin_dir_with_binary() -> TempDir {
    let dir = tempfile::tempdir().expect("tempdir");
    std::fs::write(dir.path().join(LINUX_X64_BINARY), b"").expect("write fake binary");
    dir
}

/// Dispatcher for linux/x64 whose binary exists in `dir`.
pub fn dispatcher<R: CommandRunner>(
    runner: R,
    runtime: MockRuntime,
    dir: &TempDir,
) -> ClusterToolDispatcher<R, MockRuntime> {
    ClusterToolDispatcher::new(runner, runtime, BinaryLocator::new(linux_x64(), dir.path()))
}
