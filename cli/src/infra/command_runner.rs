//! Infrastructure implementation of the `CommandRunner` port.
//!
//! `TokioCommandRunner` is the production implementation that uses tokio
//! for async process execution.

use std::io;
use std::path::Path;
use std::process::Stdio;

use tokio::io::AsyncReadExt;

use crate::application::ports::CommandRunner;
use crate::domain::ExecutionResult;

/// Production `CommandRunner`. Spawns the program with tokio and captures
/// stdout and stderr.
///
/// The child is spawned with `kill_on_drop`, so abandoning the `run` future
/// (e.g. on cancellation) kills the process instead of leaving it orphaned.
/// No timeout is applied.
#[derive(Debug, Default, Clone, Copy)]
pub struct TokioCommandRunner;

impl CommandRunner for TokioCommandRunner {
    async fn run(&self, program: &Path, args: &[&str]) -> io::Result<ExecutionResult> {
        let mut child = tokio::process::Command::new(program)
            .args(args)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .kill_on_drop(true)
            .spawn()?;

        let mut stdout_handle = child.stdout.take();
        let mut stderr_handle = child.stderr.take();

        let (status, stdout, stderr) = tokio::join!(
            child.wait(),
            async {
                let mut buf = Vec::new();
                if let Some(ref mut h) = stdout_handle {
                    let _ = h.read_to_end(&mut buf).await;
                }
                buf
            },
            async {
                let mut buf = Vec::new();
                if let Some(ref mut h) = stderr_handle {
                    let _ = h.read_to_end(&mut buf).await;
                }
                buf
            },
        );

        let status = status?;
        let exit_code = status.code().ok_or_else(|| {
            io::Error::other(format!(
                "{} terminated without an exit code ({status})",
                program.display()
            ))
        })?;

        Ok(ExecutionResult {
            exit_code,
            stdout: String::from_utf8_lossy(&stdout).into_owned(),
            stderr: String::from_utf8_lossy(&stderr).into_owned(),
        })
    }
}
