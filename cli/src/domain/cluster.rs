//! Cluster identity, CLI verbs, and subprocess results.
//!
//! Pure functions only: no I/O, no async.

use std::fmt;

use serde::Serialize;

/// Suffix kind appends to a cluster name to name its primary node container.
pub const CONTROL_PLANE_SUFFIX: &str = "-control-plane";

/// Dispatcher operations, as tagged on errors.
///
/// `Start` and `Stop` go to the container runtime; the rest are sent to kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Verb {
    Create,
    Delete,
    List,
    Kubeconfig,
    Version,
    Start,
    Stop,
}

impl fmt::Display for Verb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Create => "create",
            Self::Delete => "delete",
            Self::List => "list",
            Self::Kubeconfig => "kubeconfig",
            Self::Version => "version",
            Self::Start => "start",
            Self::Stop => "stop",
        })
    }
}

/// Exit code and captured output of one kind invocation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExecutionResult {
    pub exit_code: i32,
    pub stdout: String,
    /// Only used for diagnostics when `exit_code` is non-zero.
    pub stderr: String,
}

impl ExecutionResult {
    #[must_use]
    pub fn success(&self) -> bool {
        self.exit_code == 0
    }
}

/// Name of the container hosting a cluster's control plane.
#[must_use]
pub fn control_plane_container(cluster: &str) -> String {
    format!("{cluster}{CONTROL_PLANE_SUFFIX}")
}

/// Split `kind get clusters` output into cluster names, preserving order.
///
/// Empty lines are dropped. A trailing `\r` is stripped so output produced on
/// Windows compares equal to the names the user typed.
#[must_use]
pub fn parse_cluster_list(stdout: &str) -> Vec<String> {
    stdout
        .split('\n')
        .map(|line| line.strip_suffix('\r').unwrap_or(line))
        .filter(|line| !line.is_empty())
        .map(String::from)
        .collect()
}
