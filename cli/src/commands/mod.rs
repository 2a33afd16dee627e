//! Command implementations

pub mod create;
pub mod delete;
pub mod exists;
pub mod kubeconfig;
pub mod list;
pub mod platform;
pub mod start;
pub mod stop;
pub mod version;

use clap::Args;

use crate::app::AppContext;
use crate::domain::{DispatchError, Verb};

/// A cluster name given as a positional argument.
#[derive(Args)]
pub struct ClusterArg {
    /// Cluster name
    pub name: String,
}

/// Error for a failed start/stop request: a cancellation if the user
/// interrupted it, otherwise the runtime error with the container named.
fn runtime_failure<E>(app: &AppContext, verb: Verb, container: &str, err: E) -> anyhow::Error
where
    E: std::error::Error + Send + Sync + 'static,
{
    if app.cancel.is_cancelled() {
        return DispatchError::Cancelled { verb }.into();
    }
    anyhow::Error::new(err).context(format!("failed to {verb} container {container}"))
}
