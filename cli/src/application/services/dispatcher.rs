//! Cluster lifecycle operations against the bundled kind binary and the
//! container runtime.
//!
//! Imports only from `crate::domain` and `crate::application::ports`.

use std::path::Path;

use tokio_util::sync::CancellationToken;
use tracing::{debug, info, warn};

use crate::application::ports::{CommandRunner, ContainerRuntime};
use crate::application::services::binary::BinaryLocator;
use crate::domain::{
    DispatchError, ExecutionResult, Verb, control_plane_container, parse_cluster_list,
};

/// Dispatches cluster verbs to kind (create, delete, list) and to the
/// container runtime (start, stop).
///
/// Generic over `R: CommandRunner` and `C: ContainerRuntime` so that tests
/// can inject stubs without spawning processes or talking to Docker.
/// Holds no per-cluster state: calls for different clusters may run
/// concurrently, and calls for the same cluster are not serialized.
pub struct ClusterToolDispatcher<R: CommandRunner, C: ContainerRuntime> {
    runner: R,
    runtime: C,
    locator: BinaryLocator,
}

impl<R: CommandRunner, C: ContainerRuntime> ClusterToolDispatcher<R, C> {
    pub fn new(runner: R, runtime: C, locator: BinaryLocator) -> Self {
        Self {
            runner,
            runtime,
            locator,
        }
    }

    #[must_use]
    pub fn locator(&self) -> &BinaryLocator {
        &self.locator
    }

    /// Resolved path of the kind binary.
    ///
    /// # Errors
    ///
    /// Returns `UnsupportedPlatform` or `BinaryNotFound`.
    pub fn binary_path(&self) -> Result<&Path, DispatchError> {
        self.locator.locate()
    }

    /// Run `kind create cluster --name=<name> --config=<config>`.
    ///
    /// # Errors
    ///
    /// Returns `OperationFailed` on a non-zero exit, `ExecutionFailed` if kind
    /// cannot be launched, `Cancelled` if `cancel` fires first.
    pub async fn create(
        &self,
        name: &str,
        config: &str,
        cancel: &CancellationToken,
    ) -> Result<(), DispatchError> {
        let name_arg = format!("--name={name}");
        let config_arg = format!("--config={config}");
        self.invoke(
            Verb::Create,
            &["create", "cluster", &name_arg, &config_arg],
            cancel,
        )
        .await?;
        Ok(())
    }

    /// Run `kind delete cluster --name <name>`.
    ///
    /// # Errors
    ///
    /// Same as [`Self::create`], tagged `delete`.
    pub async fn delete(
        &self,
        name: &str,
        cancel: &CancellationToken,
    ) -> Result<(), DispatchError> {
        self.invoke(Verb::Delete, &["delete", "cluster", "--name", name], cancel)
            .await?;
        Ok(())
    }

    /// Run `kind get clusters` and return the names in the order kind
    /// printed them.
    ///
    /// # Errors
    ///
    /// Same as [`Self::create`], tagged `list`.
    pub async fn list(&self, cancel: &CancellationToken) -> Result<Vec<String>, DispatchError> {
        let result = self.invoke(Verb::List, &["get", "clusters"], cancel).await?;
        Ok(parse_cluster_list(&result.stdout))
    }

    /// Whether `name` appears in [`Self::list`] (exact, case-sensitive).
    ///
    /// # Errors
    ///
    /// Propagates any error from [`Self::list`].
    pub async fn exists(
        &self,
        name: &str,
        cancel: &CancellationToken,
    ) -> Result<bool, DispatchError> {
        Ok(self.list(cancel).await?.iter().any(|c| c == name))
    }

    /// Run `kind get kubeconfig --name <name>` and return the kubeconfig YAML.
    ///
    /// # Errors
    ///
    /// Same as [`Self::create`], tagged `kubeconfig`.
    pub async fn kubeconfig(
        &self,
        name: &str,
        cancel: &CancellationToken,
    ) -> Result<String, DispatchError> {
        let result = self
            .invoke(
                Verb::Kubeconfig,
                &["get", "kubeconfig", "--name", name],
                cancel,
            )
            .await?;
        Ok(result.stdout)
    }

    /// Run `kind version`.
    ///
    /// # Errors
    ///
    /// Same as [`Self::create`], tagged `version`.
    pub async fn version(&self, cancel: &CancellationToken) -> Result<String, DispatchError> {
        let result = self.invoke(Verb::Version, &["version"], cancel).await?;
        Ok(result.stdout.trim().to_string())
    }

    /// Request a start of `<name>-control-plane`.
    ///
    /// Does not wait for the container to be running.
    ///
    /// # Errors
    ///
    /// Returns the runtime client's error unchanged.
    pub async fn start(&self, name: &str, cancel: &CancellationToken) -> Result<(), C::Error> {
        let container = control_plane_container(name);
        info!(cluster = name, container = %container, "starting control-plane container");
        self.runtime.start_container(&container, cancel).await
    }

    /// Request a stop of `<name>-control-plane`.
    ///
    /// # Errors
    ///
    /// Returns the runtime client's error unchanged.
    pub async fn stop(&self, name: &str, cancel: &CancellationToken) -> Result<(), C::Error> {
        let container = control_plane_container(name);
        info!(cluster = name, container = %container, "stopping control-plane container");
        self.runtime.stop_container(&container, cancel).await
    }

    async fn invoke(
        &self,
        verb: Verb,
        args: &[&str],
        cancel: &CancellationToken,
    ) -> Result<ExecutionResult, DispatchError> {
        let binary = self.locator.locate()?;
        debug!(%verb, binary = %binary.display(), ?args, "invoking kind");

        let outcome = tokio::select! {
            biased;
            () = cancel.cancelled() => None,
            result = self.runner.run(binary, args) => Some(result),
        };
        let Some(outcome) = outcome else {
            debug!(%verb, "kind invocation cancelled");
            return Err(DispatchError::Cancelled { verb });
        };

        let result = outcome.map_err(|source| DispatchError::ExecutionFailed { verb, source })?;
        if !result.success() {
            warn!(
                %verb,
                exit_code = result.exit_code,
                stderr = %result.stderr.trim(),
                "kind exited with a non-zero status"
            );
            return Err(DispatchError::OperationFailed {
                verb,
                exit_code: result.exit_code,
                stderr: result.stderr,
            });
        }
        Ok(result)
    }
}
