//! Infrastructure implementation of the `ContainerRuntime` port over the
//! Docker Engine API (bollard).

use std::io;

use bollard::Docker;
use bollard::container::{StartContainerOptions, StopContainerOptions};
use bollard::errors::Error;
use tokio_util::sync::CancellationToken;
use tracing::debug;

use crate::application::ports::ContainerRuntime;

/// Docker-backed container runtime.
///
/// When the token fires first the request is abandoned and an
/// [`io::ErrorKind::Interrupted`] error is returned.
///
/// Connects with bollard's local defaults (honouring `DOCKER_HOST`) on every
/// call, so constructing it never fails and commands that only use kind do
/// not need a reachable daemon.
#[derive(Debug, Default, Clone, Copy)]
pub struct DockerRuntime;

impl DockerRuntime {
    fn connect() -> Result<Docker, Error> {
        Docker::connect_with_local_defaults()
    }
}

fn interrupted() -> Error {
    io::Error::new(io::ErrorKind::Interrupted, "request cancelled").into()
}

impl ContainerRuntime for DockerRuntime {
    type Error = Error;

    async fn start_container(&self, name: &str, cancel: &CancellationToken) -> Result<(), Error> {
        let docker = Self::connect()?;
        debug!(container = name, "docker start");
        tokio::select! {
            biased;
            () = cancel.cancelled() => Err(interrupted()),
            result = docker.start_container(name, None::<StartContainerOptions<String>>) => result,
        }
    }

    async fn stop_container(&self, name: &str, cancel: &CancellationToken) -> Result<(), Error> {
        let docker = Self::connect()?;
        debug!(container = name, "docker stop");
        tokio::select! {
            biased;
            () = cancel.cancelled() => Err(interrupted()),
            result = docker.stop_container(name, None::<StopContainerOptions>) => result,
        }
    }
}
