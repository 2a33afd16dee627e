//! `kind-dispatch stop`: stop a cluster's control-plane container,
//! preserving the cluster.

use std::process::ExitCode;

use anyhow::Result;

use crate::app::AppContext;
use crate::commands::{ClusterArg, runtime_failure};
use crate::domain::{Verb, control_plane_container};

/// Run `kind-dispatch stop`.
///
/// # Errors
///
/// Returns an error if Docker rejects the request or is unreachable, or a
/// cancellation error if the user interrupts it.
pub async fn run(app: &AppContext, args: &ClusterArg) -> Result<ExitCode> {
    let container = control_plane_container(&args.name);
    app.dispatcher
        .stop(&args.name, &app.cancel)
        .await
        .map_err(|e| runtime_failure(app, Verb::Stop, &container, e))?;

    app.renderer().done(
        "stopped",
        &args.name,
        &format!("Stopped {container}. Resume: kind-dispatch start {}", args.name),
    )?;
    Ok(ExitCode::SUCCESS)
}
