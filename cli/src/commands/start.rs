//! `kind-dispatch start`: start a cluster's control-plane container.

use std::process::ExitCode;

use anyhow::Result;

use crate::app::AppContext;
use crate::commands::{ClusterArg, runtime_failure};
use crate::domain::{Verb, control_plane_container};

/// Run `kind-dispatch start`.
///
/// Returns once Docker accepts the request; the API server may still be
/// coming up.
///
/// # Errors
///
/// Returns an error if Docker rejects the request or is unreachable, or a
/// cancellation error if the user interrupts it.
pub async fn run(app: &AppContext, args: &ClusterArg) -> Result<ExitCode> {
    let container = control_plane_container(&args.name);
    app.dispatcher
        .start(&args.name, &app.cancel)
        .await
        .map_err(|e| runtime_failure(app, Verb::Start, &container, e))?;

    app.renderer().done(
        "started",
        &args.name,
        &format!("Started {container}."),
    )?;
    Ok(ExitCode::SUCCESS)
}
