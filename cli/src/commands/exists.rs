//! `kind-dispatch exists`: check for a cluster by exact name.

use std::process::ExitCode;

use anyhow::Result;

use crate::app::AppContext;
use crate::commands::ClusterArg;

/// Exit status when the cluster is absent. Errors exit `1`.
pub const EXIT_ABSENT: u8 = 3;

/// Run `kind-dispatch exists`.
///
/// Exits `0` when the cluster exists and [`EXIT_ABSENT`] when it does not.
///
/// # Errors
///
/// Returns an error if kind cannot be run or exits non-zero.
pub async fn run(app: &AppContext, args: &ClusterArg) -> Result<ExitCode> {
    let exists = app.dispatcher.exists(&args.name, &app.cancel).await?;
    app.renderer().exists(&args.name, exists)?;
    Ok(if exists {
        ExitCode::SUCCESS
    } else {
        ExitCode::from(EXIT_ABSENT)
    })
}
