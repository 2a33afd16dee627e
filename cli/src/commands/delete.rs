//! `kind-dispatch delete`: delete a kind cluster.

use std::process::ExitCode;

use anyhow::Result;
use clap::Args;

use crate::app::AppContext;
use crate::output::progress;

/// Arguments for the delete command.
#[derive(Args)]
pub struct DeleteArgs {
    /// Cluster name
    #[arg(long)]
    pub name: String,
}

/// Run `kind-dispatch delete`.
///
/// # Errors
///
/// Returns an error if kind cannot be run or exits non-zero.
pub async fn run(app: &AppContext, args: &DeleteArgs) -> Result<ExitCode> {
    progress::with_spinner(
        app.show_progress(),
        &format!("Deleting cluster {}...", args.name),
        app.dispatcher.delete(&args.name, &app.cancel),
    )
    .await?;

    app.renderer().done(
        "deleted",
        &args.name,
        &format!("Cluster {} deleted.", args.name),
    )?;
    Ok(ExitCode::SUCCESS)
}
