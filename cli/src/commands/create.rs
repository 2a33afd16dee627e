//! `kind-dispatch create`: create a kind cluster from a config file.

use std::process::ExitCode;

use anyhow::Result;
use clap::Args;

use crate::app::AppContext;
use crate::output::progress;

/// Arguments for the create command.
#[derive(Args)]
pub struct CreateArgs {
    /// Cluster name
    #[arg(long)]
    pub name: String,

    /// Path to the kind cluster configuration (YAML)
    #[arg(long, value_name = "PATH")]
    pub config: String,
}

/// Run `kind-dispatch create`.
///
/// # Errors
///
/// Returns an error if kind cannot be run or exits non-zero.
pub async fn run(app: &AppContext, args: &CreateArgs) -> Result<ExitCode> {
    progress::with_spinner(
        app.show_progress(),
        &format!("Creating cluster {}...", args.name),
        app.dispatcher.create(&args.name, &args.config, &app.cancel),
    )
    .await?;

    app.renderer().done(
        "created",
        &args.name,
        &format!("Cluster {} created.", args.name),
    )?;
    Ok(ExitCode::SUCCESS)
}
