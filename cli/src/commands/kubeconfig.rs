//! `kind-dispatch kubeconfig`: print the kubeconfig for a cluster.

use std::process::ExitCode;

use anyhow::Result;
use clap::Args;

use crate::app::AppContext;

/// Arguments for the kubeconfig command.
#[derive(Args)]
pub struct KubeconfigArgs {
    /// Cluster name
    #[arg(long)]
    pub name: String,
}

/// Run `kind-dispatch kubeconfig`.
///
/// # Errors
///
/// Returns an error if kind cannot be run or exits non-zero.
pub async fn run(app: &AppContext, args: &KubeconfigArgs) -> Result<ExitCode> {
    let kubeconfig = app.dispatcher.kubeconfig(&args.name, &app.cancel).await?;
    app.renderer().kubeconfig(&args.name, &kubeconfig)?;
    Ok(ExitCode::SUCCESS)
}
