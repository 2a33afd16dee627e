//! `kind-dispatch list`: list kind clusters.

use std::process::ExitCode;

use anyhow::Result;

use crate::app::AppContext;

/// Run `kind-dispatch list`.
///
/// # Errors
///
/// Returns an error if kind cannot be run or exits non-zero.
pub async fn run(app: &AppContext) -> Result<ExitCode> {
    let clusters = app.dispatcher.list(&app.cancel).await?;
    app.renderer().cluster_list(&clusters)?;
    Ok(ExitCode::SUCCESS)
}
