//! `kind-dispatch version`: print version information.

use std::process::ExitCode;

use anyhow::Result;
use tracing::debug;

use crate::app::AppContext;
use crate::domain::DispatchError;
use crate::output::VersionReport;

/// Run `kind-dispatch version`.
///
/// The wrapped kind version is included when the binary can be run; its
/// absence is not an error here.
///
/// # Errors
///
/// Returns an error if the user cancels while kind is running, or if JSON
/// serialization fails.
pub async fn run(app: &AppContext) -> Result<ExitCode> {
    let kind = match app.dispatcher.version(&app.cancel).await {
        Ok(v) => Some(v),
        Err(e @ DispatchError::Cancelled { .. }) => return Err(e.into()),
        Err(e) => {
            debug!(error = %e, "kind version unavailable");
            None
        }
    };

    app.renderer().version(&VersionReport {
        version: env!("CARGO_PKG_VERSION"),
        kind,
    })?;
    Ok(ExitCode::SUCCESS)
}
