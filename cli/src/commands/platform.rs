//! `kind-dispatch platform`: show which bundled binary this host uses.

use std::process::ExitCode;

use anyhow::Result;

use crate::app::AppContext;
use crate::output::PlatformReport;

/// Run `kind-dispatch platform`.
///
/// Exits `1` when the platform is unsupported or the binary is missing.
///
/// # Errors
///
/// Returns an error if JSON serialization fails.
pub fn run(app: &AppContext) -> Result<ExitCode> {
    let locator = app.dispatcher.locator();
    let report = PlatformReport {
        platform: locator.platform().clone(),
        binary: locator
            .binary_name()
            .ok()
            .map(|b| b.file_name().to_string()),
        path: locator
            .expected_path()
            .ok()
            .map(|p| p.display().to_string()),
        present: app.dispatcher.binary_path().is_ok(),
    };

    app.renderer().platform(&report)?;
    Ok(if report.present {
        ExitCode::SUCCESS
    } else {
        ExitCode::from(1)
    })
}
