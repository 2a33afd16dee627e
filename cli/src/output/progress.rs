//! Progress indicators using indicatif

#![allow(clippy::expect_used)] // Templates are compile-time constants

use std::time::Duration;

use indicatif::{ProgressBar, ProgressStyle};

/// Create a spinner for indeterminate progress (e.g. `kind create cluster`).
///
/// Draws to stderr, so it never mixes with `--json` output on stdout.
///
/// # Panics
///
/// Panics if the spinner template string is invalid (it is a compile-time constant and will not panic).
#[must_use]
pub fn spinner(msg: &str) -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    pb.set_style(
        ProgressStyle::default_spinner()
            .tick_strings(&["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏", "⠿"])
            .template("  {spinner:.cyan} {msg}")
            .expect("valid template"),
    );
    pb.set_message(msg.to_string());
    pb.enable_steady_tick(Duration::from_millis(80));
    pb
}

/// Run `fut` behind a spinner when `show` is set; the spinner is cleared
/// before returning so the caller's own success or error line stands alone.
pub async fn with_spinner<F: Future>(show: bool, msg: &str, fut: F) -> F::Output {
    let pb = show.then(|| spinner(msg));
    let out = fut.await;
    if let Some(pb) = pb {
        pb.finish_and_clear();
    }
    out
}
