//! kind-dispatch - run the bundled kind binary for this platform

use std::process::ExitCode;

use clap::Parser;
use kind_dispatch::cli::Cli;
use kind_dispatch::domain::DispatchError;
use kind_dispatch::output::{OutputContext, json};
use tokio_util::sync::CancellationToken;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

/// Conventional exit status for a command interrupted by SIGINT.
const EXIT_INTERRUPTED: u8 = 130;

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);
    let as_json = cli.json;
    let no_color = cli.no_color;

    let cancel = CancellationToken::new();
    tokio::spawn({
        let cancel = cancel.clone();
        async move {
            if tokio::signal::ctrl_c().await.is_ok() {
                cancel.cancel();
            }
        }
    });

    match cli.run(cancel).await {
        Ok(code) => code,
        Err(e) => report_error(&e, as_json, no_color),
    }
}

fn init_tracing(verbose: bool) {
    let default = if verbose {
        "kind_dispatch=debug"
    } else {
        "kind_dispatch=warn"
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr).with_target(false))
        .with(filter)
        .init();
}

fn report_error(e: &anyhow::Error, as_json: bool, no_color: bool) -> ExitCode {
    let dispatch = e.downcast_ref::<DispatchError>();
    let code = dispatch.map_or("ERROR", DispatchError::code);

    let obj = as_json
        .then(|| json::format_error(&format!("{e:#}"), code).ok())
        .flatten();
    match obj {
        Some(obj) => println!("{obj}"),
        None => OutputContext::new(no_color, false).error(&format!("{e:#}")),
    }

    if matches!(dispatch, Some(DispatchError::Cancelled { .. })) {
        ExitCode::from(EXIT_INTERRUPTED)
    } else {
        ExitCode::FAILURE
    }
}
