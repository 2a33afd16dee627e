//! CLI argument parsing with clap derive

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tokio_util::sync::CancellationToken;

use crate::app::{AppContext, AppFlags, BinaryFlags, OutputFlags};
use crate::commands;

/// Run the bundled kind binary for this platform
#[derive(Parser)]
#[command(
    name = "kind-dispatch",
    version,
    propagate_version = true,
    subcommand_required = true,
    arg_required_else_help = true
)]
pub struct Cli {
    /// Output in JSON format
    #[arg(long, global = true)]
    pub json: bool,

    /// Suppress non-error output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Disable colored output (any non-empty `NO_COLOR` other than `0`/`false`)
    #[arg(
        long,
        global = true,
        env = "NO_COLOR",
        value_parser = clap::builder::FalseyValueParser::new()
    )]
    pub no_color: bool,

    /// Log dispatcher activity at debug level (`RUST_LOG` takes precedence)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Directory holding the kind binaries [default: kind/ next to this program]
    #[arg(long, global = true, env = "KIND_DISPATCH_BIN_DIR", value_name = "DIR")]
    pub bin_dir: Option<PathBuf>,

    /// Override the detected runtime identifier, e.g. `linux-musl-x64`
    #[arg(
        long,
        global = true,
        env = "KIND_DISPATCH_RUNTIME_ID",
        value_name = "RID"
    )]
    pub runtime_id: Option<String>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Create a cluster from a kind config file
    Create(commands::create::CreateArgs),

    /// Delete a cluster
    Delete(commands::delete::DeleteArgs),

    /// List clusters
    List,

    /// Check whether a cluster exists (exit code 3 if not)
    Exists(commands::ClusterArg),

    /// Start a cluster's control-plane container
    Start(commands::ClusterArg),

    /// Stop a cluster's control-plane container
    Stop(commands::ClusterArg),

    /// Print a cluster's kubeconfig
    Kubeconfig(commands::kubeconfig::KubeconfigArgs),

    /// Show the detected platform and bundled binary
    Platform,

    /// Show version
    Version,
}

impl Cli {
    /// Execute the CLI command.
    ///
    /// # Errors
    ///
    /// Returns an error if the command fails.
    pub async fn run(self, cancel: CancellationToken) -> Result<ExitCode> {
        let Cli {
            json,
            quiet,
            no_color,
            verbose: _,
            bin_dir,
            runtime_id,
            command,
        } = self;

        let app = AppContext::new(
            &AppFlags {
                output: OutputFlags {
                    no_color,
                    quiet,
                    json,
                },
                binary: BinaryFlags { bin_dir, runtime_id },
            },
            cancel,
        );

        match command {
            Command::Create(args) => commands::create::run(&app, &args).await,
            Command::Delete(args) => commands::delete::run(&app, &args).await,
            Command::List => commands::list::run(&app).await,
            Command::Exists(args) => commands::exists::run(&app, &args).await,
            Command::Start(args) => commands::start::run(&app, &args).await,
            Command::Stop(args) => commands::stop::run(&app, &args).await,
            Command::Kubeconfig(args) => commands::kubeconfig::run(&app, &args).await,
            Command::Platform => commands::platform::run(&app),
            Command::Version => commands::version::run(&app).await,
        }
    }
}
