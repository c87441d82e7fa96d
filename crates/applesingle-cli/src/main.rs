//! `asu` binary entry point.

use anyhow::Result;
use applesingle_cli::{Commands, commands};
use clap::Parser;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "asu",
    about = "AppleSingle utility",
    version,
    long_about = "Inspect, create, edit, extract, filter and analyze AppleSingle files."
)]
struct Cli {
    /// Print the full error chain if an error occurs
    #[arg(long, global = true)]
    debug: bool,

    /// Log filter directive (e.g. "debug" or "applesingle=trace")
    #[arg(long, env = "ASU_LOG", default_value = "warn", global = true)]
    log_level: String,

    #[command(subcommand)]
    command: Commands,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    // Logs go to stderr so archives written to stdout stay clean
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_new(&cli.log_level).unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();

    match run(cli.command) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            if cli.debug {
                eprintln!("Error: {err:?}");
            } else {
                eprintln!("Error: {err}");
            }
            ExitCode::FAILURE
        }
    }
}

fn run(command: Commands) -> Result<()> {
    match command {
        Commands::Info(args) => commands::info::handle(&args),
        Commands::Create(args) => commands::create::handle(&args),
        Commands::Edit(args) => commands::edit::handle(&args),
        Commands::Extract(args) => commands::extract::handle(&args),
        Commands::Filter(args) => commands::filter::handle(&args),
        Commands::Analyze(args) => commands::analyze::handle(&args),
    }
}
