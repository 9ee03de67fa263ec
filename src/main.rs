//! Entry point for the SISC preflight checker.
use std::{env, process::ExitCode};

use clap::Parser;
use sisc_preflight::{
    checklist::SISC_SESAU, cli::CheckArgs, errors::RunExit, report::run_verification, telemetry,
};

#[tokio::main]
async fn main() -> ExitCode {
    match bootstrap().await {
        Ok(_) => ExitCode::SUCCESS,
        Err(exit) => exit.report(),
    }
}

async fn bootstrap() -> Result<(), RunExit> {
    telemetry::init_tracing().map_err(RunExit::from_error)?;
    let _args = CheckArgs::parse();
    let root = env::current_dir().map_err(RunExit::from_error)?;

    let scan = tokio::task::spawn_blocking(move || run_verification(&SISC_SESAU, &root));
    tokio::select! {
        joined = scan => {
            joined.map_err(RunExit::from_error)?;
            Ok(())
        }
        _ = wait_for_interrupt() => Err(RunExit::interrupted()),
    }
}

/// Resolve once Ctrl-C arrives; stay pending if the handler cannot be
/// registered, so a registration failure never cancels the scan.
async fn wait_for_interrupt() {
    if tokio::signal::ctrl_c().await.is_err() {
        std::future::pending::<()>().await;
    }
}
