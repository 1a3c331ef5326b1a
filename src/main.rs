use std::process::ExitCode;

use meli_report::{run, ChromeSession, RunConfig, MERCADO_LIBRE};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> ExitCode {
    init_logging();

    let session = match ChromeSession::builder().build().await {
        Ok(session) => session,
        Err(e) => {
            error!("Could not start the browser: {e}");
            return ExitCode::FAILURE;
        }
    };

    match run(session, &MERCADO_LIBRE, &RunConfig::default()).await {
        Ok(summary) => {
            if let Some(failure) = &summary.failure {
                info!("Finished early after: {failure}");
            }
            info!("Report written to {}", summary.report_path.display());
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!("{e}");
            ExitCode::FAILURE
        }
    }
}

fn init_logging() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("meli_report=info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .without_time()
        .init();
}
