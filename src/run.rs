use std::path::PathBuf;

use tracing::{error, info};

use crate::automation::Automation;
use crate::config::RunConfig;
use crate::error::Result;
use crate::report::Report;
use crate::scenario;
use crate::site::SiteProfile;

/// What a finished run produced.
#[derive(Debug)]
pub struct RunSummary {
    pub report: Report,
    pub report_path: PathBuf,
    /// Formatted result lines; empty if the sequence stopped early.
    pub results: Vec<String>,
    /// The error that aborted the step sequence, if any.
    pub failure: Option<String>,
}

/// Drive one full run and always finish it: the report is saved and the
/// session closed whether or not the step sequence succeeded.
///
/// Only a failed save is returned as an error, after the session is closed.
pub async fn run<A: Automation>(
    mut session: A,
    profile: &SiteProfile,
    config: &RunConfig,
) -> Result<RunSummary> {
    let mut report = Report::new(profile.report_title);
    info!("Building report '{}'", profile.report_title);

    let (results, failure) = match scenario::execute(&session, &mut report, profile, config).await {
        Ok(lines) => (lines, None),
        Err(e) => {
            error!("Run aborted: {e}");
            (Vec::new(), Some(e.to_string()))
        }
    };

    tokio::time::sleep(config.drain_delay).await;
    let saved = report.save(&config.output_path);
    if let Err(e) = &saved {
        error!("Failed to save report to {}: {e}", config.output_path.display());
    }
    if let Err(e) = session.close().await {
        error!("Failed to close browser session: {e}");
    }

    Ok(RunSummary {
        report,
        report_path: saved?,
        results,
        failure,
    })
}
