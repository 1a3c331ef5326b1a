use tracing::{info, warn};

use crate::automation::{wait_ready, Automation};
use crate::config::RunConfig;
use crate::error::Result;
use crate::report::Report;

/// Prefix of the paragraph written when a screenshot cannot be embedded.
pub const PLACEHOLDER_PREFIX: &str = "No se pudo agregar la captura de pantalla";

/// Capture the current viewport and append it to the report under `title`.
///
/// Never fails: a capture or embedding error is replaced by a placeholder
/// paragraph so one bad screenshot cannot abort the run.
pub async fn capture_step<A: Automation>(
    session: &A,
    report: &mut Report,
    title: &str,
    config: &RunConfig,
) {
    if let Err(e) = wait_ready(session, config).await {
        warn!("Page not ready before '{title}': {e}");
    }
    tokio::time::sleep(config.settle_delay).await;

    report.add_heading(title, 2);
    match embed_screenshot(session, report, config).await {
        Ok(()) => info!("Screenshot for '{title}' added to the report"),
        Err(e) => {
            warn!("Screenshot for '{title}' could not be embedded: {e}");
            report
                .add_paragraph()
                .add_run(format!("{PLACEHOLDER_PREFIX}: {e}"));
        }
    }
    report.add_page_break();
}

async fn embed_screenshot<A: Automation>(
    session: &A,
    report: &mut Report,
    config: &RunConfig,
) -> Result<()> {
    let png = session.screenshot().await?;
    report.add_image(png, config.image_width_inches)
}
