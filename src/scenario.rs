//! The fixed path through the site: open, pick region, search, filter
//! twice, sort, then read the top results.

use tracing::info;

use crate::automation::{wait_clickable, wait_present, Automation};
use crate::capture::capture_step;
use crate::config::RunConfig;
use crate::error::Result;
use crate::extract::extract_results;
use crate::locator::Locator;
use crate::report::Report;
use crate::site::SiteProfile;

pub const STEP_HOME: &str = "Paso 1: Página de Inicio de Mercado Libre México";
pub const STEP_REGION: &str = "Paso 2: Seleccionar México";
pub const STEP_SEARCH: &str = "Paso 3: Buscar playstation 5";
pub const STEP_CONDITION: &str = "Paso 4: Filtro por condición";
pub const STEP_LOCATION: &str = "Paso 5: Filtro por ubicación";
pub const STEP_SORT: &str = "Paso 6: Ordenar por mayor precio";
pub const STEP_RESULTS: &str = "Paso 7: Extracción de Datos de Productos";

/// Every step heading in report order.
pub const STEPS: [&str; 7] = [
    STEP_HOME,
    STEP_REGION,
    STEP_SEARCH,
    STEP_CONDITION,
    STEP_LOCATION,
    STEP_SORT,
    STEP_RESULTS,
];

const SUBMIT_KEY: &str = "Enter";

/// Run every step in order; the first failure aborts the rest.
/// Returns the formatted result lines.
pub async fn execute<A: Automation>(
    session: &A,
    report: &mut Report,
    profile: &SiteProfile,
    config: &RunConfig,
) -> Result<Vec<String>> {
    info!("Opening {}", profile.home_url);
    session.goto(profile.home_url).await?;
    capture_step(session, report, STEP_HOME, config).await;

    click_when_ready(session, &profile.region_link, false, config).await?;
    capture_step(session, report, STEP_REGION, config).await;

    let input = wait_present(session, &profile.search_input, config).await?;
    session.click(&input).await?;
    session.send_keys(&input, profile.search_term).await?;
    session.press_key(&input, SUBMIT_KEY).await?;
    info!("Searched for '{}'", profile.search_term);
    click_when_ready(session, &profile.overlay_dismiss, false, config).await?;
    capture_step(session, report, STEP_SEARCH, config).await;

    click_when_ready(session, &profile.condition_filter, true, config).await?;
    capture_step(session, report, STEP_CONDITION, config).await;

    click_when_ready(session, &profile.location_filter, true, config).await?;
    capture_step(session, report, STEP_LOCATION, config).await;

    click_when_ready(session, &profile.sort_toggle, false, config).await?;
    click_when_ready(session, &profile.sort_price_desc, false, config).await?;
    capture_step(session, report, STEP_SORT, config).await;

    extract_results(session, report, profile, STEP_RESULTS, config).await
}

/// Wait for `locator` to be clickable, optionally scroll it into view, click.
async fn click_when_ready<A: Automation>(
    session: &A,
    locator: &Locator,
    scroll: bool,
    config: &RunConfig,
) -> Result<()> {
    let el = wait_clickable(session, locator, config).await?;
    if scroll {
        session.scroll_into_view(&el).await?;
    }
    session.click(&el).await?;
    info!("Clicked {locator}");
    Ok(())
}
