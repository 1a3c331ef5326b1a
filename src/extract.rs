use std::future::Future;

use tracing::{info, warn};

use crate::automation::{wait_present, Automation};
use crate::config::RunConfig;
use crate::error::Result;
use crate::report::Report;
use crate::site::{NameSource, SiteProfile};

/// Written in place of an entry whose name or price could not be read.
pub const FALLBACK_TEXT: &str = "No se pudieron obtener los datos completos del producto.";

/// One product read from the results listing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProductEntry {
    pub name: String,
    pub price: String,
}

impl ProductEntry {
    /// `"<index>. <name> - $<price>"`
    pub fn line(&self, index: usize) -> String {
        format!("{index}. {} - ${}", self.name, self.price)
    }
}

pub fn fallback_line(index: usize) -> String {
    format!("{index}. {FALLBACK_TEXT}")
}

pub fn results_header(max_results: usize) -> String {
    format!("Primeros {max_results} productos encontrados:")
}

/// Await one entry's extraction and format it, substituting the fallback
/// line on failure.
pub async fn format_entry<F>(index: usize, read: F) -> String
where
    F: Future<Output = Result<ProductEntry>>,
{
    match read.await {
        Ok(entry) => entry.line(index),
        Err(e) => {
            warn!("Result {index} incomplete: {e}");
            fallback_line(index)
        }
    }
}

/// Read the name and price of one result element.
pub async fn read_entry<A: Automation>(
    session: &A,
    element: &A::Element,
    profile: &SiteProfile,
) -> Result<ProductEntry> {
    let name = match profile.result_name {
        NameSource::EntryText => session.text(element).await?,
        NameSource::Title(locator) => session.child_text(element, &locator).await?,
    };
    let price = session.child_text(element, &profile.result_price).await?;
    Ok(ProductEntry {
        name: name.trim().to_string(),
        price: price.trim().to_string(),
    })
}

/// Add the results section to the report and fill it with up to
/// `config.max_results` formatted lines, numbered from 1.
///
/// An empty listing is not an error: the section keeps only its header.
pub async fn extract_results<A: Automation>(
    session: &A,
    report: &mut Report,
    profile: &SiteProfile,
    title: &str,
    config: &RunConfig,
) -> Result<Vec<String>> {
    report.add_heading(title, 2);
    let header = results_header(config.max_results);
    info!("{header}");
    let block = report.add_paragraph();
    block.add_bold_run(header);

    if let Err(e) = wait_present(session, &profile.result_item, config).await {
        warn!("No results appeared: {e}");
        return Ok(Vec::new());
    }
    tokio::time::sleep(config.results_settle_delay).await;

    let items = session.find_all(&profile.result_item).await?;
    let mut lines = Vec::with_capacity(config.max_results);
    for (i, item) in items.iter().take(config.max_results).enumerate() {
        let line = format_entry(i + 1, read_entry(session, item, profile)).await;
        info!("{line}");
        block.add_run(line.clone());
        lines.push(line);
    }
    Ok(lines)
}
