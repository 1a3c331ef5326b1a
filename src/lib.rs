pub mod automation;
pub mod browser;
pub mod capture;
pub mod config;
pub mod element;
pub mod error;
pub mod extract;
pub mod locator;
pub mod page;
pub mod report;
pub mod run;
pub mod scenario;
pub mod site;

pub use automation::Automation;
pub use browser::ChromeSession;
pub use config::{BrowserConfig, RunConfig};
pub use error::{Error, Result};
pub use locator::Locator;
pub use report::Report;
pub use run::{run, RunSummary};
pub use site::{SiteProfile, MERCADO_LIBRE};
