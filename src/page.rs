use chromiumoxide::cdp::browser_protocol::page::CaptureScreenshotFormat;
use chromiumoxide::page::Page as CrPage;
use chromiumoxide::page::ScreenshotParams;

use crate::element::Element;
use crate::error::{Error, Result};
use crate::locator::Locator;

/// Wrapper around a chromiumoxide Page exposing what the run needs.
pub struct Page {
    inner: CrPage,
}

impl Page {
    pub(crate) fn new(inner: CrPage) -> Self {
        Self { inner }
    }

    // ── Navigation ──────────────────────────────────────────────────

    /// Navigate to the given URL and wait for the page to load.
    pub async fn goto(&self, url: &str) -> Result<()> {
        self.inner
            .goto(url)
            .await
            .map_err(|e| Error::NavigationError(e.to_string()))?;
        Ok(())
    }

    /// Current value of `document.readyState`.
    pub async fn ready_state(&self) -> Result<String> {
        let result = self
            .inner
            .evaluate("document.readyState")
            .await
            .map_err(|e| Error::JsError(e.to_string()))?;
        result
            .into_value::<String>()
            .map_err(|e| Error::JsError(e.to_string()))
    }

    // ── Observations ────────────────────────────────────────────────

    /// Take a screenshot of the visible viewport (PNG format).
    pub async fn screenshot(&self) -> Result<Vec<u8>> {
        let params = ScreenshotParams::builder()
            .format(CaptureScreenshotFormat::Png)
            .build();
        self.inner
            .screenshot(params)
            .await
            .map_err(|e| Error::ScreenshotError(e.to_string()))
    }

    // ── Element Queries ─────────────────────────────────────────────

    /// Find the first element matching `locator`.
    pub async fn find_element(&self, locator: &Locator) -> Result<Element> {
        let found = match (locator, locator.css()) {
            (Locator::XPath(xpath), _) => self.inner.find_xpath(*xpath).await,
            (_, Some(selector)) => self.inner.find_element(selector).await,
            (_, None) => return Err(Error::ElementNotFound(locator.to_string())),
        };
        let el = found.map_err(|e| Error::ElementNotFound(format!("{locator}: {e}")))?;
        Ok(Element::new(el))
    }

    /// Find all elements matching `locator`.
    pub async fn find_elements(&self, locator: &Locator) -> Result<Vec<Element>> {
        let found = match (locator, locator.css()) {
            (Locator::XPath(xpath), _) => self.inner.find_xpaths(*xpath).await,
            (_, Some(selector)) => self.inner.find_elements(selector).await,
            (_, None) => return Err(Error::ElementNotFound(locator.to_string())),
        };
        let els = found.map_err(|e| Error::ElementNotFound(format!("{locator}: {e}")))?;
        Ok(els.into_iter().map(Element::new).collect())
    }
}
