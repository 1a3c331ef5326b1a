use async_trait::async_trait;
use chromiumoxide::browser::{Browser as CrBrowser, BrowserConfig as CrBrowserConfig};
use chromiumoxide::handler::viewport::Viewport;
use futures::StreamExt;
use tracing::{debug, info};

use crate::automation::Automation;
use crate::config::{BrowserBuilder, BrowserConfig};
use crate::element::Element;
use crate::error::{Error, Result};
use crate::locator::Locator;
use crate::page::Page;

/// Chrome flags that improve performance without affecting functionality.
const PERF_ARGS: &[&str] = &[
    "disable-extensions",
    "metrics-recording-only",
    "mute-audio",
    "no-default-browser-check",
    "disable-client-side-phishing-detection",
    "disable-prompt-on-repost",
];

/// One visible Chrome window with a single tab, owned by one run.
pub struct ChromeSession {
    browser: CrBrowser,
    page: Page,
    closed: bool,
    handler_task: tokio::task::JoinHandle<()>,
}

impl ChromeSession {
    /// Create a new BrowserBuilder for configuring and launching a session.
    pub fn builder() -> BrowserBuilder {
        BrowserBuilder::new()
    }

    /// Launch a maximized Chrome window and open a blank tab.
    pub async fn launch(config: BrowserConfig) -> Result<Self> {
        let mut builder = CrBrowserConfig::builder()
            .with_head()
            .no_sandbox()
            .arg("start-maximized")
            .request_timeout(config.request_timeout);

        for arg in PERF_ARGS {
            builder = builder.arg(*arg);
        }

        if let Some(ref path) = config.chrome_path {
            builder = builder.chrome_executable(path);
        }

        builder = builder.viewport(Viewport {
            width: config.viewport_width,
            height: config.viewport_height,
            device_scale_factor: None,
            emulating_mobile: false,
            is_landscape: false,
            has_touch: false,
        });

        let cr_config = builder
            .build()
            .map_err(Error::LaunchError)?;

        let (browser, mut handler) = CrBrowser::launch(cr_config)
            .await
            .map_err(|e| Error::LaunchError(e.to_string()))?;

        let handler_task = tokio::spawn(async move {
            while let Some(event) = handler.next().await {
                if let Err(e) = event {
                    debug!("CDP handler event error (continuing): {e}");
                }
            }
        });

        let cr_page = browser
            .new_page("about:blank")
            .await
            .map_err(|e| Error::LaunchError(e.to_string()))?;

        info!("Chrome session started");

        Ok(Self {
            browser,
            page: Page::new(cr_page),
            closed: false,
            handler_task,
        })
    }
}

#[async_trait]
impl Automation for ChromeSession {
    type Element = Element;

    async fn goto(&self, url: &str) -> Result<()> {
        self.page.goto(url).await
    }

    async fn find(&self, locator: &Locator) -> Result<Element> {
        self.page.find_element(locator).await
    }

    async fn find_all(&self, locator: &Locator) -> Result<Vec<Element>> {
        self.page.find_elements(locator).await
    }

    async fn is_clickable(&self, element: &Element) -> Result<bool> {
        element.is_actionable().await
    }

    async fn click(&self, element: &Element) -> Result<()> {
        element.click().await
    }

    async fn send_keys(&self, element: &Element, text: &str) -> Result<()> {
        element.type_text(text).await
    }

    async fn press_key(&self, element: &Element, key: &str) -> Result<()> {
        element.press_key(key).await
    }

    async fn scroll_into_view(&self, element: &Element) -> Result<()> {
        element.scroll_into_view().await
    }

    async fn text(&self, element: &Element) -> Result<String> {
        element.inner_text().await
    }

    async fn child_text(&self, element: &Element, locator: &Locator) -> Result<String> {
        element.child_text(locator).await
    }

    async fn ready_state(&self) -> Result<String> {
        self.page.ready_state().await
    }

    async fn screenshot(&self) -> Result<Vec<u8>> {
        self.page.screenshot().await
    }

    async fn close(&mut self) -> Result<()> {
        if self.closed {
            return Ok(());
        }
        self.closed = true;

        let result = self.browser.close().await;
        self.handler_task.abort();
        result?;
        self.browser.wait().await?;
        info!("Chrome session closed");
        Ok(())
    }
}
