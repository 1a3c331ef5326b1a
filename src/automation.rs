use std::fmt;
use std::time::Instant;

use async_trait::async_trait;
use tracing::debug;

use crate::config::RunConfig;
use crate::error::{Error, Result};
use crate::locator::Locator;

/// The browser operations a run needs.
///
/// `ChromeSession` drives a real Chrome over CDP; tests substitute an
/// in-memory page.
#[async_trait]
pub trait Automation: Send + Sync {
    type Element: Send + Sync;

    /// Navigate the session's tab to `url`.
    async fn goto(&self, url: &str) -> Result<()>;

    /// Locate one element right now, without waiting.
    async fn find(&self, locator: &Locator) -> Result<Self::Element>;

    /// Locate every element matching `locator`, in document order.
    async fn find_all(&self, locator: &Locator) -> Result<Vec<Self::Element>>;

    /// Whether the element is visible and enabled.
    async fn is_clickable(&self, element: &Self::Element) -> Result<bool>;

    async fn click(&self, element: &Self::Element) -> Result<()>;

    async fn send_keys(&self, element: &Self::Element, text: &str) -> Result<()>;

    /// Press a named key (e.g. "Enter") on the element.
    async fn press_key(&self, element: &Self::Element, key: &str) -> Result<()>;

    /// Run `scrollIntoView(true)` against the element as page script.
    async fn scroll_into_view(&self, element: &Self::Element) -> Result<()>;

    async fn text(&self, element: &Self::Element) -> Result<String>;

    /// Text of the first descendant of `element` matching `locator`.
    async fn child_text(&self, element: &Self::Element, locator: &Locator) -> Result<String>;

    /// Current `document.readyState`.
    async fn ready_state(&self) -> Result<String>;

    /// PNG capture of the visible viewport.
    async fn screenshot(&self) -> Result<Vec<u8>>;

    /// Release the browser. Called once, at the end of a run.
    async fn close(&mut self) -> Result<()>;
}

/// What a bounded wait is waiting for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Condition {
    Present,
    Clickable,
}

impl fmt::Display for Condition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Condition::Present => f.write_str("present"),
            Condition::Clickable => f.write_str("clickable"),
        }
    }
}

/// Poll until an element matching `locator` satisfies `condition`.
/// Fails with `Error::Timeout` once `config.wait_timeout` has elapsed.
pub async fn wait_for<A: Automation>(
    session: &A,
    locator: &Locator,
    condition: Condition,
    config: &RunConfig,
) -> Result<A::Element> {
    let start = Instant::now();

    loop {
        if let Ok(el) = session.find(locator).await {
            let ready = match condition {
                Condition::Present => true,
                Condition::Clickable => session.is_clickable(&el).await.unwrap_or(false),
            };
            if ready {
                debug!("{locator} is {condition} after {:?}", start.elapsed());
                return Ok(el);
            }
        }

        if start.elapsed() >= config.wait_timeout {
            return Err(Error::Timeout(format!("{locator} to be {condition}")));
        }
        tokio::time::sleep(config.poll_interval).await;
    }
}

pub async fn wait_present<A: Automation>(
    session: &A,
    locator: &Locator,
    config: &RunConfig,
) -> Result<A::Element> {
    wait_for(session, locator, Condition::Present, config).await
}

pub async fn wait_clickable<A: Automation>(
    session: &A,
    locator: &Locator,
    config: &RunConfig,
) -> Result<A::Element> {
    wait_for(session, locator, Condition::Clickable, config).await
}

/// Poll `document.readyState` until it reports `complete`.
pub async fn wait_ready<A: Automation>(session: &A, config: &RunConfig) -> Result<()> {
    let start = Instant::now();

    loop {
        let state = session.ready_state().await.unwrap_or_default();
        if state == "complete" {
            return Ok(());
        }
        if start.elapsed() >= config.wait_timeout {
            return Err(Error::Timeout(format!(
                "document.readyState to be complete (last: {state:?})"
            )));
        }
        tokio::time::sleep(config.poll_interval).await;
    }
}
