use chromiumoxide::element::Element as CrElement;
use serde::Deserialize;

use crate::error::{Error, Result};
use crate::locator::Locator;

/// Visibility and enabled state reported by the page for one element.
#[derive(Debug, Deserialize)]
struct Actionability {
    visible: bool,
    enabled: bool,
}

const ACTIONABILITY_JS: &str = r#"
    function() {
        const rect = this.getBoundingClientRect();
        const style = window.getComputedStyle(this);
        const visible = rect.width > 0 && rect.height > 0
            && style.visibility !== 'hidden' && style.display !== 'none';
        const control = this.closest('button, input, select, textarea, fieldset');
        const enabled = !(control && control.disabled);
        return JSON.stringify({ visible, enabled });
    }
"#;

/// Wrapper around a chromiumoxide Element, providing a simplified API.
pub struct Element {
    inner: CrElement,
}

impl Element {
    pub(crate) fn new(inner: CrElement) -> Self {
        Self { inner }
    }

    /// Click this element.
    pub async fn click(&self) -> Result<()> {
        self.inner.click().await?;
        Ok(())
    }

    /// Type text into this element. Key events go to the focused node, so
    /// the element is focused first.
    pub async fn type_text(&self, text: &str) -> Result<()> {
        self.inner.focus().await?;
        self.inner.type_str(text).await?;
        Ok(())
    }

    /// Press a key on this element (e.g. "Enter", "Tab").
    pub async fn press_key(&self, key: &str) -> Result<()> {
        self.inner.press_key(key).await?;
        Ok(())
    }

    /// Scroll this element to the top of the viewport through page script.
    pub async fn scroll_into_view(&self) -> Result<()> {
        self.call_js("function() { this.scrollIntoView(true); return ''; }")
            .await?;
        Ok(())
    }

    /// Whether this element has a visible box and no disabled ancestor control.
    pub async fn is_actionable(&self) -> Result<bool> {
        let json = self.call_js(ACTIONABILITY_JS).await?;
        let state: Actionability =
            serde_json::from_str(&json).map_err(|e| Error::JsError(e.to_string()))?;
        Ok(state.visible && state.enabled)
    }

    /// Get the inner text of this element.
    pub async fn inner_text(&self) -> Result<String> {
        self.inner
            .inner_text()
            .await?
            .ok_or_else(|| Error::ElementNotFound("inner text is empty".into()))
    }

    /// Inner text of the first descendant matching `locator`.
    pub async fn child_text(&self, locator: &Locator) -> Result<String> {
        match locator.css() {
            Some(selector) => {
                let child = self
                    .inner
                    .find_element(selector)
                    .await
                    .map_err(|e| Error::ElementNotFound(format!("{locator}: {e}")))?;
                Element::new(child).inner_text().await
            }
            None => self.xpath_child_text(locator).await,
        }
    }

    async fn xpath_child_text(&self, locator: &Locator) -> Result<String> {
        let Locator::XPath(xpath) = locator else {
            return Err(Error::ElementNotFound(locator.to_string()));
        };
        let xpath_js = serde_json::to_string(xpath).map_err(|e| Error::JsError(e.to_string()))?;
        let js = format!(
            r#"
            function() {{
                const node = document.evaluate(
                    {xpath_js}, this, null, XPathResult.FIRST_ORDERED_NODE_TYPE, null
                ).singleNodeValue;
                if (!node) throw new Error('Element not found: ' + {xpath_js});
                return node.innerText || '';
            }}
            "#,
        );
        self.call_js(js)
            .await
            .map_err(|e| Error::ElementNotFound(format!("{locator}: {e}")))
    }

    /// Call a function with this element bound to `this`; returns its string result.
    async fn call_js(&self, function: impl Into<String>) -> Result<String> {
        let returns = self.inner.call_js_fn(function, false).await?;
        if let Some(details) = returns.exception_details {
            return Err(Error::JsError(details.text));
        }
        Ok(returns
            .result
            .value
            .and_then(|v| v.as_str().map(str::to_string))
            .unwrap_or_default())
    }
}
