use std::fmt;

/// How an element on the page is located.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Locator {
    Css(&'static str),
    XPath(&'static str),
    /// A form field matched by its `name` attribute.
    Name(&'static str),
}

impl Locator {
    /// CSS form of the locator, or `None` for XPath.
    pub fn css(&self) -> Option<String> {
        match self {
            Locator::Css(selector) => Some((*selector).to_string()),
            Locator::Name(name) => Some(format!("[name=\"{name}\"]")),
            Locator::XPath(_) => None,
        }
    }
}

impl fmt::Display for Locator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Locator::Css(selector) => write!(f, "css={selector}"),
            Locator::XPath(xpath) => write!(f, "xpath={xpath}"),
            Locator::Name(name) => write!(f, "name={name}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_name_locator_renders_attribute_selector() {
        assert_eq!(
            Locator::Name("as_word").css().as_deref(),
            Some("[name=\"as_word\"]")
        );
    }

    #[test]
    fn test_xpath_has_no_css_form() {
        assert!(Locator::XPath("//a").css().is_none());
        assert_eq!(Locator::XPath("//a").to_string(), "xpath=//a");
    }
}
