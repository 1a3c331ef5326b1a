//! Live checks against a real Chrome. Run with `cargo test -- --ignored`.

use meli_report::automation::{wait_present, wait_ready};
use meli_report::{Automation, ChromeSession, Locator, RunConfig};

#[tokio::test]
#[ignore = "needs Chrome and network access"]
async fn test_launch_navigate_and_capture() {
    let mut session = ChromeSession::builder()
        .build()
        .await
        .expect("Failed to launch browser");
    let config = RunConfig::default();

    session
        .goto("https://example.com")
        .await
        .expect("Failed to open page");
    wait_ready(&session, &config).await.expect("Page never loaded");

    let h1 = wait_present(&session, &Locator::Css("h1"), &config)
        .await
        .expect("Failed to wait for h1");
    assert_eq!(session.text(&h1).await.unwrap(), "Example Domain");

    let link = wait_present(&session, &Locator::XPath("//a[contains(@href, 'iana')]"), &config)
        .await
        .expect("Failed to find link by XPath");
    assert!(session.is_clickable(&link).await.unwrap());

    let screenshot = session.screenshot().await.expect("Failed to take screenshot");
    assert_eq!(&screenshot[0..4], &[0x89, 0x50, 0x4E, 0x47]);

    session.close().await.expect("Failed to close browser");
}

#[tokio::test]
#[ignore = "needs Chrome and network access"]
async fn test_child_text_by_css_and_xpath() {
    let mut session = ChromeSession::builder()
        .build()
        .await
        .expect("Failed to launch browser");
    let config = RunConfig::default();

    session.goto("https://example.com").await.unwrap();
    let body = wait_present(&session, &Locator::Css("body"), &config)
        .await
        .unwrap();

    let by_css = session.child_text(&body, &Locator::Css("h1")).await.unwrap();
    let by_xpath = session
        .child_text(&body, &Locator::XPath(".//h1"))
        .await
        .unwrap();
    assert_eq!(by_css, by_xpath);
    assert!(session
        .child_text(&body, &Locator::Css("h6.nothing"))
        .await
        .is_err());

    session.close().await.unwrap();
}
