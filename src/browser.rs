// src/browser.rs

//! Convenience wrappers around a headless Chrome driver.
//!
//! Nothing here manages sessions beyond creating them; callers own the
//! `Browser` and its tabs.

use anyhow::{anyhow, Context, Result};
use headless_chrome::{Browser, Element, LaunchOptions, Tab};
use std::{ffi::OsStr, thread, time::Duration};
use tracing::debug;

/// Switches carried on every launch: quiet Chrome logs, and no
/// `navigator.webdriver` tell for sites that sniff automation.
const BASE_ARGS: &[&str] = &[
    "--disable-blink-features=AutomationControlled",
    "--log-level=3",
];

/// Launch a Chrome instance for scraping. Headless launches also disable
/// the GPU, which headless Chrome wants on most CI hosts.
pub fn launch(headless: bool) -> Result<Browser> {
    let mut args: Vec<&OsStr> = BASE_ARGS.iter().map(OsStr::new).collect();
    if headless {
        args.push(OsStr::new("--disable-gpu"));
    }
    let options = LaunchOptions::default_builder()
        .headless(headless)
        .args(args)
        .build()
        .map_err(|e| anyhow!("building Chrome launch options: {e}"))?;
    Browser::new(options).context("launching Chrome")
}

/// Scroll to the bottom of the page, sleeping `wait` between scrolls so
/// lazily-loaded content can extend the document, until the scroll height
/// stops growing. A zero `wait` returns immediately without scrolling.
pub fn scroll_to_bottom(tab: &Tab, wait: Duration) -> Result<()> {
    if wait.is_zero() {
        return Ok(());
    }

    let mut last_height = page_height(tab)?;
    loop {
        tab.evaluate("window.scrollTo(0, document.body.scrollHeight);", false)
            .context("scrolling to page bottom")?;
        thread::sleep(wait);

        let new_height = page_height(tab)?;
        debug!(last_height, new_height, "scroll step");
        if new_height == last_height {
            break;
        }
        last_height = new_height;
    }
    Ok(())
}

/// True when `element` can scroll, i.e. its content overflows its box.
pub fn is_scrollable(element: &Element) -> Result<bool> {
    let result = element
        .call_js_fn(
            "function() { return this.scrollHeight > this.clientHeight; }",
            vec![],
            false,
        )
        .context("querying element scroll height")?;
    Ok(result
        .value
        .as_ref()
        .and_then(serde_json::Value::as_bool)
        .unwrap_or(false))
}

/// The document's current scroll height.
fn page_height(tab: &Tab) -> Result<i64> {
    let result = tab
        .evaluate("document.body.scrollHeight", false)
        .context("querying page height")?;
    result
        .value
        .as_ref()
        .and_then(serde_json::Value::as_i64)
        .context("page height was not a number")
}
