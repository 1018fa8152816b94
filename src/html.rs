// src/html.rs

//! Text and link extraction from parsed HTML elements.
//!
//! These are thin pass-throughs over `scraper` with the whitespace hygiene
//! every call site wants anyway.

use once_cell::sync::Lazy;
use scraper::{ElementRef, Selector};
use url::Url;

static ANCHOR_SELECTOR: Lazy<Selector> =
    Lazy::new(|| Selector::parse("a[href]").expect("selector should parse"));

/// Flatten every text node under `element`, trimmed, skipping
/// whitespace-only nodes.
pub fn all_texts(element: ElementRef) -> Vec<String> {
    element
        .text()
        .map(str::trim)
        .filter(|text| !text.is_empty())
        .map(str::to_string)
        .collect()
}

/// The trimmed `href` of every `<a href>` under `element`, in document
/// order. Empty when the element contains no anchors.
pub fn all_hrefs(element: ElementRef) -> Vec<String> {
    element
        .select(&ANCHOR_SELECTOR)
        .filter_map(|anchor| anchor.value().attr("href"))
        .map(|href| href.trim().to_string())
        .collect()
}

/// Like [`all_hrefs`], but joined against `base` so relative links come out
/// absolute. Hrefs that do not resolve against `base` are dropped.
pub fn absolute_hrefs(element: ElementRef, base: &Url) -> Vec<Url> {
    element
        .select(&ANCHOR_SELECTOR)
        .filter_map(|anchor| anchor.value().attr("href"))
        .filter_map(|href| base.join(href.trim()).ok())
        .collect()
}
