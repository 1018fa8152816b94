// src/lib.rs

//! Helper grab-bag for scraping workflows: filesystem conveniences, CSV
//! bookkeeping for resumable scrapes, HTML text/link extraction, and thin
//! wrappers around a headless Chrome driver.
//!
//! The modules are independent leaves; pick what you need.

pub mod browser;
pub mod fs;
pub mod html;
pub mod net;
pub mod process;
pub mod text;
