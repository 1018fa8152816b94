// src/net.rs

//! Small HTTP conveniences so every scrape fetches the same way.

use anyhow::{Context, Result};
use reqwest::blocking::Client;
use reqwest::header::{HeaderMap, HeaderValue, USER_AGENT};
use std::net::{IpAddr, UdpSocket};

const DEFAULT_USER_AGENT: &str = concat!("scrapetools/", env!("CARGO_PKG_VERSION"));

/// Build the blocking HTTP client used across a scrape: cookie jar enabled
/// and the project's default headers applied, so individual call sites
/// don't drift.
pub fn client() -> Result<Client> {
    let mut headers = HeaderMap::new();
    headers.insert(USER_AGENT, HeaderValue::from_static(DEFAULT_USER_AGENT));
    Client::builder()
        .default_headers(headers)
        .cookie_store(true)
        .build()
        .context("building HTTP client")
}

/// GET `url` and return the body as text, erroring on non-success statuses.
pub fn get_text(client: &Client, url: &str) -> Result<String> {
    client
        .get(url)
        .send()
        .with_context(|| format!("GET {}", url))?
        .error_for_status()?
        .text()
        .with_context(|| format!("reading body from {}", url))
}

/// The local address the OS routes outbound traffic through. Connecting a
/// UDP socket only resolves the route; no packet leaves the machine.
pub fn local_ip() -> Result<IpAddr> {
    let socket = UdpSocket::bind("0.0.0.0:0").context("binding probe socket")?;
    socket
        .connect("1.1.1.1:80")
        .context("routing probe socket")?;
    Ok(socket.local_addr().context("reading local address")?.ip())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn client_builds() {
        assert!(client().is_ok());
    }

    #[test]
    #[ignore] // Requires network
    fn get_text_fetches_a_page() -> Result<()> {
        let client = client()?;
        let body = get_text(&client, "https://example.com/")?;
        assert!(body.contains("Example Domain"));
        Ok(())
    }

    #[test]
    #[ignore] // Requires a routable network interface
    fn local_ip_is_not_unspecified() -> Result<()> {
        let ip = local_ip()?;
        assert!(!ip.is_unspecified());
        Ok(())
    }
}
