//! Page fetching.
//!
//! The checker talks to a [`PageFetcher`] so tests can hand it canned pages
//! or failures; [`HttpFetcher`] is the real blocking HTTP client.

use anyhow::Context;
use reqwest::blocking::Client;

use crate::error::{HypersearchError, Result};

/// A fetched page.
#[derive(Debug, Clone)]
pub struct Page {
    /// HTTP status code of the response.
    pub http_status: u16,
    /// Raw response body.
    pub body: Vec<u8>,
}

/// Source of page bodies.
pub trait PageFetcher {
    /// Issue one GET for `url` and read the whole body.
    ///
    /// Connection failures map to [`HypersearchError::Network`], body read
    /// failures to [`HypersearchError::Read`]. Non-2xx responses are pages
    /// like any other.
    fn fetch(&self, url: &str) -> Result<Page>;
}

/// Fetches pages over HTTP/HTTPS.
pub struct HttpFetcher {
    client: Client,
}

impl HttpFetcher {
    /// Create a fetcher using the client's default timeout and redirect policy.
    pub fn new() -> Result<Self> {
        let client = Client::builder()
            .user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")))
            .build()
            .context("Failed to build HTTP client")?;
        Ok(Self { client })
    }
}

impl PageFetcher for HttpFetcher {
    fn fetch(&self, url: &str) -> Result<Page> {
        let response = self
            .client
            .get(url)
            .send()
            .map_err(|e| HypersearchError::Network {
                url: url.to_string(),
                message: e.to_string(),
            })?;

        let http_status = response.status().as_u16();
        tracing::debug!(url, http_status, "received response");

        let body = response.bytes().map_err(|e| HypersearchError::Read {
            url: url.to_string(),
            message: e.to_string(),
        })?;

        Ok(Page {
            http_status,
            body: body.to_vec(),
        })
    }
}
