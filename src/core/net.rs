// src/core/net.rs

// Blocking HTTPS GET. One request per export; no retries.

use std::time::Duration;

use reqwest::blocking::Client;

use crate::config::consts::{REQUEST_TIMEOUT_SECS, USER_AGENT};
use crate::error::RmsResult;

/// Status and body of one HTTP exchange. The body is kept as text so the
/// caller decides whether it is worth parsing.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HttpReply {
    pub status: u16,
    pub body: String,
}

impl HttpReply {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Anything that can perform a GET with query parameters.
pub trait Transport {
    fn get(&self, url: &str, query: &[(&str, &str)]) -> RmsResult<HttpReply>;
}

/// `reqwest` blocking client with a fixed timeout and user agent.
pub struct HttpTransport {
    client: Client,
}

impl HttpTransport {
    pub fn new() -> RmsResult<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .user_agent(USER_AGENT)
            .build()?;
        Ok(Self { client })
    }
}

impl Transport for HttpTransport {
    fn get(&self, url: &str, query: &[(&str, &str)]) -> RmsResult<HttpReply> {
        // Query carries the API key; log the bare URL only.
        logd!("Net: GET {}", url);
        let resp = self.client.get(url).query(query).send()?;
        let status = resp.status().as_u16();
        let body = resp.text()?;
        logd!("Net: HTTP {} ({} bytes)", status, body.len());
        Ok(HttpReply { status, body })
    }
}
