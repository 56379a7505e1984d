// src/core/net.rs
//
// Blocking HTTPS GET. The feed lives on docs.google.com, so plain TCP is not
// an option; reqwest's blocking client handles TLS and redirects.

use std::time::Duration;

use thiserror::Error;

use crate::config::consts::{HTTP_TIMEOUT_SECS, USER_AGENT};

#[derive(Debug, Error)]
pub enum NetError {
    #[error("request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("HTTP error: {status} {url}")]
    Status { status: u16, url: String },
}

/// GET `url` and return the response body as text.
/// Anything other than a 2xx status is an error.
pub fn http_get(url: &str) -> Result<String, NetError> {
    let client = reqwest::blocking::Client::builder()
        .timeout(Duration::from_secs(HTTP_TIMEOUT_SECS))
        .user_agent(USER_AGENT)
        .build()?;

    let resp = client.get(url).send()?;
    let status = resp.status();
    if !status.is_success() {
        return Err(NetError::Status { status: status.as_u16(), url: s!(url) });
    }

    let body = resp.text()?;
    logd!("Net: GET {} → {} ({} bytes)", url, status.as_u16(), body.len());
    Ok(body)
}
