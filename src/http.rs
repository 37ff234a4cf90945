// File: http.rs
// SPDX-License-Identifier: MIT OR Apache-2.0
//
// Copyright (c) 2023-2025
// - Volker Schwaberow <volker@schwaberow.de>

use crate::config::ConfigParameter;
use crate::headermap::ResponseHeaders;
use crate::httpinner::HttpInner;
use log::debug;
use reqwest::{Client, Method};
use std::error::Error;
use std::time::Duration;

/// Why one target could not be probed. Timeout and TLS trouble are final
/// for the target; the other kinds allow one fallback attempt.
#[derive(Debug, thiserror::Error)]
pub enum ProbeError {
    #[error("request timed out")]
    Timeout,

    #[error("tls failure: {0}")]
    Tls(String),

    #[error("connection failed: {0}")]
    Connect(String),

    #[error("request failed: {0}")]
    Other(String),
}

impl ProbeError {
    pub fn allows_fallback(&self) -> bool {
        matches!(self, ProbeError::Connect(_) | ProbeError::Other(_))
    }

    fn from_reqwest(error: reqwest::Error) -> Self {
        if error.is_timeout() {
            return ProbeError::Timeout;
        }
        let chain = error_chain(&error);
        if tls_related(&chain) {
            ProbeError::Tls(chain)
        } else if error.is_connect() {
            ProbeError::Connect(chain)
        } else {
            ProbeError::Other(chain)
        }
    }
}

/// reqwest wraps the interesting cause several layers deep; collect the
/// whole chain so it can be classified and logged.
fn error_chain(error: &reqwest::Error) -> String {
    let mut chain = error.to_string();
    let mut source = error.source();
    while let Some(inner) = source {
        chain.push_str(": ");
        chain.push_str(&inner.to_string());
        source = inner.source();
    }
    chain
}

fn tls_related(message: &str) -> bool {
    let message = message.to_ascii_lowercase();
    ["certificate", "handshake", "tls", "ssl"]
        .iter()
        .any(|needle| message.contains(needle))
}

/// The probe client. Certificates are deliberately not validated and
/// redirects are not followed, so the reported headers belong to the
/// first response a target gives.
#[derive(Debug, Clone)]
pub struct Http {
    client: Client,
    timeout: Duration,
}

impl Http {
    pub fn new(config: &ConfigParameter) -> reqwest::Result<Self> {
        let client = Client::builder()
            .danger_accept_invalid_certs(true)
            .redirect(reqwest::redirect::Policy::none())
            .build()?;
        Ok(Http {
            client,
            timeout: Duration::from_secs(config.timeout()),
        })
    }

    /// HEAD first; some servers reject or mishandle it, so anything that
    /// is not a timeout or TLS failure gets one GET retry.
    pub async fn probe(&self, target: &str) -> Result<HttpInner, ProbeError> {
        match self.request(Method::HEAD, target).await {
            Ok(inner) => Ok(inner),
            Err(error) if error.allows_fallback() => {
                debug!("HEAD {} failed ({}), retrying with GET", target, error);
                self.request(Method::GET, target).await
            }
            Err(error) => Err(error),
        }
    }

    async fn request(&self, method: Method, target: &str) -> Result<HttpInner, ProbeError> {
        let response = self
            .client
            .request(method, target)
            .timeout(self.timeout)
            .send()
            .await
            .map_err(ProbeError::from_reqwest)?;

        let status = response.status().as_u16();
        let headers = ResponseHeaders::from(response.headers());
        Ok(HttpInner::new(target.to_string(), status, headers))
    }
}
