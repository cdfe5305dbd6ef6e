//! DNS-over-HTTPS lookup of HTTPS (type 65) records
//!
//! Uses the JSON API (`application/dns-json`) served by public resolvers
//! such as `dns.google/resolve` and `cloudflare-dns.com/dns-query`.

use std::time::Duration;

use anyhow::{Context, Result};
use serde::Deserialize;

use crate::config::LookupConfig;

/// RR type of HTTPS records (RFC 9460)
pub const HTTPS_RR_TYPE: u16 = 65;

#[derive(Debug, Clone, Deserialize)]
pub struct DnsJsonResponse {
    #[serde(rename = "Status")]
    pub status: u32,
    #[serde(rename = "Answer", default)]
    pub answer: Vec<DnsAnswer>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct DnsAnswer {
    #[serde(default)]
    pub name: String,
    #[serde(rename = "type")]
    pub rr_type: u16,
    #[serde(rename = "TTL", default)]
    pub ttl: u32,
    pub data: String,
}

impl DnsJsonResponse {
    /// First HTTPS answer, or the reason there is none.
    pub fn https_answer(&self) -> Result<&DnsAnswer> {
        if self.status != 0 {
            anyhow::bail!("DNS query failed with status code: {}", self.status);
        }
        if self.answer.is_empty() {
            anyhow::bail!("No HTTPS records found for this domain.");
        }
        self.answer
            .iter()
            .find(|a| a.rr_type == HTTPS_RR_TYPE)
            .ok_or_else(|| anyhow::anyhow!("No HTTPS record found in answer."))
    }
}

pub struct DohJsonClient {
    url: String,
    client: reqwest::Client,
    timeout: Duration,
}

impl DohJsonClient {
    pub fn new(config: &LookupConfig) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(config.timeout)
            .user_agent(concat!("ech-inspect/", env!("CARGO_PKG_VERSION")))
            .build()
            .context("Failed to create HTTP client for DoH")?;

        Ok(Self {
            url: config.doh_url.clone(),
            client,
            timeout: config.timeout,
        })
    }

    pub async fn query_https(&self, domain: &str) -> Result<DnsJsonResponse> {
        tracing::debug!(
            url = %self.url,
            domain,
            timeout_ms = self.timeout.as_millis() as u64,
            "DoH query"
        );

        let response = self
            .client
            .get(&self.url)
            .query(&[("name", domain), ("type", "HTTPS")])
            .header("Accept", "application/dns-json")
            .send()
            .await
            .with_context(|| format!("DoH GET request to {} failed", self.url))?;

        if !response.status().is_success() {
            return Err(anyhow::anyhow!(
                "DoH server returned error status: {} {}",
                response.status().as_u16(),
                response.status().canonical_reason().unwrap_or("Unknown")
            ));
        }

        let body = response
            .text()
            .await
            .context("Failed to read DoH response body")?;
        let parsed: DnsJsonResponse =
            serde_json::from_str(&body).context("Failed to parse DoH JSON response")?;
        tracing::debug!(status = parsed.status, answers = parsed.answer.len(), "DoH response");
        Ok(parsed)
    }
}
