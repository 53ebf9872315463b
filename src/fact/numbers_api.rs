//! numbersapi.com client

use std::time::Duration;

use async_trait::async_trait;
use reqwest::StatusCode;
use serde_json::Value;

use super::FactSource;
use crate::error::Error;
use crate::Result;

pub const DEFAULT_BASE_URL: &str = "http://numbersapi.com";

/// Trivia client for `GET {base_url}/{n}/math?json`
#[derive(Debug, Clone)]
pub struct NumbersApiClient {
    client: reqwest::Client,
    base_url: String,
}

impl NumbersApiClient {
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Result<Self> {
        let client = reqwest::Client::builder().timeout(timeout).build()?;

        Ok(Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        })
    }

    fn fact_url(&self, n: i64) -> String {
        format!("{}/{}/math?json", self.base_url, n)
    }
}

#[async_trait]
impl FactSource for NumbersApiClient {
    async fn fetch_fact(&self, n: i64) -> Result<String> {
        let url = self.fact_url(n);
        tracing::debug!(%url, "Fetching trivia fact");

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| Error::upstream(format!("request to {} failed: {}", url, e)))?;

        let status = response.status();
        if status != StatusCode::OK {
            return Err(Error::upstream(format!("{} returned status {}", url, status)));
        }

        let body = response
            .text()
            .await
            .map_err(|e| Error::upstream(format!("failed to read body from {}: {}", url, e)))?;

        extract_fact(&body)
    }
}

/// Pull the `text` field out of a trivia response body
fn extract_fact(body: &str) -> Result<String> {
    let value: Value = serde_json::from_str(body)
        .map_err(|e| Error::MalformedUpstreamBody(e.to_string()))?;

    match value.get("text").and_then(Value::as_str) {
        Some(text) => Ok(text.to_string()),
        None => Err(Error::MissingFact),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fact_url() {
        let client =
            NumbersApiClient::new("http://trivia.local/", Duration::from_secs(1)).unwrap();
        assert_eq!(client.fact_url(42), "http://trivia.local/42/math?json");
        assert_eq!(client.fact_url(-3), "http://trivia.local/-3/math?json");
    }

    #[test]
    fn test_extract_fact() {
        assert_eq!(
            extract_fact(r#"{"text": "4 is a square.", "number": 4}"#).unwrap(),
            "4 is a square."
        );
        assert!(matches!(
            extract_fact(r#"{"number": 4}"#),
            Err(Error::MissingFact)
        ));
        assert!(matches!(
            extract_fact(r#"{"text": 4}"#),
            Err(Error::MissingFact)
        ));
        assert!(matches!(
            extract_fact("4 is a square."),
            Err(Error::MalformedUpstreamBody(_))
        ));
    }
}
