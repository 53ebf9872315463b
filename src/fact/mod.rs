//! Fun-fact resolution
//!
//! Armstrong numbers get a locally synthesized explanation. Every other
//! integer is looked up once through a [`FactSource`], bounded by a timeout,
//! and any failure degrades to a fixed fallback string.

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;

use crate::classify::digits;
use crate::error::Error;
use crate::types::Number;
use crate::Result;

pub mod numbers_api;

pub use numbers_api::NumbersApiClient;

pub const INTEGERS_ONLY: &str = "Fun facts are only available for integers.";
pub const NO_FACT: &str = "No fun fact available.";
pub const API_ERROR: &str = "No fun fact available due to API error.";

pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(5);

/// Source of trivia facts about integers
#[async_trait]
pub trait FactSource: Send + Sync {
    /// Fetch a fact about `n`.
    ///
    /// Returns [`Error::MissingFact`] when the source answered but had
    /// nothing to say, any other error when the source was unreachable.
    async fn fetch_fact(&self, n: i64) -> Result<String>;
}

/// Picks between a synthesized Armstrong explanation and a remote lookup
pub struct FactResolver {
    source: Arc<dyn FactSource>,
    timeout: Duration,
}

impl FactResolver {
    pub fn new(source: Arc<dyn FactSource>) -> Self {
        Self::with_timeout(source, DEFAULT_TIMEOUT)
    }

    pub fn with_timeout(source: Arc<dyn FactSource>, timeout: Duration) -> Self {
        Self { source, timeout }
    }

    /// Resolve a fun fact. Never fails; the result is always non-empty.
    pub async fn resolve(&self, number: Number, is_armstrong: bool) -> String {
        let Some(n) = number.as_integer() else {
            return INTEGERS_ONLY.to_string();
        };

        if is_armstrong {
            return armstrong_explanation(n);
        }

        let outcome = match tokio::time::timeout(self.timeout, self.source.fetch_fact(n)).await {
            Ok(result) => result,
            Err(_) => Err(Error::upstream(format!(
                "timed out after {}ms",
                self.timeout.as_millis()
            ))),
        };

        match outcome {
            Ok(text) if !text.trim().is_empty() => text,
            Ok(_) | Err(Error::MissingFact) => {
                tracing::debug!(number = n, "Trivia source returned no fact");
                NO_FACT.to_string()
            }
            Err(err) => {
                tracing::warn!(number = n, error = %err, "Trivia lookup failed");
                API_ERROR.to_string()
            }
        }
    }
}

/// `"153 is an Armstrong number because 1^3 + 5^3 + 3^3 = 153"`
pub fn armstrong_explanation(n: i64) -> String {
    let digits = digits(n);
    let power = digits.len();
    let terms = digits
        .iter()
        .map(|d| format!("{}^{}", d, power))
        .collect::<Vec<_>>()
        .join(" + ");

    format!("{} is an Armstrong number because {} = {}", n, terms, n)
}
