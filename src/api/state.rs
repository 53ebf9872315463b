//! API server state

use std::sync::Arc;

use crate::config::AppConfig;
use crate::fact::{FactResolver, FactSource, NumbersApiClient};
use crate::Result;

/// API server state
///
/// Immutable after startup; cloned into every request.
#[derive(Clone)]
pub struct AppState {
    /// Fun-fact resolver shared by all requests
    pub resolver: Arc<FactResolver>,
}

impl AppState {
    pub fn new(resolver: FactResolver) -> Self {
        Self {
            resolver: Arc::new(resolver),
        }
    }

    /// Create state backed by an arbitrary fact source
    pub fn with_source(source: Arc<dyn FactSource>, config: &AppConfig) -> Self {
        Self::new(FactResolver::with_timeout(source, config.trivia.timeout()))
    }

    /// Create state talking to the configured trivia service
    pub fn from_config(config: &AppConfig) -> Result<Self> {
        let client = NumbersApiClient::new(&config.trivia.base_url, config.trivia.timeout())?;
        Ok(Self::with_source(Arc::new(client), config))
    }
}
