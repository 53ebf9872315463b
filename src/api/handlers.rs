//! API handlers

use axum::{
    extract::{Query, State},
    Json,
};
use serde::Serialize;

use crate::api::{ApiError, AppState};
use crate::classify::{classify, NumberProperties};
use crate::types::{Number, Property};

/// Static welcome message
pub async fn root() -> Json<WelcomeResponse> {
    Json(WelcomeResponse {
        message: "Welcome to the Number Classification API!".to_string(),
        usage: "Use /api/classify-number?number=<number> to classify a number.".to_string(),
    })
}

#[derive(Debug, Serialize)]
pub struct WelcomeResponse {
    pub message: String,
    pub usage: String,
}

/// Health check
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
}

/// Classify a number and attach a fun fact
///
/// Query pairs are taken as a list so a repeated `number` uses the first
/// value instead of failing extraction.
pub async fn classify_number(
    State(state): State<AppState>,
    Query(params): Query<Vec<(String, String)>>,
) -> Result<Json<ClassifyResponse>, ApiError> {
    let raw = params
        .into_iter()
        .find(|(key, _)| key == "number")
        .map(|(_, value)| value)
        .ok_or_else(ApiError::missing_number)?;
    let number = Number::parse(&raw)?;

    // Trial division grows with sqrt(n); keep it off the async workers
    let classification = tokio::task::spawn_blocking(move || classify(number))
        .await
        .map_err(|e| ApiError::internal(format!("classification task failed: {}", e)))?;
    let is_armstrong = classification.properties.contains(&Property::Armstrong);
    tracing::debug!(
        %number,
        is_prime = classification.is_prime,
        is_perfect = classification.is_perfect,
        is_armstrong,
        "Classified number"
    );

    let fun_fact = state.resolver.resolve(number, is_armstrong).await;

    Ok(Json(ClassifyResponse {
        error: false,
        classification,
        fun_fact,
    }))
}

#[derive(Debug, Serialize)]
pub struct ClassifyResponse {
    pub error: bool,
    #[serde(flatten)]
    pub classification: NumberProperties,
    pub fun_fact: String,
}
