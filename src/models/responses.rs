use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Marker attached to a normalized scorecard when no upstream call had data
pub const NO_SCORECARD_DEBUG: &str = "No scorecard data found";

/// Normalized scorecard returned when neither scorecard endpoint has innings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScorecardFallback {
    #[serde(rename = "scoreCard")]
    pub score_card: Value,
    #[serde(rename = "matchHeader")]
    pub match_header: Value,
    pub debug: String,
}

/// Health check response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub timestamp: chrono::DateTime<chrono::Utc>,
}

/// Error response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}
