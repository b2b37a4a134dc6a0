use serde::{Deserialize, Serialize};
use crate::models::domain::{MatchLabel, MatchResult};

/// A match result with its position in the ranking and its display label
#[derive(Debug, Clone, Serialize)]
pub struct RankedRecommendation {
    pub rank: usize,
    #[serde(flatten)]
    pub result: MatchResult,
    #[serde(flatten)]
    pub label: MatchLabel,
}

impl RankedRecommendation {
    pub fn new(rank: usize, result: MatchResult) -> Self {
        let label = result.label();
        Self { rank, result, label }
    }
}

/// Response for the recommendations endpoint
#[derive(Debug, Clone, Serialize)]
pub struct RecommendationResponse {
    #[serde(rename = "requestId")]
    pub request_id: String,
    pub recommendations: Vec<RankedRecommendation>,
    #[serde(rename = "totalCandidates")]
    pub total_candidates: usize,
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
    pub message: String,
    #[serde(rename = "statusCode")]
    pub status_code: u16,
}
