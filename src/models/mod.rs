// Model exports
pub mod domain;
pub mod requests;
pub mod responses;

pub use domain::{
    AgeRange, CoachProfile, MatchLabel, MatchResult, NumericField, ScoreBreakdown, StudentProfile,
};
pub use requests::{LabelQuery, RecommendationRequest, ScoreRequest};
pub use responses::{ErrorResponse, HealthResponse, RankedRecommendation, RecommendationResponse};
