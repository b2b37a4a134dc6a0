use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};
use crate::models::domain::{CoachProfile, StudentProfile};

/// Request to rank a pool of coaches for one student
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct RecommendationRequest {
    pub student: StudentProfile,
    #[serde(default)]
    #[validate(custom(function = "validate_coach_pool"))]
    pub coaches: Vec<CoachProfile>,
    #[serde(alias = "top_n", rename = "topN", default)]
    pub top_n: Option<usize>,
}

/// Request to score a single student/coach pair
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct ScoreRequest {
    pub student: StudentProfile,
    #[validate(custom(function = "validate_coach"))]
    pub coach: CoachProfile,
}

/// Query for the label endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LabelQuery {
    pub score: i64,
}

fn validate_coach(coach: &CoachProfile) -> Result<(), ValidationError> {
    if coach.id.trim().is_empty() {
        let mut err = ValidationError::new("empty_coach_id");
        err.message = Some("coach id must not be empty".into());
        return Err(err);
    }
    Ok(())
}

#[allow(clippy::ptr_arg)]
fn validate_coach_pool(coaches: &Vec<CoachProfile>) -> Result<(), ValidationError> {
    coaches.iter().try_for_each(validate_coach)
}
