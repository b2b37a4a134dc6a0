//! Coach Match - coach/student matching engine for a chess coaching platform
//!
//! This library scores how well each coach suits a student (timezone, teaching
//! style, goals, age group and availability) and ranks a coach pool into
//! recommendations. The engine in [`crate::core`] is pure and infallible; [`crate::routes`]
//! exposes it over HTTP.

pub mod config;
pub mod core;
pub mod error;
pub mod models;
pub mod routes;

// Re-export commonly used types
pub use crate::core::{calculate_match_score, match_label, Matcher};
pub use crate::error::ApiError;
pub use crate::models::{CoachProfile, MatchLabel, MatchResult, ScoreBreakdown, StudentProfile};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_library_exports() {
        let result = calculate_match_score(&StudentProfile::default(), &CoachProfile::new("c2"));
        assert_eq!(result.score, 82);
        assert_eq!(match_label(result.score).label, "Great Match");
    }
}
