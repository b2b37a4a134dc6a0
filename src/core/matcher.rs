use crate::models::{CoachProfile, MatchResult, StudentProfile};
use crate::core::scoring::calculate_match_score;

/// Number of recommendations returned when the caller does not ask for a count
pub const DEFAULT_TOP_N: usize = 3;

/// Ranks coach candidates for a student
///
/// The matcher holds no state beyond the default result count, so a single
/// instance can be shared freely across request handlers and threads.
#[derive(Debug, Clone)]
pub struct Matcher {
    default_top_n: usize,
}

impl Matcher {
    pub fn new(default_top_n: usize) -> Self {
        Self { default_top_n }
    }

    pub fn default_top_n(&self) -> usize {
        self.default_top_n
    }

    /// Score every coach and return the best `top_n`, highest score first
    ///
    /// # Arguments
    /// * `student` - The student being matched
    /// * `coaches` - Candidate coaches, already loaded by the caller
    /// * `top_n` - Maximum number of results; `None` uses the matcher default
    ///
    /// # Returns
    /// At most `top_n` results. Coaches with equal scores keep their input order.
    pub fn top_recommendations(
        &self,
        student: &StudentProfile,
        coaches: &[CoachProfile],
        top_n: Option<usize>,
    ) -> Vec<MatchResult> {
        let top_n = top_n.unwrap_or(self.default_top_n);
        let ranked = rank_coaches(student, coaches, top_n);

        tracing::trace!(
            "Ranked {} coaches, returning {} (top_n: {})",
            coaches.len(),
            ranked.len(),
            top_n
        );

        ranked
    }
}

impl Default for Matcher {
    fn default() -> Self {
        Self::new(DEFAULT_TOP_N)
    }
}

/// Score and rank coaches for a student, keeping the first `top_n`
///
/// `sort_by` is stable, so ties stay in input order.
pub fn rank_coaches(
    student: &StudentProfile,
    coaches: &[CoachProfile],
    top_n: usize,
) -> Vec<MatchResult> {
    if coaches.is_empty() || top_n == 0 {
        return Vec::new();
    }

    let mut scored: Vec<MatchResult> = coaches
        .iter()
        .map(|coach| calculate_match_score(student, coach))
        .collect();

    scored.sort_by(|a, b| b.score.cmp(&a.score));
    scored.truncate(top_n);

    scored
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_coach(id: &str, timezone: &str, current_students: i64) -> CoachProfile {
        CoachProfile {
            id: id.to_string(),
            name: Some(format!("Coach {}", id)),
            timezone: Some(timezone.to_string()),
            current_students: Some(current_students.into()),
            ..Default::default()
        }
    }

    fn create_student() -> StudentProfile {
        StudentProfile {
            timezone: Some("IST".to_string()),
            ..Default::default()
        }
    }

    #[test]
    fn test_ranks_by_score() {
        let matcher = Matcher::default();
        let coaches = vec![
            create_coach("far", "PST", 0),
            create_coach("near", "Asia/Kolkata", 0),
            create_coach("exact", "IST", 0),
        ];

        let results = matcher.top_recommendations(&create_student(), &coaches, None);

        let ids: Vec<&str> = results.iter().map(|r| r.coach_id.as_str()).collect();
        assert_eq!(ids, vec!["exact", "near", "far"]);
    }

    #[test]
    fn test_ties_keep_input_order() {
        let matcher = Matcher::default();
        let coaches = vec![
            create_coach("a", "IST", 0),
            create_coach("busy", "IST", 5),
            create_coach("b", "IST", 0),
            create_coach("c", "IST", 0),
        ];

        let results = matcher.top_recommendations(&create_student(), &coaches, Some(4));

        let ids: Vec<&str> = results.iter().map(|r| r.coach_id.as_str()).collect();
        assert_eq!(ids, vec!["a", "b", "c", "busy"]);
    }

    #[test]
    fn test_respects_top_n() {
        let matcher = Matcher::default();
        let coaches: Vec<CoachProfile> = (0..10)
            .map(|i| create_coach(&i.to_string(), "IST", i % 6))
            .collect();

        assert_eq!(matcher.top_recommendations(&create_student(), &coaches, None).len(), 3);
        assert_eq!(matcher.top_recommendations(&create_student(), &coaches, Some(7)).len(), 7);
        assert_eq!(matcher.top_recommendations(&create_student(), &coaches, Some(50)).len(), 10);
        assert!(matcher.top_recommendations(&create_student(), &coaches, Some(0)).is_empty());
    }

    #[test]
    fn test_empty_pool() {
        let matcher = Matcher::new(5);
        assert!(matcher.top_recommendations(&create_student(), &[], None).is_empty());
        assert!(rank_coaches(&create_student(), &[], 3).is_empty());
    }
}
