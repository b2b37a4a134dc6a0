use crate::models::{AgeRange, CoachProfile, MatchResult, ScoreBreakdown, StudentProfile};
use crate::core::{goals::goal_score, style::style_score, timezone::timezone_fit};

/// Highest possible match score
pub const MAX_SCORE: u32 = 100;

const AGE_IN_RANGE_POINTS: u32 = 15;
const AGE_NEAR_RANGE_POINTS: u32 = 10;
const AGE_OUT_OF_RANGE_POINTS: u32 = 5;
/// Years outside the preferred range that still earn partial credit
const AGE_TOLERANCE_YEARS: f64 = 2.0;

/// Calculate a match score (0-100) for a coach based on a student profile
///
/// Scoring formula (points, summed then clamped):
///   timezone      max 30   exact 30, same cluster 20, unknown 15
///   style         max 25   learning/teaching compatibility matrix
///   goal          max 20   specialization covers the goal's keywords
///   age           max 15   inside the coach's preferred range
///   availability  max 10   coach's remaining capacity
///
/// Reasons are collected in that order. Every field is optional and
/// defaulted, so this never fails.
pub fn calculate_match_score(student: &StudentProfile, coach: &CoachProfile) -> MatchResult {
    let mut reasons = Vec::new();
    let mut breakdown = ScoreBreakdown::default();

    // Timezone proximity
    let fit = timezone_fit(student.timezone(), coach.timezone());
    breakdown.timezone = fit.points();
    reasons.extend(fit.reason().map(str::to_string));

    // Learning/teaching style
    let (points, reason) = style_score(student.learning_style(), coach.teaching_style());
    breakdown.style = points;
    reasons.extend(reason);

    // Goal alignment
    let (points, reason) = goal_score(student.goal(), &coach.specializations());
    breakdown.goal = points;
    reasons.extend(reason);

    // Age appropriateness
    let (points, reason) = age_score(student.age(), &coach.age_range());
    breakdown.age = points;
    reasons.extend(reason.map(str::to_string));

    // Availability
    let (points, reason) = availability_score(coach.headroom());
    breakdown.availability = points;
    reasons.push(reason.to_string());

    MatchResult {
        score: breakdown.total().clamp(0, MAX_SCORE),
        reasons,
        coach_id: coach.id.clone(),
        coach_name: coach.display_name().to_string(),
        breakdown,
    }
}

/// Score a student's age against a coach's preferred range
#[inline]
fn age_score(age: i64, range: &AgeRange) -> (u32, Option<&'static str>) {
    let age = age as f64;

    if range.contains(age) {
        (AGE_IN_RANGE_POINTS, Some("Experienced with this age group"))
    } else if range.is_near_boundary(age, AGE_TOLERANCE_YEARS) {
        (AGE_NEAR_RANGE_POINTS, None)
    } else {
        (AGE_OUT_OF_RANGE_POINTS, None)
    }
}

/// Score remaining coach capacity. Every tier carries a reason.
#[inline]
fn availability_score(headroom: f64) -> (u32, &'static str) {
    match headroom {
        h if h >= 5.0 => (10, "High availability"),
        h if h >= 2.0 => (7, "Good availability"),
        h if h >= 1.0 => (4, "Limited availability"),
        _ => (0, "Fully booked"),
    }
}
