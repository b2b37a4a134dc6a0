/// Points for a learning/teaching style pair missing from the matrix
pub const UNMATCHED_STYLE_POINTS: u32 = 15;

/// Pairs scoring at least this many points earn a reason
pub const STYLE_REASON_THRESHOLD: u32 = 22;

/// Student learning style vs coach teaching style compatibility
static STYLE_MATRIX: [(&str, [(&str, u32); 3]); 3] = [
    ("Visual", [("Tactical", 25), ("Strategic", 20), ("Balanced", 22)]),
    ("Verbal", [("Tactical", 18), ("Strategic", 25), ("Balanced", 22)]),
    ("Hands-on", [("Tactical", 22), ("Strategic", 18), ("Balanced", 25)]),
];

/// Look up the matrix entry for a style pair, if there is one
pub fn matrix_points(learning_style: &str, teaching_style: &str) -> Option<u32> {
    STYLE_MATRIX
        .iter()
        .find(|(learning, _)| *learning == learning_style)
        .and_then(|(_, row)| row.iter().find(|(teaching, _)| *teaching == teaching_style))
        .map(|(_, points)| *points)
}

/// Score a resolved style pair, returning points and an optional reason
pub fn style_score(learning_style: &str, teaching_style: &str) -> (u32, Option<String>) {
    let points = matrix_points(learning_style, teaching_style).unwrap_or(UNMATCHED_STYLE_POINTS);

    let reason = (points >= STYLE_REASON_THRESHOLD).then(|| {
        format!("{} teaching matches {} learning style", teaching_style, learning_style)
    });

    (points, reason)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_matrix_values() {
        assert_eq!(matrix_points("Visual", "Tactical"), Some(25));
        assert_eq!(matrix_points("Visual", "Strategic"), Some(20));
        assert_eq!(matrix_points("Verbal", "Strategic"), Some(25));
        assert_eq!(matrix_points("Verbal", "Tactical"), Some(18));
        assert_eq!(matrix_points("Hands-on", "Balanced"), Some(25));
        assert_eq!(matrix_points("Hands-on", "Strategic"), Some(18));
    }

    #[test]
    fn test_strong_pair_has_reason() {
        let (points, reason) = style_score("Visual", "Balanced");
        assert_eq!(points, 22);
        assert_eq!(reason.as_deref(), Some("Balanced teaching matches Visual learning style"));
    }

    #[test]
    fn test_weak_pair_still_scores() {
        let (points, reason) = style_score("Visual", "Strategic");
        assert_eq!(points, 20);
        assert!(reason.is_none());
    }

    #[test]
    fn test_unknown_style() {
        assert_eq!(style_score("Visual", "Aggressive"), (15, None));
        assert_eq!(style_score("Auditory", "Tactical"), (15, None));
    }
}
