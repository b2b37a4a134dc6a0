use crate::models::MatchLabel;

/// Score brackets, highest first. A score belongs to the first bracket whose
/// floor it reaches.
static LABEL_BRACKETS: [(i64, MatchLabel); 3] = [
    (85, MatchLabel { label: "Excellent Match", color: "#10B981" }),
    (70, MatchLabel { label: "Great Match", color: "#3B82F6" }),
    (50, MatchLabel { label: "Good Match", color: "#F59E0B" }),
];

const FALLBACK_LABEL: MatchLabel = MatchLabel { label: "Possible Match", color: "#6B7280" };

/// Display label and color for a match score
pub fn match_label(score: impl Into<i64>) -> MatchLabel {
    let score = score.into();

    LABEL_BRACKETS
        .iter()
        .find(|(floor, _)| score >= *floor)
        .map(|(_, label)| *label)
        .unwrap_or(FALLBACK_LABEL)
}
