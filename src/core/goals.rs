/// Specialization keywords that serve each student goal
static GOAL_KEYWORDS: [(&str, &[&str]); 5] = [
    ("Tournament preparation", &["Openings", "Tournament", "Competition"]),
    ("Rating improvement", &["Tactics", "Strategy", "Rating"]),
    ("Casual learning", &["Fundamentals", "Beginner", "Casual"]),
    ("Advanced tactics", &["Tactics", "Combinations", "Advanced"]),
    ("Endgame mastery", &["Endgame", "Technique", "Endgames"]),
];

/// Keywords used for an unknown or missing goal
static DEFAULT_KEYWORDS: &[&str] = &["Fundamentals"];

pub const GOAL_MATCH_POINTS: u32 = 20;
pub const GOAL_PARTIAL_POINTS: u32 = 10;

/// Keywords relevant to a goal
pub fn relevant_keywords(goal: Option<&str>) -> &'static [&'static str] {
    goal.and_then(|goal| GOAL_KEYWORDS.iter().find(|(name, _)| *name == goal))
        .map(|(_, keywords)| *keywords)
        .unwrap_or(DEFAULT_KEYWORDS)
}

/// Whether any specialization mentions any keyword, ignoring case
pub fn covers_keywords(specializations: &[&str], keywords: &[&str]) -> bool {
    let keywords: Vec<String> = keywords.iter().map(|k| k.to_lowercase()).collect();

    specializations.iter().any(|spec| {
        let spec = spec.to_lowercase();
        keywords.iter().any(|keyword| spec.contains(keyword.as_str()))
    })
}

/// Score goal alignment, returning points and an optional reason
pub fn goal_score(goal: Option<&str>, specializations: &[&str]) -> (u32, Option<String>) {
    if !covers_keywords(specializations, relevant_keywords(goal)) {
        return (GOAL_PARTIAL_POINTS, None);
    }

    // First space-separated word; a leading space leaves it empty
    let topic = goal
        .and_then(|goal| goal.split(' ').next())
        .filter(|word| !word.is_empty())
        .unwrap_or("relevant topics");

    (GOAL_MATCH_POINTS, Some(format!("Specializes in {}", topic)))
}
