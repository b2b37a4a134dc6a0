use serde::{Deserialize, Serialize};

/// Learning style assumed when a student has not picked one
pub const DEFAULT_LEARNING_STYLE: &str = "Visual";

/// Teaching style assumed when a coach has not picked one
pub const DEFAULT_TEACHING_STYLE: &str = "Balanced";

/// Specializations assumed for a coach with none listed
pub const DEFAULT_SPECIALIZATIONS: [&str; 2] = ["Fundamentals", "Tactics"];

/// Age range assumed for a coach with no stated preference
pub const DEFAULT_AGE_RANGE: &str = "5-18";

/// Student age used when the profile has none or it cannot be parsed
pub const DEFAULT_STUDENT_AGE: i64 = 10;

/// Coaching capacity used when neither `availableSlots` nor `maxStudents` is set
pub const DEFAULT_CAPACITY: f64 = 5.0;

/// Display name used when a coach has neither `name` nor `coachName`
pub const DEFAULT_COACH_NAME: &str = "Coach";

/// A numeric field that profile documents store either as a number or as text
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum NumericField {
    Number(f64),
    Text(String),
}

impl NumericField {
    /// Integer value of the field, if it has one.
    ///
    /// Numbers truncate toward zero. Text is read by its leading integer
    /// prefix, so `"12 years"` yields 12 and `"twelve"` yields `None`.
    pub fn as_integer(&self) -> Option<i64> {
        match self {
            NumericField::Number(n) if n.is_finite() => Some(n.trunc() as i64),
            NumericField::Number(_) => None,
            NumericField::Text(s) => parse_leading_integer(s),
        }
    }

    /// Numeric value of the field, if it has one.
    ///
    /// Text must be a plain number after trimming, so `"6"` and `" 2.5 "`
    /// parse but `"6 slots"` does not.
    pub fn as_number(&self) -> Option<f64> {
        match self {
            NumericField::Number(n) => Some(*n),
            NumericField::Text(s) => s.trim().parse().ok(),
        }
        .filter(|n: &f64| n.is_finite())
    }
}

impl From<f64> for NumericField {
    fn from(value: f64) -> Self {
        NumericField::Number(value)
    }
}

impl From<i64> for NumericField {
    fn from(value: i64) -> Self {
        NumericField::Number(value as f64)
    }
}

impl From<&str> for NumericField {
    fn from(value: &str) -> Self {
        NumericField::Text(value.to_string())
    }
}

fn parse_leading_integer(text: &str) -> Option<i64> {
    let text = text.trim_start();
    let (negative, digits) = match text.as_bytes().first() {
        Some(b'-') => (true, &text[1..]),
        Some(b'+') => (false, &text[1..]),
        _ => (false, text),
    };

    let end = digits
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(digits.len());
    if end == 0 {
        return None;
    }

    // Digit runs too long for i64 saturate
    let value = digits[..end]
        .bytes()
        .fold(0i64, |acc, d| acc.saturating_mul(10).saturating_add(i64::from(d - b'0')));
    Some(if negative { -value } else { value })
}

/// Treat empty strings the same as a missing value
#[inline]
fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|s| !s.is_empty())
}

#[inline]
fn number(value: &Option<NumericField>) -> Option<f64> {
    value.as_ref().and_then(NumericField::as_number)
}

/// Student (or parent-managed student) profile as stored by the platform
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StudentProfile {
    #[serde(default)]
    pub timezone: Option<String>,
    #[serde(rename = "learningStyle", default)]
    pub learning_style: Option<String>,
    #[serde(default)]
    pub goal: Option<String>,
    #[serde(default)]
    pub age: Option<NumericField>,
}

impl StudentProfile {
    pub fn timezone(&self) -> Option<&str> {
        non_empty(&self.timezone)
    }

    /// Learning style, defaulting to "Visual"
    pub fn learning_style(&self) -> &str {
        non_empty(&self.learning_style).unwrap_or(DEFAULT_LEARNING_STYLE)
    }

    pub fn goal(&self) -> Option<&str> {
        non_empty(&self.goal)
    }

    /// Age as an integer, defaulting to 10 when absent or unparseable
    pub fn age(&self) -> i64 {
        self.age
            .as_ref()
            .and_then(NumericField::as_integer)
            .unwrap_or(DEFAULT_STUDENT_AGE)
    }
}

/// Coach profile as stored by the platform
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CoachProfile {
    pub id: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(rename = "coachName", default)]
    pub coach_name: Option<String>,
    #[serde(default)]
    pub timezone: Option<String>,
    #[serde(rename = "teachingStyle", default)]
    pub teaching_style: Option<String>,
    #[serde(default)]
    pub specializations: Option<Vec<String>>,
    #[serde(rename = "preferredAgeRange", default)]
    pub preferred_age_range: Option<String>,
    #[serde(rename = "availableSlots", default)]
    pub available_slots: Option<NumericField>,
    #[serde(rename = "maxStudents", default)]
    pub max_students: Option<NumericField>,
    #[serde(rename = "currentStudents", default)]
    pub current_students: Option<NumericField>,
}

impl CoachProfile {
    /// Create a coach with only an id; every other field takes its default
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            ..Default::default()
        }
    }

    /// Resolve the display name: `name`, then `coachName`, then "Coach"
    pub fn display_name(&self) -> &str {
        non_empty(&self.name)
            .or_else(|| non_empty(&self.coach_name))
            .unwrap_or(DEFAULT_COACH_NAME)
    }

    pub fn timezone(&self) -> Option<&str> {
        non_empty(&self.timezone)
    }

    /// Teaching style, defaulting to "Balanced"
    pub fn teaching_style(&self) -> &str {
        non_empty(&self.teaching_style).unwrap_or(DEFAULT_TEACHING_STYLE)
    }

    /// Specialization tags, defaulting to Fundamentals and Tactics when none are listed
    pub fn specializations(&self) -> Vec<&str> {
        match self.specializations.as_deref() {
            Some(tags) if !tags.is_empty() => tags.iter().map(String::as_str).collect(),
            _ => DEFAULT_SPECIALIZATIONS.to_vec(),
        }
    }

    /// Preferred age range, defaulting to 5-18
    pub fn age_range(&self) -> AgeRange {
        AgeRange::parse(non_empty(&self.preferred_age_range).unwrap_or(DEFAULT_AGE_RANGE))
    }

    /// Total capacity: `availableSlots`, then `maxStudents`, then 5.
    /// A value that is not a number counts as unset.
    pub fn capacity(&self) -> f64 {
        number(&self.available_slots)
            .or_else(|| number(&self.max_students))
            .unwrap_or(DEFAULT_CAPACITY)
    }

    /// Remaining capacity after currently assigned students
    pub fn headroom(&self) -> f64 {
        self.capacity() - number(&self.current_students).unwrap_or(0.0)
    }
}

/// Age bounds parsed from a `"<min>-<max>"` string.
///
/// A bound that fails to parse is `None`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AgeRange {
    pub min: Option<f64>,
    pub max: Option<f64>,
}

impl AgeRange {
    pub fn parse(range: &str) -> Self {
        let mut bounds = range.split('-').map(|part| part.trim().parse::<f64>().ok());

        Self {
            min: bounds.next().flatten(),
            max: bounds.next().flatten(),
        }
    }

    /// Inclusive containment; false if either bound is unknown
    pub fn contains(&self, age: f64) -> bool {
        match (self.min, self.max) {
            (Some(min), Some(max)) => age >= min && age <= max,
            _ => false,
        }
    }

    /// Whether `age` lies within `tolerance` of a known bound
    pub fn is_near_boundary(&self, age: f64, tolerance: f64) -> bool {
        [self.min, self.max]
            .into_iter()
            .flatten()
            .any(|bound| (age - bound).abs() <= tolerance)
    }
}

/// Points awarded by each sub-score
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreBreakdown {
    pub timezone: u32,
    pub style: u32,
    pub goal: u32,
    pub age: u32,
    pub availability: u32,
}

impl ScoreBreakdown {
    pub fn total(&self) -> u32 {
        self.timezone + self.style + self.goal + self.age + self.availability
    }
}

/// Compatibility of one coach for one student
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchResult {
    pub score: u32,
    pub reasons: Vec<String>,
    #[serde(rename = "coachId")]
    pub coach_id: String,
    #[serde(rename = "coachName")]
    pub coach_name: String,
    pub breakdown: ScoreBreakdown,
}

impl MatchResult {
    pub fn label(&self) -> MatchLabel {
        crate::core::labels::match_label(self.score)
    }
}

/// Display label and color for a match score
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct MatchLabel {
    pub label: &'static str,
    pub color: &'static str,
}
