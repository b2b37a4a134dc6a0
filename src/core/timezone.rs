/// Timezone labels that are treated as interchangeable for scheduling.
///
/// A timezone belongs to a cluster when it contains one of the cluster's
/// aliases as a (case-sensitive) substring.
pub static TIMEZONE_CLUSTERS: [(&str, &[&str]); 4] = [
    ("IST", &["IST", "Asia/Kolkata", "India"]),
    ("PST", &["PST", "America/Los_Angeles", "Pacific"]),
    ("EST", &["EST", "America/New_York", "Eastern"]),
    ("GMT", &["GMT", "UTC", "Europe/London"]),
];

pub const EXACT_TIMEZONE_POINTS: u32 = 30;
pub const CLUSTER_TIMEZONE_POINTS: u32 = 20;
pub const UNKNOWN_TIMEZONE_POINTS: u32 = 15;

/// How two timezone labels relate to each other
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimezoneFit {
    Exact,
    SameCluster,
    /// At least one side has no timezone
    Unknown,
    Mismatch,
}

impl TimezoneFit {
    pub fn points(self) -> u32 {
        match self {
            TimezoneFit::Exact => EXACT_TIMEZONE_POINTS,
            TimezoneFit::SameCluster => CLUSTER_TIMEZONE_POINTS,
            TimezoneFit::Unknown => UNKNOWN_TIMEZONE_POINTS,
            TimezoneFit::Mismatch => 0,
        }
    }

    pub fn reason(self) -> Option<&'static str> {
        match self {
            TimezoneFit::Exact => Some("Perfect timezone match"),
            TimezoneFit::SameCluster => Some("Compatible timezone"),
            TimezoneFit::Unknown | TimezoneFit::Mismatch => None,
        }
    }
}

/// Whether a timezone label falls into the named cluster
#[inline]
fn in_cluster(timezone: &str, aliases: &[&str]) -> bool {
    aliases.iter().any(|alias| timezone.contains(alias))
}

/// Whether both labels fall into at least one common cluster
pub fn same_cluster(a: &str, b: &str) -> bool {
    TIMEZONE_CLUSTERS
        .iter()
        .any(|(_, aliases)| in_cluster(a, aliases) && in_cluster(b, aliases))
}

/// Classify a student/coach timezone pair
pub fn timezone_fit(student: Option<&str>, coach: Option<&str>) -> TimezoneFit {
    match (student, coach) {
        (Some(s), Some(c)) if s == c => TimezoneFit::Exact,
        (Some(s), Some(c)) if same_cluster(s, c) => TimezoneFit::SameCluster,
        (Some(_), Some(_)) => TimezoneFit::Mismatch,
        _ => TimezoneFit::Unknown,
    }
}
