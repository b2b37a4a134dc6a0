// Core algorithm exports
pub mod goals;
pub mod labels;
pub mod matcher;
pub mod scoring;
pub mod style;
pub mod timezone;

pub use goals::{covers_keywords, goal_score, relevant_keywords};
pub use labels::match_label;
pub use matcher::{rank_coaches, Matcher, DEFAULT_TOP_N};
pub use scoring::{calculate_match_score, MAX_SCORE};
pub use style::style_score;
pub use timezone::{timezone_fit, TimezoneFit};
