use actix_web::{web, HttpResponse, Responder};
use validator::Validate;
use crate::config::{MatchingSettings, Settings};
use crate::core::{calculate_match_score, match_label, Matcher};
use crate::error::ApiError;
use crate::models::{
    HealthResponse, LabelQuery, RankedRecommendation, RecommendationRequest,
    RecommendationResponse, ScoreRequest,
};

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub matcher: Matcher,
    pub matching: MatchingSettings,
}

impl AppState {
    pub fn from_settings(settings: &Settings) -> Self {
        Self {
            matcher: Matcher::new(settings.matching.default_top_n),
            matching: settings.matching.clone(),
        }
    }
}

/// Configure all match-related routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg
        .route("/health", web::get().to(health_check))
        .route("/matches/recommendations", web::post().to(recommend_coaches))
        .route("/matches/score", web::post().to(score_pair))
        .route("/matches/label", web::get().to(score_label));
}

/// Health check endpoint
async fn health_check() -> impl Responder {
    HttpResponse::Ok().json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        timestamp: chrono::Utc::now(),
    })
}

/// Recommend coaches endpoint
///
/// POST /api/v1/matches/recommendations
///
/// Request body:
/// ```json
/// {
///   "student": { "timezone": "IST", "learningStyle": "Visual", "goal": "Casual learning", "age": 11 },
///   "coaches": [{ "id": "string", "teachingStyle": "Balanced" }],
///   "topN": 3
/// }
/// ```
async fn recommend_coaches(
    state: web::Data<AppState>,
    req: web::Json<RecommendationRequest>,
) -> Result<HttpResponse, ApiError> {
    if let Err(errors) = req.validate() {
        tracing::warn!("Validation failed for recommendation request: {}", errors);
        return Err(errors.into());
    }

    let total_candidates = req.coaches.len();
    if total_candidates > state.matching.max_coaches {
        tracing::warn!(
            "Rejecting coach pool of {} (limit {})",
            total_candidates,
            state.matching.max_coaches
        );
        return Err(ApiError::TooManyCoaches {
            count: total_candidates,
            max: state.matching.max_coaches,
        });
    }

    let request_id = uuid::Uuid::new_v4().to_string();
    let top_n = state.matching.effective_top_n(req.top_n);

    tracing::debug!(
        "[{}] Ranking {} coaches, top_n: {}",
        request_id,
        total_candidates,
        top_n
    );

    let recommendations: Vec<RankedRecommendation> = state
        .matcher
        .top_recommendations(&req.student, &req.coaches, Some(top_n))
        .into_iter()
        .enumerate()
        .map(|(i, result)| RankedRecommendation::new(i + 1, result))
        .collect();

    tracing::info!(
        "[{}] Returning {} recommendations (from {} candidates, best score {:?})",
        request_id,
        recommendations.len(),
        total_candidates,
        recommendations.first().map(|r| r.result.score)
    );

    Ok(HttpResponse::Ok().json(RecommendationResponse {
        request_id,
        recommendations,
        total_candidates,
    }))
}

/// Score a single student/coach pair
///
/// POST /api/v1/matches/score
async fn score_pair(req: web::Json<ScoreRequest>) -> Result<HttpResponse, ApiError> {
    if let Err(errors) = req.validate() {
        tracing::warn!("Validation failed for score request: {}", errors);
        return Err(errors.into());
    }

    let result = calculate_match_score(&req.student, &req.coach);
    tracing::debug!("Scored coach {}: {}", result.coach_id, result.score);

    Ok(HttpResponse::Ok().json(RankedRecommendation::new(1, result)))
}

/// Label for a score
///
/// GET /api/v1/matches/label?score={score}
async fn score_label(query: web::Query<LabelQuery>) -> impl Responder {
    HttpResponse::Ok().json(match_label(query.score))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_state_from_settings() {
        let mut settings = Settings::default();
        settings.matching.default_top_n = 7;

        let state = AppState::from_settings(&settings);

        assert_eq!(state.matcher.default_top_n(), 7);
        assert_eq!(state.matching.max_coaches, 1000);
    }
}
