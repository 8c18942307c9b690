use actix_web::{web, HttpResponse};
use crate::core::fetch_scorecard;
use crate::models::{Endpoint, MatchPath};
use crate::services::{CricbuzzClient, CricbuzzError};
use std::sync::Arc;

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub cricbuzz: Arc<CricbuzzClient>,
}

impl AppState {
    pub fn new(cricbuzz: CricbuzzClient) -> Self {
        Self { cricbuzz: Arc::new(cricbuzz) }
    }
}

/// Configure all cricket data routes (mounted under /api)
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg
        .route("/scorecard/{id}", web::get().to(get_scorecard))
        .route("/match/{id}/details", web::get().to(get_match_details))
        .route("/match/{id}/info", web::get().to(get_match_info))
        .route("/match/{id}/commentary", web::get().to(get_commentary))
        .route("/matches", web::get().to(get_recent_matches))
        .route("/live", web::get().to(get_live_matches))
        .route("/upcoming", web::get().to(get_upcoming_matches));
}

/// Single upstream call, body returned verbatim
async fn pass_through(
    state: &AppState,
    endpoint: Endpoint<'_>,
) -> Result<HttpResponse, CricbuzzError> {
    match state.cricbuzz.fetch(endpoint).await {
        Ok(payload) => Ok(HttpResponse::Ok().json(payload)),
        Err(e) => {
            tracing::error!("Upstream {} call failed: {}", endpoint.name(), e);
            Err(e)
        }
    }
}

/// Scorecard for a match
///
/// GET /api/scorecard/{id}
///
/// Tries the high-level scorecard first, then the detailed one. When neither
/// has innings the response is normalized:
/// ```json
/// { "scoreCard": [], "matchHeader": {}, "debug": "No scorecard data found" }
/// ```
async fn get_scorecard(
    state: web::Data<AppState>,
    path: web::Path<MatchPath>,
) -> Result<HttpResponse, CricbuzzError> {
    let match_id = &path.id;

    let source = fetch_scorecard(&state.cricbuzz, match_id)
        .await
        .map_err(|e| {
            tracing::error!("Failed to fetch scorecard for match {}: {}", match_id, e);
            e
        })?;

    tracing::info!("Scorecard for match {} served from {}", match_id, source.label());

    Ok(HttpResponse::Ok().json(source.into_value()))
}

/// Match details including team squads
///
/// GET /api/match/{id}/details
async fn get_match_details(
    state: web::Data<AppState>,
    path: web::Path<MatchPath>,
) -> Result<HttpResponse, CricbuzzError> {
    pass_through(&state, Endpoint::MatchCenter(&path.id)).await
}

/// Match info, same upstream resource as details
///
/// GET /api/match/{id}/info
async fn get_match_info(
    state: web::Data<AppState>,
    path: web::Path<MatchPath>,
) -> Result<HttpResponse, CricbuzzError> {
    pass_through(&state, Endpoint::MatchCenter(&path.id)).await
}

/// GET /api/match/{id}/commentary
async fn get_commentary(
    state: web::Data<AppState>,
    path: web::Path<MatchPath>,
) -> Result<HttpResponse, CricbuzzError> {
    pass_through(&state, Endpoint::Commentary(&path.id)).await
}

/// Recently finished matches
///
/// GET /api/matches
async fn get_recent_matches(state: web::Data<AppState>) -> Result<HttpResponse, CricbuzzError> {
    pass_through(&state, Endpoint::Recent).await
}

/// GET /api/live
async fn get_live_matches(state: web::Data<AppState>) -> Result<HttpResponse, CricbuzzError> {
    pass_through(&state, Endpoint::Live).await
}

/// GET /api/upcoming
async fn get_upcoming_matches(state: web::Data<AppState>) -> Result<HttpResponse, CricbuzzError> {
    pass_through(&state, Endpoint::Upcoming).await
}
