use actix_web::{web, HttpResponse, Responder};
use validator::Validate;

use crate::core::Ranker;
use crate::models::{ErrorResponse, HealthResponse, RecommendRequest, RecommendResponse};

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub ranker: Ranker,
}

/// Configure all recommendation routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/health", web::get().to(health_check))
        .route("/recommend", web::post().to(recommend));
}

/// Health check endpoint
async fn health_check() -> impl Responder {
    HttpResponse::Ok().json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        timestamp: chrono::Utc::now(),
    })
}

/// Rank freelancers against a job posting
///
/// POST /api/v1/recommend
///
/// Request body:
/// ```json
/// {
///   "job": {"title": "string", "description": "string", "skills": "string"},
///   "freelances": [{"id": 1, "title": "string", "skills": "string", "bio": "string"}]
/// }
/// ```
async fn recommend(
    state: web::Data<AppState>,
    req: web::Json<RecommendRequest>,
) -> impl Responder {
    if let Err(errors) = req.validate() {
        tracing::info!("Validation failed for recommend request: {:?}", errors);
        return HttpResponse::BadRequest().json(ErrorResponse {
            error: "Validation failed".to_string(),
            message: errors.to_string(),
            status_code: 400,
        });
    }

    let total_candidates = req.freelances.len();

    tracing::info!(
        "Ranking {} freelancers for job '{}'",
        total_candidates,
        req.job.title
    );

    let recommended_freelancers = state.ranker.rank(&req.job, &req.freelances);

    tracing::debug!(
        "Top score: {:?}",
        recommended_freelancers.first().map(|r| r.score)
    );

    HttpResponse::Ok().json(RecommendResponse {
        recommended_freelancers,
        total_candidates,
    })
}
