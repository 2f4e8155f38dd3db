use actix_web::{web, HttpResponse, Responder};
use validator::Validate;
use crate::core::{Registry, RegistryError};
use crate::models::{AddPersonRequest, QueryMatchesRequest, RemovePersonRequest, HealthResponse, ErrorResponse};
use std::sync::Arc;

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub registry: Arc<Registry>,
}

impl AppState {
    pub fn new(registry: Arc<Registry>) -> Self {
        Self { registry }
    }
}

/// Configure all singles-related routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg
        .route("/health", web::get().to(health_check))
        .route("/add_single_person_and_match", web::post().to(add_single_person_and_match))
        .route("/query_single_people", web::post().to(query_single_people))
        .route("/remove_single_person", web::post().to(remove_single_person));
}

/// Health check endpoint
async fn health_check(state: web::Data<AppState>) -> impl Responder {
    HttpResponse::Ok().json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        members: state.registry.len(),
        timestamp: chrono::Utc::now(),
    })
}

/// Add a single person and match them against everyone in the pool
///
/// POST /api/v1/add_single_person_and_match
///
/// Request body:
/// ```json
/// { "name": "Bob", "height": 180, "gender": "male", "wanted_dates": 3 }
/// ```
async fn add_single_person_and_match(
    state: web::Data<AppState>,
    req: web::Json<AddPersonRequest>,
) -> impl Responder {
    let req = req.into_inner();

    let matches = state
        .registry
        .add_and_match(&req.name, req.height, &req.gender, req.wanted_dates);

    tracing::info!(
        "Added {} (gender={}, height={}, wanted_dates={}) with {} matches",
        req.name,
        req.gender,
        req.height,
        req.wanted_dates,
        matches.len()
    );

    HttpResponse::Ok().json(matches)
}

/// Find up to `match_count` matches for an existing person
///
/// POST /api/v1/query_single_people
///
/// Request body:
/// ```json
/// { "id": 1, "match_count": 5 }
/// ```
async fn query_single_people(
    state: web::Data<AppState>,
    req: web::Json<QueryMatchesRequest>,
) -> impl Responder {
    if let Err(errors) = req.validate() {
        tracing::warn!("Validation failed for query_single_people request: {}", errors);
        return HttpResponse::BadRequest().json(ErrorResponse::bad_request(
            "validation_failed",
            errors.to_string(),
        ));
    }

    match state.registry.query_matches(req.id, req.match_count) {
        Ok(matches) => {
            tracing::info!("Participant {} queried {} matches, got {}", req.id, req.match_count, matches.len());
            HttpResponse::Ok().json(matches)
        }
        Err(e @ RegistryError::ParticipantNotFound(_)) => {
            tracing::warn!("Query rejected: {}", e);
            HttpResponse::BadRequest().json(ErrorResponse::bad_request(
                "participant_not_found",
                e.to_string(),
            ))
        }
    }
}

/// Remove a person from the pool; unknown ids succeed silently
///
/// POST /api/v1/remove_single_person
async fn remove_single_person(
    state: web::Data<AppState>,
    req: web::Json<RemovePersonRequest>,
) -> impl Responder {
    if state.registry.remove(req.id) {
        tracing::info!("Removed participant {}", req.id);
    }

    HttpResponse::Ok().finish()
}
