//! services/api/src/web/rest.rs
//!
//! Contains the Axum handlers for the REST API endpoints and the master
//! definition for the OpenAPI specification.

use crate::error::{ErrorResponse, FlashcardError};
use crate::web::state::AppState;
use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    response::Json,
};
use flashcard_core::{Flashcard, Topic};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::{error, info, warn};
use utoipa::{OpenApi, ToSchema};

//=========================================================================================
// OpenAPI Master Definition
//=========================================================================================

#[derive(OpenApi)]
#[openapi(
    paths(
        generate_flashcards_handler,
        health_handler,
    ),
    components(
        schemas(GenerateFlashcardsRequest, FlashcardResponse, ErrorResponse, HealthResponse)
    ),
    tags(
        (name = "Flashcard Generator API", description = "Turns a topic into a set of vocabulary flashcards.")
    )
)]
pub struct ApiDoc;

//=========================================================================================
// API Response and Payload Structs
//=========================================================================================

/// The request payload for flashcard generation.
#[derive(Debug, Deserialize, ToSchema)]
pub struct GenerateFlashcardsRequest {
    /// The subject to generate flashcards for. Must not be blank.
    pub topic: Option<String>,
}

/// One generated flashcard, in the order the provider produced it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct FlashcardResponse {
    pub id: String,
    pub word: String,
}

impl From<Flashcard> for FlashcardResponse {
    fn from(card: Flashcard) -> Self {
        Self {
            id: card.id,
            word: card.word,
        }
    }
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct HealthResponse {
    pub status: String,
    pub provider: String,
}

//=========================================================================================
// REST API Handlers
//=========================================================================================

/// Generate flashcards for a topic.
///
/// A body that is not JSON, or that has no usable `topic`, is rejected before
/// the text generation provider is contacted. The topic length itself is not
/// limited; only bodies over the router's size cap are refused.
#[utoipa::path(
    post,
    path = "/api/flashcards",
    request_body = GenerateFlashcardsRequest,
    responses(
        (status = 200, description = "Flashcards generated, in order", body = [FlashcardResponse]),
        (status = 400, description = "Topic is missing or blank", body = ErrorResponse),
        (status = 413, description = "Request body exceeds the size limit", body = ErrorResponse),
        (status = 500, description = "Generation failed or produced nothing", body = ErrorResponse)
    )
)]
pub async fn generate_flashcards_handler(
    State(app_state): State<Arc<AppState>>,
    payload: Result<Json<GenerateFlashcardsRequest>, JsonRejection>,
) -> Result<Json<Vec<FlashcardResponse>>, FlashcardError> {
    let raw_topic = match payload {
        Ok(Json(request)) => request.topic,
        Err(rejection) if rejection.status() == StatusCode::PAYLOAD_TOO_LARGE => {
            warn!("Rejected oversized flashcard request body: {}", rejection);
            return Err(FlashcardError::PayloadTooLarge);
        }
        Err(rejection) => {
            warn!("Rejected flashcard request body: {}", rejection);
            None
        }
    };
    let topic = raw_topic
        .and_then(Topic::new)
        .ok_or(FlashcardError::MissingTopic)?;
    info!(%topic, "Generating flashcards");

    let flashcards = app_state.generator.generate(&topic).await.map_err(|e| {
        error!("Failed to generate flashcards: {:?}", e);
        FlashcardError::from(e)
    })?;

    Ok(Json(flashcards.into_iter().map(FlashcardResponse::from).collect()))
}

/// Report liveness and the configured provider.
#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "Service is up", body = HealthResponse)
    )
)]
pub async fn health_handler(State(app_state): State<Arc<AppState>>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        provider: app_state.generator.provider_name().to_string(),
    })
}
