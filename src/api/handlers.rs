use axum::{extract::State, Extension, Json};
use serde_json::{json, Value};

use crate::context::TimeContext;
use crate::error::{AppError, AppResult};
use crate::middleware::request_id::RequestId;
use crate::models::RecommendationResponse;
use crate::services::{assembler, conversation, search};

use super::AppState;

/// Service health and capability summary
pub async fn health_check() -> Json<Value> {
    Json(json!({
        "status": "healthy",
        "service": "AI Movie Sommelier",
        "version": env!("CARGO_PKG_VERSION"),
        "capabilities": [
            "Mood analysis with Fireworks AI",
            "TMDB integration",
            "Perfect pairing suggestions",
            "Double feature curation",
            "Contextual recommendations"
        ]
    }))
}

/// Turns a free-text mood description into a recommendation payload.
///
/// The body must carry a non-empty string `mood`; an optional
/// `previousResult.items` id list marks the prior turn's shelf for
/// refinement. Every downstream failure degrades to a fallback payload
/// served with a success status; only a malformed body is an error.
pub async fn recommend(
    State(state): State<AppState>,
    Extension(request_id): Extension<RequestId>,
    Json(body): Json<Value>,
) -> AppResult<Json<RecommendationResponse>> {
    let mood = body
        .get("mood")
        .and_then(Value::as_str)
        .map(str::trim)
        .filter(|m| !m.is_empty())
        .ok_or_else(|| AppError::InvalidInput("Mood description is required".to_string()))?;

    let previous_ids: Vec<u64> = body
        .get("previousResult")
        .and_then(|p| p.get("items"))
        .and_then(Value::as_array)
        .map(|items| items.iter().filter_map(Value::as_u64).collect())
        .unwrap_or_default();

    let time = TimeContext::now();
    tracing::info!(
        request_id = %request_id,
        time_of_day = time.time_of_day.as_str(),
        day = %time.day_of_week,
        previous = previous_ids.len(),
        "Processing mood request"
    );

    let response = run_pipeline(&state, mood, &previous_ids, time).await;
    Ok(Json(response))
}

/// Resolve, search, enrich, assemble. Never errors: small talk returns a
/// conversational reply, search degradation is absorbed upstream, and an
/// empty shelf past every fallback yields the emergency payload.
async fn run_pipeline(
    state: &AppState,
    mood: &str,
    previous_ids: &[u64],
    time: TimeContext,
) -> RecommendationResponse {
    let intent = conversation::resolve(mood, previous_ids, state.llm.as_deref()).await;

    if intent.is_small_talk {
        if let Some(reply) = intent.conversation_reply.as_deref() {
            tracing::info!(request = "conversational", "Returning conversational response");
            return RecommendationResponse::conversational(reply, time);
        }
    }

    tracing::info!(
        emotion = %intent.primary_emotion,
        intensity = intent.intensity.as_str(),
        genres = ?intent.genres,
        keywords = %intent.keywords,
        "Mood analysis complete"
    );

    let movies = search::find_movies(state.catalog.as_ref(), &intent).await;
    if movies.is_empty() {
        tracing::error!(
            emotion = %intent.primary_emotion,
            "No content available from any source, emitting emergency payload"
        );
        return assembler::emergency_response();
    }

    assembler::assemble(&intent, &movies, mood, time)
}
