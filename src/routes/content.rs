//! Content endpoints: the greeting and random pun/fact draws.
//!
//! Each handler is a pure function of the shared immutable state and a random
//! draw; no state is carried between requests.

use axum::{extract::State, Json};
use serde::Serialize;
use tracing::instrument;

use crate::error::AppError;
use crate::state::AppState;

/// Greeting response body.
#[derive(Debug, Serialize)]
pub struct GreetResponse {
    pub message: String,
}

/// Pun response body. `index` is the position drawn from the pun sequence.
#[derive(Debug, Serialize)]
pub struct PunResponse {
    pub index: usize,
    pub pun: String,
}

/// Fact response body. `index` is the position drawn from the fact sequence.
#[derive(Debug, Serialize)]
pub struct FactResponse {
    pub index: usize,
    pub fact: String,
}

/// `GET /` - the configured greeting, verbatim.
///
/// An unconfigured greeting renders as the empty string; `/health` reports
/// the missing variable.
#[instrument(name = "content::greet", skip(state))]
pub async fn greet(State(state): State<AppState>) -> Json<GreetResponse> {
    let message = state.config.greeting.clone().unwrap_or_default();
    Json(GreetResponse { message })
}

/// `GET /pun` - a uniform random draw from the pun sequence.
#[instrument(name = "content::pun", skip(state))]
pub async fn pun(State(state): State<AppState>) -> Result<Json<PunResponse>, AppError> {
    let (index, text) = state
        .content
        .random_pun()
        .ok_or(AppError::EmptyContent("pun"))?;
    tracing::debug!(index, "Selected pun");
    Ok(Json(PunResponse {
        index,
        pun: text.to_string(),
    }))
}

/// `GET /fact` - a uniform random draw from the fact sequence.
#[instrument(name = "content::fact", skip(state))]
pub async fn fact(State(state): State<AppState>) -> Result<Json<FactResponse>, AppError> {
    let (index, text) = state
        .content
        .random_fact()
        .ok_or(AppError::EmptyContent("fact"))?;
    tracing::debug!(index, "Selected fact");
    Ok(Json(FactResponse {
        index,
        fact: text.to_string(),
    }))
}
