use axum::{
    extract::{Path, State},
    http::{HeaderMap, HeaderValue, StatusCode},
    routing::{get, post},
    Json, Router,
};
use tracing::{error, info, instrument, warn};
use uuid::Uuid;

use super::dto::{NavigationIntent, ScreenSnapshot};
use super::model::{Command, ComposerError, OrderComposer};
use super::services;
use crate::{
    foods::{ExtraId, FoodId},
    sessions::Session,
    state::AppState,
};

type HandlerError = (StatusCode, String);

// --- public routers ---

pub fn screen_routes() -> Router<AppState> {
    Router::new().route("/foods/:food_id/details", post(open_food_details))
}

pub fn session_routes() -> Router<AppState> {
    Router::new()
        .route("/sessions/:sid", get(get_snapshot).delete(dismiss))
        .route("/sessions/:sid/commands", post(apply_command))
        .route("/sessions/:sid/extras/:extra_id/increment", post(increment_extra))
        .route("/sessions/:sid/extras/:extra_id/decrement", post(decrement_extra))
        .route("/sessions/:sid/food/increment", post(increment_food))
        .route("/sessions/:sid/food/decrement", post(decrement_food))
        .route("/sessions/:sid/favorite", post(toggle_favorite))
        .route("/sessions/:sid/order", post(submit_order))
}

// --- handlers ---

/// POST /foods/:food_id/details → 201, opens a screen session
#[instrument(skip(state))]
pub async fn open_food_details(
    State(state): State<AppState>,
    Path(food_id): Path<FoodId>,
) -> Result<(StatusCode, HeaderMap, Json<ScreenSnapshot>), HandlerError> {
    let composer = services::load(state.api.as_ref(), food_id).await;
    let snapshot_src = composer.clone();
    let sid = state.sessions.open(composer).await;
    let open_sessions = state.sessions.len().await;
    info!(%sid, food_id, open_sessions, "food details session opened");

    let mut headers = HeaderMap::new();
    headers.insert(
        axum::http::header::LOCATION,
        HeaderValue::from_str(&format!("/api/v1/sessions/{}", sid)).map_err(internal)?,
    );

    let body = match snapshot(&state, sid, &snapshot_src) {
        Ok(body) => body,
        Err(e) => {
            state.sessions.close(sid).await;
            return Err(e);
        }
    };
    Ok((StatusCode::CREATED, headers, body))
}

#[instrument(skip(state))]
pub async fn get_snapshot(
    State(state): State<AppState>,
    Path(sid): Path<Uuid>,
) -> Result<Json<ScreenSnapshot>, HandlerError> {
    let session = session(&state, sid).await?;
    let composer = session.lock().await;
    snapshot(&state, sid, &composer)
}

/// DELETE /sessions/:sid → the screen was dismissed
#[instrument(skip(state))]
pub async fn dismiss(
    State(state): State<AppState>,
    Path(sid): Path<Uuid>,
) -> Result<StatusCode, HandlerError> {
    if state.sessions.close(sid).await {
        info!(%sid, "session dismissed");
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(session_not_found(sid))
    }
}

#[instrument(skip(state))]
pub async fn apply_command(
    State(state): State<AppState>,
    Path(sid): Path<Uuid>,
    Json(command): Json<Command>,
) -> Result<Json<ScreenSnapshot>, HandlerError> {
    run(&state, sid, command).await
}

#[instrument(skip(state))]
pub async fn increment_extra(
    State(state): State<AppState>,
    Path((sid, id)): Path<(Uuid, ExtraId)>,
) -> Result<Json<ScreenSnapshot>, HandlerError> {
    run(&state, sid, Command::IncrementExtra { id }).await
}

#[instrument(skip(state))]
pub async fn decrement_extra(
    State(state): State<AppState>,
    Path((sid, id)): Path<(Uuid, ExtraId)>,
) -> Result<Json<ScreenSnapshot>, HandlerError> {
    run(&state, sid, Command::DecrementExtra { id }).await
}

#[instrument(skip(state))]
pub async fn increment_food(
    State(state): State<AppState>,
    Path(sid): Path<Uuid>,
) -> Result<Json<ScreenSnapshot>, HandlerError> {
    run(&state, sid, Command::IncrementFood).await
}

#[instrument(skip(state))]
pub async fn decrement_food(
    State(state): State<AppState>,
    Path(sid): Path<Uuid>,
) -> Result<Json<ScreenSnapshot>, HandlerError> {
    run(&state, sid, Command::DecrementFood).await
}

#[instrument(skip(state))]
pub async fn toggle_favorite(
    State(state): State<AppState>,
    Path(sid): Path<Uuid>,
) -> Result<Json<ScreenSnapshot>, HandlerError> {
    let session = session(&state, sid).await?;
    let mut composer = session.lock().await;
    services::toggle_favorite(state.api.as_ref(), &mut composer)
        .await
        .map_err(|e| composer_error(sid, e))?;
    snapshot(&state, sid, &composer)
}

/// POST /sessions/:sid/order → submits and closes the session
#[instrument(skip(state))]
pub async fn submit_order(
    State(state): State<AppState>,
    Path(sid): Path<Uuid>,
) -> Result<Json<NavigationIntent>, HandlerError> {
    let session = session(&state, sid).await?;
    let composer = session.lock().await;
    let intent = services::submit_order(state.api.as_ref(), &composer, &state.config.home_screen)
        .await
        .map_err(|e| composer_error(sid, e))?;
    drop(composer);

    state.sessions.close(sid).await;
    Ok(Json(intent))
}

// --- helpers ---

async fn session(state: &AppState, sid: Uuid) -> Result<Session, HandlerError> {
    state
        .sessions
        .get(sid)
        .await
        .ok_or_else(|| session_not_found(sid))
}

async fn run(state: &AppState, sid: Uuid, command: Command) -> Result<Json<ScreenSnapshot>, HandlerError> {
    let session = session(state, sid).await?;
    let mut composer = session.lock().await;
    composer.apply(command).map_err(|e| composer_error(sid, e))?;
    snapshot(state, sid, &composer)
}

fn snapshot(state: &AppState, sid: Uuid, composer: &OrderComposer) -> Result<Json<ScreenSnapshot>, HandlerError> {
    ScreenSnapshot::new(sid, composer, &state.config.currency)
        .map(Json)
        .map_err(|e| composer_error(sid, e))
}

fn session_not_found(sid: Uuid) -> HandlerError {
    warn!(%sid, "unknown session");
    (StatusCode::NOT_FOUND, "Session not found".into())
}

fn composer_error(sid: Uuid, e: ComposerError) -> HandlerError {
    match e {
        ComposerError::UnknownExtra(_) => {
            warn!(%sid, error = %e, "command rejected");
            (StatusCode::NOT_FOUND, e.to_string())
        }
        ComposerError::Overflow => {
            warn!(%sid, "order total out of range");
            (StatusCode::UNPROCESSABLE_ENTITY, e.to_string())
        }
        ComposerError::NotLoaded => {
            warn!(%sid, "food not loaded");
            (StatusCode::CONFLICT, e.to_string())
        }
        ComposerError::Api(_) => {
            error!(%sid, error = %e, "restaurant api call failed");
            (StatusCode::BAD_GATEWAY, e.to_string())
        }
    }
}

fn internal<E: std::error::Error>(e: E) -> HandlerError {
    (StatusCode::INTERNAL_SERVER_ERROR, e.to_string())
}
