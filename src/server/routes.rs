//! Axum route handlers for the mood discovery HTTP server.
//!
//! # Routes
//!
//! - `GET    /health`                    — Returns `{"status": "ok", "version": ...}`
//! - `GET    /catalog`                   — Word tags, drawing moods, story prompt, picker default
//! - `POST   /sessions`                  — Start a session
//! - `GET    /sessions/:id`              — Signals, progress and picker color
//! - `DELETE /sessions/:id`              — Drop a session
//! - `PUT    /sessions/:id/words`        — `{ "tags": [...] }`
//! - `PUT    /sessions/:id/drawing`      — `{ "has_drawing": true, "mood": "Calm" }`
//! - `PUT    /sessions/:id/story`        — `{ "text": "..." }`
//! - `PUT    /sessions/:id/color`        — `{ "color": "#RRGGBB" }` (picker only)
//! - `POST   /sessions/:id/color/submit` — Record the picked color
//! - `POST   /sessions/:id/predict`      — Predicted mood, scores and suggestion
//! - `POST   /sessions/:id/reset`        — Clear all signals

use std::collections::HashMap;
use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};

use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::{get, post, put},
    Json, Router,
};
use serde::Deserialize;
use serde_json::{json, Value};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use uuid::Uuid;

use crate::error::MoodError;
use crate::lexicon::LexiconAnalyzer;
use crate::responses::ResponseCatalog;
use crate::session::{Session, ACTIVITY_COUNT};
use crate::signals::{PolarityAnalyzer, DEFAULT_PICKER_COLOR, DRAWING_MOODS, STORY_PROMPT, WORD_TAGS};

type ApiError = (StatusCode, Json<Value>);
type ApiResult = Result<Json<Value>, ApiError>;

/// Shared application state for the HTTP server.
#[derive(Clone)]
pub struct AppState {
    /// Live sessions keyed by id. Each entry is only touched by its own client.
    pub sessions: Arc<RwLock<HashMap<Uuid, Session>>>,
    /// Story polarity analyzer.
    pub analyzer: Arc<dyn PolarityAnalyzer>,
    /// Coping suggestions.
    pub catalog: Arc<ResponseCatalog>,
}

impl AppState {
    pub fn new() -> Self {
        Self::with_parts(LexiconAnalyzer::default(), ResponseCatalog::default())
    }

    pub fn with_parts(analyzer: impl PolarityAnalyzer + 'static, catalog: ResponseCatalog) -> Self {
        Self {
            sessions: Arc::new(RwLock::new(HashMap::new())),
            analyzer: Arc::new(analyzer),
            catalog: Arc::new(catalog),
        }
    }

    fn read_sessions(&self) -> Result<RwLockReadGuard<'_, HashMap<Uuid, Session>>, ApiError> {
        self.sessions.read().map_err(|_| poisoned())
    }

    fn write_sessions(&self) -> Result<RwLockWriteGuard<'_, HashMap<Uuid, Session>>, ApiError> {
        self.sessions.write().map_err(|_| poisoned())
    }

    /// Run `f` against one session under the write lock.
    fn with_session<T>(
        &self,
        id: Uuid,
        f: impl FnOnce(&mut Session) -> Result<T, MoodError>,
    ) -> Result<T, ApiError> {
        let mut sessions = self.write_sessions()?;
        let session = sessions
            .get_mut(&id)
            .ok_or_else(|| error_response(MoodError::SessionNotFound(id.to_string())))?;
        f(session).map_err(error_response)
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

/// Build the axum router with all routes.
pub fn app_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health_handler))
        .route("/catalog", get(catalog_handler))
        .route("/sessions", post(create_session_handler))
        .route(
            "/sessions/:id",
            get(get_session_handler).delete(delete_session_handler),
        )
        .route("/sessions/:id/words", put(words_handler))
        .route("/sessions/:id/drawing", put(drawing_handler))
        .route("/sessions/:id/story", put(story_handler))
        .route("/sessions/:id/color", put(pick_color_handler))
        .route("/sessions/:id/color/submit", post(submit_color_handler))
        .route("/sessions/:id/predict", post(predict_handler))
        .route("/sessions/:id/reset", post(reset_handler))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

// ---------------------------------------------------------------------------
// Error mapping
// ---------------------------------------------------------------------------

fn poisoned() -> ApiError {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(json!({"error": "Session store lock poisoned"})),
    )
}

/// Map a [`MoodError`] to a status code and JSON body.
///
/// A missing prerequisite is a user-facing warning, not an error.
pub fn error_response(err: MoodError) -> ApiError {
    let message = err.to_string();
    match err {
        MoodError::MissingPrerequisite => (
            StatusCode::UNPROCESSABLE_ENTITY,
            Json(json!({"warning": message})),
        ),
        MoodError::SessionNotFound(_) => (StatusCode::NOT_FOUND, Json(json!({"error": message}))),
        MoodError::AnalyzerFailure(_) => (StatusCode::BAD_GATEWAY, Json(json!({"error": message}))),
        MoodError::MalformedColor { .. }
        | MoodError::UnknownWordTag(_)
        | MoodError::UnknownMood(_) => (StatusCode::BAD_REQUEST, Json(json!({"error": message}))),
    }
}

fn session_view(session: &Session) -> Value {
    json!({
        "session_id": session.id,
        "created_at": session.created_at,
        "state": session.state,
        "picker": session.picker,
        "progress": session.progress(),
        "activities": ACTIVITY_COUNT,
        "complete": session.is_complete(),
    })
}

// ---------------------------------------------------------------------------
// Request bodies
// ---------------------------------------------------------------------------

#[derive(Debug, Deserialize)]
struct WordsRequest {
    #[serde(default)]
    tags: Vec<String>,
}

#[derive(Debug, Deserialize)]
struct DrawingRequest {
    has_drawing: bool,
    #[serde(default)]
    mood: String,
}

#[derive(Debug, Deserialize)]
struct StoryRequest {
    #[serde(default)]
    text: String,
}

#[derive(Debug, Deserialize)]
struct ColorRequest {
    color: String,
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// GET /health — liveness probe.
async fn health_handler() -> Json<Value> {
    Json(json!({
        "status": "ok",
        "version": crate::VERSION,
        "service": "mood-discovery",
    }))
}

/// GET /catalog — the fixed choices the client renders.
async fn catalog_handler() -> Json<Value> {
    Json(json!({
        "word_tags": &WORD_TAGS[..],
        "drawing_moods": &DRAWING_MOODS[..],
        "story_prompt": STORY_PROMPT,
        "default_color": DEFAULT_PICKER_COLOR,
    }))
}

/// POST /sessions — start a fresh session.
async fn create_session_handler(
    State(state): State<AppState>,
) -> Result<(StatusCode, Json<Value>), ApiError> {
    let session = Session::new();
    let body = session_view(&session);
    let id = session.id;
    state.write_sessions()?.insert(id, session);
    tracing::info!(session_id = %id, "session started");
    Ok((StatusCode::CREATED, Json(body)))
}

/// GET /sessions/:id
async fn get_session_handler(State(state): State<AppState>, Path(id): Path<Uuid>) -> ApiResult {
    let sessions = state.read_sessions()?;
    let session = sessions
        .get(&id)
        .ok_or_else(|| error_response(MoodError::SessionNotFound(id.to_string())))?;
    Ok(Json(session_view(session)))
}

/// DELETE /sessions/:id
async fn delete_session_handler(State(state): State<AppState>, Path(id): Path<Uuid>) -> ApiResult {
    state
        .write_sessions()?
        .remove(&id)
        .ok_or_else(|| error_response(MoodError::SessionNotFound(id.to_string())))?;
    Ok(Json(json!({"status": "deleted", "session_id": id})))
}

/// PUT /sessions/:id/words
async fn words_handler(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(body): Json<WordsRequest>,
) -> ApiResult {
    state.with_session(id, |session| {
        let words = session.select_words(&body.tags)?.cloned();
        Ok(Json(json!({"words": words, "progress": session.progress()})))
    })
}

/// PUT /sessions/:id/drawing
async fn drawing_handler(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(body): Json<DrawingRequest>,
) -> ApiResult {
    state.with_session(id, |session| {
        let drawing = session.label_drawing(body.has_drawing, &body.mood)?;
        Ok(Json(json!({"drawing": drawing, "progress": session.progress()})))
    })
}

/// PUT /sessions/:id/story
async fn story_handler(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(body): Json<StoryRequest>,
) -> ApiResult {
    let analyzer = Arc::clone(&state.analyzer);
    state.with_session(id, |session| {
        let story = session.write_story(&body.text, analyzer.as_ref())?;
        Ok(Json(json!({"story": story, "progress": session.progress()})))
    })
}

/// PUT /sessions/:id/color — move the picker only.
async fn pick_color_handler(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(body): Json<ColorRequest>,
) -> ApiResult {
    state.with_session(id, |session| {
        let picker = session.pick_color(&body.color)?;
        Ok(Json(json!({"picker": picker, "color": session.state.color})))
    })
}

/// POST /sessions/:id/color/submit
async fn submit_color_handler(State(state): State<AppState>, Path(id): Path<Uuid>) -> ApiResult {
    state.with_session(id, |session| {
        let mood = session.submit_color();
        Ok(Json(json!({
            "mood": mood,
            "message": format!("Color saved! Detected mood: {}", mood.title()),
            "progress": session.progress(),
        })))
    })
}

/// POST /sessions/:id/predict
///
/// 422 with a `warning` body when the word association game is not done.
async fn predict_handler(State(state): State<AppState>, Path(id): Path<Uuid>) -> ApiResult {
    let prediction = {
        let sessions = state.read_sessions()?;
        let session = sessions
            .get(&id)
            .ok_or_else(|| error_response(MoodError::SessionNotFound(id.to_string())))?;
        session.predict().map_err(error_response)?
    };
    tracing::info!(session_id = %id, mood = %prediction.mood, "mood predicted");
    Ok(Json(json!({
        "mood": prediction.mood,
        "title": prediction.mood.title(),
        "scores": prediction.scores,
        "suggestion": state.catalog.suggestion(prediction.mood),
    })))
}

/// POST /sessions/:id/reset
async fn reset_handler(State(state): State<AppState>, Path(id): Path<Uuid>) -> ApiResult {
    state.with_session(id, |session| {
        session.reset();
        Ok(Json(session_view(session)))
    })
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::Request;
    use tower::ServiceExt;

    async fn call(app: &Router, method: &str, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
        let builder = Request::builder().method(method).uri(uri);
        let request = match body {
            Some(body) => builder
                .header("Content-Type", "application/json")
                .body(Body::from(serde_json::to_string(&body).unwrap()))
                .unwrap(),
            None => builder.body(Body::empty()).unwrap(),
        };
        let response = app.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), 64 * 1024)
            .await
            .unwrap();
        let json = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap_or(Value::Null)
        };
        (status, json)
    }

    async fn new_session(app: &Router) -> String {
        let (status, json) = call(app, "POST", "/sessions", None).await;
        assert_eq!(status, StatusCode::CREATED);
        json["session_id"].as_str().unwrap().to_string()
    }

    fn fixed_state(polarity: f64) -> AppState {
        AppState::with_parts(
            move |_: &str| -> anyhow::Result<f64> { Ok(polarity) },
            ResponseCatalog::default(),
        )
    }

    #[tokio::test]
    async fn test_health_endpoint() {
        let app = app_router(AppState::new());
        let (status, json) = call(&app, "GET", "/health", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["status"], "ok");
        assert_eq!(json["version"], crate::VERSION);
        assert_eq!(json["service"], "mood-discovery");
    }

    #[tokio::test]
    async fn test_catalog_lists_choices() {
        let app = app_router(AppState::new());
        let (status, json) = call(&app, "GET", "/catalog", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["word_tags"].as_array().unwrap().len(), 45);
        assert_eq!(json["drawing_moods"].as_array().unwrap().len(), 8);
        assert_eq!(json["default_color"], "#00f900");
    }

    #[tokio::test]
    async fn test_full_play_through() {
        let app = app_router(fixed_state(-0.5));
        let id = new_session(&app).await;

        let (status, json) = call(
            &app,
            "PUT",
            &format!("/sessions/{id}/words"),
            Some(json!({"tags": ["😊 Happy", "🌟 Joyful", "😌 Calm"]})),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["words"]["happy"], 2);
        assert_eq!(json["progress"], 1);

        let (status, _) = call(
            &app,
            "PUT",
            &format!("/sessions/{id}/drawing"),
            Some(json!({"has_drawing": true, "mood": "Energetic"})),
        )
        .await;
        assert_eq!(status, StatusCode::OK);

        let (status, json) = call(
            &app,
            "PUT",
            &format!("/sessions/{id}/story"),
            Some(json!({"text": "It was a grey day."})),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["story"]["mood"], "sad");
        assert_eq!(json["story"]["strength"], 2);

        let (status, json) = call(
            &app,
            "PUT",
            &format!("/sessions/{id}/color"),
            Some(json!({"color": "#ffff00"})),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["color"], Value::Null);

        let (status, json) = call(&app, "POST", &format!("/sessions/{id}/color/submit"), None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["mood"], "happy");
        assert_eq!(json["progress"], 4);

        let (status, json) = call(&app, "POST", &format!("/sessions/{id}/predict"), None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["mood"], "happy");
        assert_eq!(json["scores"]["happy"], 7);
        assert_eq!(json["scores"]["calm"], 3);
        assert_eq!(json["scores"]["sad"], 2);
        assert_eq!(json["scores"]["energetic"], 2);
        assert!(json["suggestion"].as_str().unwrap().contains("happy"));

        let (status, json) = call(&app, "GET", &format!("/sessions/{id}"), None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["complete"], true);
    }

    #[tokio::test]
    async fn test_predict_without_words_warns() {
        let app = app_router(AppState::new());
        let id = new_session(&app).await;
        call(&app, "POST", &format!("/sessions/{id}/color/submit"), None).await;

        let (status, json) = call(&app, "POST", &format!("/sessions/{id}/predict"), None).await;
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        assert!(json["warning"].as_str().unwrap().contains("word association"));
    }

    #[tokio::test]
    async fn test_bad_inputs_are_rejected() {
        let app = app_router(AppState::new());
        let id = new_session(&app).await;

        let (status, _) = call(
            &app,
            "PUT",
            &format!("/sessions/{id}/color"),
            Some(json!({"color": "blue"})),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);

        let (status, _) = call(
            &app,
            "PUT",
            &format!("/sessions/{id}/words"),
            Some(json!({"tags": ["Happy"]})),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);

        let (status, _) = call(
            &app,
            "PUT",
            &format!("/sessions/{id}/drawing"),
            Some(json!({"has_drawing": true, "mood": "neutral"})),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);

        let (_, json) = call(&app, "GET", &format!("/sessions/{id}"), None).await;
        assert_eq!(json["progress"], 0);
    }

    #[tokio::test]
    async fn test_analyzer_failure_maps_to_bad_gateway() {
        let state = AppState::with_parts(
            |_: &str| -> anyhow::Result<f64> { Err(anyhow::anyhow!("analyzer down")) },
            ResponseCatalog::default(),
        );
        let app = app_router(state);
        let id = new_session(&app).await;
        let (status, json) = call(
            &app,
            "PUT",
            &format!("/sessions/{id}/story"),
            Some(json!({"text": "hello"})),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_GATEWAY);
        assert!(json["error"].as_str().unwrap().contains("analyzer down"));
    }

    #[tokio::test]
    async fn test_reset_and_delete() {
        let app = app_router(fixed_state(0.5));
        let id = new_session(&app).await;
        call(
            &app,
            "PUT",
            &format!("/sessions/{id}/words"),
            Some(json!({"tags": ["😴 Tired"]})),
        )
        .await;
        call(
            &app,
            "PUT",
            &format!("/sessions/{id}/story"),
            Some(json!({"text": "fine"})),
        )
        .await;

        let (status, json) = call(&app, "POST", &format!("/sessions/{id}/reset"), None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["progress"], 0);
        assert_eq!(json["state"]["words"], Value::Null);

        let (status, _) = call(&app, "DELETE", &format!("/sessions/{id}"), None).await;
        assert_eq!(status, StatusCode::OK);
        let (status, _) = call(&app, "GET", &format!("/sessions/{id}"), None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_unknown_session_is_not_found() {
        let app = app_router(AppState::new());
        let uri = format!("/sessions/{}/predict", Uuid::new_v4());
        let (status, json) = call(&app, "POST", &uri, None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert!(json["error"].as_str().unwrap().contains("Session not found"));
    }
}
