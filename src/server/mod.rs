//! HTTP server for mood discovery sessions.
//!
//! Exposes the four activities, the prediction and the reset operation to a
//! front end over JSON. One session per client; sessions live in memory only.
//!
//! # Endpoints
//!
//! - `GET  /health`                 — Liveness probe
//! - `GET  /catalog`                — Fixed choices for the activities
//! - `POST /sessions`               — Start a session
//! - `POST /sessions/:id/predict`   — Reveal the predicted mood
//!
//! See [`routes`] for the full list.

pub mod routes;

pub use routes::{app_router, error_response, AppState};
