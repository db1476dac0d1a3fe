use std::path::PathBuf;
use std::sync::Arc;

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::{Json, Router};
use muse_common::{
    ErrorBody, TrackList, AUDIO_URL_PREFIX, LISTING_ERROR_MESSAGE, TRACKS_ENDPOINT,
};
use tower_http::services::ServeDir;
use tracing::error;

use crate::lister::{list_tracks, ListerError};

pub struct ListerState {
    /// Directory scanned on every listing request
    pub audio_dir: PathBuf,
    /// Also serve the audio files themselves under `/audio`
    pub serve_static: bool,
}

/// Create the track listing router
pub fn create_router(state: Arc<ListerState>) -> Router {
    let router = Router::new().route(TRACKS_ENDPOINT, get(get_tracks));

    let router = if state.serve_static {
        router.nest_service(AUDIO_URL_PREFIX, ServeDir::new(&state.audio_dir))
    } else {
        router
    };

    router.with_state(state)
}

fn lister_error_to_response(err: ListerError) -> Response {
    error!("Failed to list tracks: {err}");
    let body = ErrorBody {
        status_code: StatusCode::INTERNAL_SERVER_ERROR.as_u16(),
        message: LISTING_ERROR_MESSAGE.to_string(),
    };
    (StatusCode::INTERNAL_SERVER_ERROR, Json(body)).into_response()
}

async fn get_tracks(State(state): State<Arc<ListerState>>) -> Response {
    match list_tracks(&state.audio_dir).await {
        Ok(tracks) => (StatusCode::OK, Json(TrackList { tracks })).into_response(),
        Err(err) => lister_error_to_response(err),
    }
}
