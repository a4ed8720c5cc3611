//! HTTP route handlers.

use askama::Template;
use axum::{
    Json, Router,
    extract::{Query, State},
    http::StatusCode,
    response::{Html, IntoResponse, Response},
    routing::get,
};
use chrono::Local;
use serde::Deserialize;
use tower_http::services::ServeDir;
use tracing::warn;

use crate::board::{self, BoardEntry, FeedError};
use crate::domain::{Category, Station, StationCode};

use super::dto::*;
use super::state::AppState;
use super::templates::*;

/// Rows shown on the HTML board before splitting into columns.
const BOARD_DISPLAY_ROWS: usize = 10;

/// Default and maximum entry counts for the JSON API.
const API_DEFAULT_LIMIT: usize = 10;
const API_MAX_LIMIT: usize = 50;

/// Station shown when none is asked for.
const DEFAULT_STATION: &str = "BD";

/// Create the application router.
///
/// `static_dir` is the path to the static assets directory.
pub fn create_router(state: AppState, static_dir: &str) -> Router {
    Router::new()
        .route("/", get(board_page))
        .route("/tracks", get(tracks_page))
        .route("/health", get(health))
        .route("/api/board", get(api_board))
        .nest_service("/static", ServeDir::new(static_dir))
        .with_state(state)
}

/// Health check endpoint.
async fn health() -> &'static str {
    "ok"
}

/// Query parameters for the board page.
#[derive(Debug, Deserialize)]
struct BoardPageRequest {
    station: Option<String>,
}

/// Query parameters for the per-track page.
#[derive(Debug, Deserialize)]
struct TracksPageRequest {
    station: Option<String>,
    track: Option<u32>,
}

/// Resolve a station query parameter against the directory.
fn resolve_station<'a>(
    state: &'a AppState,
    raw: Option<&str>,
) -> Result<&'a Station, AppError> {
    let raw = raw.unwrap_or(DEFAULT_STATION);
    let code = StationCode::parse_normalized(raw).map_err(|_| AppError::BadRequest {
        message: format!("Invalid station code: {raw}"),
    })?;
    state.stations.get(code).ok_or_else(|| AppError::NotFound {
        message: format!("Unknown station: {code}"),
    })
}

/// Departure board page, three columns split by service category.
async fn board_page(
    State(state): State<AppState>,
    Query(req): Query<BoardPageRequest>,
) -> Result<Response, AppError> {
    let station = match resolve_station(&state, req.station.as_deref()) {
        Ok(station) => station,
        Err(e) => return Ok(e.into_page_response()),
    };
    let now = Local::now().naive_local();

    let feed = board::build_feed(&state.timetable, &state.stations, station.code, now)?;
    let top = board::top_entries(feed, BOARD_DISPLAY_ROWS);

    let mut commuter = Vec::new();
    let mut feeder = Vec::new();
    let mut intercity = Vec::new();
    for entry in &top {
        let view = EntryView::from_entry(entry, &station.rules);
        match entry.category {
            Category::Commuter => commuter.push(view),
            Category::Feeder => feeder.push(view),
            Category::LongDistance => intercity.push(view),
        }
    }

    let all_stations: Vec<&Station> = state.stations.stations().collect();
    let template = BoardTemplate {
        station_code: station.code.to_string(),
        station_name: station.name.clone(),
        clock: now.format("%H:%M").to_string(),
        stations: station_options(&all_stations, station.code.as_str()),
        commuter,
        feeder,
        intercity,
        has_feeder_column: station.rules.feeder_notice_min.is_some(),
    };

    let html = template.render().map_err(|e| AppError::Internal {
        message: format!("Template error: {e}"),
    })?;
    Ok(Html(html).into_response())
}

/// Per-track page: all tracks as chips, one (or all) expanded.
async fn tracks_page(
    State(state): State<AppState>,
    Query(req): Query<TracksPageRequest>,
) -> Result<Response, AppError> {
    let station = match resolve_station(&state, req.station.as_deref()) {
        Ok(station) => station,
        Err(e) => return Ok(e.into_page_response()),
    };
    let now = Local::now().naive_local();

    if let Some(track) = req.track {
        if track == 0 || track > station.total_tracks {
            let err = AppError::BadRequest {
                message: format!(
                    "Station {} has tracks 1-{}, not {track}",
                    station.code, station.total_tracks
                ),
            };
            return Ok(err.into_page_response());
        }
    }

    let feed = board::build_feed(&state.timetable, &state.stations, station.code, now)?;
    let groups = board::group_by_track(feed.clone(), station.total_tracks);

    let tracks: Vec<TrackOption> = groups
        .iter()
        .enumerate()
        .map(|(i, group)| TrackOption {
            number: i as u32 + 1,
            count: group.len(),
            selected: req.track == Some(i as u32 + 1),
        })
        .collect();

    let shown: Vec<BoardEntry> = match req.track {
        Some(track) => groups
            .into_iter()
            .nth(track as usize - 1)
            .unwrap_or_default(),
        None => board::rank_entries(feed),
    };

    let entries = shown
        .iter()
        .map(|e| EntryView::from_entry(e, &station.rules))
        .collect();

    let all_stations: Vec<&Station> = state.stations.stations().collect();
    let template = TracksTemplate {
        station_code: station.code.to_string(),
        station_name: station.name.clone(),
        clock: now.format("%H:%M").to_string(),
        stations: station_options(&all_stations, station.code.as_str()),
        tracks,
        selected_track: req.track,
        entries,
    };

    let html = template.render().map_err(|e| AppError::Internal {
        message: format!("Template error: {e}"),
    })?;
    Ok(Html(html).into_response())
}

/// JSON feed for one station, ranked nearest-first and truncated.
async fn api_board(
    State(state): State<AppState>,
    Query(req): Query<BoardRequest>,
) -> Result<Json<BoardResponse>, AppError> {
    let station = resolve_station(&state, Some(&req.station))?;
    let limit = req.limit.unwrap_or(API_DEFAULT_LIMIT).min(API_MAX_LIMIT);
    let now = Local::now().naive_local();

    let feed = board::build_feed(&state.timetable, &state.stations, station.code, now)?;
    let top = board::top_entries(feed, limit);

    let entries = top
        .iter()
        .map(|e| BoardEntryResult::from_entry(e, &station.rules))
        .collect();

    Ok(Json(BoardResponse {
        station: station.code.to_string(),
        station_name: station.name.clone(),
        generated_at: now.format("%Y-%m-%d %H:%M:%S").to_string(),
        entries,
    }))
}

/// Application error type.
#[derive(Debug)]
pub enum AppError {
    BadRequest { message: String },
    NotFound { message: String },
    Internal { message: String },
}

impl AppError {
    fn status_and_message(&self) -> (StatusCode, &str) {
        match self {
            AppError::BadRequest { message } => (StatusCode::BAD_REQUEST, message),
            AppError::NotFound { message } => (StatusCode::NOT_FOUND, message),
            AppError::Internal { message } => (StatusCode::INTERNAL_SERVER_ERROR, message),
        }
    }

    /// Render as an HTML error page, for the browser-facing routes.
    fn into_page_response(self) -> Response {
        let (status, message) = self.status_and_message();
        warn!(%status, error = message, "request failed");

        let template = ErrorTemplate {
            title: status
                .canonical_reason()
                .unwrap_or("Error")
                .to_string(),
            message: message.to_string(),
        };
        match template.render() {
            Ok(html) => (status, Html(html)).into_response(),
            Err(e) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                format!("Template error: {e}"),
            )
                .into_response(),
        }
    }
}

impl From<FeedError> for AppError {
    fn from(e: FeedError) -> Self {
        match e {
            FeedError::UnknownStation(_) => AppError::NotFound {
                message: e.to_string(),
            },
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = self.status_and_message();
        warn!(%status, error = message, "request failed");

        let body = Json(ErrorResponse {
            error: message.to_string(),
        });
        (status, body).into_response()
    }
}
