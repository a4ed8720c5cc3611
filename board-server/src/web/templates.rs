//! Askama templates for the web frontend.

use askama::Template;

use crate::board::BoardEntry;
use crate::domain::{DisplayMode, Station, StationRules};

use super::dto::feeder_notice;

// ============================================================================
// Page Templates (extend base.html)
// ============================================================================

/// Departure board page, split into per-category columns.
#[derive(Template)]
#[template(path = "board.html")]
pub struct BoardTemplate {
    pub station_code: String,
    pub station_name: String,
    pub clock: String,
    pub stations: Vec<StationOption>,
    pub commuter: Vec<EntryView>,
    pub feeder: Vec<EntryView>,
    pub intercity: Vec<EntryView>,
    /// Only stations with a feeder window get the feeder column.
    pub has_feeder_column: bool,
}

/// Per-track view page.
#[derive(Template)]
#[template(path = "tracks.html")]
pub struct TracksTemplate {
    pub station_code: String,
    pub station_name: String,
    pub clock: String,
    pub stations: Vec<StationOption>,
    pub tracks: Vec<TrackOption>,
    pub selected_track: Option<u32>,
    pub entries: Vec<EntryView>,
}

/// Error page.
#[derive(Template)]
#[template(path = "error.html")]
pub struct ErrorTemplate {
    pub title: String,
    pub message: String,
}

// ============================================================================
// View Models (for templates)
// ============================================================================

/// A station in the switcher bar.
#[derive(Debug, Clone)]
pub struct StationOption {
    pub code: String,
    pub name: String,
    pub selected: bool,
}

/// A track chip in the per-track view.
#[derive(Debug, Clone)]
pub struct TrackOption {
    pub number: u32,
    pub count: usize,
    pub selected: bool,
}

/// Feed entry view model for templates.
#[derive(Debug, Clone)]
pub struct EntryView {
    pub number: String,
    pub name: String,
    pub track: u32,
    pub origin: String,
    pub destination: String,
    pub time: String,
    pub status: String,
    pub context: String,
    pub urgent: bool,
    pub feeder_notice: bool,
    pub commuter_style: bool,
    countdown: Option<i64>,
}

impl EntryView {
    /// Create from a feed entry, resolving station-specific presentation.
    pub fn from_entry(entry: &BoardEntry, rules: &StationRules) -> Self {
        Self {
            number: entry.number.clone(),
            name: entry.name.clone(),
            track: entry.track,
            origin: entry.origin.clone(),
            destination: entry.destination.clone(),
            time: entry.primary_time.to_string(),
            status: entry.status.clone(),
            context: entry.context.clone(),
            urgent: entry.urgent,
            feeder_notice: feeder_notice(entry, rules),
            commuter_style: entry.category.display_mode() == DisplayMode::Commuter,
            countdown: entry.countdown(),
        }
    }

    /// Big-number countdown: minutes remaining, or "DUE" once the event
    /// has passed.
    pub fn countdown_display(&self) -> String {
        match self.countdown {
            Some(min) if min > 0 => format!("{min}'"),
            Some(_) => "DUE".to_string(),
            None => self.time.clone(),
        }
    }

    /// Traffic-light band for the countdown pill.
    pub fn urgency_class(&self) -> &'static str {
        match self.countdown.map(i64::abs) {
            Some(min) if min > 30 => "calm",
            Some(min) if min > 15 => "warm",
            Some(_) => "hot",
            None => "calm",
        }
    }
}

/// Build the station switcher, flagging the selected code.
pub fn station_options(stations: &[&Station], selected: &str) -> Vec<StationOption> {
    let mut options: Vec<StationOption> = stations
        .iter()
        .map(|s| StationOption {
            code: s.code.to_string(),
            name: s.name.clone(),
            selected: s.code.as_str() == selected,
        })
        .collect();
    options.sort_by(|a, b| a.code.cmp(&b.code));
    options
}
