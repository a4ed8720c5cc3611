//! Data transfer objects for web requests and responses.

use serde::{Deserialize, Serialize};

use crate::board::BoardEntry;
use crate::domain::StationRules;

/// Query parameters for the board endpoints.
#[derive(Debug, Deserialize)]
pub struct BoardRequest {
    /// Station code ("BD", "KAC"); case-insensitive
    pub station: String,

    /// Maximum number of entries to return
    pub limit: Option<usize>,
}

/// One feed entry in the JSON API.
#[derive(Debug, Serialize)]
pub struct BoardEntryResult {
    /// Train identifier
    pub number: String,

    /// Service brand name
    pub name: String,

    pub track: u32,

    /// Category tag: "LD", "LOC", or "FDR"
    pub category: &'static str,

    /// Parsed origin label
    pub origin: String,

    /// Parsed destination label
    pub destination: String,

    /// Signed minutes until arrival, where an arrival is scheduled
    pub minutes_to_arrival: Option<i64>,

    /// Signed minutes until departure, where a departure is scheduled
    pub minutes_to_departure: Option<i64>,

    /// "terminating", "originating", or "passing-through"
    pub classification: &'static str,

    /// The scheduled time the board leads with, "HH:MM"
    pub primary_time: String,

    /// Status phrase ("Arriving in 12 min", "Boarding Closed")
    pub status: String,

    /// Counterpart-station phrase ("From KROYA")
    pub context: String,

    /// Whether the event warrants visual emphasis
    pub urgent: bool,

    /// Whether this is a feeder departing within the station's feeder
    /// notice window
    pub feeder_notice: bool,
}

impl BoardEntryResult {
    /// Build from a feed entry, resolving the station-specific feeder
    /// notice window.
    pub fn from_entry(entry: &BoardEntry, rules: &StationRules) -> Self {
        Self {
            number: entry.number.clone(),
            name: entry.name.clone(),
            track: entry.track,
            category: entry.category.tag(),
            origin: entry.origin.clone(),
            destination: entry.destination.clone(),
            minutes_to_arrival: entry.minutes_to_arrival,
            minutes_to_departure: entry.minutes_to_departure,
            classification: entry.classification.as_str(),
            primary_time: entry.primary_time.to_string(),
            status: entry.status.clone(),
            context: entry.context.clone(),
            urgent: entry.urgent,
            feeder_notice: feeder_notice(entry, rules),
        }
    }
}

/// Whether a feeder movement is departing within the station's notice
/// window. Stations without a feeder window never flag.
pub(crate) fn feeder_notice(entry: &BoardEntry, rules: &StationRules) -> bool {
    use crate::domain::Category;

    entry.category == Category::Feeder
        && rules.feeder_notice_min.is_some_and(|window| {
            entry
                .minutes_to_departure
                .is_some_and(|d| d > 0 && d <= window)
        })
}

/// Response for the board endpoint.
#[derive(Debug, Serialize)]
pub struct BoardResponse {
    /// Station code
    pub station: String,

    /// Station display name
    pub station_name: String,

    /// The instant the feed was computed against, "YYYY-MM-DD HH:MM:SS"
    pub generated_at: String,

    /// Ranked, truncated feed entries
    pub entries: Vec<BoardEntryResult>,
}

/// Error response body.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}
