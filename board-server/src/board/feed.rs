//! Per-station feed building.
//!
//! Runs the classifier over every movement at one station and collects the
//! currently-relevant entries. Each call is an independent, complete
//! recomputation against the supplied instant; nothing is cached or diffed
//! between calls.

use chrono::NaiveDateTime;
use tracing::debug;

use crate::domain::{Route, StationCode, StationDirectory};
use crate::timetable::Timetable;

use super::classify::{BoardEntry, classify};

/// Errors from building a feed.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FeedError {
    /// The station code is not in the directory. This is a deployment or
    /// data mismatch, surfaced immediately rather than defaulted.
    #[error("unknown station code: {0}")]
    UnknownStation(StationCode),
}

/// Build the display feed for one station at one instant.
///
/// Entries come back in timetable order; ranking and truncation are the
/// caller's concern (see [`rank_entries`]). A station with nothing
/// currently relevant yields an empty list, which is a normal state, not
/// an error.
///
/// `now` is supplied by the caller on every call; the core never reads a
/// clock, so the result is deterministic for a given input.
///
/// [`rank_entries`]: super::rank_entries
pub fn build_feed(
    timetable: &Timetable,
    directory: &StationDirectory,
    code: StationCode,
    now: NaiveDateTime,
) -> Result<Vec<BoardEntry>, FeedError> {
    let station = directory.get(code).ok_or(FeedError::UnknownStation(code))?;

    let mut entries = Vec::new();
    let mut scanned = 0usize;

    for movement in timetable.for_station(code) {
        scanned += 1;

        let route = Route::parse(&movement.route);
        let minutes_to_arrival = movement.arrival.map(|t| t.minutes_until(now));
        let minutes_to_departure = movement.departure.map(|t| t.minutes_until(now));

        if let Some(entry) = classify(
            movement,
            &route,
            minutes_to_arrival,
            minutes_to_departure,
            station,
        ) {
            entries.push(entry);
        }
    }

    debug!(
        station = %code,
        scanned,
        relevant = entries.len(),
        "built station feed"
    );

    Ok(entries)
}
