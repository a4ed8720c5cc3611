//! Movement classification and status formatting.
//!
//! For each scheduled movement at a station, decide the movement's role
//! relative to the wall clock (terminating, originating, or passing
//! through) and produce the status line, context line, urgency flag, and
//! the one scheduled time the board should lead with. A movement with no
//! current status yields `None` and is dropped from the feed; that omission
//! is what keeps the board limited to now-relevant trains instead of the
//! whole day's table.

use crate::domain::{Category, ClockTime, Route, ScheduledMovement, Station, StationCode};

/// How far ahead (minutes) an arrival or departure still makes the board.
const RELEVANCE_WINDOW_MIN: i64 = 180;

/// How long (minutes) a terminating train keeps showing "Arrived".
const ARRIVED_GRACE_MIN: i64 = 20;

/// Countdowns under this many minutes are flagged urgent.
const URGENT_THRESHOLD_MIN: i64 = 5;

/// The movement's role at the station being displayed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Classification {
    /// The station is the movement's final stop.
    Terminating,

    /// The station is the movement's first stop.
    Originating,

    /// The station is an intermediate stop.
    PassingThrough,
}

impl Classification {
    /// Stable label used in the JSON API.
    pub fn as_str(self) -> &'static str {
        match self {
            Classification::Terminating => "terminating",
            Classification::Originating => "originating",
            Classification::PassingThrough => "passing-through",
        }
    }
}

/// A movement the board currently shows, with its display strings resolved.
///
/// Entries are recomputed from scratch on every evaluation and never stored;
/// there is no identity or state carried between calls.
#[derive(Debug, Clone)]
pub struct BoardEntry {
    /// Train identifier, from the source movement.
    pub number: String,

    /// Service brand name.
    pub name: String,

    pub track: u32,

    pub category: Category,

    pub station: StationCode,

    /// Parsed origin label.
    pub origin: String,

    /// Parsed destination label.
    pub destination: String,

    /// Signed minutes until arrival; `None` when no arrival is scheduled.
    pub minutes_to_arrival: Option<i64>,

    /// Signed minutes until departure; `None` when no departure is scheduled.
    pub minutes_to_departure: Option<i64>,

    pub classification: Classification,

    /// The one scheduled time the board leads with.
    pub primary_time: ClockTime,

    /// Countdown or state phrase ("Arriving in 12 min", "Boarding Closed").
    pub status: String,

    /// The counterpart station ("From KROYA", "To CICALENGKA").
    pub context: String,

    /// Whether the event is imminent enough to warrant visual emphasis.
    pub urgent: bool,
}

impl BoardEntry {
    /// Minutes to the movement's nearest scheduled event, preferring
    /// arrival. This is the value consumers rank the feed by.
    pub fn countdown(&self) -> Option<i64> {
        self.minutes_to_arrival.or(self.minutes_to_departure)
    }
}

/// Classify one movement against the wall clock.
///
/// `minutes_to_arrival` and `minutes_to_departure` are the signed deltas
/// computed from the movement's scheduled times (`None` where the time is
/// absent). Returns `None` when the movement is not currently relevant.
///
/// Decision order, first match wins:
/// 1. terminating: the route's destination names this station, or there is
///    no departure;
/// 2. originating: the route's origin names this station, or there is no
///    arrival;
/// 3. passing through: everything else.
///
/// Pure function: no clock reads, no I/O, no failure path. Inconsistent
/// input (a delta present without its scheduled time) yields omission.
pub fn classify(
    movement: &ScheduledMovement,
    route: &Route,
    minutes_to_arrival: Option<i64>,
    minutes_to_departure: Option<i64>,
    station: &Station,
) -> Option<BoardEntry> {
    let station_name = station.name.to_uppercase();
    let terminates_here = route.destination.to_uppercase().contains(&station_name)
        || movement.departure.is_none();
    let originates_here =
        route.origin.to_uppercase().contains(&station_name) || movement.arrival.is_none();

    let entry = |classification: Classification,
                 primary_time: ClockTime,
                 status: String,
                 context: String,
                 urgent: bool| {
        BoardEntry {
            number: movement.number.clone(),
            name: movement.name.clone(),
            track: movement.track,
            category: movement.category,
            station: movement.station,
            origin: route.origin.clone(),
            destination: route.destination.clone(),
            minutes_to_arrival,
            minutes_to_departure,
            classification,
            primary_time,
            status,
            context,
            urgent,
        }
    };

    if terminates_here {
        match minutes_to_arrival {
            Some(n) if n > 0 && n <= RELEVANCE_WINDOW_MIN => Some(entry(
                Classification::Terminating,
                movement.arrival?,
                format!("Arriving in {n} min"),
                format!("From {}", route.origin),
                n < URGENT_THRESHOLD_MIN,
            )),
            Some(n) if n > -ARRIVED_GRACE_MIN && n <= 0 => Some(entry(
                Classification::Terminating,
                movement.arrival?,
                "Arrived".to_string(),
                format!("From {}", route.origin),
                false,
            )),
            _ => None,
        }
    } else if originates_here {
        match minutes_to_departure {
            Some(n) if n > 0 && n <= RELEVANCE_WINDOW_MIN => {
                let closing = n <= station.rules.boarding_close_min;
                let status = if closing {
                    "Boarding Closed".to_string()
                } else {
                    format!("Departing in {n} min")
                };
                Some(entry(
                    Classification::Originating,
                    movement.departure?,
                    status,
                    format!("To {}", route.destination),
                    closing,
                ))
            }
            _ => None,
        }
    } else {
        // Intermediate stop: both times are present (a missing one would
        // have routed the movement into a branch above).
        let arrival = movement.arrival?;
        let departure = movement.departure?;
        let context = format!("{} (via {})", route.destination, route.origin);

        match minutes_to_arrival {
            Some(n) if n > 0 && n <= station.rules.stopover_imminent_min => Some(entry(
                Classification::PassingThrough,
                arrival,
                format!("Arrives in {n} min"),
                context,
                n < URGENT_THRESHOLD_MIN,
            )),
            _ => {
                let urgent = matches!(
                    minutes_to_departure,
                    Some(d) if d > 0 && d < URGENT_THRESHOLD_MIN
                );
                Some(entry(
                    Classification::PassingThrough,
                    departure,
                    format!("Departs at {departure}"),
                    context,
                    urgent,
                ))
            }
        }
    }
}
