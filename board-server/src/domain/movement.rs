//! Scheduled movements: the rows of the timetable.

use super::{Category, ClockTime, StationCode};

/// One scheduled arrival/departure event for a single train at a single
/// station.
///
/// A train calling at two stations appears as two independent records; no
/// cross-station linkage is modeled. Records are immutable once loaded.
///
/// A missing arrival means the movement originates at this station; a
/// missing departure means it terminates here. A record with neither is
/// meaningless and is dropped by the timetable loader.
#[derive(Debug, Clone, serde::Deserialize)]
pub struct ScheduledMovement {
    /// Station this record belongs to.
    pub station: StationCode,

    /// Train identifier ("KA 287"). Unique within the data source but not
    /// globally enforced.
    pub number: String,

    /// Service brand name ("Serayu").
    pub name: String,

    /// Free-text route description, parsed lazily by [`Route::parse`].
    ///
    /// [`Route::parse`]: super::Route::parse
    pub route: String,

    /// Scheduled arrival, absent for originating movements.
    pub arrival: Option<ClockTime>,

    /// Scheduled departure, absent for terminating movements.
    pub departure: Option<ClockTime>,

    /// Assigned track, 1-based; bounded by the station's track count.
    pub track: u32,

    pub category: Category,
}

impl ScheduledMovement {
    /// Whether the record carries at least one scheduled time.
    pub fn has_usable_time(&self) -> bool {
        self.arrival.is_some() || self.departure.is_some()
    }
}
