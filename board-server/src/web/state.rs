//! Application state for the web layer.

use std::sync::Arc;

use crate::domain::StationDirectory;
use crate::timetable::Timetable;

/// Shared application state.
///
/// Both members are loaded once at startup and never mutated, so handlers
/// share them without locking.
#[derive(Clone)]
pub struct AppState {
    /// The static timetable
    pub timetable: Arc<Timetable>,

    /// Known stations and their display rules
    pub stations: Arc<StationDirectory>,
}

impl AppState {
    /// Create a new app state.
    pub fn new(timetable: Timetable, stations: StationDirectory) -> Self {
        Self {
            timetable: Arc::new(timetable),
            stations: Arc::new(stations),
        }
    }
}
