//! The timetable store.
//!
//! An immutable, in-memory catalog of scheduled movements, loaded once at
//! startup and never mutated. The shipped timetable is compiled into the
//! binary; a deployment can point at an override file instead.
//!
//! Validation happens here, once, so the per-request feed path can trust
//! every record: unknown station codes and impossible track assignments are
//! configuration errors and fail the load, while records carrying no
//! scheduled time at all are dropped with a warning.

use std::path::Path;

use tracing::warn;

use crate::domain::{ScheduledMovement, StationCode, StationDirectory};

/// The timetable compiled into the binary.
const EMBEDDED_TIMETABLE: &str = include_str!("../../data/timetable.json");

/// Errors from loading the timetable.
#[derive(Debug, thiserror::Error)]
pub enum TimetableError {
    /// Reading an override file failed.
    #[error("failed to read timetable file: {0}")]
    Io(#[from] std::io::Error),

    /// The data is not valid JSON, or a record is malformed.
    #[error("failed to parse timetable: {0}")]
    Parse(#[from] serde_json::Error),

    /// A record references a station the directory does not know.
    #[error("movement {number} references unknown station {station}")]
    UnknownStation {
        station: StationCode,
        number: String,
    },

    /// A record's track does not exist at its station.
    #[error("movement {number} at {station} uses track {track}, but the station has {total_tracks}")]
    TrackOutOfRange {
        station: StationCode,
        number: String,
        track: u32,
        total_tracks: u32,
    },
}

/// The immutable catalog of scheduled movements.
#[derive(Debug, Clone)]
pub struct Timetable {
    movements: Vec<ScheduledMovement>,
}

impl Timetable {
    /// Load and validate a timetable from JSON text.
    ///
    /// Every record must reference a station in `directory` and fit within
    /// that station's track count. Records with neither an arrival nor a
    /// departure are dropped (the data is hand-authored; a timeless row is
    /// meaningless but not worth refusing to serve the rest over).
    pub fn load(json: &str, directory: &StationDirectory) -> Result<Self, TimetableError> {
        let records: Vec<ScheduledMovement> = serde_json::from_str(json)?;

        let mut movements = Vec::with_capacity(records.len());
        for movement in records {
            let station =
                directory
                    .get(movement.station)
                    .ok_or_else(|| TimetableError::UnknownStation {
                        station: movement.station,
                        number: movement.number.clone(),
                    })?;

            if movement.track == 0 || movement.track > station.total_tracks {
                return Err(TimetableError::TrackOutOfRange {
                    station: movement.station,
                    number: movement.number,
                    track: movement.track,
                    total_tracks: station.total_tracks,
                });
            }

            if !movement.has_usable_time() {
                warn!(
                    number = %movement.number,
                    station = %movement.station,
                    "dropping timetable entry with no scheduled times"
                );
                continue;
            }

            movements.push(movement);
        }

        Ok(Self { movements })
    }

    /// Load the timetable compiled into the binary.
    pub fn embedded(directory: &StationDirectory) -> Result<Self, TimetableError> {
        Self::load(EMBEDDED_TIMETABLE, directory)
    }

    /// Load a timetable from an override file.
    pub fn from_file(
        path: impl AsRef<Path>,
        directory: &StationDirectory,
    ) -> Result<Self, TimetableError> {
        let json = std::fs::read_to_string(path)?;
        Self::load(&json, directory)
    }

    /// All movements, in data-file order.
    pub fn movements(&self) -> &[ScheduledMovement] {
        &self.movements
    }

    /// Movements at one station, in data-file order.
    pub fn for_station(&self, code: StationCode) -> impl Iterator<Item = &ScheduledMovement> {
        self.movements.iter().filter(move |m| m.station == code)
    }

    /// Total number of movements.
    pub fn len(&self) -> usize {
        self.movements.len()
    }

    /// Whether the timetable holds no movements.
    pub fn is_empty(&self) -> bool {
        self.movements.is_empty()
    }
}
