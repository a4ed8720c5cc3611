//! Domain types for the departure board.
//!
//! This module contains the core domain model types that represent
//! validated timetable data. All types enforce their invariants at
//! construction time, so code that receives these types can trust their
//! validity.

mod category;
mod movement;
mod route;
mod station;
mod time;

pub use category::{Category, DisplayMode};
pub use movement::ScheduledMovement;
pub use route::Route;
pub use station::{InvalidStationCode, Station, StationCode, StationDirectory, StationRules};
pub use time::{ClockTime, TimeError};
