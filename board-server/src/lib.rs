//! Station departure board server.
//!
//! Serves live departure boards for stations on a static, hand-curated
//! timetable: per-train countdowns, boarding states, and track views,
//! recomputed from the wall clock on every request.

pub mod board;
pub mod domain;
pub mod timetable;
pub mod web;
