//! The schedule processing engine.
//!
//! This module turns the static timetable and a wall-clock instant into a
//! per-station display feed: classify each movement's role at the station,
//! format its status line, and drop whatever is not currently relevant.
//! Every operation is a deterministic, side-effect-free transformation of
//! immutable inputs; callers re-run it on their own schedule.

mod classify;
mod feed;
mod rank;

pub use classify::{BoardEntry, Classification, classify};
pub use feed::{FeedError, build_feed};
pub use rank::{group_by_track, rank_entries, top_entries};
