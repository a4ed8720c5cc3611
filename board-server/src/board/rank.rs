//! Feed ranking for board consumers.
//!
//! The feed itself comes back in timetable order; every consumer then wants
//! the same thing: nearest event first, truncated to a display count, and
//! sometimes grouped per track. Those transforms live here so the dashboards
//! share one definition of "nearest".

use super::classify::BoardEntry;

/// Sort key for entries with no countdown at all. The classifier guarantees
/// returned entries carry at least one delta, so this only matters for
/// entries constructed by hand.
const NO_COUNTDOWN_SENTINEL: i64 = 999;

/// Absolute minutes to the entry's nearest event.
fn sort_key(entry: &BoardEntry) -> i64 {
    entry
        .countdown()
        .map(i64::abs)
        .unwrap_or(NO_COUNTDOWN_SENTINEL)
}

/// Rank entries nearest-event-first.
///
/// "Nearest" is the absolute value of the countdown, so a train that
/// arrived three minutes ago outranks one departing in ten. The sort is
/// stable: entries at the same distance keep their timetable order.
pub fn rank_entries(mut entries: Vec<BoardEntry>) -> Vec<BoardEntry> {
    entries.sort_by_key(sort_key);
    entries
}

/// Rank entries and keep the first `limit`.
pub fn top_entries(entries: Vec<BoardEntry>, limit: usize) -> Vec<BoardEntry> {
    let mut ranked = rank_entries(entries);
    ranked.truncate(limit);
    ranked
}

/// Split entries into per-track lists, each ranked nearest-first.
///
/// The returned vector has one slot per track, 1-based: index 0 holds
/// track 1. Entries whose track exceeds `total_tracks` cannot occur in a
/// validated timetable and are discarded.
pub fn group_by_track(entries: Vec<BoardEntry>, total_tracks: u32) -> Vec<Vec<BoardEntry>> {
    let mut groups: Vec<Vec<BoardEntry>> = vec![Vec::new(); total_tracks as usize];

    for entry in entries {
        let idx = entry.track as usize;
        if (1..=groups.len()).contains(&idx) {
            groups[idx - 1].push(entry);
        }
    }

    groups.into_iter().map(rank_entries).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Classification;
    use crate::domain::{Category, ClockTime, StationCode};

    fn entry(number: &str, track: u32, to_arr: Option<i64>, to_dep: Option<i64>) -> BoardEntry {
        BoardEntry {
            number: number.to_string(),
            name: "Test".to_string(),
            track,
            category: Category::Commuter,
            station: StationCode::parse("BD").unwrap(),
            origin: "A".to_string(),
            destination: "B".to_string(),
            minutes_to_arrival: to_arr,
            minutes_to_departure: to_dep,
            classification: Classification::PassingThrough,
            primary_time: ClockTime::parse_hhmm("10:00").unwrap(),
            status: "Departs at 10:00".to_string(),
            context: "B (via A)".to_string(),
            urgent: false,
        }
    }

    #[test]
    fn ranks_by_absolute_countdown() {
        let entries = vec![
            entry("far", 1, Some(40), None),
            entry("recent", 1, Some(-3), None),
            entry("soon", 1, Some(10), None),
        ];

        let ranked = rank_entries(entries);
        let order: Vec<&str> = ranked.iter().map(|e| e.number.as_str()).collect();
        assert_eq!(order, ["recent", "soon", "far"]);
    }

    #[test]
    fn key_uses_arrival_when_both_present() {
        // An entry carrying both deltas keys on its arrival, so its
        // 2-minute departure does not make it nearer than "dep-only".
        let entries = vec![
            entry("both", 1, Some(30), Some(2)),
            entry("dep-only", 1, None, Some(5)),
        ];

        let ranked = rank_entries(entries);
        assert_eq!(ranked[0].number, "dep-only");
        assert_eq!(ranked[1].number, "both");
    }

    #[test]
    fn stable_for_equal_keys() {
        let entries = vec![
            entry("first", 1, Some(10), None),
            entry("second", 1, Some(-10), None),
        ];

        let ranked = rank_entries(entries);
        assert_eq!(ranked[0].number, "first");
        assert_eq!(ranked[1].number, "second");
    }

    #[test]
    fn missing_countdown_sorts_last() {
        let entries = vec![
            entry("none", 1, None, None),
            entry("far", 1, Some(500), None),
        ];

        let ranked = rank_entries(entries);
        assert_eq!(ranked[0].number, "far");
        assert_eq!(ranked[1].number, "none");
    }

    #[test]
    fn top_entries_truncates() {
        let entries = vec![
            entry("a", 1, Some(30), None),
            entry("b", 1, Some(10), None),
            entry("c", 1, Some(20), None),
        ];

        let top = top_entries(entries, 2);
        assert_eq!(top.len(), 2);
        assert_eq!(top[0].number, "b");
        assert_eq!(top[1].number, "c");
    }

    #[test]
    fn top_entries_with_large_limit_keeps_all() {
        let entries = vec![entry("a", 1, Some(30), None)];
        assert_eq!(top_entries(entries, 10).len(), 1);
    }

    #[test]
    fn groups_by_track_and_ranks_within() {
        let entries = vec![
            entry("t1-far", 1, Some(40), None),
            entry("t2-only", 2, Some(15), None),
            entry("t1-near", 1, Some(5), None),
        ];

        let groups = group_by_track(entries, 3);
        assert_eq!(groups.len(), 3);

        let track1: Vec<&str> = groups[0].iter().map(|e| e.number.as_str()).collect();
        assert_eq!(track1, ["t1-near", "t1-far"]);

        assert_eq!(groups[1].len(), 1);
        assert_eq!(groups[1][0].number, "t2-only");

        assert!(groups[2].is_empty());
    }

    #[test]
    fn empty_input() {
        assert!(rank_entries(vec![]).is_empty());
        assert!(top_entries(vec![], 5).is_empty());
        assert_eq!(group_by_track(vec![], 4).len(), 4);
    }
}
