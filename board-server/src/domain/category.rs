//! Service categories.

use std::fmt;

/// The kind of service a movement belongs to.
///
/// The timetable data tags each row with one of three codes; the closed
/// enum keeps downstream presentation choices exhaustive instead of
/// string-matched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Deserialize)]
pub enum Category {
    /// Intercity service ("LD" in the data).
    #[serde(rename = "LD")]
    LongDistance,

    /// Commuter / local service ("LOC").
    #[serde(rename = "LOC")]
    Commuter,

    /// High-speed-rail feeder shuttle ("FDR").
    #[serde(rename = "FDR")]
    Feeder,
}

impl Category {
    /// The short tag used in the timetable data and the JSON API.
    pub fn tag(self) -> &'static str {
        match self {
            Category::LongDistance => "LD",
            Category::Commuter => "LOC",
            Category::Feeder => "FDR",
        }
    }

    /// Which of the two board presentation styles this category uses.
    pub fn display_mode(self) -> DisplayMode {
        match self {
            Category::LongDistance => DisplayMode::Intercity,
            Category::Commuter | Category::Feeder => DisplayMode::Commuter,
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

/// The two visual styles the board renders.
///
/// Commuter-style rows lead with the destination; intercity-style rows lead
/// with the train name and show fuller context.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DisplayMode {
    Commuter,
    Intercity,
}
