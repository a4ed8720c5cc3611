//! Station codes, per-station display rules, and the station directory.

use serde::{Deserialize, Deserializer};
use std::collections::HashMap;
use std::fmt;

/// Error returned when parsing an invalid station code.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid station code: {reason}")]
pub struct InvalidStationCode {
    reason: &'static str,
}

/// A validated station code.
///
/// Station codes are 2 to 5 uppercase ASCII letters ("BD", "KAC"). This
/// type guarantees that any `StationCode` value is valid by construction.
///
/// # Examples
///
/// ```
/// use board_server::domain::StationCode;
///
/// let kac = StationCode::parse("KAC").unwrap();
/// assert_eq!(kac.as_str(), "KAC");
///
/// // Lowercase is rejected
/// assert!(StationCode::parse("kac").is_err());
///
/// // Out-of-range lengths are rejected
/// assert!(StationCode::parse("K").is_err());
/// assert!(StationCode::parse("KACKAC").is_err());
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct StationCode {
    bytes: [u8; 5],
    len: u8,
}

impl StationCode {
    /// Parse a station code from a string.
    ///
    /// The input must be 2 to 5 uppercase ASCII letters (A-Z).
    pub fn parse(s: &str) -> Result<Self, InvalidStationCode> {
        let input = s.as_bytes();

        if !(2..=5).contains(&input.len()) {
            return Err(InvalidStationCode {
                reason: "must be 2 to 5 characters",
            });
        }

        let mut bytes = [0u8; 5];
        for (i, &b) in input.iter().enumerate() {
            if !b.is_ascii_uppercase() {
                return Err(InvalidStationCode {
                    reason: "must be uppercase ASCII letters A-Z",
                });
            }
            bytes[i] = b;
        }

        Ok(StationCode {
            bytes,
            len: input.len() as u8,
        })
    }

    /// Parse a station code, accepting lowercase input.
    ///
    /// Convenience for user-supplied query parameters.
    pub fn parse_normalized(s: &str) -> Result<Self, InvalidStationCode> {
        Self::parse(&s.to_ascii_uppercase())
    }

    /// Returns the station code as a string slice.
    pub fn as_str(&self) -> &str {
        // Only ASCII uppercase letters are ever stored
        std::str::from_utf8(&self.bytes[..self.len as usize]).unwrap_or("")
    }
}

impl fmt::Debug for StationCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "StationCode({})", self.as_str())
    }
}

impl fmt::Display for StationCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for StationCode {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        StationCode::parse(&s).map_err(serde::de::Error::custom)
    }
}

/// Timing thresholds that drive the display logic for one station.
///
/// All values are whole minutes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StationRules {
    /// How long before departure boarding opens.
    pub boarding_open_min: i64,

    /// How soon before arrival a passing-through train switches from its
    /// departure time to an "arriving" countdown.
    pub stopover_imminent_min: i64,

    /// Minutes before departure at which an originating movement flips to
    /// "Boarding Closed".
    pub boarding_close_min: i64,

    /// Notice window for feeder movements, where the station has one.
    pub feeder_notice_min: Option<i64>,
}

/// A known station: identity, capacity, and display rules.
#[derive(Debug, Clone)]
pub struct Station {
    pub code: StationCode,

    /// Display name, as it appears in route text ("KIARACONDONG").
    pub name: String,

    /// Number of tracks; timetable entries must fit within this.
    pub total_tracks: u32,

    pub rules: StationRules,
}

/// Immutable lookup of known stations by code.
///
/// Built once at startup. An unknown code at feed time is a configuration
/// error, not a runtime condition; callers fail fast on `None`.
#[derive(Debug, Clone)]
pub struct StationDirectory {
    inner: HashMap<StationCode, Station>,
}

impl StationDirectory {
    /// Build a directory from a list of stations.
    pub fn from_stations(stations: Vec<Station>) -> Self {
        let inner = stations.into_iter().map(|s| (s.code, s)).collect();
        Self { inner }
    }

    /// The two stations the shipped timetable covers.
    pub fn standard() -> Self {
        let kac = Station {
            code: StationCode::parse("KAC").unwrap(),
            name: "KIARACONDONG".to_string(),
            total_tracks: 6,
            rules: StationRules {
                boarding_open_min: 60,
                stopover_imminent_min: 10,
                boarding_close_min: 5,
                feeder_notice_min: None,
            },
        };

        let bd = Station {
            code: StationCode::parse("BD").unwrap(),
            name: "BANDUNG".to_string(),
            total_tracks: 7,
            rules: StationRules {
                boarding_open_min: 60,
                stopover_imminent_min: 20,
                boarding_close_min: 5,
                feeder_notice_min: Some(5),
            },
        };

        Self::from_stations(vec![kac, bd])
    }

    /// Look up a station by code.
    pub fn get(&self, code: StationCode) -> Option<&Station> {
        self.inner.get(&code)
    }

    /// Iterate over all known stations, in no particular order.
    pub fn stations(&self) -> impl Iterator<Item = &Station> {
        self.inner.values()
    }

    /// Number of known stations.
    pub fn len(&self) -> usize {
        self.inner.len()
    }

    /// Whether the directory is empty.
    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    /// Strategy for valid station codes: 2-5 uppercase ASCII letters
    fn valid_code_string() -> impl Strategy<Value = String> {
        proptest::string::string_regex("[A-Z]{2,5}").unwrap()
    }

    proptest! {
        /// Roundtrip: parse then as_str returns the original
        #[test]
        fn roundtrip(s in valid_code_string()) {
            let code = StationCode::parse(&s).unwrap();
            prop_assert_eq!(code.as_str(), s.as_str());
        }

        /// Any valid code can be parsed
        #[test]
        fn valid_always_parses(s in valid_code_string()) {
            prop_assert!(StationCode::parse(&s).is_ok());
        }

        /// Lowercase input is rejected by the strict parser but accepted
        /// by the normalizing one
        #[test]
        fn lowercase_handling(s in "[a-z]{2,5}") {
            prop_assert!(StationCode::parse(&s).is_err());
            prop_assert!(StationCode::parse_normalized(&s).is_ok());
        }

        /// Wrong-length strings are always rejected
        #[test]
        fn wrong_length_rejected(s in "[A-Z]{0,1}|[A-Z]{6,10}") {
            prop_assert!(StationCode::parse(&s).is_err());
        }

        /// Strings with digits are rejected
        #[test]
        fn digits_rejected(
            s in "[A-Z0-9]{2,5}".prop_filter("has digit", |s| s.chars().any(|c| c.is_ascii_digit()))
        ) {
            prop_assert!(StationCode::parse(&s).is_err());
        }
    }
}
