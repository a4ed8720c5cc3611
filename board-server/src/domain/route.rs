//! Route text parsing.
//!
//! Timetable rows describe a service's path as free text, usually
//! "ORIGIN - DESTINATION", sometimes with an arrow ("ORIGIN -> DESTINATION").
//! The data is hand-curated and not validated at ingestion, so the parser
//! is permissive by contract: text that does not split cleanly degrades to
//! the raw input rather than failing.

/// Origin and destination labels parsed from route text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Route {
    pub origin: String,
    pub destination: String,
}

impl Route {
    /// Parse route text into origin and destination labels.
    ///
    /// Arrow separators are normalized to a plain dash before splitting.
    /// When the text yields at least two parts, the first is the origin and
    /// the second the destination, both trimmed. Otherwise both labels are
    /// the raw input, degenerate but non-failing, so a malformed row still
    /// renders.
    ///
    /// # Examples
    ///
    /// ```
    /// use board_server::domain::Route;
    ///
    /// let r = Route::parse("BANDUNG - CICALENGKA");
    /// assert_eq!(r.origin, "BANDUNG");
    /// assert_eq!(r.destination, "CICALENGKA");
    ///
    /// let r = Route::parse("SURABAYA GUBENG -> BANDUNG");
    /// assert_eq!(r.origin, "SURABAYA GUBENG");
    /// assert_eq!(r.destination, "BANDUNG");
    /// ```
    pub fn parse(text: &str) -> Self {
        let normalized = text.replace("->", "-");
        let parts: Vec<&str> = normalized.split('-').map(str::trim).collect();

        if parts.len() >= 2 {
            Route {
                origin: parts[0].to_string(),
                destination: parts[1].to_string(),
            }
        } else {
            Route {
                origin: text.to_string(),
                destination: text.to_string(),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_dash() {
        let r = Route::parse("BANDUNG - CICALENGKA");
        assert_eq!(r.origin, "BANDUNG");
        assert_eq!(r.destination, "CICALENGKA");
    }

    #[test]
    fn arrow_separator() {
        let r = Route::parse("SURABAYA GUBENG -> BANDUNG");
        assert_eq!(r.origin, "SURABAYA GUBENG");
        assert_eq!(r.destination, "BANDUNG");
    }

    #[test]
    fn multi_word_labels() {
        let r = Route::parse("SOLO BALAPAN - BANDUNG");
        assert_eq!(r.origin, "SOLO BALAPAN");
        assert_eq!(r.destination, "BANDUNG");
    }

    #[test]
    fn extra_segments_take_first_two() {
        let r = Route::parse("A - B - C");
        assert_eq!(r.origin, "A");
        assert_eq!(r.destination, "B");
    }

    #[test]
    fn unsplittable_text_falls_back_to_raw() {
        let r = Route::parse("CIRCULAR SERVICE");
        assert_eq!(r.origin, "CIRCULAR SERVICE");
        assert_eq!(r.destination, "CIRCULAR SERVICE");
    }

    #[test]
    fn empty_text_falls_back_to_raw() {
        let r = Route::parse("");
        assert_eq!(r.origin, "");
        assert_eq!(r.destination, "");
    }

    #[test]
    fn tight_dash_without_spaces() {
        let r = Route::parse("KROYA-PASAR SENEN");
        assert_eq!(r.origin, "KROYA");
        assert_eq!(r.destination, "PASAR SENEN");
    }
}
