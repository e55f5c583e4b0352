use std::fmt;

/// Text used wherever a movie has no rating.
pub const NOT_RATED: &str = "N/A";

/// A movie rating. Usually a score, but free text is accepted as well.
#[derive(Debug, Clone, PartialEq, PartialOrd)]
pub enum Rating {
    Score(f32),
    Text(String),
}

impl Rating {
    /// Reads a rating as typed by a user. `"N/A"` and blank input mean no
    /// rating at all.
    pub fn parse(raw: &str) -> Option<Rating> {
        let raw = raw.trim();
        if raw.is_empty() || raw == NOT_RATED {
            return None;
        }

        match raw.parse::<f32>() {
            Ok(score) if score.is_finite() => Some(Rating::Score(score)),
            _ => Some(Rating::Text(raw.to_string())),
        }
    }

    /// True for a rating that only spells out "no rating", e.g. a
    /// `Text("N/A")` built by hand.
    pub fn is_not_rated_marker(&self) -> bool {
        matches!(self, Rating::Text(text) if text.trim() == NOT_RATED)
    }
}

impl From<f32> for Rating {
    fn from(score: f32) -> Self {
        Rating::Score(score)
    }
}

impl From<u8> for Rating {
    fn from(score: u8) -> Self {
        Rating::Score(f32::from(score))
    }
}

impl fmt::Display for Rating {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Rating::Score(score) => write!(f, "{}", score),
            Rating::Text(text) => f.write_str(text),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_scores_and_text() {
        assert_eq!(Rating::parse("8"), Some(Rating::Score(8.0)));
        assert_eq!(Rating::parse(" 7.5 "), Some(Rating::Score(7.5)));
        assert_eq!(
            Rating::parse("great"),
            Some(Rating::Text("great".to_string()))
        );
    }

    #[test]
    fn not_rated_marker_means_no_rating() {
        assert_eq!(Rating::parse(NOT_RATED), None);
        assert_eq!(Rating::parse("   "), None);
    }

    #[test]
    fn non_finite_numbers_stay_text() {
        for raw in ["NaN", "inf", "-inf"] {
            assert_eq!(Rating::parse(raw), Some(Rating::Text(raw.to_string())));
        }
    }

    #[test]
    fn hand_built_marker_is_recognised() {
        assert!(Rating::Text(NOT_RATED.to_string()).is_not_rated_marker());
        assert!(!Rating::Text("great".to_string()).is_not_rated_marker());
        assert!(!Rating::Score(8.0).is_not_rated_marker());
    }

    #[test]
    fn whole_scores_display_without_fraction() {
        assert_eq!(Rating::from(9u8).to_string(), "9");
        assert_eq!(Rating::Score(7.5).to_string(), "7.5");
    }
}
