use std::fmt;

use super::{
    rating::{Rating, NOT_RATED},
    status::Status,
};

#[derive(Debug, Clone, PartialEq)]
pub struct Movie {
    pub title: String,
    pub status: Status,
    pub rating: Option<Rating>,
}

impl Movie {
    pub fn new(
        title: impl Into<String>,
        status: impl Into<Status>,
        rating: Option<Rating>,
    ) -> Self {
        Movie {
            title: title.into(),
            status: status.into(),
            rating: rating.filter(|r| !r.is_not_rated_marker()),
        }
    }

    pub fn is_rated(&self) -> bool {
        self.rating
            .as_ref()
            .is_some_and(|r| !r.is_not_rated_marker())
    }

    pub fn is_watched(&self) -> bool {
        self.status == Status::Watched
    }

    pub fn to_csvable_array(&self) -> Vec<String> {
        return vec![
            self.title.clone(),
            self.status.to_string(),
            self.rating.as_ref().map(|r| r.to_string()).unwrap_or("".to_string()),
        ];
    }

    pub fn csv_titles() -> Vec<&'static str> {
        return vec!["Title", "Status", "Rating"];
    }
}

impl fmt::Display for Movie {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{{ title: {:?}, status: {:?}, rating: ",
            self.title,
            self.status.as_str()
        )?;
        match &self.rating {
            Some(Rating::Text(text)) => write!(f, "{:?} }}", text),
            Some(rating) => write!(f, "{} }}", rating),
            None => write!(f, "{:?} }}", NOT_RATED),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn displays_like_a_record() {
        let movie = Movie::new("Zootopia", "Watched", Some(Rating::from(8u8)));
        assert_eq!(
            movie.to_string(),
            r#"{ title: "Zootopia", status: "Watched", rating: 8 }"#
        );

        let unrated = Movie::new("Godfather", "Watchlist", None);
        assert_eq!(
            unrated.to_string(),
            r#"{ title: "Godfather", status: "Watchlist", rating: "N/A" }"#
        );
    }

    #[test]
    fn not_rated_text_counts_as_no_rating() {
        let movie = Movie::new("X", "Watched", Some(Rating::Text("N/A".to_string())));
        assert_eq!(movie.rating, None);
        assert!(!movie.is_rated());

        let mut edited = Movie::new("Y", "Watched", None);
        edited.rating = Some(Rating::Text("N/A".to_string()));
        assert!(!edited.is_rated());
    }

    #[test]
    fn csv_row_leaves_missing_rating_empty() {
        let movie = Movie::new("Godfather", "Watchlist", None);
        assert_eq!(
            movie.to_csvable_array(),
            vec!["Godfather".to_string(), "Watchlist".to_string(), "".to_string()]
        );
    }
}
