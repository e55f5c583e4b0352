use std::{collections::VecDeque, fmt};

use crate::model::{movie::Movie, rating::Rating, status::Status};

/// How many movies in a list have been watched, out of how many in total.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WatchedCount {
    pub watched: usize,
    pub total: usize,
}

impl fmt::Display for WatchedCount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Out of {} movies, you have watched {} movies.",
            self.total, self.watched
        )
    }
}

/// An ordered, in-memory log of movies. Movies can be added and removed at
/// either end; every query keeps insertion order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MovieList {
    movies: VecDeque<Movie>,
}

impl MovieList {
    pub fn new() -> Self {
        MovieList::default()
    }

    pub fn add_movie_end(
        &mut self,
        title: impl Into<String>,
        status: impl Into<Status>,
        rating: Option<Rating>,
    ) {
        self.movies.push_back(Movie::new(title, status, rating));
    }

    pub fn add_movie_start(
        &mut self,
        title: impl Into<String>,
        status: impl Into<Status>,
        rating: Option<Rating>,
    ) {
        self.movies.push_front(Movie::new(title, status, rating));
    }

    /// Removes the first movie. An empty list just yields `None`.
    pub fn remove_movie_start(&mut self) -> Option<Movie> {
        let removed = self.movies.pop_front();
        Self::log_removed(removed.as_ref());
        removed
    }

    /// Removes the last movie. An empty list just yields `None`.
    pub fn remove_movie_end(&mut self) -> Option<Movie> {
        let removed = self.movies.pop_back();
        Self::log_removed(removed.as_ref());
        removed
    }

    pub fn get_all_movies(&self) -> impl Iterator<Item = &Movie> {
        self.movies.iter()
    }

    pub fn get_watched_count(&self) -> WatchedCount {
        let watched = self.movies.iter().filter(|movie| movie.is_watched()).count();
        WatchedCount {
            watched,
            total: self.movies.len(),
        }
    }

    pub fn get_rated_movies(&self) -> Vec<&Movie> {
        self.movies.iter().filter(|movie| movie.is_rated()).collect()
    }

    pub fn get_non_rated_movies(&self) -> Vec<&Movie> {
        self.movies.iter().filter(|movie| !movie.is_rated()).collect()
    }

    /// Titles in list order. Nothing is copied until the iterator is driven.
    pub fn get_movies_title(&self) -> impl Iterator<Item = &str> {
        self.movies.iter().map(|movie| movie.title.as_str())
    }

    pub fn len(&self) -> usize {
        self.movies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.movies.is_empty()
    }

    fn log_removed(removed: Option<&Movie>) {
        match removed {
            Some(movie) => log::debug!("Removed movie {}", movie),
            None => log::debug!("Tried to remove a movie from an empty list"),
        }
    }
}

impl FromIterator<Movie> for MovieList {
    fn from_iter<I: IntoIterator<Item = Movie>>(iter: I) -> Self {
        MovieList {
            movies: iter.into_iter().collect(),
        }
    }
}

impl Extend<Movie> for MovieList {
    fn extend<I: IntoIterator<Item = Movie>>(&mut self, iter: I) {
        self.movies.extend(iter);
    }
}
