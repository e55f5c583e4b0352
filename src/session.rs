use std::io::{BufRead, Write};

use crate::{
    error::{MovieLogError, Result},
    model::{movie::Movie, rating::Rating},
    movie_list::MovieList,
    persisters::csv_writer::CsvWriter,
};

/// The movies and queries the demo walks through.
pub const DEMO_SCRIPT: &str = "\
add-end Zootopia|Watched|8
add-end Zootopia 2|Watchlist
add-end One Battle After Another|Watchlist
add-end Godfather|Watchlist
add-start Materialist|Watched|9
add-start Sinners|Watched|9
all
watched
rated
unrated
remove-start
remove-end
all
titles
";

#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    AddEnd(Movie),
    AddStart(Movie),
    RemoveStart,
    RemoveEnd,
    All,
    Watched,
    Rated,
    Unrated,
    Titles,
    Csv,
}

impl Command {
    /// Parses one line of input. Blank lines and `#` comments give `Ok(None)`.
    pub fn parse(line: &str) -> Result<Option<Command>> {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            return Ok(None);
        }

        let (name, rest) = match line.split_once(char::is_whitespace) {
            Some((name, rest)) => (name, rest.trim()),
            None => (line, ""),
        };

        let command = match name {
            "add-end" => Command::AddEnd(Self::parse_movie(rest)?),
            "add-start" => Command::AddStart(Self::parse_movie(rest)?),
            "remove-start" => Command::RemoveStart,
            "remove-end" => Command::RemoveEnd,
            "all" => Command::All,
            "watched" => Command::Watched,
            "rated" => Command::Rated,
            "unrated" => Command::Unrated,
            "titles" => Command::Titles,
            "csv" => Command::Csv,
            _ => return Err(MovieLogError::InvalidCommand(line.to_string())),
        };

        Ok(Some(command))
    }

    fn parse_movie(args: &str) -> Result<Movie> {
        let fields: Vec<&str> = args.split('|').map(str::trim).collect();

        match fields.as_slice() {
            [title, status] | [title, status, _]
                if !title.is_empty() && !status.is_empty() =>
            {
                let rating = fields.get(2).and_then(|raw| Rating::parse(raw));
                Ok(Movie::new(*title, *status, rating))
            }
            _ => Err(MovieLogError::InvalidCommand(format!(
                "expected <title>|<status>[|<rating>], got '{}'",
                args
            ))),
        }
    }
}

/// Applies commands to a single movie list and prints their results.
#[derive(Debug, Default)]
pub struct Session {
    movies: MovieList,
}

impl Session {
    pub fn new() -> Self {
        Session::default()
    }

    pub fn movies(&self) -> &MovieList {
        &self.movies
    }

    pub fn execute<W: Write>(&mut self, command: Command, out: &mut W) -> Result<()> {
        match command {
            Command::AddEnd(movie) => {
                log::debug!("Adding {} at the end", movie);
                self.movies
                    .add_movie_end(movie.title, movie.status, movie.rating)
            }
            Command::AddStart(movie) => {
                log::debug!("Adding {} at the start", movie);
                self.movies
                    .add_movie_start(movie.title, movie.status, movie.rating)
            }
            Command::RemoveStart => {
                let removed = self.movies.remove_movie_start();
                Self::print_removed(removed.as_ref(), out)?
            }
            Command::RemoveEnd => {
                let removed = self.movies.remove_movie_end();
                Self::print_removed(removed.as_ref(), out)?
            }
            Command::All => Self::print_movies(self.movies.get_all_movies(), out)?,
            Command::Watched => writeln!(out, "{}", self.movies.get_watched_count())?,
            Command::Rated => Self::print_movies(self.movies.get_rated_movies(), out)?,
            Command::Unrated => Self::print_movies(self.movies.get_non_rated_movies(), out)?,
            Command::Titles => {
                for title in self.movies.get_movies_title() {
                    writeln!(out, "{}", title)?;
                }
            }
            Command::Csv => CsvWriter::write_movies(self.movies.get_all_movies(), &mut *out)?,
        }

        Ok(())
    }

    /// Runs every line of `input`. Bad lines, including ones that aren't
    /// UTF-8, are logged and skipped; I/O failures stop the run.
    pub fn run_script<R: BufRead, W: Write>(&mut self, mut input: R, out: &mut W) -> Result<()> {
        let mut buf = Vec::new();
        let mut line_number = 0;
        loop {
            buf.clear();
            if input.read_until(b'\n', &mut buf)? == 0 {
                break;
            }
            line_number += 1;

            let line = match std::str::from_utf8(&buf) {
                Ok(line) => line,
                Err(e) => {
                    log::warn!("Skipping line {}: not valid UTF-8 ({})", line_number, e);
                    continue;
                }
            };

            match Command::parse(line) {
                Ok(Some(command)) => self.execute(command, out)?,
                Ok(None) => {}
                Err(e) => log::warn!("Skipping line {}: {}", line_number, e),
            }
        }
        out.flush()?;

        Ok(())
    }

    fn print_movies<'a, W: Write>(
        movies: impl IntoIterator<Item = &'a Movie>,
        out: &mut W,
    ) -> Result<()> {
        for movie in movies {
            writeln!(out, "{}", movie)?;
        }
        Ok(())
    }

    fn print_removed<W: Write>(removed: Option<&Movie>, out: &mut W) -> Result<()> {
        match removed {
            Some(movie) => writeln!(out, "Info of removed movie: {}", movie)?,
            None => writeln!(out, "Info of removed movie: none")?,
        }
        Ok(())
    }
}
