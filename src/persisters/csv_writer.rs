use std::io;

use csv::Writer;

use crate::{error::Result, model::movie::Movie};

pub struct CsvWriter {}

impl CsvWriter {
    /// Writes a header row followed by one row per movie to `sink`.
    pub fn write_movies<'a, W, I>(movies: I, sink: W) -> Result<()>
    where
        W: io::Write,
        I: IntoIterator<Item = &'a Movie>,
    {
        let mut wrt = Writer::from_writer(sink);
        wrt.write_record(Movie::csv_titles())?;
        for movie in movies {
            if let Err(e) = wrt.write_record(movie.to_csvable_array()) {
                log::error!("Error when adding entry to CSV listing. Entry: {:?}", movie);
                return Err(e.into());
            }
        }
        wrt.flush()?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::rating::Rating;

    #[test]
    fn writes_header_and_rows() {
        let movies = vec![
            Movie::new("Sinners", "Watched", Some(Rating::from(9u8))),
            Movie::new("Godfather", "Watchlist", None),
            Movie::new("Title, with comma", "Watched", Some(Rating::Score(7.5))),
        ];

        let mut out = Vec::new();
        CsvWriter::write_movies(&movies, &mut out).unwrap();

        assert_eq!(
            String::from_utf8(out).unwrap(),
            "Title,Status,Rating\n\
             Sinners,Watched,9\n\
             Godfather,Watchlist,\n\
             \"Title, with comma\",Watched,7.5\n"
        );
    }

    #[test]
    fn empty_listing_has_only_header() {
        let mut out = Vec::new();
        CsvWriter::write_movies(&Vec::<Movie>::new(), &mut out).unwrap();

        assert_eq!(String::from_utf8(out).unwrap(), "Title,Status,Rating\n");
    }
}
