use std::io::{BufRead, Write};

pub mod error;
pub mod model;
pub mod movie_list;
pub mod persisters;
pub mod session;

pub use error::{MovieLogError, Result};
pub use model::{movie::Movie, rating::Rating, status::Status};
pub use movie_list::{MovieList, WatchedCount};
pub use session::{Command, Session};

/// Reads commands from `input` until it runs out, printing results to `out`.
pub fn run<R: BufRead, W: Write>(input: R, out: &mut W) -> Result<()> {
    let mut session = Session::new();
    session.run_script(input, out)?;

    log::info!(
        "Movie log finished with {} movies",
        session.movies().len()
    );
    Ok(())
}

/// Plays the bundled demo against a fresh movie log.
pub fn run_demo<W: Write>(out: &mut W) -> Result<()> {
    log::info!("Running movie log demo");
    run(session::DEMO_SCRIPT.as_bytes(), out)
}
