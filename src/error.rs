use thiserror::Error;

#[derive(Error, Debug)]
pub enum MovieLogError {
    #[error("Invalid command: {0}")]
    InvalidCommand(String),

    #[error("Error when writing CSV listing: {0}")]
    Csv(#[from] csv::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, MovieLogError>;
