use std::fmt;

/// Where a movie sits in the log. The set is open: anything that isn't one
/// of the known values is kept verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Status {
    Watched,
    Watchlist,
    Other(String),
}

impl Status {
    pub fn as_str(&self) -> &str {
        match self {
            Status::Watched => "Watched",
            Status::Watchlist => "Watchlist",
            Status::Other(s) => s.as_str(),
        }
    }
}

// Matching is exact, "watched" is not Watched.
impl From<&str> for Status {
    fn from(s: &str) -> Self {
        match s {
            "Watched" => Status::Watched,
            "Watchlist" => Status::Watchlist,
            other => Status::Other(other.to_string()),
        }
    }
}

impl From<String> for Status {
    fn from(s: String) -> Self {
        match s.as_str() {
            "Watched" => Status::Watched,
            "Watchlist" => Status::Watchlist,
            _ => Status::Other(s),
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
