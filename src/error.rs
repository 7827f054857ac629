use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    #[error("{0}")]
    Fetch(String),

    #[error("{0}")]
    Extraction(String),

    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl Error {
    /// Process exit status for this error. Usage mistakes share clap's code.
    pub fn exit_code(&self) -> u8 {
        match self {
            Error::InvalidArgument(_) => 2,
            _ => 1,
        }
    }
}

impl From<reqwest::Error> for Error {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            Error::Fetch(format!("App Store page request timed out: {err}"))
        } else if let Some(status) = err.status() {
            Error::Fetch(format!("App Store page returned HTTP {}", status.as_u16()))
        } else {
            Error::Fetch(format!("Failed to fetch App Store page: {err}"))
        }
    }
}
