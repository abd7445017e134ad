use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Threshold data unavailable for playlist {playlist}: {detail}")]
    DataUnavailable { playlist: i32, detail: String },

    #[error("Invalid rank: tier {tier}, division {division}")]
    InvalidRank { tier: i32, division: i32 },

    #[error("Invalid configuration: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    pub fn data_unavailable(playlist: i32, detail: impl Into<String>) -> Self {
        Error::DataUnavailable {
            playlist,
            detail: detail.into(),
        }
    }

    /// Check if this error is a "file not found" error
    pub fn is_not_found(&self) -> bool {
        matches!(self, Error::Io(e) if e.kind() == std::io::ErrorKind::NotFound)
    }

    /// Static rank data is missing or corrupt; retrying will not help.
    pub fn is_data_unavailable(&self) -> bool {
        matches!(self, Error::DataUnavailable { .. })
    }
}
