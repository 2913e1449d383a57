use thiserror::Error;

#[derive(Error, Debug)]
pub enum SearchgramError {
    #[error("IO Error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV Error: {0}")]
    Csv(#[from] csv::Error),

    #[error("JSON Parsing Error: {0}")]
    Json(#[from] serde_json::Error),

    /// The report could not be read as a table at all. Fatal for the whole batch.
    #[error("Unreadable report: {0}")]
    Unreadable(String),

    #[error("Configuration Error: {0}")]
    Config(String),

    #[error("Data Validation Error: {0}")]
    Validation(String),
}

impl SearchgramError {
    pub fn is_unreadable(&self) -> bool {
        matches!(self, SearchgramError::Unreadable(_))
    }
}

pub type SgResult<T> = Result<T, SearchgramError>;
