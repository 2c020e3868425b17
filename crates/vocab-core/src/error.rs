use std::path::PathBuf;

pub type Result<T> = std::result::Result<T, LookupError>;

#[derive(Debug, thiserror::Error)]
pub enum LookupError {
    #[error(
        "Word directory not found: {}\nExpected a 'books' folder next to the program containing word JSON files",
        .path.display()
    )]
    DirectoryNotFound { path: PathBuf },

    #[error("No JSON files in books directory: {}", .path.display())]
    NoDataFiles { path: PathBuf },

    #[error("Malformed JSON in {file}: {source}")]
    MalformedData {
        file: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("Failed to read {}: {source}", .path.display())]
    ReadFailure {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("No word with wordRank {rank}")]
    RankNotFound { rank: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    DirectoryNotFound,
    NoDataFiles,
    MalformedData,
    ReadFailure,
    RankNotFound,
}

impl LookupError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            LookupError::DirectoryNotFound { .. } => ErrorKind::DirectoryNotFound,
            LookupError::NoDataFiles { .. } => ErrorKind::NoDataFiles,
            LookupError::MalformedData { .. } => ErrorKind::MalformedData,
            LookupError::ReadFailure { .. } => ErrorKind::ReadFailure,
            LookupError::RankNotFound { .. } => ErrorKind::RankNotFound,
        }
    }
}
