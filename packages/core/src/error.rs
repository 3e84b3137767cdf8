use thiserror::Error;

#[derive(Error, Debug)]
pub enum ReaderError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Unknown {field} option: {value:?}")]
    UnknownOption { field: &'static str, value: String },
}

impl ReaderError {
    pub fn unknown_option(field: &'static str, value: impl Into<String>) -> Self {
        Self::UnknownOption {
            field,
            value: value.into(),
        }
    }
}

pub type ReaderResult<T> = Result<T, ReaderError>;
