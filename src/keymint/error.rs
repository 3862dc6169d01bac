use thiserror::Error;

#[derive(Error, Debug)]
pub enum KeymintError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Preference store error: {0}")]
    Prefs(String),

    #[error("Clipboard error: {0}")]
    Clipboard(String),

    #[error("Nothing to copy: no {0} has been generated yet")]
    NothingToCopy(String),
}

pub type Result<T> = std::result::Result<T, KeymintError>;
