/// Failures that abort a generation run.
///
/// Every variant is fatal: the shell surfaces the message on stderr and exits
/// with a non-zero status. No partial test file is written once extraction
/// fails.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("Usage: {0}")]
    Usage(String),

    #[error("The specified file does not exist: {0}")]
    NotFound(String),

    #[error("Configuration error: {0}")]
    ConfigResolution(String),

    #[error("Dependency error: {0}")]
    Dependency(String),

    #[error("Extraction error: {0}")]
    Extraction(String),

    #[error("Write error: {0}")]
    Write(String),

    #[error("IO error: {0}")]
    Io(String),
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err.to_string())
    }
}
